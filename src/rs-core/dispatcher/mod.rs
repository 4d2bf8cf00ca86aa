use crate::{
    bindings::{Page, TimerId},
    bookmarks::BookmarkManager,
    config::ViewerConfiguration,
    controls::ControlsVisibilityController,
    latency::LatencyTracker,
    playback_rate::PlaybackRateController,
    restart::MuxerRestartCoordinator,
    wake_lock::WakeLockManager,
    wasm_bindgen,
};

mod api;
mod core;
mod event_listeners;

/// The `Dispatcher` is the viewer Interface exported to the JavaScript-side.
///
/// The page forwards every DOM, media, stream library, timer and network event to it through
/// its `on_*` methods, and it reacts by driving the media element and the controls it owns.
#[wasm_bindgen]
pub struct Dispatcher {
    /// Access to the media element, the DOM controls and every asynchronous browser API.
    page: Box<dyn Page>,

    config: ViewerConfiguration,

    /// Measures the "latency from air" each time a new fragment is played.
    latency_tracker: LatencyTracker,

    /// Handles the playback speed input and the return to normal speed.
    rate_controller: PlaybackRateController,

    bookmarks: BookmarkManager,

    /// Placement of the controls panel.
    controls: ControlsVisibilityController,

    /// Keeps the screen awake while playing.
    wake_lock: WakeLockManager,

    /// Pending muxer restart, if one.
    restart: MuxerRestartCoordinator,

    /// Timer for the next catch-up check, `None` when checks are stopped.
    catch_up_timer: Option<TimerId>,
}

impl Dispatcher {
    /// Create a `Dispatcher` relying on the given `Page` instead of the JavaScript functions.
    pub(crate) fn with_page(page: Box<dyn Page>) -> Self {
        Self {
            page,
            config: ViewerConfiguration::default(),
            latency_tracker: LatencyTracker::new(),
            rate_controller: PlaybackRateController::new(),
            bookmarks: BookmarkManager::new(),
            controls: ControlsVisibilityController::new(),
            wake_lock: WakeLockManager::new(),
            restart: MuxerRestartCoordinator::new(),
            catch_up_timer: None,
        }
    }
}
