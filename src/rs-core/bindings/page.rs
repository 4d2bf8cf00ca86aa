use super::js_functions::{
    jsAddBookmark, jsAttachMedia, jsClearTimer, jsGetControlsLayout, jsGetCurrentTime,
    jsGetDuration, jsGetLiveSyncPosition, jsGetPageLocation, jsGetPlaybackRate,
    jsGetTransportLatencyInput, jsIsFullscreen, jsIsPaused, jsLoadSource, jsNow, jsPlay,
    jsPostRestart, jsReleaseWakeLock, jsRemoveBookmark, jsRequestWakeLock, jsSeek,
    jsSetCompactModeSuppressed, jsSetControlsPlacement, jsSetFullscreen, jsSetLatencyText,
    jsSetPlaybackRate, jsSetPlaybackRateInput, jsSetPlaybackRateText, jsSetRemoveModeIndicator,
    jsTimer, BookmarkId, ControlsLayout, ControlsPlacement, RequestId, TimerId, TimerReason,
    WakeLockRequestId, WakeLockSentinelId,
};

/// The media element under control.
///
/// Owned by the page: it is only read and written here, never created nor destroyed.
pub(crate) trait MediaElement {
    fn current_time(&self) -> f64;
    fn duration(&self) -> f64;
    fn playback_rate(&self) -> f64;
    fn is_paused(&self) -> bool;
    fn set_playback_rate(&mut self, rate: f64);
    fn seek(&mut self, position: f64);
    fn play(&mut self);
}

/// DOM controls owned by the viewer.
pub(crate) trait ViewerUi {
    /// Raw value of the transport latency input, as typed by the user.
    fn transport_latency_input(&self) -> String;
    fn set_latency_text(&mut self, text: &str);
    fn set_playback_rate_input(&mut self, value: f64);
    fn set_playback_rate_text(&mut self, text: &str);
    fn add_bookmark(&mut self, id: BookmarkId, label: &str);
    fn remove_bookmark(&mut self, id: BookmarkId);
    fn set_remove_mode_indicator(&mut self, enabled: bool);
    fn set_controls_placement(&mut self, placement: ControlsPlacement);
    fn set_compact_mode_suppressed(&mut self, suppressed: bool);
    fn controls_layout(&self) -> ControlsLayout;
    fn is_fullscreen(&self) -> bool;
    fn set_fullscreen(&mut self, enabled: bool);
    fn page_location(&self) -> String;
}

/// The HLS library feeding the media element.
pub(crate) trait StreamSource {
    fn load_source(&mut self, url: &str);
    fn attach_media(&mut self);
    fn live_sync_position(&self) -> Option<f64>;
}

pub(crate) trait WakeLockApi {
    fn request_wake_lock(&mut self) -> WakeLockRequestId;
    fn release_wake_lock(&mut self, sentinel: WakeLockSentinelId);
}

pub(crate) trait RestartBackend {
    fn post_restart(&mut self, url: &str, timeout: Option<f64>) -> RequestId;
}

pub(crate) trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_ms(&self) -> f64;
}

pub(crate) trait Timers {
    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId;
    fn clear_timer(&mut self, id: TimerId);
}

/// Everything the `Dispatcher` talks to.
pub(crate) trait Page:
    MediaElement + ViewerUi + StreamSource + WakeLockApi + RestartBackend + Clock + Timers
{
}

impl<T> Page for T where
    T: MediaElement + ViewerUi + StreamSource + WakeLockApi + RestartBackend + Clock + Timers
{
}

/// `Page` implementation relying on the functions imported from the JavaScript-side.
pub(crate) struct JsPage;

impl MediaElement for JsPage {
    fn current_time(&self) -> f64 {
        jsGetCurrentTime()
    }

    fn duration(&self) -> f64 {
        jsGetDuration()
    }

    fn playback_rate(&self) -> f64 {
        jsGetPlaybackRate()
    }

    fn is_paused(&self) -> bool {
        jsIsPaused()
    }

    fn set_playback_rate(&mut self, rate: f64) {
        jsSetPlaybackRate(rate)
    }

    fn seek(&mut self, position: f64) {
        jsSeek(position)
    }

    fn play(&mut self) {
        jsPlay()
    }
}

impl ViewerUi for JsPage {
    fn transport_latency_input(&self) -> String {
        jsGetTransportLatencyInput()
    }

    fn set_latency_text(&mut self, text: &str) {
        jsSetLatencyText(text)
    }

    fn set_playback_rate_input(&mut self, value: f64) {
        jsSetPlaybackRateInput(value)
    }

    fn set_playback_rate_text(&mut self, text: &str) {
        jsSetPlaybackRateText(text)
    }

    fn add_bookmark(&mut self, id: BookmarkId, label: &str) {
        jsAddBookmark(id, label)
    }

    fn remove_bookmark(&mut self, id: BookmarkId) {
        jsRemoveBookmark(id)
    }

    fn set_remove_mode_indicator(&mut self, enabled: bool) {
        jsSetRemoveModeIndicator(enabled)
    }

    fn set_controls_placement(&mut self, placement: ControlsPlacement) {
        jsSetControlsPlacement(placement)
    }

    fn set_compact_mode_suppressed(&mut self, suppressed: bool) {
        jsSetCompactModeSuppressed(suppressed)
    }

    fn controls_layout(&self) -> ControlsLayout {
        jsGetControlsLayout()
    }

    fn is_fullscreen(&self) -> bool {
        jsIsFullscreen()
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        jsSetFullscreen(enabled)
    }

    fn page_location(&self) -> String {
        jsGetPageLocation()
    }
}

impl StreamSource for JsPage {
    fn load_source(&mut self, url: &str) {
        jsLoadSource(url)
    }

    fn attach_media(&mut self) {
        jsAttachMedia()
    }

    fn live_sync_position(&self) -> Option<f64> {
        jsGetLiveSyncPosition()
    }
}

impl WakeLockApi for JsPage {
    fn request_wake_lock(&mut self) -> WakeLockRequestId {
        jsRequestWakeLock()
    }

    fn release_wake_lock(&mut self, sentinel: WakeLockSentinelId) {
        jsReleaseWakeLock(sentinel)
    }
}

impl RestartBackend for JsPage {
    fn post_restart(&mut self, url: &str, timeout: Option<f64>) -> RequestId {
        jsPostRestart(url, timeout)
    }
}

impl Clock for JsPage {
    fn now_ms(&self) -> f64 {
        jsNow()
    }
}

impl Timers for JsPage {
    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        jsTimer(duration, reason)
    }

    fn clear_timer(&mut self, id: TimerId) {
        jsClearTimer(id)
    }
}
