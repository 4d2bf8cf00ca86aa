use std::{
    cell::{RefCell, RefMut},
    rc::Rc,
};

use super::{
    page::{Clock, MediaElement, RestartBackend, StreamSource, Timers, ViewerUi, WakeLockApi},
    BookmarkId, ControlsLayout, ControlsPlacement, RequestId, TimerId, TimerReason,
    WakeLockRequestId, WakeLockSentinelId,
};

/// Everything a `FakePage` reads from and records.
pub(crate) struct FakeState {
    pub(crate) current_time: f64,
    pub(crate) duration: f64,
    pub(crate) playback_rate: f64,
    pub(crate) paused: bool,
    pub(crate) seeks: Vec<f64>,
    pub(crate) rate_writes: Vec<f64>,
    pub(crate) play_calls: u32,

    pub(crate) transport_latency_input: String,
    pub(crate) latency_text: Option<String>,
    pub(crate) rate_input: Option<f64>,
    pub(crate) rate_text: Option<String>,
    pub(crate) bookmarks: Vec<(BookmarkId, String)>,
    pub(crate) remove_mode_indicator: bool,
    pub(crate) placements: Vec<ControlsPlacement>,
    pub(crate) compact_mode_suppressed: Vec<bool>,
    pub(crate) layout: ControlsLayout,
    pub(crate) fullscreen: bool,
    pub(crate) location: String,

    pub(crate) loaded_sources: Vec<String>,
    pub(crate) attach_calls: u32,
    pub(crate) live_sync_position: Option<f64>,

    pub(crate) wake_lock_requests: Vec<WakeLockRequestId>,
    pub(crate) released_sentinels: Vec<WakeLockSentinelId>,

    pub(crate) restart_posts: Vec<(String, Option<f64>)>,

    pub(crate) now_ms: f64,
    pub(crate) started_timers: Vec<(TimerId, f64, TimerReason)>,
    pub(crate) cleared_timers: Vec<TimerId>,

    next_id: u32,
}

impl Default for FakeState {
    fn default() -> Self {
        Self {
            current_time: 0.,
            duration: 0.,
            playback_rate: 1.,
            paused: true,
            seeks: vec![],
            rate_writes: vec![],
            play_calls: 0,
            transport_latency_input: "0".to_owned(),
            latency_text: None,
            rate_input: None,
            rate_text: None,
            bookmarks: vec![],
            remove_mode_indicator: false,
            placements: vec![],
            compact_mode_suppressed: vec![],
            layout: ControlsLayout::new(0., 100., 800.),
            fullscreen: false,
            location: "http://192.168.23.1/".to_owned(),
            loaded_sources: vec![],
            attach_calls: 0,
            live_sync_position: None,
            wake_lock_requests: vec![],
            released_sentinels: vec![],
            restart_posts: vec![],
            now_ms: 0.,
            started_timers: vec![],
            cleared_timers: vec![],
            next_id: 0,
        }
    }
}

impl FakeState {
    fn next_id(&mut self) -> u32 {
        self.next_id += 1;
        self.next_id
    }

    /// Last identifier handed out for a timer, a request or a wake lock.
    pub(crate) fn last_issued_id(&self) -> u32 {
        self.next_id
    }
}

/// Recording `Page` used by tests.
///
/// Clones share the same state, so a test can keep a handle on a page it moved into a
/// `Dispatcher`.
#[derive(Clone, Default)]
pub(crate) struct FakePage {
    state: Rc<RefCell<FakeState>>,
}

impl FakePage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn state(&self) -> RefMut<'_, FakeState> {
        self.state.borrow_mut()
    }
}

impl MediaElement for FakePage {
    fn current_time(&self) -> f64 {
        self.state.borrow().current_time
    }

    fn duration(&self) -> f64 {
        self.state.borrow().duration
    }

    fn playback_rate(&self) -> f64 {
        self.state.borrow().playback_rate
    }

    fn is_paused(&self) -> bool {
        self.state.borrow().paused
    }

    fn set_playback_rate(&mut self, rate: f64) {
        let mut state = self.state();
        state.playback_rate = rate;
        state.rate_writes.push(rate);
    }

    fn seek(&mut self, position: f64) {
        let mut state = self.state();
        state.current_time = position;
        state.seeks.push(position);
    }

    fn play(&mut self) {
        let mut state = self.state();
        state.paused = false;
        state.play_calls += 1;
    }
}

impl ViewerUi for FakePage {
    fn transport_latency_input(&self) -> String {
        self.state.borrow().transport_latency_input.clone()
    }

    fn set_latency_text(&mut self, text: &str) {
        self.state().latency_text = Some(text.to_owned());
    }

    fn set_playback_rate_input(&mut self, value: f64) {
        self.state().rate_input = Some(value);
    }

    fn set_playback_rate_text(&mut self, text: &str) {
        self.state().rate_text = Some(text.to_owned());
    }

    fn add_bookmark(&mut self, id: BookmarkId, label: &str) {
        self.state().bookmarks.push((id, label.to_owned()));
    }

    fn remove_bookmark(&mut self, id: BookmarkId) {
        self.state().bookmarks.retain(|(b, _)| *b != id);
    }

    fn set_remove_mode_indicator(&mut self, enabled: bool) {
        self.state().remove_mode_indicator = enabled;
    }

    fn set_controls_placement(&mut self, placement: ControlsPlacement) {
        self.state().placements.push(placement);
    }

    fn set_compact_mode_suppressed(&mut self, suppressed: bool) {
        self.state().compact_mode_suppressed.push(suppressed);
    }

    fn controls_layout(&self) -> ControlsLayout {
        self.state.borrow().layout
    }

    fn is_fullscreen(&self) -> bool {
        self.state.borrow().fullscreen
    }

    fn set_fullscreen(&mut self, enabled: bool) {
        self.state().fullscreen = enabled;
    }

    fn page_location(&self) -> String {
        self.state.borrow().location.clone()
    }
}

impl StreamSource for FakePage {
    fn load_source(&mut self, url: &str) {
        self.state().loaded_sources.push(url.to_owned());
    }

    fn attach_media(&mut self) {
        self.state().attach_calls += 1;
    }

    fn live_sync_position(&self) -> Option<f64> {
        self.state.borrow().live_sync_position
    }
}

impl WakeLockApi for FakePage {
    fn request_wake_lock(&mut self) -> WakeLockRequestId {
        let mut state = self.state();
        let id = state.next_id();
        state.wake_lock_requests.push(id);
        id
    }

    fn release_wake_lock(&mut self, sentinel: WakeLockSentinelId) {
        self.state().released_sentinels.push(sentinel);
    }
}

impl RestartBackend for FakePage {
    fn post_restart(&mut self, url: &str, timeout: Option<f64>) -> RequestId {
        let mut state = self.state();
        state.restart_posts.push((url.to_owned(), timeout));
        state.next_id()
    }
}

impl Clock for FakePage {
    fn now_ms(&self) -> f64 {
        self.state.borrow().now_ms
    }
}

impl Timers for FakePage {
    fn start_timer(&mut self, duration: f64, reason: TimerReason) -> TimerId {
        let mut state = self.state();
        let id = f64::from(state.next_id());
        state.started_timers.push((id, duration, reason));
        id
    }

    fn clear_timer(&mut self, id: TimerId) {
        self.state().cleared_timers.push(id);
    }
}
