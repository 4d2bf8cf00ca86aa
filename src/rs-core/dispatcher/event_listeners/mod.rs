use crate::{
    bindings::{
        BookmarkId, RequestErrorReason, RequestId, TimerId, TimerReason, WakeLockRequestId,
        WakeLockSentinelId,
    },
    dispatcher::Dispatcher,
    latency::read_transport_latency_ms,
    wasm_bindgen, Logger,
};

/// Methods triggered on JavaScript events by the JavaScript code.
#[wasm_bindgen]
impl Dispatcher {
    /// The JS code should call this method once the stream library is bound to the media
    /// element.
    pub fn on_media_attached(&mut self) {
        Logger::info("Core: media element and stream library bound together");
    }

    /// The JS code should call this method once the stream library parsed the playlist.
    ///
    /// # Arguments
    ///
    /// * `level_count` - The number of quality levels found in it.
    pub fn on_manifest_parsed(&mut self, level_count: u32) {
        Logger::info(&format!(
            "Core: manifest loaded, found {level_count} quality level(s)"
        ));
        self.page.play();
    }

    /// The JS code should call this method each time the stream library starts playing a new
    /// fragment.
    ///
    /// # Arguments
    ///
    /// * `capture_timestamp` - The fragment's program date time, in milliseconds since the Unix
    ///   epoch, if it has one.
    pub fn on_fragment_changed(&mut self, capture_timestamp: Option<f64>) {
        self.latency_tracker
            .on_fragment_changed(&mut *self.page, capture_timestamp);
    }

    /// The JS code should call this method when the transport latency input changed.
    pub fn on_transport_latency_change(&mut self) {
        Logger::lazy_debug(&|| {
            format!(
                "Core: transport latency set to {}ms",
                read_transport_latency_ms(&*self.page)
            )
        });
    }

    /// The JS code should call this method when the playback speed input moved.
    ///
    /// # Arguments
    ///
    /// * `value` - The input's value as a number.
    pub fn on_playback_rate_input(&mut self, value: f64) {
        self.rate_controller
            .set_rate_from_input(&mut *self.page, value);
    }

    /// The JS code should call this method when the playback speed reset button is clicked.
    pub fn on_playback_rate_reset(&mut self) {
        self.rate_controller.reset_rate(&mut *self.page);
    }

    /// The JS code should call this method when the "skip to live" button is clicked.
    pub fn on_skip_to_live(&mut self) {
        self.skip_to_live_core();
    }

    /// The JS code should call this method when the "back to delay" button is clicked.
    pub fn on_back_to_delay(&mut self) {
        self.back_to_delay_core();
    }

    /// The JS code should call this method when the "save latency" button is clicked.
    pub fn on_save_bookmark(&mut self) {
        self.save_bookmark_core();
    }

    /// The JS code should call this method when the "remove latency" button is clicked.
    pub fn on_toggle_remove_mode(&mut self) {
        self.bookmarks.toggle_remove_mode(&mut *self.page);
    }

    /// The JS code should call this method when a bookmark created through `jsAddBookmark` is
    /// clicked.
    pub fn on_bookmark_clicked(&mut self, id: BookmarkId) {
        self.bookmark_clicked_core(id);
    }

    /// The JS code should call this method when the expand button is clicked.
    pub fn on_expand_controls(&mut self) {
        self.controls.expand(&mut *self.page);
    }

    /// The JS code should call this method when the collapse button is clicked.
    pub fn on_collapse_controls(&mut self) {
        self.controls.collapse(&mut *self.page);
    }

    /// The JS code should call this method each time the viewport is resized.
    pub fn on_resize(&mut self) {
        self.controls.update_controls(&mut *self.page);
    }

    /// The JS code should call this method when the fullscreen button is clicked.
    pub fn on_fullscreen_toggle(&mut self) {
        self.controls.toggle_fullscreen(&mut *self.page);
    }

    /// The JS code should call this method when the media element emits a `play` event.
    pub fn on_play(&mut self) {
        self.wake_lock.on_play(&mut *self.page);
    }

    /// The JS code should call this method when the media element emits a `pause` event.
    pub fn on_pause(&mut self) {
        self.wake_lock.on_pause(&mut *self.page);
    }

    /// The JS code should call this method when a wake lock requested through
    /// `jsRequestWakeLock` was granted.
    ///
    /// # Arguments
    ///
    /// * `request_id` - The identifier returned by `jsRequestWakeLock`.
    ///
    /// * `sentinel_id` - Identifier the JS code will use to refer to that lock from now on.
    pub fn on_wake_lock_acquired(
        &mut self,
        request_id: WakeLockRequestId,
        sentinel_id: WakeLockSentinelId,
    ) {
        self.wake_lock
            .on_acquired(&mut *self.page, request_id, sentinel_id);
    }

    /// The JS code should call this method when a wake lock requested through
    /// `jsRequestWakeLock` was refused.
    pub fn on_wake_lock_request_failed(&mut self, request_id: WakeLockRequestId, message: String) {
        self.wake_lock.on_request_failed(request_id, message);
    }

    /// The JS code should call this method when a granted wake lock emits a `release` event.
    pub fn on_wake_lock_released(&mut self, sentinel_id: WakeLockSentinelId) {
        self.wake_lock.on_released(&mut *self.page, sentinel_id);
    }

    /// The JS code should call this method when `jsReleaseWakeLock` failed.
    pub fn on_wake_lock_release_failed(&mut self, sentinel_id: WakeLockSentinelId, message: String) {
        Logger::debug(&format!("Core: could not release wake lock {sentinel_id}"));
        self.wake_lock.on_release_failed(message);
    }

    /// The JS code should call this method when the "restart" button is clicked.
    pub fn on_restart_muxer(&mut self) {
        self.restart.request_restart(
            &mut *self.page,
            &self.config.restart_endpoint,
            self.config.restart_request_timeout,
        );
    }

    /// The JS code should call this method once the request started with `jsPostRestart`
    /// received a response.
    ///
    /// # Arguments
    ///
    /// * `request_id` - The identifier returned by `jsPostRestart`.
    ///
    /// * `status` - The HTTP status of the response.
    ///
    /// * `body` - The response's text.
    pub fn on_restart_response(&mut self, request_id: RequestId, status: u32, body: String) {
        self.restart.on_response(
            &mut *self.page,
            request_id,
            status,
            &body,
            &mut self.config.stream_url,
        );
    }

    /// The JS code should call this method if the request started with `jsPostRestart` could
    /// not complete.
    pub fn on_restart_request_failed(
        &mut self,
        request_id: RequestId,
        reason: RequestErrorReason,
        message: Option<String>,
    ) {
        self.restart.on_request_failed(request_id, reason, message);
    }

    /// The JS code should call this method each time a timer started with the `jsTimer`
    /// function finished.
    ///
    /// # Arguments
    ///
    /// * `id` - The `TimerId` given by `jsTimer` when the timer was
    ///   started. This allows the `Dispatcher` to identify which timer
    ///   actually finished.
    ///
    /// * `reason` - The `TimerReason` given by the Rust code when that timer
    ///   was started.
    pub fn on_timer_ended(&mut self, id: TimerId, reason: TimerReason) {
        match reason {
            TimerReason::CatchUpCheck => self.on_catch_up_timer_ended(id),
        }
    }
}
