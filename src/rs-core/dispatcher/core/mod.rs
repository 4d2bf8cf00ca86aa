use super::Dispatcher;
use crate::{
    bindings::{BookmarkId, TimerId, TimerReason},
    latency::read_transport_latency_ms,
    Logger,
};

impl Dispatcher {
    /// Load the configured stream, bind it to the media element and put the controls in their
    /// initial state.
    pub(super) fn load_stream_core(&mut self) {
        Logger::info(&format!("Core: loading stream {}", self.config.stream_url));
        self.page.load_source(&self.config.stream_url);
        self.page.attach_media();
        self.rate_controller.reset_rate(&mut *self.page);
        self.controls.update_controls(&mut *self.page);
        self.controls.apply_placement(&mut *self.page);
        self.start_catch_up_checks();
    }

    /// (Re-)start the periodic catch-up check, replacing the pending one if one.
    pub(super) fn start_catch_up_checks(&mut self) {
        self.clear_catch_up_timer();
        let id = self.page.start_timer(
            self.config.catch_up_check_interval,
            TimerReason::CatchUpCheck,
        );
        self.catch_up_timer = Some(id);
    }

    pub(super) fn stop_catch_up_checks(&mut self) {
        Logger::debug("Core: stopping catch-up checks");
        self.clear_catch_up_timer();
    }

    pub(super) fn on_catch_up_timer_ended(&mut self, id: TimerId) {
        if self.catch_up_timer != Some(id) {
            Logger::debug(&format!("Core: ignoring stale catch-up timer {id}"));
            return;
        }
        self.catch_up_timer = None;
        let transport_latency_ms = read_transport_latency_ms(&*self.page);
        self.rate_controller.check_catch_up(
            &mut *self.page,
            transport_latency_ms,
            self.config.catch_up_margin,
        );
        self.start_catch_up_checks();
    }

    /// Seek as close as possible to the end of what is currently available.
    pub(super) fn skip_to_live_core(&mut self) {
        let position = self.page.duration() - self.config.live_edge_offset;
        if !position.is_finite() {
            Logger::warn("Core: cannot skip to live, duration unknown");
            return;
        }
        Logger::info(&format!("Core: skipping to live ({position}s)"));
        self.page.seek(position);
    }

    /// Seek back to the configured target latency behind the live sync position.
    pub(super) fn back_to_delay_core(&mut self) {
        let Some(live_sync_position) = self.page.live_sync_position() else {
            Logger::info("Core: no live sync position yet, cannot go back to delay");
            return;
        };
        let position = live_sync_position - self.config.target_latency;
        if position < 0. {
            Logger::warn(&format!(
                "Core: not enough buffered content for a {}s delay, seeking to the start",
                self.config.target_latency
            ));
            self.page.seek(0.);
        } else {
            Logger::info(&format!("Core: going back to delay ({position}s)"));
            self.page.seek(position);
        }
    }

    pub(super) fn save_bookmark_core(&mut self) {
        let latency = self.latency_tracker.latency_from_air_ms().unwrap_or(0.);
        self.bookmarks.save_bookmark(&mut *self.page, latency);
    }

    pub(super) fn bookmark_clicked_core(&mut self, id: BookmarkId) {
        let transport_latency_ms = read_transport_latency_ms(&*self.page);
        self.bookmarks.on_bookmark_clicked(
            &mut *self.page,
            id,
            transport_latency_ms,
            self.config.bookmark_seek_bias,
        );
    }

    fn clear_catch_up_timer(&mut self) {
        if let Some(id) = self.catch_up_timer.take() {
            self.page.clear_timer(id);
        }
    }
}
