use crate::{
    bindings::{ControlsPlacement, JsPage},
    utils::logger::LoggerLevel,
    wasm_bindgen, Logger,
};

use super::Dispatcher;

/// Methods exposed to the JavaScript-side.
///
/// Note that these are not the only methods callable by JavaScript. There's
/// also "event_listeners" which as its name point at, should be called when particular
/// events happen. Such "event_listeners" are defined in its own file.
#[wasm_bindgen]
impl Dispatcher {
    /// Create a new `Dispatcher` controlling the media element and controls of the page.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::with_page(Box::new(JsPage))
    }

    /// Start playing the configured stream and begin observing the live edge.
    pub fn load_stream(&mut self) {
        Logger::info("Core: API: load_stream called");
        self.load_stream_core();
    }

    /// Stop periodic checks. The stream itself is left to the stream library.
    pub fn stop(&mut self) {
        self.stop_catch_up_checks();
    }

    pub fn set_log_level(&mut self, level: LoggerLevel) {
        Logger::set_logger_level(level);
    }

    pub fn stream_url(&self) -> String {
        self.config.stream_url.clone()
    }

    pub fn set_stream_url(&mut self, url: String) {
        self.config.stream_url = url;
    }

    pub fn set_restart_endpoint(&mut self, endpoint: String) {
        self.config.restart_endpoint = endpoint;
    }

    pub fn set_restart_request_timeout(&mut self, timeout: Option<f64>) {
        self.config.restart_request_timeout = timeout;
    }

    pub fn set_catch_up_check_interval(&mut self, interval: f64) {
        self.config.catch_up_check_interval = interval;
        if self.catch_up_timer.is_some() {
            self.start_catch_up_checks();
        }
    }

    pub fn set_catch_up_margin(&mut self, margin: f64) {
        self.config.catch_up_margin = margin;
    }

    pub fn set_bookmark_seek_bias(&mut self, bias: f64) {
        self.config.bookmark_seek_bias = bias;
    }

    pub fn set_live_edge_offset(&mut self, offset: f64) {
        self.config.live_edge_offset = offset;
    }

    pub fn set_target_latency(&mut self, target_latency: f64) {
        self.config.target_latency = target_latency;
    }

    pub fn back_buffer_length(&self) -> f64 {
        self.config.load_policy.back_buffer_length
    }

    pub fn set_back_buffer_length(&mut self, length: f64) {
        self.config.load_policy.back_buffer_length = length;
    }

    pub fn max_time_to_first_byte(&self) -> f64 {
        self.config.load_policy.max_time_to_first_byte
    }

    pub fn max_load_time(&self) -> f64 {
        self.config.load_policy.max_load_time
    }

    pub fn timeout_retry_count(&self) -> u32 {
        self.config.load_policy.timeout_retry_count
    }

    pub fn error_retry_count(&self) -> u32 {
        self.config.load_policy.error_retry_count
    }

    pub fn set_error_retry_count(&mut self, count: u32) {
        self.config.load_policy.error_retry_count = count;
    }

    pub fn retry_delay(&self) -> f64 {
        self.config.load_policy.retry_delay
    }

    pub fn max_retry_delay(&self) -> f64 {
        self.config.load_policy.max_retry_delay
    }

    /// Predicate given to the stream library, deciding whether a failed fragment or playlist
    /// request is retried.
    pub fn should_retry(&self, retry_count: u32, status: Option<u32>) -> bool {
        self.config.load_policy.should_retry(retry_count, status)
    }

    pub fn latency_from_air(&self) -> Option<f64> {
        self.latency_tracker.latency_from_air_ms()
    }

    /// Current playback rate of the media element.
    pub fn playback_rate(&self) -> f64 {
        self.page.playback_rate()
    }

    pub fn controls_placement(&self) -> ControlsPlacement {
        self.controls.placement()
    }

    pub fn is_restart_in_flight(&self) -> bool {
        self.restart.is_in_flight()
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
