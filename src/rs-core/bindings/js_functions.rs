use crate::wasm_bindgen;

/// # js_functions
///
/// This file lists all JavaScript functions that are callable from Rust as well as
/// struct and enumeration used by those functions.

#[wasm_bindgen]
extern "C" {
    // Log the given text in the JavaScript console, with the log level given.
    pub fn jsLog(log_level: LogLevel, log: &str);

    // Starts a timer for the number of milliseconds indicated by the `duration` argument.
    //
    // Once this timer has elapsed, and unless `jsClearTimer` has been called since with
    // the `TimerId` returned by this function, the `on_timer_ended` method of the
    // `Dispatcher` will be called with both the corresponding `TimerId` and `reason`.
    pub fn jsTimer(duration: f64, reason: TimerReason) -> TimerId;

    // Clear a timer started with `jsTimer`.
    pub fn jsClearTimer(id: TimerId);

    // Returns the current wall-clock time as a number of milliseconds since the Unix epoch, as
    // `Date.now()` would.
    pub fn jsNow() -> f64;

    // Returns the `currentTime` attribute of the media element, in seconds.
    pub fn jsGetCurrentTime() -> f64;

    // Returns the `duration` attribute of the media element, in seconds.
    pub fn jsGetDuration() -> f64;

    // Returns the `playbackRate` attribute of the media element.
    pub fn jsGetPlaybackRate() -> f64;

    // Returns the `paused` attribute of the media element.
    pub fn jsIsPaused() -> bool;

    // Method called to change the playback rate (speed of playback) of the media element.
    pub fn jsSetPlaybackRate(playbackRate: f64);

    // Set the `currentTime` attribute of the media element, moving its playhead.
    pub fn jsSeek(position: f64);

    // Call the `HTMLMediaElement.prototype.play` API.
    //
    // A rejected play promise is only logged on the JavaScript-side.
    pub fn jsPlay();

    // Ask the stream library to load the HLS playlist behind the given `url`.
    pub fn jsLoadSource(url: &str);

    // Ask the stream library to attach itself to the media element.
    //
    // The `on_media_attached` method of the `Dispatcher` is called once done.
    pub fn jsAttachMedia();

    // Returns the stream library's `liveSyncPosition`, `None` if not known yet.
    pub fn jsGetLiveSyncPosition() -> Option<f64>;

    // Returns the raw text currently entered in the transport latency input.
    pub fn jsGetTransportLatencyInput() -> String;

    // Replace the text shown by the latency display.
    pub fn jsSetLatencyText(text: &str);

    // Set the value of the playback speed input.
    pub fn jsSetPlaybackRateInput(value: f64);

    // Replace the text of the playback speed output.
    pub fn jsSetPlaybackRateText(text: &str);

    // Create a bookmark button with the given label, appended after every other bookmark in the
    // bookmarks container.
    //
    // Clicking it should call the `on_bookmark_clicked` method of the `Dispatcher` with the same
    // `BookmarkId`.
    pub fn jsAddBookmark(id: BookmarkId, label: &str);

    // Remove the bookmark button previously created through `jsAddBookmark`.
    pub fn jsRemoveBookmark(id: BookmarkId);

    // Toggle the CSS marker showing that clicking a bookmark will now remove it.
    pub fn jsSetRemoveModeIndicator(enabled: bool);

    // Move the controls panel to the given placement and update the "fully expanded" /
    // "fully collapsed" CSS markers accordingly.
    pub fn jsSetControlsPlacement(placement: ControlsPlacement);

    // Toggle the CSS marker suppressing the compact controls mode.
    pub fn jsSetCompactModeSuppressed(suppressed: bool);

    // Measure the controls region as it is currently laid out.
    pub fn jsGetControlsLayout() -> ControlsLayout;

    // Returns `true` if the video container is currently displayed in fullscreen.
    pub fn jsIsFullscreen() -> bool;

    // Enter or exit fullscreen mode for the video container.
    pub fn jsSetFullscreen(enabled: bool);

    // Returns `window.location.href`.
    pub fn jsGetPageLocation() -> String;

    // Request a screen wake lock from the browser.
    //
    // This operation is asynchronous: either the `on_wake_lock_acquired` or the
    // `on_wake_lock_request_failed` method of the `Dispatcher` will later be called with the same
    // `WakeLockRequestId`.
    pub fn jsRequestWakeLock() -> WakeLockRequestId;

    // Release the wake lock linked to the given `WakeLockSentinelId`.
    //
    // The sentinel's own `release` event will then be forwarded to `on_wake_lock_released`. A
    // rejected release is reported through `on_wake_lock_release_failed`.
    pub fn jsReleaseWakeLock(sentinel_id: WakeLockSentinelId);

    // Perform a `POST` request without body to the given `url`.
    //
    // If and when the server answers, the `on_restart_response` method of the `Dispatcher` will
    // be called with the HTTP status and the response's text.
    // If the request fails before that (network error, timeout, unreadable body), the
    // `on_restart_request_failed` method will be called instead.
    pub fn jsPostRestart(url: &str, timeout: Option<f64>) -> RequestId;
}

/// Position of the controls region as measured on the page, in CSS pixels.
///
/// Created by the JavaScript-side when `jsGetControlsLayout` is called.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlsLayout {
    /// Distance between the top of the viewport and the top of the controls region.
    element_top: f64,
    /// Height the controls region has once fully shown.
    height: f64,
    /// `innerHeight` of the window.
    viewport_height: f64,
}

#[wasm_bindgen]
impl ControlsLayout {
    #[wasm_bindgen(constructor)]
    pub fn new(element_top: f64, height: f64, viewport_height: f64) -> Self {
        Self {
            element_top,
            height,
            viewport_height,
        }
    }
}

impl ControlsLayout {
    /// Returns `true` if the whole controls region can be shown without having to scroll.
    pub fn fits_in_viewport(&self) -> bool {
        self.element_top >= 0. && self.element_top + self.height <= self.viewport_height
    }
}

/// Placement of the controls panel on the page.
///
/// Exactly one of them holds at any time.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlsPlacement {
    /// The panel is merged into the minimal bar.
    Collapsed = 0,
    /// The full panel is shown inline, attached to the video overlay.
    DockedExpanded = 1,
    /// The panel is detached into the video container and marked as fully expanded.
    FloatingFullyExpanded = 2,
}

/// "Reason" associated to a timer started by the `Dispatcher`.
///
/// This can then help to identify what the timer was for once resolved.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerReason {
    /// The timer is linked to the periodic check resetting the playback rate once the viewer
    /// caught up with the live edge.
    CatchUpCheck = 0,
}

/// Reason why a request started by the `Dispatcher` could not complete.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestErrorReason {
    /// The configured timeout was exceeded.
    Timeout,
    /// The request could not be performed (network error, CORS...).
    Error,
    /// The response could not be read.
    Other,
}

/// Levels with which a log can be emitted.
#[wasm_bindgen]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd)]
pub enum LogLevel {
    /// Log level reserved for very important errors and highly unexpected events.
    Error = 0,

    /// Log level reserved for less important errors and unexpected events.
    Warn = 1,

    /// Log level reserved for important events
    Info = 2,

    /// Log level used when debugging. Small-ish yet impactful events should be logged with it.
    Debug = 3,
}

/// Identify a pending request.
pub type RequestId = u32;

/// Identify a pending timer.
pub type TimerId = f64;

/// Identify a bookmark button.
pub type BookmarkId = u32;

/// Identify a pending wake lock request.
pub type WakeLockRequestId = u32;

/// Identify a wake lock granted by the browser.
pub type WakeLockSentinelId = u32;
