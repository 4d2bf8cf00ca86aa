use crate::{
    bindings::{Clock, ViewerUi},
    utils::{
        duration::{format_duration, TimeUnit},
        js_number::coerce_number,
    },
    Logger,
};

/// Measures the delay between the moment a frame was captured by the camera and the moment it
/// is shown, based on the capture timestamp carried by each HLS fragment.
pub(crate) struct LatencyTracker {
    /// Last measured "latency from air", in milliseconds.
    ///
    /// `None` until a fragment carrying a capture timestamp has been played.
    latency_from_air_ms: Option<f64>,
}

impl LatencyTracker {
    pub(crate) fn new() -> Self {
        Self {
            latency_from_air_ms: None,
        }
    }

    pub(crate) fn latency_from_air_ms(&self) -> Option<f64> {
        self.latency_from_air_ms
    }

    /// Method to call each time the stream library switches to a new fragment.
    ///
    /// `capture_timestamp` is the fragment's `EXT-X-PROGRAM-DATE-TIME` in milliseconds since the
    /// Unix epoch. Fragments without one leave the previous measurement untouched.
    pub(crate) fn on_fragment_changed<P>(&mut self, page: &mut P, capture_timestamp: Option<f64>)
    where
        P: ViewerUi + Clock + ?Sized,
    {
        let Some(capture_timestamp) = capture_timestamp else {
            Logger::debug("Latency: fragment without capture timestamp");
            return;
        };
        let latency = page.now_ms() - capture_timestamp + read_transport_latency_ms(&*page);
        self.latency_from_air_ms = Some(latency);
        page.set_latency_text(&format_latency(latency));
    }
}

/// Reads the transport latency, in milliseconds, currently entered by the user.
///
/// The input is read each time, so edits apply to the very next computation.
pub(crate) fn read_transport_latency_ms<P: ViewerUi + ?Sized>(page: &P) -> f64 {
    coerce_number(&page.transport_latency_input())
}

/// Text shown by the latency display: the latency is a delay behind the capture, so it is
/// shown negated.
pub(crate) fn format_latency(latency_ms: f64) -> String {
    let sign = if latency_ms < 0. { "+" } else { "-" };
    format!(
        "{sign}{}",
        format_duration(latency_ms.abs(), TimeUnit::Millisecond, TimeUnit::Second, 1)
    )
}
