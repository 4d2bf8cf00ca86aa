use crate::{
    bindings::{MediaElement, ViewerUi},
    utils::duration::to_fixed,
    Logger,
};

/// Value of the playback speed input for which the media plays at normal speed.
const NEUTRAL_INPUT: f64 = 0.;

/// Slowest playback rate reachable through the playback speed input.
const MIN_PLAYBACK_RATE: f64 = 0.01;

/// Factor applied to negative inputs, so slowing down is finer-grained than speeding up.
const SLOW_DOWN_FACTOR: f64 = 0.2;

/// Converts the position of the playback speed input to a playback rate and brings the rate
/// back to normal once a sped-up playback caught up with the live edge.
pub(crate) struct PlaybackRateController {
    /// Last rate applied through this controller.
    rate: f64,
}

impl PlaybackRateController {
    pub(crate) fn new() -> Self {
        Self { rate: 1. }
    }

    pub(crate) fn rate(&self) -> f64 {
        self.rate
    }

    /// Apply the playback rate corresponding to the playback speed input's value `x`.
    ///
    /// Non-finite values are ignored.
    pub(crate) fn set_rate_from_input<P>(&mut self, page: &mut P, x: f64)
    where
        P: MediaElement + ViewerUi + ?Sized,
    {
        let Some(rate) = rate_from_input(x) else {
            Logger::debug("Rate: ignoring non-finite input");
            return;
        };
        self.rate = rate;
        page.set_playback_rate(rate);
        page.set_playback_rate_text(&format_rate(rate));
    }

    /// Put the playback speed input back to its neutral position and play at normal speed.
    pub(crate) fn reset_rate<P>(&mut self, page: &mut P)
    where
        P: MediaElement + ViewerUi + ?Sized,
    {
        page.set_playback_rate_input(NEUTRAL_INPUT);
        self.set_rate_from_input(page, NEUTRAL_INPUT);
    }

    /// Periodic check resetting the rate when playing faster than normal while being at less
    /// than `margin` seconds from the wanted latency.
    ///
    /// Returns `true` if the rate was reset.
    pub(crate) fn check_catch_up<P>(
        &mut self,
        page: &mut P,
        transport_latency_ms: f64,
        margin: f64,
    ) -> bool
    where
        P: MediaElement + ViewerUi + ?Sized,
    {
        if page.playback_rate() <= 1. {
            return false;
        }
        let remaining = page.duration() - page.current_time();
        if remaining < transport_latency_ms / 1000. + margin {
            Logger::lazy_debug(&|| {
                format!("Rate: caught up ({remaining:.2}s from the end), resetting rate")
            });
            self.reset_rate(page);
            true
        } else {
            false
        }
    }
}

/// Playback rate corresponding to the playback speed input's value `x`.
///
/// Returns `None` if `x` is not finite.
pub(crate) fn rate_from_input(x: f64) -> Option<f64> {
    if !x.is_finite() {
        None
    } else if x == 0. {
        Some(1.)
    } else if x > 0. {
        Some(x + 1.)
    } else {
        Some(f64::max(x * SLOW_DOWN_FACTOR + 1., MIN_PLAYBACK_RATE))
    }
}

fn format_rate(rate: f64) -> String {
    format!("×{}", to_fixed(rate, 2))
}
