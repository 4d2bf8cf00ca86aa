/// Units known to `format_duration`, from the largest to the smallest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum TimeUnit {
    Hour = 0,
    Minute = 1,
    Second = 2,
    Millisecond = 3,
}

const UNITS: [TimeUnit; 4] = [
    TimeUnit::Hour,
    TimeUnit::Minute,
    TimeUnit::Second,
    TimeUnit::Millisecond,
];

impl TimeUnit {
    fn factor(self) -> f64 {
        match self {
            TimeUnit::Hour => 3_600_000.,
            TimeUnit::Minute => 60_000.,
            TimeUnit::Second => 1000.,
            TimeUnit::Millisecond => 1.,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            TimeUnit::Hour => "h",
            TimeUnit::Minute => "m",
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
        }
    }
}

/// Format `value`, expressed in `input_unit`, as a human-readable duration such as `"1h 0m 5.2s"`.
///
/// Every unit larger than `smallest_unit` is emitted as an integer once it, or any larger unit,
/// is nonzero. What is left is then expressed in `smallest_unit` with `fraction_digits` decimals.
pub(crate) fn format_duration(
    value: f64,
    input_unit: TimeUnit,
    smallest_unit: TimeUnit,
    fraction_digits: usize,
) -> String {
    let mut ms = value * input_unit.factor();
    let mut segments: Vec<String> = vec![];
    let mut sticky = false;

    for unit in UNITS.iter().take_while(|u| **u < smallest_unit) {
        let quotient = (ms / unit.factor()).floor();
        if sticky || quotient > 0. {
            sticky = true;
            ms -= quotient * unit.factor();
            segments.push(format!("{}{}", quotient, unit.suffix()));
        }
    }

    segments.push(format!(
        "{}{}",
        to_fixed(ms / smallest_unit.factor(), fraction_digits),
        smallest_unit.suffix()
    ));
    segments.join(" ")
}

/// Format `value` with exactly `fraction_digits` decimals, rounding halves away from zero.
pub(crate) fn to_fixed(value: f64, fraction_digits: usize) -> String {
    let scale = 10f64.powi(fraction_digits as i32);
    let rounded = (value * scale).round() / scale;
    format!("{:.*}", fraction_digits, rounded)
}
