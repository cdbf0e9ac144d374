/// Display unit for byte quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteUnit {
    Mb,
    Gb,
    Tb,
}

impl ByteUnit {
    const fn divisor(self) -> f64 {
        match self {
            Self::Mb => 1_048_576.0,
            Self::Gb => 1_073_741_824.0,
            Self::Tb => 1_099_511_627_776.0,
        }
    }
}

impl std::fmt::Display for ByteUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mb => write!(f, "MB"),
            Self::Gb => write!(f, "GB"),
            Self::Tb => write!(f, "TB"),
        }
    }
}

/// Picks the display unit from the literal decimal digit count of the byte
/// value, not its magnitude: fewer than 10 digits reads as MB, 10 to 12 as
/// GB, 13 or more as TB. The jumps at digit boundaries are load-bearing for
/// output compatibility and must not be smoothed into proportional scaling.
#[must_use]
pub fn unit_for(bytes: u64) -> ByteUnit {
    let digits = bytes.to_string().len();
    if digits >= 13 {
        ByteUnit::Tb
    } else if digits >= 10 {
        ByteUnit::Gb
    } else {
        ByteUnit::Mb
    }
}

/// Scales a raw byte count into its display unit, rounded to two decimals.
#[must_use]
pub fn scale(bytes: u64) -> (f64, ByteUnit) {
    let unit = unit_for(bytes);
    (round2(bytes as f64 / unit.divisor()), unit)
}

/// Scales a used/total pair into the single unit chosen by the total's
/// digit count, so both numbers read in the same unit.
#[must_use]
pub fn scale_pair(used: u64, total: u64) -> (f64, f64, ByteUnit) {
    let unit = unit_for(total);
    (
        round2(used as f64 / unit.divisor()),
        round2(total as f64 / unit.divisor()),
        unit,
    )
}

#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[must_use]
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Formats a rounded value for plugin output: at least one decimal digit,
/// no padding zeros beyond the rounded precision (90 → "90.0",
/// 90.1 → "90.1", 90.12 → "90.12").
#[must_use]
pub fn fmt_value(value: f64) -> String {
    let rendered = format!("{value}");
    if rendered.contains('.') {
        rendered
    } else {
        format!("{rendered}.0")
    }
}
