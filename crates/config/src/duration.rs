//! Duration expressions such as `300ms`, `1.5h` or `2h45m`.
//!
//! Responsibilities:
//! - Parse duration expressions read from environment variables.
//! - Render durations back into the same notation for help output.
//!
//! Does NOT handle:
//! - Negative durations. `std::time::Duration` is unsigned, so a leading `-`
//!   is a parse failure and the accessor falls through to its default.
//!
//! Invariants:
//! - Every number carries a unit, except the bare expression `0`.
//! - Totals above `u64::MAX` nanoseconds are rejected instead of saturated.
//! - `parse_duration(&format_duration(d)) == Some(d)` for any representable `d`.

use std::time::Duration;

const NANOS_PER_MICRO: u64 = 1_000;
const NANOS_PER_MILLI: u64 = 1_000_000;
const NANOS_PER_SEC: u64 = 1_000_000_000;
const NANOS_PER_MINUTE: u64 = 60 * NANOS_PER_SEC;
const NANOS_PER_HOUR: u64 = 60 * NANOS_PER_MINUTE;

/// Digits of fraction kept before the scale would overflow.
const MAX_FRACTION_SCALE: u64 = 1_000_000_000_000_000_000;

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(NANOS_PER_MINUTE),
        "h" => Some(NANOS_PER_HOUR),
        _ => None,
    }
}

/// Parse a duration expression.
///
/// Returns `None` for anything that is not a well-formed, non-negative
/// duration that fits in `u64` nanoseconds.
pub fn parse_duration(input: &str) -> Option<Duration> {
    let mut rest = input.strip_prefix('+').unwrap_or(input);

    if rest == "0" {
        return Some(Duration::ZERO);
    }
    if rest.is_empty() {
        return None;
    }

    let mut total: u64 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_digits, after_int) = rest.split_at(int_len);

        let (frac_digits, after_number) = match after_int.strip_prefix('.') {
            Some(after_dot) => {
                let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
                after_dot.split_at(frac_len)
            }
            None => ("", after_int),
        };

        if int_digits.is_empty() && frac_digits.is_empty() {
            return None;
        }

        let unit_len = after_number
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(after_number.len());
        let (unit, remainder) = after_number.split_at(unit_len);
        let unit = unit_nanos(unit)?;

        let whole: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().ok()?
        };
        let mut nanos = whole.checked_mul(unit)?;

        let (frac, scale) = fraction(frac_digits);
        if frac > 0 {
            let partial = u128::from(frac) * u128::from(unit) / u128::from(scale);
            nanos = nanos.checked_add(u64::try_from(partial).ok()?)?;
        }

        total = total.checked_add(nanos)?;
        rest = remainder;
    }

    Some(Duration::from_nanos(total))
}

/// Collapse fraction digits into `(value, scale)`, dropping digits past what
/// a `u64` scale can express.
fn fraction(digits: &str) -> (u64, u64) {
    let mut value: u64 = 0;
    let mut scale: u64 = 1;
    for digit in digits.bytes() {
        if scale >= MAX_FRACTION_SCALE {
            break;
        }
        value = value * 10 + u64::from(digit - b'0');
        scale *= 10;
    }
    (value, scale)
}

/// Render a duration as `1h2m3.5s`, `1.5ms`, `0s` and so on.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();

    if nanos == 0 {
        return "0s".to_string();
    }
    if nanos < u128::from(NANOS_PER_MICRO) {
        return format!("{nanos}ns");
    }
    if nanos < u128::from(NANOS_PER_MILLI) {
        return format!("{}µs", decimal(nanos, NANOS_PER_MICRO));
    }
    if nanos < u128::from(NANOS_PER_SEC) {
        return format!("{}ms", decimal(nanos, NANOS_PER_MILLI));
    }

    let hours = nanos / u128::from(NANOS_PER_HOUR);
    let minutes = (nanos % u128::from(NANOS_PER_HOUR)) / u128::from(NANOS_PER_MINUTE);
    let seconds = decimal(nanos % u128::from(NANOS_PER_MINUTE), NANOS_PER_SEC);

    if hours > 0 {
        format!("{hours}h{minutes}m{seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m{seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// `value / unit` as a decimal string with trailing fraction zeros removed.
fn decimal(value: u128, unit: u64) -> String {
    let unit = u128::from(unit);
    let whole = value / unit;
    let remainder = value % unit;
    if remainder == 0 {
        return whole.to_string();
    }

    let width = unit.ilog10() as usize;
    let fraction = format!("{remainder:0width$}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}
