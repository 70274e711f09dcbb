// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Readout formatting for a measured rectangle.

use core::fmt::{self, Write as _};

use kurbo::Rect;

/// A number rendered for display: at most two fraction digits, no trailing
/// zeros, and `,` between groups of three integer digits.
///
/// ```rust
/// use loupe_ruler::Decimal;
///
/// assert_eq!(format!("{}", Decimal(1234.5)), "1,234.5");
/// assert_eq!(format!("{}", Decimal(0.125)), "0.13");
/// assert_eq!(format!("{}", Decimal(20.0)), "20");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Decimal(pub f64);

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if !value.is_finite() {
            return write!(f, "{value}");
        }
        let magnitude = if value < 0.0 { -value } else { value };
        let hundredths = hundredths(magnitude);
        if value < 0.0 && hundredths != 0 {
            f.write_str("-")?;
        }
        write_grouped(f, hundredths / 100)?;
        match hundredths % 100 {
            0 => Ok(()),
            frac if frac % 10 == 0 => write!(f, ".{}", frac / 10),
            frac => write!(f, ".{frac:02}"),
        }
    }
}

/// `magnitude * 100` rounded half up, taken from the shortest decimal form of
/// `magnitude` so that `1.005` rounds to `101` like it reads.
fn hundredths(magnitude: f64) -> u64 {
    shortest_hundredths(magnitude).unwrap_or_else(|| binary_hundredths(magnitude))
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "rounded, non-negative and saturating"
)]
fn binary_hundredths(magnitude: f64) -> u64 {
    (magnitude * 100.0 + 0.5) as u64
}

fn shortest_hundredths(magnitude: f64) -> Option<u64> {
    let mut buf = ExpBuf::default();
    write!(buf, "{magnitude:e}").ok()?;
    let (mantissa, exp) = buf.as_str()?.split_once('e')?;
    let exp: i32 = exp.parse().ok()?;

    // The mantissa is `d.ddd`, so `magnitude * 100` has `exp + 3` integer digits.
    let keep = exp + 3;
    let mut out = 0_u64;
    let mut seen = 0_i32;
    let mut round_up = false;
    for digit in mantissa.bytes().filter(u8::is_ascii_digit) {
        let digit = u64::from(digit - b'0');
        if seen < keep {
            out = out.saturating_mul(10).saturating_add(digit);
        } else if seen == keep {
            round_up = digit >= 5;
        }
        seen += 1;
    }
    while seen < keep {
        out = out.saturating_mul(10);
        seen += 1;
    }
    Some(out.saturating_add(u64::from(round_up)))
}

/// Stack buffer for one `{:e}`-formatted `f64`.
#[derive(Default)]
struct ExpBuf {
    bytes: [u8; 32],
    len: usize,
}

impl ExpBuf {
    fn as_str(&self) -> Option<&str> {
        core::str::from_utf8(&self.bytes[..self.len]).ok()
    }
}

impl fmt::Write for ExpBuf {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let end = self.len + s.len();
        self.bytes
            .get_mut(self.len..end)
            .ok_or(fmt::Error)?
            .copy_from_slice(s.as_bytes());
        self.len = end;
        Ok(())
    }
}

fn write_grouped(f: &mut fmt::Formatter<'_>, int: u64) -> fmt::Result {
    if int < 1000 {
        return write!(f, "{int}");
    }
    write_grouped(f, int / 1000)?;
    write!(f, ",{:03}", int % 1000)
}

/// The `width x height` readout of a measured rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Label {
    /// Horizontal extent (`x1 - x0`).
    pub width: f64,
    /// Vertical extent (`y1 - y0`).
    pub height: f64,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", Decimal(self.width), Decimal(self.height))
    }
}

/// Returns the readout for a rectangle produced by [`measure`](crate::measure).
#[must_use]
pub fn label(rect: Rect) -> Label {
    Label {
        width: rect.x1 - rect.x0,
        height: rect.y1 - rect.y0,
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::format;

    use super::*;

    #[test]
    fn decimal_trims_and_rounds() {
        assert_eq!(format!("{}", Decimal(0.0)), "0");
        assert_eq!(format!("{}", Decimal(7.0)), "7");
        assert_eq!(format!("{}", Decimal(7.5)), "7.5");
        assert_eq!(format!("{}", Decimal(7.25)), "7.25");
        assert_eq!(format!("{}", Decimal(7.257)), "7.26");
        assert_eq!(format!("{}", Decimal(7.999)), "8");
    }

    #[test]
    fn decimal_rounds_the_written_value() {
        // 1.005 and 0.285 sit just below the halfway point in binary.
        assert_eq!(format!("{}", Decimal(1.005)), "1.01");
        assert_eq!(format!("{}", Decimal(0.285)), "0.29");
        assert_eq!(format!("{}", Decimal(0.125)), "0.13");
        assert_eq!(format!("{}", Decimal(0.004)), "0");
        assert_eq!(format!("{}", Decimal(0.005)), "0.01");
        assert_eq!(format!("{}", Decimal(1e-9)), "0");
        assert_eq!(format!("{}", Decimal(123_456.785)), "123,456.79");
    }

    #[test]
    fn decimal_groups_thousands() {
        assert_eq!(format!("{}", Decimal(999.0)), "999");
        assert_eq!(format!("{}", Decimal(1000.0)), "1,000");
        assert_eq!(format!("{}", Decimal(1_234_567.5)), "1,234,567.5");
        assert_eq!(format!("{}", Decimal(1_000_005.0)), "1,000,005");
    }

    #[test]
    fn decimal_negative_values() {
        assert_eq!(format!("{}", Decimal(-12.5)), "-12.5");
        assert_eq!(format!("{}", Decimal(-0.001)), "0");
    }

    #[test]
    fn label_reads_extent() {
        let r = Rect::new(150.0, 50.0, 400.0, 150.5);
        assert_eq!(format!("{}", label(r)), "250 x 100.5");
    }
}
