//! Numeric input adapter: three typed strings → `SideLengths`.

use crate::cfg::SIDE_MAX;
use crate::error::InputError;
use crate::sides::{SideLabel, SideLengths};

/// Parse one raw value as a finite number in (0, 100].
pub fn parse_side(side: SideLabel, raw: &str) -> Result<f64, InputError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| InputError::NotANumber {
            side,
            raw: raw.to_string(),
        })?;
    if !(value > 0.0 && value <= SIDE_MAX) {
        return Err(InputError::OutOfRange { side, value });
    }
    Ok(value)
}

/// Parse three raw side lengths. The first failing side (in a, b, c order) is reported.
pub fn parse(raw_a: &str, raw_b: &str, raw_c: &str) -> Result<SideLengths, InputError> {
    Ok(SideLengths::new(
        parse_side(SideLabel::A, raw_a)?,
        parse_side(SideLabel::B, raw_b)?,
        parse_side(SideLabel::C, raw_c)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_padded_numbers() {
        let s = parse("3", " 4.5 ", "5e0").unwrap();
        assert_eq!(s, SideLengths::new(3.0, 4.5, 5.0));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(
            parse("3", "four", "5"),
            Err(InputError::NotANumber {
                side: SideLabel::B,
                raw: "four".into()
            })
        );
        assert!(matches!(
            parse("", "4", "5"),
            Err(InputError::NotANumber { side: SideLabel::A, .. })
        ));
        assert!(matches!(
            parse("3", "4", "inf"),
            Err(InputError::NotANumber { side: SideLabel::C, .. })
        ));
        assert!(matches!(parse("NaN", "4", "5"), Err(InputError::NotANumber { .. })));
    }

    #[test]
    fn enforces_bounds() {
        assert_eq!(
            parse("0", "4", "5"),
            Err(InputError::OutOfRange {
                side: SideLabel::A,
                value: 0.0
            })
        );
        assert!(matches!(parse("3", "-1", "5"), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse("3", "4", "100.5"), Err(InputError::OutOfRange { .. })));
        assert!(parse("100", "100", "100").is_ok());
    }

    #[test]
    fn parse_does_not_check_triangle_inequality() {
        assert!(parse("1", "1", "3").is_ok());
    }
}
