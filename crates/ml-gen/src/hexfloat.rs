//! A C99 hex-float (`%a`) formatter.
//!
//! The host standard library has no equivalent of C's `%a` conversion, and
//! round-tripping a `f64` through a decimal literal risks re-parsing to a
//! different bit pattern on some C libraries. Hex-float literals are exact:
//! each carries its mantissa bits directly, so the compiled C program always
//! sees precisely the value ML computed.

/// Formats `v` as a C99 hex-float literal, e.g. `0x1.4p+1` for `2.5`.
pub fn format_hex_float(v: f64) -> String {
    if v == 0.0 {
        return if v.is_sign_negative() {
            "-0x0p+0".to_string()
        } else {
            "0x0p+0".to_string()
        };
    }

    let bits = v.to_bits();
    let sign = if bits >> 63 == 1 { "-" } else { "" };
    let biased_exp = ((bits >> 52) & 0x7ff) as i64;
    let mantissa = bits & 0x000f_ffff_ffff_ffff;

    let (leading_digit, exp) = if biased_exp == 0 {
        (0u64, -1022i64)
    } else {
        (1u64, biased_exp - 1023)
    };

    let mut frac = format!("{mantissa:013x}");
    while frac.len() > 1 && frac.ends_with('0') {
        frac.pop();
    }

    if frac == "0" {
        format!("{sign}0x{leading_digit}p{exp:+}")
    } else {
        format!("{sign}0x{leading_digit}.{frac}p{exp:+}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_hex_float(0.0), "0x0p+0");
    }

    #[test]
    fn whole_power_of_two() {
        assert_eq!(format_hex_float(2.0), "0x1p+1");
        assert_eq!(format_hex_float(0.5), "0x1p-1");
    }

    #[test]
    fn two_point_five() {
        assert_eq!(format_hex_float(2.5), "0x1.4p+1");
    }

    #[test]
    fn round_trips_through_bits() {
        for v in [1.0, 3.5, 12.0, 0.1, 100.25, 9999.999, 1.0 / 3.0] {
            let hex = format_hex_float(v);
            let trimmed = hex.trim_start_matches('-');
            let body = trimmed.trim_start_matches("0x");
            let (mantissa_part, exp_part) = body.split_once('p').unwrap();
            let exp: i64 = exp_part.parse().unwrap();
            let value = if let Some((int_part, frac_part)) = mantissa_part.split_once('.') {
                let int_digit: u64 = u64::from_str_radix(int_part, 16).unwrap();
                let mut frac_value = 0f64;
                for (i, c) in frac_part.chars().enumerate() {
                    let digit = c.to_digit(16).unwrap() as f64;
                    frac_value += digit / 16f64.powi(i as i32 + 1);
                }
                int_digit as f64 + frac_value
            } else {
                u64::from_str_radix(mantissa_part, 16).unwrap() as f64
            };
            let reconstructed = value * 2f64.powi(exp as i32) * if v.is_sign_negative() { -1.0 } else { 1.0 };
            assert_eq!(reconstructed, v, "failed to round-trip {v}");
        }
    }
}
