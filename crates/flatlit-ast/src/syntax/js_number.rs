//! JavaScript `Number#toString` formatting.
//!
//! Property keys written as numeric literals are named by their string form
//! (`{1.50: v}` has the key `"1.5"`), so the flattener and the printer both
//! need the exact JavaScript spelling rather than Rust's `Display`.

/// Format `value` the way JavaScript's `String(value)` does.
#[must_use]
pub fn format_js_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-tripping digits, e.g. "1.2345e3".
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{sign}{scientific}");
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{first}e{exp_sign}{}", (n - 1).abs())
        } else {
            format!("{first}.{rest}e{exp_sign}{}", (n - 1).abs())
        }
    };
    format!("{sign}{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_have_no_fraction() {
        assert_eq!(format_js_number(1.0), "1");
        assert_eq!(format_js_number(42.0), "42");
        assert_eq!(format_js_number(-7.0), "-7");
        assert_eq!(format_js_number(-0.0), "0");
    }

    #[test]
    fn fractions_use_shortest_digits() {
        assert_eq!(format_js_number(1.5), "1.5");
        assert_eq!(format_js_number(0.1), "0.1");
        assert_eq!(format_js_number(1234.5), "1234.5");
        assert_eq!(format_js_number(0.000001), "0.000001");
    }

    #[test]
    fn large_and_small_values_switch_to_exponent_form() {
        assert_eq!(format_js_number(1e21), "1e+21");
        assert_eq!(format_js_number(1e20), "100000000000000000000");
        assert_eq!(format_js_number(1.5e-7), "1.5e-7");
        assert_eq!(format_js_number(1e-7), "1e-7");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_js_number(f64::NAN), "NaN");
        assert_eq!(format_js_number(f64::INFINITY), "Infinity");
        assert_eq!(format_js_number(f64::NEG_INFINITY), "-Infinity");
    }
}
