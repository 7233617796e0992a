// Numeric helpers shared by the analytics and the report tables.
//
// Every division here guards its denominator so callers never see NaN or
// infinity coming out of an empty or zero-capacity input.
use num_format::{Locale, ToFormattedString};

pub fn sum(v: &[f64]) -> f64 {
    v.iter().copied().sum()
}

pub fn average(v: &[f64]) -> f64 {
    // Arithmetic mean; 0 for an empty slice instead of NaN.
    if v.is_empty() {
        return 0.0;
    }
    sum(v) / v.len() as f64
}

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    let pct = (part / whole) * 100.0;
    if pct.is_finite() {
        pct
    } else {
        0.0
    }
}

/// Round half away from zero to `decimals` places.
pub fn round_to(n: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (n * factor).round() / factor
}

/// Fixed decimals with a leading `+` for non-negative values, as used for
/// change columns.
pub fn format_signed(n: f64, decimals: usize) -> String {
    if n >= 0.0 {
        format!("+{:.*}", decimals, n)
    } else {
        format!("{:.*}", decimals, n)
    }
}

pub fn format_number(n: f64, decimals: usize) -> String {
    // Fixed decimals plus thousands separators (e.g. `1,234,567.89`).
    let neg = n.is_sign_negative() && n != 0.0;
    let abs_n = n.abs();
    let s = format!("{:.*}", decimals, abs_n);
    let mut parts = s.split('.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next();
    let int_val: i64 = int_part.parse().unwrap_or(0);
    let mut res = int_val.to_formatted_string(&Locale::en);
    if let Some(frac) = frac_part {
        if decimals > 0 {
            res.push('.');
            res.push_str(frac);
        }
    } else if decimals > 0 {
        res.push('.');
        res.push_str(&"0".repeat(decimals));
    }
    if neg {
        format!("-{}", res)
    } else {
        res
    }
}

pub fn format_int<T>(n: T) -> String
where
    T: ToFormattedString,
{
    n.to_formatted_string(&Locale::en)
}
