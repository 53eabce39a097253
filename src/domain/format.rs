//! Display formatting helpers
//!
//! The tool presents figures with Indian (en-IN) conventions: rupee amounts,
//! digit groups of two above the last three (5,10,000 rather than 510,000),
//! and "at most N decimals" semantics where trailing zeros are dropped.
//! Percentages are the exception: they keep exactly N decimals and never
//! group digits.
//!
//! Formatting is presentation only. Nothing here feeds back into the engine,
//! and callers must not parse these strings.

/// Rupee amount with Indian grouping and no decimals.
pub fn format_currency(amount: f64) -> String {
    format_currency_with(amount, 0)
}

/// Rupee amount with Indian grouping and at most `decimals` decimals.
pub fn format_currency_with(amount: f64, decimals: u8) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let magnitude = format_number(amount.abs(), decimals);
    if amount < 0.0 {
        format!("-\u{20B9}{magnitude}")
    } else {
        format!("\u{20B9}{magnitude}")
    }
}

/// Number with Indian grouping and at most `decimals` decimals.
pub fn format_number(value: f64, decimals: u8) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.*}", usize::from(decimals), value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (unsigned, None),
    };
    let grouped = group_indian(int_part);
    match frac_part
        .map(|frac| frac.trim_end_matches('0'))
        .filter(|frac| !frac.is_empty())
    {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Percentage with exactly `decimals` decimals and a trailing `%`.
pub fn format_percentage(value: f64, decimals: u8) -> String {
    format!("{:.*}%", usize::from(decimals), value)
}

/// Indian digit grouping: the last three digits form one group, everything
/// above them groups in twos.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (next, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = next;
    }
    pairs.push(rest);
    pairs.reverse();
    let mut grouped = pairs.join(",");
    grouped.push(',');
    grouped.push_str(tail);
    grouped
}
