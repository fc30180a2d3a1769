//! Capital-numeral amount rendering
//!
//! Converts a monetary amount into the fraud-resistant written form used on
//! formal financial documents (大写金额): "壹万贰仟叁佰肆拾伍元陆角柒分".
//! The integer part is rendered in four-digit groups with 万/亿 suffixes;
//! the fractional part renders the jiao and fen digits, omitting either
//! when zero. Works on exact fen so no float rounding can creep in.

use crate::models::Money;

const DIGITS: [&str; 10] = ["零", "壹", "贰", "叁", "肆", "伍", "陆", "柒", "捌", "玖"];
const UNITS: [&str; 4] = ["", "拾", "佰", "仟"];
const BIG_UNITS: [&str; 4] = ["", "万", "亿", "万亿"];

/// Render one 4-digit group. `digits` is most-significant-first with no
/// padding (the leading group may be short).
fn render_group(digits: &[u8]) -> String {
    let mut out = String::new();
    let mut pending_zero = false;

    for (j, &digit) in digits.iter().enumerate() {
        let unit_pos = digits.len() - j - 1;
        if digit == 0 {
            pending_zero = true;
            continue;
        }
        if pending_zero {
            out.push_str(DIGITS[0]);
            pending_zero = false;
        }
        // A leading "壹拾" reads as just "拾"
        if !(digit == 1 && unit_pos == 1 && j == 0) {
            out.push_str(DIGITS[digit as usize]);
        }
        out.push_str(UNITS[unit_pos]);
    }

    out
}

/// Render the integer yuan part, grouped by ten-thousands
fn render_integer(yuan: i64) -> String {
    if yuan == 0 {
        return DIGITS[0].to_string();
    }

    // Split into 4-digit groups, most significant first
    let mut groups: Vec<Vec<u8>> = Vec::new();
    let mut remaining = yuan;
    while remaining > 0 {
        let mut group = Vec::with_capacity(4);
        let chunk = remaining % 10_000;
        remaining /= 10_000;
        let mut value = chunk;
        loop {
            group.insert(0, (value % 10) as u8);
            value /= 10;
            if value == 0 {
                break;
            }
        }
        // Inner groups keep leading zeros so zero runs render correctly
        if remaining > 0 {
            while group.len() < 4 {
                group.insert(0, 0);
            }
        }
        groups.insert(0, group);
    }

    let mut out = String::new();
    let group_count = groups.len();
    for (i, group) in groups.iter().enumerate() {
        let rendered = render_group(group);
        if !rendered.is_empty() {
            out.push_str(&rendered);
            if i < group_count - 1 {
                out.push_str(BIG_UNITS.get(group_count - i - 1).copied().unwrap_or(""));
            }
        }
    }

    if out.is_empty() {
        DIGITS[0].to_string()
    } else {
        out
    }
}

/// Convert an amount into its capital-numeral written form.
///
/// Total over any Money value: zero renders as "零元整", negative amounts
/// render the absolute value with a leading "负".
pub fn to_capital(amount: Money) -> String {
    if amount.is_negative() {
        return format!("负{}", to_capital(amount.abs()));
    }
    if amount.is_zero() {
        return "零元整".to_string();
    }

    let integer = render_integer(amount.yuan());

    let fen_total = amount.fen_part();
    let (jiao, fen) = (fen_total / 10, fen_total % 10);
    let mut fraction = String::new();
    if jiao > 0 {
        fraction.push_str(DIGITS[jiao as usize]);
        fraction.push('角');
    }
    if fen > 0 {
        fraction.push_str(DIGITS[fen as usize]);
        fraction.push('分');
    }

    let mut result = if fraction.is_empty() {
        format!("{}元整", integer)
    } else {
        format!("{}元{}", integer, fraction)
    };

    // Post-processing: collapse doubled zeros, drop a zero directly before
    // the yuan word, fold 零万/零亿, trim a trailing zero
    while result.contains("零零") {
        result = result.replace("零零", "零");
    }
    if let Some(rest) = result.strip_prefix("零元") {
        result = format!("元{}", rest);
    }
    result = result.replace("零万", "万").replace("零亿", "亿");
    if let Some(stripped) = result.strip_suffix('零') {
        result = stripped.to_string();
    }

    result
}
