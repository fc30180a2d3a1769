//! Counterparty extraction
//!
//! Best-effort inference of the person or entity on the non-cash side of a
//! cash transaction. A cash debit implies an offsetting credit elsewhere
//! (and vice versa), so the opposing leg's account hierarchy usually names
//! the counterparty ("2241 其他应付款-张三"); when it doesn't, the narrative
//! summary is mined for payment keywords.
//!
//! The rules form an ordered chain evaluated front to back, first non-empty
//! result wins. Each rule is an independent function so it can be tested
//! and reordered on its own. No rule guarantees a correct human name, only
//! a plausible short token; that limitation is inherent to the input.

use tracing::debug;

use crate::config::Settings;
use crate::models::{CashClassification, Side, VoucherUnit};

/// Narrative keywords that precede a counterparty name in summaries
const SUMMARY_KEYWORDS: [&str; 12] = [
    "向", "从", "支付", "付", "收", "收到", "借", "还款", "付款", "给", "交", "还",
];

/// Trailing noise words stripped from an extracted name
const TRAILING_NOISE: [&str; 13] = [
    "借款", "款项", "费用", "款", "现金", "金额", "租金", "运费", "包装费", "电费", "社保", "费",
    "利息",
];

/// Truncate to at most `max` chars (CJK text, so bytes won't do)
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Take the last `sep`-delimited segment of the account path, stripped of
/// account-code digits. "2241 其他应付款-张三" → "张三".
fn segment_after(account: &str, sep: char, settings: &Settings) -> Option<String> {
    let (_, last) = account.rsplit_once(sep)?;
    let name = last.trim_matches(|c: char| c.is_ascii_digit() || c.is_whitespace());
    if name.is_empty() || name.chars().count() > settings.name_max_chars {
        return None;
    }
    Some(name.to_string())
}

fn rule_dash_segment(account: &str, settings: &Settings) -> Option<String> {
    segment_after(account, '-', settings)
}

fn rule_slash_segment(account: &str, settings: &Settings) -> Option<String> {
    segment_after(account, '/', settings)
}

/// First whitespace-separated token that is not a bare account code and
/// contains CJK text
fn rule_cjk_token(account: &str, settings: &Settings) -> Option<String> {
    if !account.contains(char::is_whitespace) {
        return None;
    }
    account
        .split_whitespace()
        .find(|tok| !tok.chars().all(|c| c.is_ascii_digit()) && tok.chars().any(is_cjk))
        .map(|tok| truncate_chars(tok, settings.name_max_chars))
}

/// The account-text rule chain, in priority order
const ACCOUNT_RULES: [fn(&str, &Settings) -> Option<String>; 3] =
    [rule_dash_segment, rule_slash_segment, rule_cjk_token];

/// Mine a narrative summary for the counterparty following a payment keyword
fn extract_from_summary(summary: &str, settings: &Settings) -> String {
    for keyword in SUMMARY_KEYWORDS {
        if let Some((_, rest)) = summary.split_once(keyword) {
            let mut name = rest.trim();
            for noise in TRAILING_NOISE {
                if let Some(stripped) = name.strip_suffix(noise) {
                    name = stripped.trim_end();
                }
            }
            if !name.is_empty() {
                return truncate_chars(name, settings.summary_max_chars);
            }
        }
    }

    // No keyword matched: hand back the summary itself, truncated
    if summary.chars().count() <= settings.summary_max_chars {
        summary.to_string()
    } else {
        format!(
            "{}...",
            truncate_chars(summary, settings.summary_truncate_chars)
        )
    }
}

/// Placeholder when nothing at all could be inferred
fn placeholder(side: Side) -> &'static str {
    match side {
        Side::Debit => "未知交款人",
        Side::Credit => "未知领款人",
    }
}

/// Infer the counterparty for a classified cash voucher unit.
///
/// Scans the non-cash legs for the first whose amount opposes the cash
/// side, runs the account rule chain over its account text, then falls
/// back to the cash leg's summary, then to a side-specific placeholder.
pub fn extract(unit: &VoucherUnit, cash: &CashClassification, settings: &Settings) -> String {
    let opposite = cash.side.opposite();

    let opposing_leg = unit.legs.iter().find(|leg| {
        !settings.is_cash_account(leg.account_text()) && leg.amount_on(opposite).is_positive()
    });

    if let Some(leg) = opposing_leg {
        for rule in ACCOUNT_RULES {
            if let Some(name) = rule(leg.account_text(), settings) {
                debug!(
                    "counterparty {:?} from account {:?}",
                    name,
                    leg.account_text()
                );
                return name;
            }
        }
    }

    match cash.leg.summary.as_deref().map(str::trim) {
        Some(summary) if !summary.is_empty() => extract_from_summary(summary, settings),
        _ => placeholder(cash.side).to_string(),
    }
}
