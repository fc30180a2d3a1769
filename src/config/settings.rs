//! Engine settings
//!
//! All thresholds the normalization engine uses live here with the legacy
//! defaults, so deployments with different charts of accounts or longer
//! entity names can adjust them without code changes. The tool is stateless;
//! settings are read from an explicit JSON file when one is given and
//! default otherwise.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{VoucherError, VoucherResult};

/// Handling of ledger rows where debit and credit are both non-zero.
///
/// Such rows are usually data-entry errors in the export; which repair is
/// right depends on the books, so it is a configuration choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BothSidesPolicy {
    /// Keep the row unchanged (legacy behavior)
    #[default]
    Passthrough,
    /// Discard the row entirely
    Drop,
    /// Zero the smaller of the two sides
    Larger,
}

/// Engine settings with the legacy defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Account substrings that mark a cash-on-hand leg
    #[serde(default = "default_cash_markers")]
    pub cash_markers: Vec<String>,

    /// Longest accepted counterparty name from account text, in chars
    #[serde(default = "default_name_max_chars")]
    pub name_max_chars: usize,

    /// Longest summary returned verbatim as a counterparty, in chars
    #[serde(default = "default_summary_max_chars")]
    pub summary_max_chars: usize,

    /// Truncation length for over-long summaries, in chars
    #[serde(default = "default_summary_truncate_chars")]
    pub summary_truncate_chars: usize,

    /// What to do with rows carrying both a debit and a credit amount
    #[serde(default)]
    pub both_sides_policy: BothSidesPolicy,

    /// Opt-in strictness: fail when a narrow table matches no known header
    /// instead of degrading to positional mapping
    #[serde(default)]
    pub strict_schema: bool,

    /// Day of month for receipt document dates
    #[serde(default = "default_receipt_day")]
    pub receipt_day: u32,

    /// Day of month for payment voucher document dates
    #[serde(default = "default_payment_day")]
    pub payment_day: u32,
}

fn default_cash_markers() -> Vec<String> {
    vec!["1001".to_string(), "库存现金".to_string()]
}

fn default_name_max_chars() -> usize {
    10
}

fn default_summary_max_chars() -> usize {
    15
}

fn default_summary_truncate_chars() -> usize {
    12
}

fn default_receipt_day() -> u32 {
    1
}

fn default_payment_day() -> u32 {
    15
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cash_markers: default_cash_markers(),
            name_max_chars: default_name_max_chars(),
            summary_max_chars: default_summary_max_chars(),
            summary_truncate_chars: default_summary_truncate_chars(),
            both_sides_policy: BothSidesPolicy::default(),
            strict_schema: false,
            receipt_day: default_receipt_day(),
            payment_day: default_payment_day(),
        }
    }
}

impl Settings {
    /// Load settings from a JSON file
    pub fn load(path: &Path) -> VoucherResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| VoucherError::Config(format!("cannot read {}: {}", path.display(), e)))?;
        let settings: Settings = serde_json::from_str(&content)
            .map_err(|e| VoucherError::Config(format!("invalid settings file: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file if a path was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> VoucherResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Basic sanity checks on configured values
    pub fn validate(&self) -> VoucherResult<()> {
        if self.cash_markers.is_empty() {
            return Err(VoucherError::Config(
                "cash_markers must contain at least one marker".into(),
            ));
        }
        if !(1..=28).contains(&self.receipt_day) || !(1..=28).contains(&self.payment_day) {
            return Err(VoucherError::Config(
                "receipt_day and payment_day must be between 1 and 28".into(),
            ));
        }
        Ok(())
    }

    /// Check whether an account string marks a cash leg
    pub fn is_cash_account(&self, account: &str) -> bool {
        self.cash_markers.iter().any(|m| account.contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.cash_markers, vec!["1001", "库存现金"]);
        assert_eq!(s.name_max_chars, 10);
        assert_eq!(s.summary_max_chars, 15);
        assert_eq!(s.summary_truncate_chars, 12);
        assert_eq!(s.both_sides_policy, BothSidesPolicy::Passthrough);
        assert!(!s.strict_schema);
        assert_eq!(s.receipt_day, 1);
        assert_eq!(s.payment_day, 15);
    }

    #[test]
    fn test_is_cash_account() {
        let s = Settings::default();
        assert!(s.is_cash_account("1001 库存现金"));
        assert!(s.is_cash_account("100101 现金-库存现金"));
        assert!(!s.is_cash_account("2241 其他应付款-张三"));
    }

    #[test]
    fn test_partial_json_gets_defaults() {
        let s: Settings = serde_json::from_str(r#"{"cash_markers": ["1001", "101"]}"#).unwrap();
        assert_eq!(s.cash_markers, vec!["1001", "101"]);
        assert_eq!(s.name_max_chars, 10);
        assert_eq!(s.both_sides_policy, BothSidesPolicy::Passthrough);
    }

    #[test]
    fn test_validate_rejects_empty_markers() {
        let s = Settings {
            cash_markers: vec![],
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_day() {
        let s = Settings {
            payment_day: 31,
            ..Default::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_path() {
        let s = Settings::load_or_default(None).unwrap();
        assert!(s.is_cash_account("1001"));
    }
}
