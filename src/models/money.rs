//! Money type for representing currency amounts
//!
//! Internally stores amounts in fen (i64, hundredths of a yuan) to avoid
//! floating-point precision issues. Exact integer storage matters here:
//! voucher amounts are compared against zero and spelled out digit-by-digit
//! as capital numerals, neither of which tolerates float rounding.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as fen (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from fen
    ///
    /// # Examples
    /// ```
    /// use voucher_cli::models::Money;
    /// let amount = Money::from_fen(1050); // ¥10.50
    /// ```
    pub const fn from_fen(fen: i64) -> Self {
        Self(fen)
    }

    /// Create a Money amount from whole yuan
    pub const fn from_yuan(yuan: i64) -> Self {
        Self(yuan * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in fen
    pub const fn fen(&self) -> i64 {
        self.0
    }

    /// Get the whole yuan portion (truncated toward zero)
    pub const fn yuan(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fen portion (0-99)
    pub const fn fen_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Parse a monetary amount from a ledger cell.
    ///
    /// Accepts the formats seen in real bookkeeping exports: "1000",
    /// "1,000.50", "¥1000.5", "-35.20", "(35.20)" (accounting negative).
    /// Fractional digits beyond the second are rounded half-up.
    ///
    /// Returns `None` for text that is not an amount at all; callers in the
    /// normalization pipeline treat that as absent data, not an error.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        // Strip currency symbols and thousands separators
        let cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, ',' | '¥' | '￥' | '$' | ' '))
            .collect();

        // Accounting format: parentheses mean negative
        let (negative, body) = if cleaned.starts_with('(') && cleaned.ends_with(')') {
            (true, &cleaned[1..cleaned.len() - 1])
        } else if let Some(stripped) = cleaned.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, cleaned.as_str())
        };

        // Only digits and a decimal point may remain
        if body.is_empty() || !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return None;
        }

        let fen = match body.split_once('.') {
            Some((whole, frac)) => {
                if !frac.chars().all(|c| c.is_ascii_digit()) {
                    return None;
                }
                let yuan: i64 = if whole.is_empty() {
                    0
                } else {
                    whole.parse().ok()?
                };
                // Normalize the fractional digits to exactly two, rounding
                // half-up on the third
                let mut digits: Vec<u32> = frac.chars().filter_map(|c| c.to_digit(10)).collect();
                while digits.len() < 2 {
                    digits.push(0);
                }
                let mut frac_fen = (digits[0] * 10 + digits[1]) as i64;
                if digits.len() > 2 && digits[2] >= 5 {
                    frac_fen += 1;
                }
                yuan.checked_mul(100)?.checked_add(frac_fen)?
            }
            None => {
                let yuan: i64 = body.parse().ok()?;
                yuan.checked_mul(100)?
            }
        };

        Some(Self(if negative { -fen } else { fen }))
    }

    /// Plain decimal rendering without a currency symbol ("1050.00")
    pub fn to_decimal_string(&self) -> String {
        if self.is_negative() {
            format!("-{}.{:02}", self.yuan().abs(), self.fen_part())
        } else {
            format!("{}.{:02}", self.yuan(), self.fen_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-¥{}.{:02}", self.yuan().abs(), self.fen_part())
        } else {
            write!(f, "¥{}.{:02}", self.yuan(), self.fen_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}
