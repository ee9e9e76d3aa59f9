//! # Currency Formatting
//!
//! Renders [`Money`] as the string the cart screen shows.
//!
//! ```text
//! Money(62892) ──► CurrencyFormat::format ──► "$628.92"
//! Money(123456789) ─────────────────────────► "$1,234,567.89"
//! ```
//!
//! The fraction always has exactly two digits. Symbol and separators come
//! from configuration (`[currency]` section); the default is en-US.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::money::Money;

/// Locale-dependent pieces of a currency string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    /// Prefix symbol (`$`, `€`, `£`).
    #[serde(default = "default_symbol")]
    pub symbol: String,

    /// Separator between whole units and cents.
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,

    /// Thousands separator. Empty disables grouping.
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: String,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_decimal_separator() -> String {
    ".".to_string()
}

fn default_grouping_separator() -> String {
    ",".to_string()
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        CurrencyFormat {
            symbol: default_symbol(),
            decimal_separator: default_decimal_separator(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

impl CurrencyFormat {
    /// Formats an amount with the symbol, grouped whole units and two
    /// fraction digits.
    ///
    /// ## Example
    /// ```rust
    /// use onlinestore_core::{CurrencyFormat, Money};
    ///
    /// let fmt = CurrencyFormat::default();
    /// assert_eq!(fmt.format(Money::from_cents(62892)), "$628.92");
    /// assert_eq!(fmt.format(Money::from_cents(-50)), "-$0.50");
    /// ```
    pub fn format(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let whole = group_digits(amount.dollars().unsigned_abs(), &self.grouping_separator);
        format!(
            "{}{}{}{}{:02}",
            sign,
            self.symbol,
            whole,
            self.decimal_separator,
            amount.cents_part()
        )
    }

    /// Checks the separators can be told apart in the output.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.decimal_separator.is_empty() {
            return Err(ValidationError::Required {
                field: "currency.decimal_separator".to_string(),
            });
        }

        if self.decimal_separator == self.grouping_separator {
            return Err(ValidationError::InvalidFormat {
                field: "currency.grouping_separator".to_string(),
                reason: "must differ from the decimal separator".to_string(),
            });
        }

        Ok(())
    }
}

/// Inserts `separator` between every group of three digits, from the right.
fn group_digits(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    if separator.is_empty() {
        return digits;
    }

    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}
