//! # Configuration State
//!
//! Terminal configuration fixed at startup.
//!
//! Read-only after initialization, so no mutex is needed. If hot
//! reloading is added later, wrap it in `RwLock`.

use serde::{Deserialize, Serialize};

use lumi_core::types::TaxRate;
use lumi_core::DEFAULT_TAX_RATE_BPS;

/// Terminal configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed on receipts)
    pub store_name: String,

    /// Cashier shown in the header badge
    pub cashier_name: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Tax rate in basis points, applied to the discounted subtotal.
    /// 800 = the 8% default.
    pub tax_rate_bps: u32,
}

impl Default for ConfigState {
    /// Returns the development defaults.
    fn default() -> Self {
        ConfigState {
            store_name: "LumiMart".to_string(),
            cashier_name: "John Doe".to_string(),
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            tax_rate_bps: DEFAULT_TAX_RATE_BPS,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `LUMI_STORE_NAME`: Override store name
    /// - `LUMI_CASHIER`: Override cashier name
    /// - `LUMI_TAX_RATE`: Override tax rate as a percentage (e.g., "8.25")
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(store_name) = std::env::var("LUMI_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(cashier) = std::env::var("LUMI_CASHIER") {
            config.cashier_name = cashier;
        }

        if let Ok(tax_rate_str) = std::env::var("LUMI_TAX_RATE") {
            if let Ok(rate) = tax_rate_str.parse::<f64>() {
                config.tax_rate_bps = (rate * 100.0).round() as u32;
            }
        }

        config
    }

    /// The configured tax rate as a core type.
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_bps(self.tax_rate_bps)
    }

    /// Formats a cent amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{}{}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.tax_rate_bps, 800);
        assert_eq!(config.tax_rate(), TaxRate::from_bps(800));
        assert_eq!(config.store_name, "LumiMart");
    }

    #[test]
    fn test_format_currency_positive() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(1234), "$12.34");
        assert_eq!(config.format_currency(100), "$1.00");
        assert_eq!(config.format_currency(1), "$0.01");
        assert_eq!(config.format_currency(0), "$0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-1234), "-$12.34");
    }
}
