use serde::{Deserialize, Serialize};

use crate::{EngineError, Money};

/// Currency used to *display* amounts.
///
/// Amounts inside the engine are unit-less decimals; choosing a currency never
/// changes a computation, only the symbol and label shown next to a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Thb,
    Cny,
}

impl Currency {
    /// Canonical currency code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Thb => "THB",
            Currency::Cny => "CNY",
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Thb => "฿",
            Currency::Cny => "¥",
        }
    }

    /// Formats an amount as `<symbol><amount>` with two decimals, e.g. `฿12.50`.
    #[must_use]
    pub fn format(self, money: Money) -> String {
        format!("{}{}", self.symbol(), money)
    }
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<&str> for Currency {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Currency::Usd),
            "THB" => Ok(Currency::Thb),
            "CNY" => Ok(Currency::Cny),
            other => Err(EngineError::InvalidInput(format!(
                "unsupported currency: {other}"
            ))),
        }
    }
}

impl core::str::FromStr for Currency {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::try_from(s)
    }
}
