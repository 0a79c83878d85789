use ethers::types::U256;
use std::fmt;
use std::str::FromStr;

/// Number of fractional digits used by the pool tokens.
pub const TOKEN_DECIMALS: usize = 18;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount is empty")]
    Empty,

    #[error("'{0}' is not a decimal number")]
    Malformed(String),

    #[error("amount must be greater than zero")]
    Zero,

    #[error("'{0}' has more than 18 fractional digits")]
    PrecisionLoss(String),

    #[error("'{0}' is too large")]
    Overflow(String),
}

/// A positive token quantity, kept both as canonical decimal text and as
/// the 18-decimal integer placed in call data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Amount {
    text: String,
    base_units: U256,
}

impl Amount {
    /// Parse a `digits[.digits]` literal. Trailing fractional zeros are
    /// ignored when counting precision, so `1.5000000000000000000` is exact.
    pub fn parse(input: &str) -> Result<Self, AmountError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(AmountError::Empty);
        }

        let (integer, fraction) = match input.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (input, None),
        };

        if !is_digits(integer) || fraction.is_some_and(|f| !is_digits(f)) {
            return Err(AmountError::Malformed(input.to_string()));
        }

        let fraction = fraction.unwrap_or("").trim_end_matches('0');
        if fraction.len() > TOKEN_DECIMALS {
            return Err(AmountError::PrecisionLoss(input.to_string()));
        }

        let digits = format!("{integer}{fraction:0<width$}", width = TOKEN_DECIMALS);
        let base_units =
            U256::from_dec_str(&digits).map_err(|_| AmountError::Overflow(input.to_string()))?;

        Self::from_base_units(base_units)
    }

    /// Build an amount from its on-chain integer representation.
    pub fn from_base_units(base_units: U256) -> Result<Self, AmountError> {
        if base_units.is_zero() {
            return Err(AmountError::Zero);
        }

        Ok(Self {
            text: format_base_units(base_units),
            base_units,
        })
    }

    pub fn base_units(&self) -> U256 {
        self.base_units
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn format_base_units(value: U256) -> String {
    let digits = format!("{:0>width$}", value.to_string(), width = TOKEN_DECIMALS + 1);
    let (integer, fraction) = digits.split_at(digits.len() - TOKEN_DECIMALS);
    let fraction = fraction.trim_end_matches('0');

    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{integer}.{fraction}")
    }
}
