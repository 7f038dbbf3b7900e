//! Process configuration, loaded from environment variables.

use thiserror::Error;

const DEFAULT_MAILBOX_CAPACITY: usize = 32;
const DEFAULT_PAYMENT_LIMIT: i32 = 3;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: String, value: String },
}

/// Settings for the order system.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    /// Capacity of the order service mailbox.
    pub mailbox_capacity: usize,
    /// Stock loaded into the in-memory inventory at startup.
    pub initial_stock: Vec<(String, i32)>,
    /// Largest per-order quantity the payment processor approves.
    pub payment_limit: i32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
            initial_stock: vec![("laptop".to_string(), 10), ("monitor".to_string(), 5)],
            payment_limit: DEFAULT_PAYMENT_LIMIT,
        }
    }
}

impl SystemConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `ORDER_MAILBOX_CAPACITY`, `ORDER_INITIAL_STOCK` and
    /// `ORDER_PAYMENT_LIMIT`. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mailbox_capacity = match lookup("ORDER_MAILBOX_CAPACITY") {
            Some(value) => parse_positive("ORDER_MAILBOX_CAPACITY", &value)?,
            None => defaults.mailbox_capacity,
        };

        let initial_stock = match lookup("ORDER_INITIAL_STOCK") {
            Some(value) => parse_stock(&value)?,
            None => defaults.initial_stock,
        };

        let payment_limit = match lookup("ORDER_PAYMENT_LIMIT") {
            Some(value) => value
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid("ORDER_PAYMENT_LIMIT", &value))?,
            None => defaults.payment_limit,
        };

        Ok(Self {
            mailbox_capacity,
            initial_stock,
            payment_limit,
        })
    }
}

fn invalid(var: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value: value.to_string(),
    }
}

fn parse_positive(var: &str, value: &str) -> Result<usize, ConfigError> {
    match value.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid(var, value)),
    }
}

/// Parses `product=qty` pairs separated by commas. Empty input means no stock.
fn parse_stock(value: &str) -> Result<Vec<(String, i32)>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<(String, i32), ConfigError> {
            let (product, qty) = entry
                .split_once('=')
                .ok_or_else(|| invalid("ORDER_INITIAL_STOCK", entry))?;
            let product = product.trim();
            let qty = qty
                .trim()
                .parse::<i32>()
                .map_err(|_| invalid("ORDER_INITIAL_STOCK", entry))?;
            if product.is_empty() || qty < 0 {
                return Err(invalid("ORDER_INITIAL_STOCK", entry));
            }
            Ok((product.to_string(), qty))
        })
        .collect()
}
