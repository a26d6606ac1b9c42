//! Environment configuration.

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::domain::aggregates::CheckoutPolicy;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    File,
    /// Nothing survives a restart.
    Memory,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub backend: Backend,
    pub data_dir: PathBuf,
    pub checkout: CheckoutPolicy,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Self { port: 8083, backend: Backend::File, data_dir: PathBuf::from("./data"), checkout: CheckoutPolicy::default() }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> { Self::from_lookup(|var| std::env::var(var).ok()) }

    /// Builds a config from any variable source; unset variables keep their defaults.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let backend = match lookup("STORE_BACKEND") {
            None => defaults.backend,
            Some(v) => match v.to_ascii_lowercase().as_str() {
                "file" => Backend::File,
                "memory" => Backend::Memory,
                _ => return Err(ConfigError::Invalid { var: "STORE_BACKEND", value: v }),
            },
        };
        Ok(Self {
            port: parse(&lookup, "PORT", defaults.port)?,
            backend,
            data_dir: lookup("STORE_DATA_DIR").map(PathBuf::from).unwrap_or(defaults.data_dir),
            checkout: CheckoutPolicy {
                shipping_flat_rate: parse_amount(&lookup, "SHIPPING_FLAT_RATE", defaults.checkout.shipping_flat_rate)?,
                free_shipping_threshold: parse_amount(&lookup, "FREE_SHIPPING_THRESHOLD", defaults.checkout.free_shipping_threshold)?,
                cod_fee: parse_amount(&lookup, "COD_FEE", defaults.checkout.cod_fee)?,
            },
        })
    }
}

fn parse<T: FromStr, F: Fn(&str) -> Option<String>>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_amount<F: Fn(&str) -> Option<String>>(lookup: &F, var: &'static str, default: Decimal) -> Result<Decimal, ConfigError> {
    let amount: Decimal = parse(lookup, var, default)?;
    if amount.is_sign_negative() {
        return Err(ConfigError::Invalid { var, value: amount.to_string() });
    }
    Ok(amount)
}
