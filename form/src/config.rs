use std::{env, fmt::Display, str::FromStr};

use reqwest::Url;
use tracing::{info, warn};

use crate::error::FormError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/predict";

pub struct Config {
    pub endpoint: Url,
}

impl Config {
    pub fn load() -> Result<Self, FormError> {
        Ok(Self {
            endpoint: try_load("PREDICT_URL", DEFAULT_ENDPOINT)?,
        })
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self, FormError> {
        Ok(Self {
            endpoint: parse("--endpoint", endpoint)?,
        })
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        info!("{key} not set, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, FormError>
where
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|_| default.to_string());

    parse(key, &value)
}

fn parse<T: FromStr>(key: &str, value: &str) -> Result<T, FormError>
where
    T::Err: Display,
{
    value.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");

        FormError::Config(format!("{key}={value}: {e}"))
    })
}
