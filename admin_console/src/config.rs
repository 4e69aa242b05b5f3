use std::str::FromStr;

use anyhow::Context;
use laundry_service_client::DEFAULT_BASE_URL;

/// Where the console is running; selects the telemetry output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "local" => Ok(Environment::Local),
            "production" | "prod" => Ok(Environment::Production),
            other => anyhow::bail!("unknown environment {other:?}"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the dashboard backend.
    pub api_base_url: String,

    /// The environment we are in.
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let api_base_url =
            std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let environment = std::env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse::<Environment>()
            .context("APP_ENV must be one of: local, production")?;

        Ok(Config {
            api_base_url,
            environment,
        })
    }
}
