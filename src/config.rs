// Copyright (c) The Diem Core Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::{ChainId, Retry};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, time::Duration};
use thiserror::Error;

pub mod defaults {
    use std::time::Duration;

    pub const MAX_ATTEMPTS: u32 = 5;
    pub const RETRY_DELAY: Duration = Duration::from_millis(200);
    pub const WAIT_DELAY: Duration = Duration::from_millis(200);
    pub const WAIT_TIMEOUT: Duration = Duration::from_secs(60);
    pub const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Error accessing {0}: {1}")]
    IO(String, #[source] std::io::Error),
    #[error("Error deserializing {0}: {1}")]
    Yaml(String, #[source] serde_yaml::Error),
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ClientConfig {
    pub server_url: String,
    pub chain_id: ChainId,
    #[serde(default)]
    pub retry: RetryConfig,
    #[serde(default)]
    pub wait: WaitConfig,
    #[serde(default = "ClientConfig::default_http_request_timeout_ms")]
    pub http_request_timeout_ms: u64,
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RetryConfig {
    pub max_attempts: u32,
    pub delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: defaults::MAX_ATTEMPTS,
            delay_ms: defaults::RETRY_DELAY.as_millis() as u64,
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitConfig {
    pub delay_ms: u64,
    pub timeout_ms: u64,
}

impl Default for WaitConfig {
    fn default() -> Self {
        Self {
            delay_ms: defaults::WAIT_DELAY.as_millis() as u64,
            timeout_ms: defaults::WAIT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl ClientConfig {
    pub fn new<T: Into<String>>(server_url: T, chain_id: ChainId) -> Self {
        Self {
            server_url: server_url.into(),
            chain_id,
            retry: RetryConfig::default(),
            wait: WaitConfig::default(),
            http_request_timeout_ms: Self::default_http_request_timeout_ms(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|err| ConfigError::IO(path.display().to_string(), err))?;
        Self::parse(&contents).map_err(|err| match err {
            ConfigError::Yaml(_, err) => ConfigError::Yaml(path.display().to_string(), err),
            other => other,
        })
    }

    pub fn parse(serialized: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(serialized).map_err(|err| ConfigError::Yaml("config".to_string(), err))
    }

    pub fn retry(&self) -> Retry {
        Retry::new(
            self.retry.max_attempts,
            Duration::from_millis(self.retry.delay_ms),
        )
    }

    pub fn wait_delay(&self) -> Duration {
        Duration::from_millis(self.wait.delay_ms)
    }

    pub fn wait_timeout(&self) -> Duration {
        Duration::from_millis(self.wait.timeout_ms)
    }

    pub fn http_request_timeout(&self) -> Duration {
        Duration::from_millis(self.http_request_timeout_ms)
    }

    fn default_http_request_timeout_ms() -> u64 {
        defaults::HTTP_REQUEST_TIMEOUT.as_millis() as u64
    }
}
