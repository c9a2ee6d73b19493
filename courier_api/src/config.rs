use std::path::PathBuf;

use courier_routing::json::REFERENCE_DATA_ENV_VAR;

pub const BIND_ADDRESS_ENV_VAR: &str = "COURIER_BIND_ADDRESS";

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8000";

#[derive(Debug, PartialEq)]
pub struct ApiConfig {
    pub bind_address: String,
    /// Built-in tables are used when unset.
    pub reference_data: Option<PathBuf>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        ApiConfig {
            bind_address: non_empty(BIND_ADDRESS_ENV_VAR)
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_owned()),
            reference_data: non_empty(REFERENCE_DATA_ENV_VAR).map(PathBuf::from),
        }
    }
}
