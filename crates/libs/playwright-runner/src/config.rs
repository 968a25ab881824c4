//! Runner configuration read from `RUNNER_` prefixed variables.

use std::{collections::HashMap, path::PathBuf};

use runner_scraper::StoreParams;

use crate::prelude::*;

/// Prefix shared by every configuration variable.
pub const ENV_PREFIX: &str = "RUNNER_";

/// Bucket used when `RUNNER_BUCKET` is not set.
pub const DEFAULT_BUCKET: &str = "test-artifacts";

/// Runner configuration, loaded once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    /// `RUNNER_ENDPOINT`
    pub endpoint: String,
    /// `RUNNER_ACCESSKEYID`
    pub access_key_id: String,
    /// `RUNNER_SECRETACCESSKEY`
    pub secret_access_key: String,
    /// `RUNNER_LOCATION`
    pub location: String,
    /// `RUNNER_TOKEN`
    pub token: String,
    /// `RUNNER_SSL`
    pub ssl: bool,
    /// `RUNNER_SCRAPPERENABLED`
    pub scraper_enabled: bool,
    /// `RUNNER_DATADIR`
    pub datadir: PathBuf,
    /// `RUNNER_BUCKET`, optional
    pub bucket: String,
}

impl Params {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(std::env::vars())
    }

    /// Load the configuration from arbitrary name/value pairs.
    ///
    /// Every variable except `RUNNER_BUCKET` is required. Booleans accept
    /// `1`, `t`, `T`, `TRUE`, `true`, `True` and their false counterparts.
    pub fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let required = |name: &str| -> Result<String> {
            let key = format!("{ENV_PREFIX}{name}");
            vars.get(&key).cloned().ok_or(Error::MissingVar(key))
        };
        let boolean = |name: &str| -> Result<bool> {
            let value = required(name)?;
            parse_bool(&value).ok_or_else(|| Error::InvalidBool {
                var: format!("{ENV_PREFIX}{name}"),
                value,
            })
        };

        Ok(Self {
            endpoint: required("ENDPOINT")?,
            access_key_id: required("ACCESSKEYID")?,
            secret_access_key: required("SECRETACCESSKEY")?,
            location: required("LOCATION")?,
            token: required("TOKEN")?,
            ssl: boolean("SSL")?,
            scraper_enabled: boolean("SCRAPPERENABLED")?,
            datadir: PathBuf::from(required("DATADIR")?),
            bucket: vars
                .get(&format!("{ENV_PREFIX}BUCKET"))
                .filter(|bucket| !bucket.is_empty())
                .cloned()
                .unwrap_or_else(|| String::from(DEFAULT_BUCKET)),
        })
    }

    /// Artifact store settings.
    pub fn store_params(&self) -> StoreParams {
        StoreParams {
            endpoint: self.endpoint.clone(),
            access_key_id: self.access_key_id.clone(),
            secret_access_key: self.secret_access_key.clone(),
            location: self.location.clone(),
            token: self.token.clone(),
            ssl: self.ssl,
            bucket: self.bucket.clone(),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
