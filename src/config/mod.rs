use anyhow::{anyhow, Result};

mod raw;

const ENV_NAME_API_URL: &str = "FOODIEBABA_API_URL";

/// Resolved at compile time because a browser has no process environment.
const BUILD_ENV_API_URL: Option<&str> = option_env!("FOODIEBABA_API_URL");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: Api,
    pub session: Session,
    pub restaurants: Restaurants,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Api {
    /// Base URL of the backend without trailing slash.
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Key of the persisted identity in the durable store.
    pub storage_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restaurants {
    pub page_size: u32,
}

impl Config {
    pub fn try_from_toml_str(toml: &str) -> Result<Self> {
        let raw_config: raw::Config = toml::from_str(toml)?;
        Self::try_from(raw_config)
    }

    #[must_use]
    pub fn from_build_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Some(url) = BUILD_ENV_API_URL {
            match normalize_base_url(url) {
                Ok(url) => {
                    cfg.api.base_url = url;
                }
                Err(err) => {
                    log::warn!("Ignore {ENV_NAME_API_URL}: {err}");
                }
            }
        }
        cfg
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::try_from(raw::Config::default()).expect("Default configuration")
    }
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            api,
            session,
            restaurants,
        } = from;

        let raw::Api { base_url } = api.unwrap_or_default();
        let api = Api {
            base_url: normalize_base_url(&base_url)?,
        };

        let raw::Session { storage_key } = session.unwrap_or_default();
        if storage_key.trim().is_empty() {
            return Err(anyhow!("Empty session storage key"));
        }
        let session = Session { storage_key };

        let raw::Restaurants { page_size } = restaurants.unwrap_or_default();
        if page_size == 0 {
            return Err(anyhow!("The restaurant page size must be at least 1"));
        }
        let restaurants = Restaurants { page_size };

        Ok(Self {
            api,
            session,
            restaurants,
        })
    }
}

fn normalize_base_url(url: &str) -> Result<String> {
    let url = url.trim().trim_end_matches('/');
    if url.is_empty() {
        return Err(anyhow!("Empty API base URL"));
    }
    Ok(url.to_string())
}
