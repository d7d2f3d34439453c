use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::shared::domain::value_objects::MovieProvider;
use crate::shared::errors::{AppError, AppResult};

const DEFAULT_CINEMAWORLD_BASE_URL: &str =
    "https://webjetapitest.azurewebsites.net/api/cinemaworld/";
const DEFAULT_FILMWORLD_BASE_URL: &str = "https://webjetapitest.azurewebsites.net/api/filmworld/";

/// Endpoint settings for one upstream provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderEndpoint {
    pub provider: MovieProvider,
    pub base_url: String,
}

/// Runtime configuration, read from the environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub cinema_world: ProviderEndpoint,
    pub film_world: ProviderEndpoint,
    /// How long a merged movie list stays fresh
    pub cache_ttl: Duration,
    /// Interval of the background sweeper; `None` leaves expiry passive
    pub cache_cleanup_interval: Option<Duration>,
    pub http_timeout: Duration,
    pub max_retries: u32,
    pub retry_base_delay: Duration,
    /// Adds up to 10% random extra to each backoff delay
    pub retry_jitter: bool,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            cinema_world: ProviderEndpoint {
                provider: MovieProvider::CinemaWorld,
                base_url: DEFAULT_CINEMAWORLD_BASE_URL.to_string(),
            },
            film_world: ProviderEndpoint {
                provider: MovieProvider::FilmWorld,
                base_url: DEFAULT_FILMWORLD_BASE_URL.to_string(),
            },
            cache_ttl: Duration::from_secs(30 * 60),
            cache_cleanup_interval: Some(Duration::from_secs(300)),
            http_timeout: Duration::from_secs(30),
            max_retries: 3,
            retry_base_delay: Duration::from_millis(1000),
            retry_jitter: false,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset. Callers load `.env` beforehand.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cinema_world_url = lookup("CINEMAWORLD_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.cinema_world.base_url);
        let film_world_url = lookup("FILMWORLD_BASE_URL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.film_world.base_url);

        let cache_ttl_secs: u64 = parse_var(&lookup, "MOVIES_CACHE_TTL_SECONDS")?
            .unwrap_or(defaults.cache_ttl.as_secs());
        let cleanup_secs: u64 = parse_var(&lookup, "CACHE_CLEANUP_INTERVAL_SECONDS")?
            .unwrap_or(300);
        let timeout_secs: u64 =
            parse_var(&lookup, "HTTP_TIMEOUT_SECONDS")?.unwrap_or(defaults.http_timeout.as_secs());
        let max_retries: u32 =
            parse_var(&lookup, "PROVIDER_MAX_RETRIES")?.unwrap_or(defaults.max_retries);
        let base_delay_ms: u64 = parse_var(&lookup, "PROVIDER_RETRY_BASE_DELAY_MS")?
            .unwrap_or(defaults.retry_base_delay.as_millis() as u64);
        let retry_jitter: bool =
            parse_var(&lookup, "PROVIDER_RETRY_JITTER")?.unwrap_or(defaults.retry_jitter);

        if timeout_secs == 0 {
            return Err(AppError::Configuration(
                "HTTP_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            cinema_world: ProviderEndpoint {
                provider: MovieProvider::CinemaWorld,
                base_url: cinema_world_url,
            },
            film_world: ProviderEndpoint {
                provider: MovieProvider::FilmWorld,
                base_url: film_world_url,
            },
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_cleanup_interval: (cleanup_secs > 0).then(|| Duration::from_secs(cleanup_secs)),
            http_timeout: Duration::from_secs(timeout_secs),
            max_retries,
            retry_base_delay: Duration::from_millis(base_delay_ms),
            retry_jitter,
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    pub fn endpoint(&self, provider: MovieProvider) -> &ProviderEndpoint {
        match provider {
            MovieProvider::CinemaWorld => &self.cinema_world,
            MovieProvider::FilmWorld => &self.film_world,
        }
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> AppResult<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::Configuration(format!("{} has an invalid value '{}'", key, raw))
        }),
    }
}
