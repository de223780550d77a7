use std::time::Duration;

use chrono_tz::Tz;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | PORT | 8080 | HTTP port |
/// | DATABASE_URL | sqlite:foodie.db | SQLite URL (`sqlite::memory:` allowed) |
/// | ENVIRONMENT | development | development / staging / production |
/// | TIMEZONE | Asia/Kolkata | business time zone |
/// | ADMIN_USERNAME | suryafoodie | admin console login |
/// | ADMIN_PASSWORD | suryaadmin | admin console password |
/// | SESSION_TTL_SECS | 86400 | session lifetime and cookie Max-Age |
/// | AVAILABILITY_INITIAL_DELAY_SECS | 5 | delay before the first scheduled pass |
/// | AVAILABILITY_INTERVAL_SECS | 60 | scheduled pass period |
/// | SEED_DEMO_DATA | true outside production | seed the demo menu into an empty db |
/// | FRONTEND_URL | - | extra allowed CORS origin |
/// | LOG_LEVEL | info | log level |
/// | LOG_DIR | - | directory for daily rolling log files |
///
/// ```ignore
/// PORT=9000 TIMEZONE=UTC cargo run -p foodie-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub http_port: u16,
    pub database_url: String,
    /// development | staging | production
    pub environment: String,
    /// Business time zone used for minute-of-day and day/month boundaries
    pub timezone: Tz,
    pub admin_username: String,
    pub admin_password: String,
    pub session_ttl_secs: u64,
    pub availability_initial_delay_secs: u64,
    pub availability_interval_secs: u64,
    pub seed_demo_data: bool,
    pub frontend_url: Option<String>,
    pub log_level: String,
    pub log_dir: Option<String>,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let is_production = environment == "production";

        let timezone = std::env::var("TIMEZONE")
            .ok()
            .and_then(|tz| match tz.parse::<Tz>() {
                Ok(tz) => Some(tz),
                Err(e) => {
                    tracing::warn!(timezone = %tz, error = %e, "Invalid TIMEZONE, using Asia/Kolkata");
                    None
                }
            })
            .unwrap_or(chrono_tz::Asia::Kolkata);

        Self {
            http_port: env_parse("PORT").unwrap_or(8080),
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:foodie.db".into()),
            timezone,
            admin_username: std::env::var("ADMIN_USERNAME")
                .unwrap_or_else(|_| "suryafoodie".into()),
            admin_password: std::env::var("ADMIN_PASSWORD")
                .unwrap_or_else(|_| "suryaadmin".into()),
            session_ttl_secs: env_parse("SESSION_TTL_SECS").unwrap_or(86_400),
            availability_initial_delay_secs: env_parse("AVAILABILITY_INITIAL_DELAY_SECS")
                .unwrap_or(5),
            availability_interval_secs: env_parse("AVAILABILITY_INTERVAL_SECS")
                .unwrap_or(60)
                .max(1),
            seed_demo_data: env_parse("SEED_DEMO_DATA").unwrap_or(!is_production),
            frontend_url: std::env::var("FRONTEND_URL").ok().filter(|u| !u.is_empty()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            environment,
        }
    }

    /// Override the database and port, keeping everything else from the environment
    ///
    /// Mostly used by tests
    pub fn with_overrides(database_url: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_url = database_url.into();
        config.http_port = http_port;
        config
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_secs)
    }

    pub fn availability_initial_delay(&self) -> Duration {
        Duration::from_secs(self.availability_initial_delay_secs)
    }

    pub fn availability_interval(&self) -> Duration {
        Duration::from_secs(self.availability_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_overrides_replaces_db_and_port() {
        let config = Config::with_overrides("sqlite::memory:", 0);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.http_port, 0);
        assert!(config.availability_interval_secs >= 1);
    }

    #[test]
    fn test_environment_helpers() {
        let mut config = Config::with_overrides("sqlite::memory:", 0);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());
    }
}
