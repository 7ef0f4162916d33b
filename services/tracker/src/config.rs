use serde::Deserialize;

use octofit_core::config::Config;

/// Tracker service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct TrackerConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// Bind address for the HTTP server (default 0.0.0.0). Env var: `TRACKER_HOST`.
    #[serde(default = "default_host")]
    pub tracker_host: String,
    /// TCP port for the HTTP server (default 8000). Env var: `TRACKER_PORT`.
    #[serde(default = "default_port")]
    pub tracker_port: u16,
}

impl Config for TrackerConfig {}

impl TrackerConfig {
    pub fn http_addr(&self) -> String {
        format!("{}:{}", self.tracker_host, self.tracker_port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    8000
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn should_default_host_and_port() {
        let config: TrackerConfig =
            envy::from_iter(vars(&[("DATABASE_URL", "postgres://localhost/octofit")])).unwrap();
        assert_eq!(config.database_url, "postgres://localhost/octofit");
        assert_eq!(config.http_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn should_read_host_and_port_overrides() {
        let config: TrackerConfig = envy::from_iter(vars(&[
            ("DATABASE_URL", "postgres://db/octofit"),
            ("TRACKER_HOST", "127.0.0.1"),
            ("TRACKER_PORT", "9090"),
        ]))
        .unwrap();
        assert_eq!(config.http_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_require_database_url() {
        let result: Result<TrackerConfig, _> = envy::from_iter(vars(&[("TRACKER_PORT", "9090")]));
        assert!(result.is_err());
    }
}
