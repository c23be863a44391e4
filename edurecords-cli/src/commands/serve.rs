//! HTTP server command
//!
//! Opens the record store and runs the API until Ctrl+C/SIGTERM.
//! Every setting is read here, from flags with env fallbacks.

use std::net::{IpAddr, SocketAddr};

use anyhow::{Context, Result};
use clap::Parser;

use edurecords_server::db::DEFAULT_MAX_CONNECTIONS;
use edurecords_server::http::server::DEFAULT_PORT;
use edurecords_server::service::{MissingRecordPolicy, BEST_SCORE_THRESHOLD};
use edurecords_server::{serve, ServerConfig, StoreConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Database URL (PostgreSQL)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum PostgreSQL pool connections
    #[arg(long, env = "DATABASE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep records in memory instead of PostgreSQL (lost on exit).
    /// Takes precedence over --database-url.
    #[arg(long)]
    pub memory: bool,

    /// Allowed CORS origins, comma separated (default: any origin)
    #[arg(long = "cors-origin", env = "CORS_ORIGINS", value_delimiter = ',')]
    pub cors_origins: Vec<String>,

    /// Minimum for all three scores in /bestScore
    #[arg(long, env = "BEST_SCORE_THRESHOLD", default_value_t = BEST_SCORE_THRESHOLD)]
    pub best_score_threshold: i32,

    /// Answer for update/delete of unknown ids: lenient or strict
    #[arg(long, env = "MISSING_RECORD_POLICY", default_value = "lenient")]
    pub missing_policy: MissingRecordPolicy,
}

impl ServeArgs {
    fn store_config(&self) -> Result<StoreConfig> {
        if self.memory {
            return Ok(StoreConfig::Memory);
        }

        let database_url = self
            .database_url
            .clone()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, or pass --memory")?;

        Ok(StoreConfig::Postgres {
            database_url,
            max_connections: self.max_connections,
        })
    }

    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_origins: self
                .cors_origins
                .iter()
                .map(|o| o.trim().to_owned())
                .filter(|o| !o.is_empty())
                .collect(),
            best_score_threshold: self.best_score_threshold,
            missing_policy: self.missing_policy,
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store = args.store_config()?;
    let config = args.server_config();

    tracing::info!("Starting edurecords server on {}", config.bind_addr);

    // Run server (blocks until shutdown)
    serve(store, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> ServeArgs {
        let mut argv = vec!["serve"];
        argv.extend_from_slice(args);
        ServeArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn memory_store_needs_no_url() {
        let args = parse(&["--memory"]);
        assert!(matches!(args.store_config().unwrap(), StoreConfig::Memory));
    }

    #[test]
    fn flags_map_onto_server_config() {
        let args = parse(&[
            "--memory",
            "--host",
            "127.0.0.1",
            "--port",
            "4000",
            "--cors-origin",
            "http://localhost:5173,http://localhost:3000",
            "--best-score-threshold",
            "90",
            "--missing-policy",
            "strict",
        ]);
        let config = args.server_config();

        assert_eq!(config.bind_addr, "127.0.0.1:4000".parse().unwrap());
        assert_eq!(config.cors_origins.len(), 2);
        assert_eq!(config.best_score_threshold, 90);
        assert_eq!(config.missing_policy, MissingRecordPolicy::Strict);
    }

    #[test]
    fn defaults_match_server_defaults() {
        let config = parse(&["--memory"]).server_config();
        let defaults = ServerConfig::default();

        assert_eq!(config.bind_addr, defaults.bind_addr);
        assert_eq!(config.best_score_threshold, defaults.best_score_threshold);
        assert_eq!(config.missing_policy, defaults.missing_policy);
    }

    #[test]
    fn memory_wins_over_database_url() {
        let args = parse(&["--memory", "--database-url", "postgres://localhost/edurecords"]);
        assert!(matches!(args.store_config().unwrap(), StoreConfig::Memory));
    }

    #[test]
    fn database_url_selects_postgres() {
        let args = parse(&[
            "--database-url",
            "postgres://localhost/edurecords",
            "--max-connections",
            "12",
        ]);
        match args.store_config().unwrap() {
            StoreConfig::Postgres {
                database_url,
                max_connections,
            } => {
                assert_eq!(database_url, "postgres://localhost/edurecords");
                assert_eq!(max_connections, 12);
            }
            other => panic!("unexpected store {:?}", other),
        }
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let result = ServeArgs::try_parse_from(["serve", "--missing-policy", "loose"]);
        assert!(result.is_err());
    }
}
