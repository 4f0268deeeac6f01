//! Static-site host for the built frontend.
//!
//! The page itself is fully static data rendered client-side; this binary
//! only serves the Trunk `dist/` output with an SPA fallback so the site
//! deploys as a single process.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_status::SetStatus;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_STATIC_ROOT: &str = "dist";
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogLevel {
    Debug,
    Info,
}

impl PartialOrd for LogLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LogLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        fn rank(level: LogLevel) -> u8 {
            match level {
                LogLevel::Debug => 0,
                LogLevel::Info => 1,
            }
        }

        rank(*self).cmp(&rank(*other))
    }
}

impl LogLevel {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
        }
    }

    fn from_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            _ => None,
        }
    }
}

#[derive(Clone)]
struct SiteRuntimeConfig {
    port: u16,
    static_root: PathBuf,
    log_level: LogLevel,
}

impl SiteRuntimeConfig {
    fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| parse_port_value(&value))
            .unwrap_or(DEFAULT_PORT);
        let static_root = parse_env_non_empty_string("STATIC_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_ROOT));
        let log_level = parse_env_non_empty_string("LOG_LEVEL")
            .and_then(|value| LogLevel::from_value(&value))
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            port,
            static_root,
            log_level,
        }
    }
}

fn parse_port_value(value: &str) -> Option<u16> {
    value.trim().parse::<u16>().ok().filter(|port| *port != 0)
}

fn parse_env_non_empty_string(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|value| value.as_secs())
        .unwrap_or(0)
}

fn log_event(config: &SiteRuntimeConfig, level: LogLevel, event: &str, fields: serde_json::Value) {
    if level < config.log_level {
        return;
    }

    let mut payload = serde_json::Map::new();
    payload.insert(
        "ts".to_string(),
        serde_json::Value::Number(serde_json::Number::from(now_unix_seconds())),
    );
    payload.insert(
        "level".to_string(),
        serde_json::Value::String(level.as_str().to_string()),
    );
    payload.insert(
        "event".to_string(),
        serde_json::Value::String(event.to_string()),
    );

    if let serde_json::Value::Object(extra) = fields {
        for (key, value) in extra {
            payload.insert(key, value);
        }
    }

    println!("{}", serde_json::Value::Object(payload));
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct HealthPayload {
    ok: bool,
    service: &'static str,
    version: &'static str,
}

async fn healthz(State(config): State<SiteRuntimeConfig>) -> Json<HealthPayload> {
    log_event(
        &config,
        LogLevel::Debug,
        "health_check",
        serde_json::json!({}),
    );

    Json(HealthPayload {
        ok: true,
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}

fn static_site_service(static_root: &Path) -> ServeDir<SetStatus<ServeFile>> {
    let index = static_root.join("index.html");
    ServeDir::new(static_root).not_found_service(ServeFile::new(index))
}

pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SiteRuntimeConfig::from_env();
    let bind_address = format!("0.0.0.0:{}", config.port);

    if !config.static_root.is_dir() {
        log_event(
            &config,
            LogLevel::Info,
            "static_root_missing",
            serde_json::json!({
                "static_root": config.static_root.display().to_string(),
            }),
        );
    }

    let app = Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(static_site_service(&config.static_root))
        .with_state(config.clone());

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    log_event(
        &config,
        LogLevel::Info,
        "server_start",
        serde_json::json!({
            "port": config.port,
            "static_root": config.static_root.display().to_string(),
        }),
    );
    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{parse_port_value, LogLevel};

    #[test]
    fn debug_ranks_below_info() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert_eq!(LogLevel::Info.max(LogLevel::Debug), LogLevel::Info);
    }

    #[test]
    fn log_level_parses_known_values_only() {
        assert_eq!(LogLevel::from_value("debug"), Some(LogLevel::Debug));
        assert_eq!(LogLevel::from_value(" INFO "), Some(LogLevel::Info));
        assert_eq!(LogLevel::from_value("trace"), None);
        assert_eq!(LogLevel::from_value(""), None);
    }

    #[test]
    fn port_values_must_be_valid_and_non_zero() {
        assert_eq!(parse_port_value("8080"), Some(8080));
        assert_eq!(parse_port_value(" 3000 "), Some(3000));
        assert_eq!(parse_port_value("0"), None);
        assert_eq!(parse_port_value("not-a-port"), None);
        assert_eq!(parse_port_value("70000"), None);
    }
}
