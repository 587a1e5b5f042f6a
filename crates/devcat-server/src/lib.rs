//! Wiring for the developer catalog server: configuration and the
//! application router.

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::Router;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, builder::DefaultState};
use devcat_core::{DeveloperService, DeveloperStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `DEVCAT_*` environment variables.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// SQLite database file; `:memory:` keeps everything in RAM.
  pub store_path: PathBuf,
}

impl ServerConfig {
  /// Load configuration from `path` (optional) layered under the
  /// environment.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    Self::builder()?
      .add_source(File::from(path).required(false))
      .add_source(Environment::with_prefix("DEVCAT"))
      .build()?
      .try_deserialize()
  }

  /// A builder pre-seeded with the defaults.
  pub fn builder() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
      .set_default("host", "127.0.0.1")?
      .set_default("port", 8080_i64)?
      .set_default("store_path", "devcat.db")
  }

  /// `host:port` for binding.
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  /// `store_path` with a leading `~/` expanded to the user's home directory.
  pub fn resolved_store_path(&self) -> PathBuf { expand_tilde(&self.store_path) }
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application: API routes plus HTTP request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: DeveloperStore + 'static,
{
  let service = Arc::new(DeveloperService::new(store));
  devcat_api::api_router(service).layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode},
  };
  use config::FileFormat;
  use devcat_store_sqlite::SqliteStore;
  use tower::ServiceExt as _;

  #[test]
  fn defaults_apply_without_sources() {
    let cfg: ServerConfig = ServerConfig::builder()
      .unwrap()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg, ServerConfig {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store_path: PathBuf::from("devcat.db"),
    });
    assert_eq!(cfg.address(), "127.0.0.1:8080");
  }

  #[test]
  fn toml_overrides_defaults() {
    let cfg: ServerConfig = ServerConfig::builder()
      .unwrap()
      .add_source(File::from_str(
        "port = 9000\nstore_path = \"/var/lib/devcat.db\"",
        FileFormat::Toml,
      ))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();
    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert_eq!(cfg.store_path, PathBuf::from("/var/lib/devcat.db"));
  }

  #[test]
  fn tilde_is_expanded_only_at_start() {
    let plain = Path::new("data/devcat.db");
    assert_eq!(expand_tilde(plain), plain.to_path_buf());
    assert_eq!(expand_tilde(Path::new("a/~/b")), PathBuf::from("a/~/b"));
    if let Ok(home) = std::env::var("HOME") {
      assert_eq!(
        expand_tilde(Path::new("~/devcat.db")),
        PathBuf::from(home).join("devcat.db")
      );
    }
  }

  #[tokio::test]
  async fn app_serves_api_routes() {
    let store = SqliteStore::open_in_memory().await.unwrap();
    let resp = app(Arc::new(store))
      .oneshot(
        Request::builder()
          .uri("/api/v1/developers")
          .body(Body::empty())
          .unwrap(),
      )
      .await
      .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
