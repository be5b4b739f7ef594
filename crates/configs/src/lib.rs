use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Page size bounds for paginated listings.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationConfig {
    #[serde(default = "default_page_limit")]
    pub default_limit: u64,
    #[serde(default = "default_max_page_limit")]
    pub max_limit: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { default_limit: default_page_limit(), max_limit: default_max_page_limit() }
    }
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_page_limit() -> u64 { 10 }
fn default_max_page_limit() -> u64 { 100 }

/// `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file if present, otherwise defaults plus env (`DATABASE_URL`, `SERVER_HOST`, `SERVER_PORT`).
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    /// Only a missing file falls back to env; unreadable or malformed files are errors.
    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_from_file(path) {
            Ok(cfg) => cfg,
            Err(e) if is_missing_file(&e) => AppConfig::from_env(),
            Err(e) => return Err(e.context(format!("failed to load config file {path}"))),
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn from_env() -> Self {
        let mut cfg = AppConfig::default();
        if let Ok(host) = std::env::var("SERVER_HOST") {
            cfg.server.host = host;
        }
        if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
            cfg.server.port = port;
        }
        cfg.server.worker_threads = std::env::var("TOKIO_WORKER_THREADS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok());
        cfg
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // database.url may come from DATABASE_URL
        self.database.normalize_from_env();
        self.database.validate()?;
        self.pagination.validate()?;
        Ok(())
    }
}

fn is_missing_file(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl PaginationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_limit == 0 {
            return Err(anyhow!("pagination.max_limit must be >= 1"));
        }
        if self.default_limit == 0 || self.default_limit > self.max_limit {
            return Err(anyhow!("pagination.default_limit must be in 1..=max_limit"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn db(url: &str) -> DatabaseConfig {
        DatabaseConfig { url: url.into(), ..DatabaseConfig::default() }
    }

    #[test]
    fn parses_full_file() {
        let cfg = parse(
            r#"
            [server]
            host = "0.0.0.0"
            port = 9000
            worker_threads = 2

            [database]
            url = "postgres://u:p@localhost:5432/collections"
            max_connections = 20

            [pagination]
            max_limit = 50
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.worker_threads, Some(2));
        assert_eq!(cfg.database.max_connections, 20);
        assert_eq!(cfg.database.min_connections, 2);
        assert_eq!(cfg.pagination.max_limit, 50);
        assert_eq!(cfg.pagination.default_limit, 10);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let cfg = parse("").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8000);
        assert_eq!(cfg.pagination.default_limit, 10);
        assert_eq!(cfg.pagination.max_limit, 100);
        assert_eq!(cfg.database.acquire_timeout_secs, 30);
    }

    #[test]
    fn database_url_scheme_is_checked() {
        assert!(db("postgres://localhost/x").validate().is_ok());
        assert!(db("PostgreSQL://localhost/x").validate().is_ok());
        assert!(db("mysql://localhost/x").validate().is_err());
        assert!(db("").validate().is_err());
    }

    #[test]
    fn pool_bounds_are_checked() {
        let mut d = db("postgres://localhost/x");
        d.min_connections = 5;
        d.max_connections = 2;
        assert!(d.validate().is_err());
        d.min_connections = 0;
        assert!(d.validate().is_err());
    }

    #[test]
    fn pagination_bounds_are_checked() {
        assert!(PaginationConfig { default_limit: 10, max_limit: 100 }.validate().is_ok());
        assert!(PaginationConfig { default_limit: 0, max_limit: 100 }.validate().is_err());
        assert!(PaginationConfig { default_limit: 200, max_limit: 100 }.validate().is_err());
        assert!(PaginationConfig { default_limit: 1, max_limit: 0 }.validate().is_err());
    }

    fn temp_config(name: &str, content: &str) -> String {
        let path = std::env::temp_dir().join(format!("collections_api_{}_{}.toml", name, std::process::id()));
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn malformed_file_is_an_error_not_a_fallback() {
        let path = temp_config("malformed", "[server\nport = 9000");
        let err = AppConfig::load_or_env_from(&path).unwrap_err();
        assert!(!is_missing_file(&err));
        assert!(err.to_string().contains("failed to load config file"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn only_missing_file_counts_as_absent() {
        let missing = std::env::temp_dir().join("collections_api_does_not_exist.toml");
        let err = load_from_file(&missing.to_string_lossy()).unwrap_err();
        assert!(is_missing_file(&err));
        assert!(!is_missing_file(&parse("port = ").unwrap_err()));
    }

    #[test]
    fn file_settings_are_used_when_present() {
        let path = temp_config(
            "valid",
            "[server]\nhost = \"0.0.0.0\"\nport = 9001\n[database]\nurl = \"postgres://localhost/x\"\n",
        );
        let cfg = AppConfig::load_or_env_from(&path).unwrap();
        assert_eq!(cfg.server.port, 9001);
        assert_eq!(cfg.database.url, "postgres://localhost/x");
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn zero_worker_threads_normalizes_to_four() {
        let mut s = ServerConfig { host: " ".into(), port: 8000, worker_threads: Some(0) };
        s.normalize().unwrap();
        assert_eq!(s.worker_threads, Some(4));
        assert_eq!(s.host, "127.0.0.1");
    }
}
