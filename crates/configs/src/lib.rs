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
    pub assets: AssetsConfig,
    #[serde(default)]
    pub cors: CorsConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: Some(4), max_body_bytes: default_max_body_bytes() }
    }
}

fn default_host() -> String { "127.0.0.1".into() }
fn default_port() -> u16 { 8080 }

fn default_max_body_bytes() -> usize { 10 * 1024 * 1024 }

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

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Static file root that doubles as the upload store.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_asset_root")]
    pub root: String,
    #[serde(default = "default_event_image")]
    pub default_event_image: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self { root: default_asset_root(), default_event_image: default_event_image() }
    }
}

fn default_asset_root() -> String { "wwwroot".into() }
fn default_event_image() -> String { "/img/events/default.jpg".into() }

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CorsConfig {
    /// Empty means any origin is accepted.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StaffSeed {
    pub email: String,
    pub password: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String { "staff".into() }

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_staff")]
    pub staff: Vec<StaffSeed>,
}

impl Default for AuthConfig {
    fn default() -> Self { Self { staff: default_staff() } }
}

fn default_staff() -> Vec<StaffSeed> {
    vec![
        StaffSeed { email: "staff@gmail.com".into(), password: "staff123".into(), role: "staff".into() },
        StaffSeed { email: "admin@gmail.com".into(), password: "admin123".into(), role: "admin".into() },
    ]
}

pub const STAFF_ROLES: [&str; 2] = ["staff", "admin"];

/// Local development database used when neither config.toml nor DATABASE_URL provide one.
pub const DEFAULT_SQLITE_URL: &str = "sqlite://eventsite.db?mode=rwc";

fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

/// `Ok(None)` only when the file does not exist; unreadable or malformed files are errors.
pub fn load_if_present(path: &str) -> Result<Option<AppConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(anyhow!("cannot read {path}: {e}")),
    };
    let cfg: AppConfig = toml::from_str(&content).map_err(|e| anyhow!("invalid {path}: {e}"))?;
    Ok(Some(cfg))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file when present, otherwise defaults overridden from the environment.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_from(&config_path())
    }

    pub fn load_or_env_from(path: &str) -> Result<Self> {
        let mut cfg = match load_if_present(path)? {
            Some(cfg) => cfg,
            None => {
                let mut cfg = AppConfig::default();
                if let Ok(host) = std::env::var("SERVER_HOST") {
                    cfg.server.host = host;
                }
                if let Some(port) = std::env::var("SERVER_PORT").ok().and_then(|p| p.parse::<u16>().ok()) {
                    cfg.server.port = port;
                }
                cfg
            }
        };
        if let Ok(root) = std::env::var("ASSETS_ROOT") {
            cfg.assets.root = root;
        }
        cfg.database.normalize_from_env();
        if cfg.database.url.trim().is_empty() {
            cfg.database.url = DEFAULT_SQLITE_URL.to_string();
        }
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        self.assets.validate()?;
        self.auth.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        if self.max_body_bytes == 0 {
            self.max_body_bytes = default_max_body_bytes();
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

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://") || lower.starts_with("sqlite:")) {
            return Err(anyhow!("database.url must start with postgres://, postgresql:// or sqlite:"));
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

impl AssetsConfig {
    fn validate(&self) -> Result<()> {
        if self.root.trim().is_empty() {
            return Err(anyhow!("assets.root must not be empty"));
        }
        Ok(())
    }
}

impl AuthConfig {
    fn validate(&self) -> Result<()> {
        for s in &self.staff {
            if s.email.trim().is_empty() || s.password.is_empty() {
                return Err(anyhow!("auth.staff entries need an email and a password"));
            }
            if !STAFF_ROLES.contains(&s.role.as_str()) {
                return Err(anyhow!("auth.staff role `{}` is not one of {:?}", s.role, STAFF_ROLES));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, r#"
[server]
host = "0.0.0.0"
port = 9000

[database]
url = "sqlite://site.db?mode=rwc"
min_connections = 1

[assets]
root = "public"

[cors]
allowed_origins = ["http://localhost:3000"]

[[auth.staff]]
email = "ops@example.com"
password = "secret"
role = "admin"
"#).unwrap();
        let mut cfg = load_from_file(path.to_str().unwrap()).unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.max_body_bytes, 10 * 1024 * 1024);
        assert!(cfg.database.is_sqlite());
        assert_eq!(cfg.assets.root, "public");
        assert_eq!(cfg.assets.default_event_image, "/img/events/default.jpg");
        assert_eq!(cfg.cors.allowed_origins.len(), 1);
        assert_eq!(cfg.auth.staff.len(), 1);
        assert_eq!(cfg.auth.staff[0].role, "admin");
    }

    #[test]
    fn partial_server_section_keeps_file_roster() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, r#"
[server]
port = 9000

[database]
url = "sqlite://site.db?mode=rwc"

[[auth.staff]]
email = "ops@example.com"
password = "secret"
role = "admin"
"#).unwrap();
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 9000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        let emails: Vec<_> = cfg.auth.staff.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["ops@example.com"]);
    }

    #[test]
    fn malformed_file_is_an_error_not_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[server]\nport = \"not a number\"\n").unwrap();
        let err = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("invalid"));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("absent.toml");
        assert!(load_if_present(path.to_str().unwrap()).unwrap().is_none());
        let cfg = AppConfig::load_or_env_from(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.auth.staff.len(), 2);
    }

    #[test]
    fn default_roster_has_two_accounts() {
        let cfg = AppConfig::default();
        let emails: Vec<_> = cfg.auth.staff.iter().map(|s| s.email.as_str()).collect();
        assert_eq!(emails, vec!["staff@gmail.com", "admin@gmail.com"]);
    }

    #[test]
    fn rejects_unknown_scheme_and_role() {
        let mut db = DatabaseConfig { url: "mysql://x".into(), ..Default::default() };
        assert!(db.validate().is_err());
        db.url = "postgres://u:p@localhost/site".into();
        assert!(db.validate().is_ok());

        let auth = AuthConfig {
            staff: vec![StaffSeed { email: "a@b.c".into(), password: "x".into(), role: "root".into() }],
        };
        assert!(auth.validate().is_err());
    }
}
