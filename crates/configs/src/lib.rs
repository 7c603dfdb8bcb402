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
    pub seed: SeedConfig,
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
        Self { host: "127.0.0.1".into(), port: 8080, worker_threads: Some(4) }
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

/// Demo data population at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SeedConfig {
    #[serde(default)]
    pub enabled: bool,
}

fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

pub fn load_default() -> Result<AppConfig> {
    load_from_file(&config_path(&env_var))
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    parse(&content)
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn config_path<F: Fn(&str) -> Option<String>>(env: &F) -> String {
    env("CONFIG_PATH").unwrap_or_else(|| "config.toml".to_string())
}

fn is_not_found(e: &anyhow::Error) -> bool {
    e.downcast_ref::<std::io::Error>()
        .is_some_and(|io| io.kind() == std::io::ErrorKind::NotFound)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Config file if present, otherwise built purely from environment variables.
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_env() -> Result<Self> {
        Self::load_or_env_with(&env_var)
    }

    pub fn load_or_env_with<F: Fn(&str) -> Option<String>>(env: &F) -> Result<Self> {
        let path = config_path(env);
        let mut cfg = match load_from_file(&path) {
            Ok(cfg) => cfg,
            // 仅在文件不存在时回退到环境变量
            Err(e) if is_not_found(&e) => Self::from_lookup(env),
            Err(e) => return Err(e.context(format!("failed to load config from {path}"))),
        };
        cfg.normalize_and_validate_with(env)?;
        Ok(cfg)
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(env: &F) -> Self {
        let host = env("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env("SERVER_PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        let worker_threads = env("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok());
        Self {
            server: ServerConfig { host, port, worker_threads },
            database: DatabaseConfig::default(),
            seed: SeedConfig::default(),
        }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.normalize_and_validate_with(&env_var)
    }

    fn normalize_and_validate_with<F: Fn(&str) -> Option<String>>(&mut self, env: &F) -> Result<()> {
        // 归一化 server
        self.server.normalize()?;
        // 归一化 database（支持从环境变量填充 URL）
        self.database.fill_url(env("DATABASE_URL"));
        self.database.validate()?;
        self.seed.apply_flag(env("SEED_DEMO_DATA").as_deref());
        Ok(())
    }
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
    // 若 TOML 中未提供 URL，则使用环境变量中的值
    fn fill_url(&mut self, from_env: Option<String>) {
        if self.url.trim().is_empty() {
            if let Some(url) = from_env {
                self.url = url;
            }
        }
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

    /// Single-connection in-memory SQLite, used by tests and local runs.
    pub fn sqlite_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            ..Self::default()
        }
    }
}

impl SeedConfig {
    /// `SEED_DEMO_DATA` overrides the file when set: `1`, `true` or `yes` enable.
    fn apply_flag(&mut self, flag: Option<&str>) {
        if let Some(v) = flag {
            self.enabled = matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }
    }
}
