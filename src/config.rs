//! Configuration for the media shelf server.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MEDIASHELF_BIND, MEDIASHELF_PASSWORD, MEDIASHELF_SEED)
//! 2. Config file (.mediashelf/config.yaml)
//! 3. Defaults (127.0.0.1:3000, password "letmein", samples seeded)
//!
//! Config file discovery:
//! - Searches current directory and parents for .mediashelf/config.yaml
//! - Falls back to ~/.mediashelf/config.yaml

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_PASSWORD: &str = "letmein";

const CONFIG_DIR: &str = ".mediashelf";
const CONFIG_FILE: &str = "config.yaml";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    pub seed_samples: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerConfig {
    /// Address to listen on (host:port)
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Password shared by every identity
    pub shared_password: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Address the HTTP server binds to
    pub bind: SocketAddr,
    /// Shared login password
    pub shared_password: String,
    /// Whether to load the sample items at startup
    pub seed_samples: bool,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            shared_password: DEFAULT_PASSWORD.to_string(),
            seed_samples: true,
            config_file: None,
        }
    }
}

/// Values read from the environment
#[derive(Debug, Clone, Default)]
struct EnvOverrides {
    bind: Option<String>,
    password: Option<String>,
    seed: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            bind: std::env::var("MEDIASHELF_BIND").ok(),
            password: std::env::var("MEDIASHELF_PASSWORD").ok(),
            seed: std::env::var("MEDIASHELF_SEED").ok(),
        }
    }
}

/// Find config file by searching current directory and parents, then home
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(CONFIG_DIR).join(CONFIG_FILE);
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse a bind address
pub fn parse_bind(value: &str) -> Result<SocketAddr> {
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", value))
}

/// Parse a boolean flag ("true"/"false", "1"/"0", "yes"/"no")
fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => anyhow::bail!("Invalid boolean value: {}", value),
    }
}

/// Merge file and environment values over the defaults
fn resolve(
    file: Option<ConfigFile>,
    config_file: Option<PathBuf>,
    env: EnvOverrides,
) -> Result<ResolvedConfig> {
    let defaults = ResolvedConfig::default();
    let (file_bind, file_password, file_seed) = match file {
        Some(f) => (f.server.bind, f.auth.shared_password, f.seed_samples),
        None => (None, None, None),
    };

    let bind = match env.bind.or(file_bind) {
        Some(value) => parse_bind(&value)?,
        None => defaults.bind,
    };

    let shared_password = env
        .password
        .or(file_password)
        .unwrap_or(defaults.shared_password);
    if shared_password.is_empty() {
        anyhow::bail!("Shared password must not be empty");
    }

    let seed_samples = match env.seed {
        Some(value) => parse_flag(&value).context("Invalid MEDIASHELF_SEED")?,
        None => file_seed.unwrap_or(defaults.seed_samples),
    };

    Ok(ResolvedConfig {
        bind,
        shared_password,
        seed_samples,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = config_file.as_deref().map(load_config_file).transpose()?;

    resolve(file, config_file, EnvOverrides::from_env())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| format!("{:#}", e)));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let config_dir = dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();

        let config_path = config_dir.join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file_or_env() {
        let config = resolve(None, None, EnvOverrides::default()).unwrap();

        assert_eq!(config.bind, parse_bind(DEFAULT_BIND).unwrap());
        assert_eq!(config.shared_password, DEFAULT_PASSWORD);
        assert!(config.seed_samples);
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
version: "1.0"
server:
  bind: 0.0.0.0:8080
auth:
  shared_password: hunter2
seed_samples: false
"#,
        );

        let file = load_config_file(&path).unwrap();
        assert_eq!(file.version, "1.0");
        assert_eq!(file.server.bind.as_deref(), Some("0.0.0.0:8080"));

        let config = resolve(Some(file), Some(path.clone()), EnvOverrides::default()).unwrap();
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.shared_password, "hunter2");
        assert!(!config.seed_samples);
        assert_eq!(config.config_file, Some(path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            r#"
version: "1.0"
auth:
  shared_password: from-file
"#,
        );
        let file = load_config_file(&path).unwrap();

        let env = EnvOverrides {
            bind: Some("127.0.0.1:9999".to_string()),
            password: Some("from-env".to_string()),
            seed: Some("no".to_string()),
        };
        let config = resolve(Some(file), Some(path), env).unwrap();

        assert_eq!(config.bind.port(), 9999);
        assert_eq!(config.shared_password, "from-env");
        assert!(!config.seed_samples);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let env = EnvOverrides {
            bind: Some("not an address".to_string()),
            ..Default::default()
        };
        assert!(resolve(None, None, env).is_err());

        let env = EnvOverrides {
            password: Some(String::new()),
            ..Default::default()
        };
        assert!(resolve(None, None, env).is_err());

        let env = EnvOverrides {
            seed: Some("maybe".to_string()),
            ..Default::default()
        };
        assert!(resolve(None, None, env).is_err());
    }
}
