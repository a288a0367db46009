use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ─── Config ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Filesystem reported by /metrics/disk
    pub disk_path: PathBuf,

    // Logging
    pub logging_to_file: bool,
    pub log_dir: Option<String>,

    // Liveness probe defaults
    pub probe: ProbeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            disk_path: PathBuf::from("/"),
            logging_to_file: false,
            log_dir: None,
            probe: ProbeConfig::default(),
        }
    }
}

pub const DEFAULT_PORT: u16 = 8080;

impl Config {
    /// Load config from a YAML file and validate.
    pub fn load(path: &str) -> Result<Self, anyhow::Error> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        anyhow::ensure!(!self.host.is_empty(), "host must not be empty");
        anyhow::ensure!(
            self.disk_path.is_absolute(),
            "disk-path must be an absolute path, got {:?}",
            self.disk_path
        );
        anyhow::ensure!(
            self.probe.timeout_secs > 0,
            "probe.timeout-secs must be greater than zero"
        );
        Ok(())
    }

    /// Socket address string the server binds to.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Parse a port specifier such as `8080` or `:8080`.
///
/// The leading colon is optional so that values written for `host:port` style
/// listeners (`:8080`) are accepted verbatim.
pub fn parse_port_spec(spec: &str) -> Result<u16, anyhow::Error> {
    let trimmed = spec.trim();
    let digits = trimmed.strip_prefix(':').unwrap_or(trimmed);
    let port: u16 = digits
        .parse()
        .map_err(|e| anyhow::anyhow!("invalid port specifier {spec:?}: {e}"))?;
    anyhow::ensure!(port != 0, "invalid port specifier {spec:?}: port 0");
    Ok(port)
}

// ─── Sub-configs ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ProbeConfig {
    pub url: String,
    pub timeout_secs: u64,
}

pub const DEFAULT_PROBE_URL: &str = "http://localhost:8080/health";

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PROBE_URL.to_string(),
            timeout_secs: 5,
        }
    }
}
