//! CLI argument parsing with subcommand architecture.

use clap::{Parser, Subcommand};
use hostpulse_core::config::ProbeConfig;

#[derive(Parser)]
#[command(name = "hostpulse", version, about = "Host health and resource metrics over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the metrics server (default when no subcommand is given)
    Run(RunArgs),
    /// Check a running server's /health endpoint; exit 0 if it answers 200
    Probe(ProbeArgs),
}

#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to config file (optional; defaults apply when missing)
    #[arg(short, long, default_value = "hostpulse.yaml", env = "HOSTPULSE_CONFIG")]
    pub config: String,

    /// Listen host
    #[arg(long, env = "HOSTPULSE_HOST")]
    pub host: Option<String>,

    /// Listen port, e.g. `8080` or `:8080`
    #[arg(long, env = "PORT")]
    pub port: Option<String>,

    /// Log level
    #[arg(long, default_value = "info", env = "HOSTPULSE_LOG_LEVEL")]
    pub log_level: String,
}

#[derive(Parser, Debug)]
pub struct ProbeArgs {
    /// Config file whose `probe` section supplies defaults
    #[arg(short, long, default_value = "hostpulse.yaml", env = "HOSTPULSE_CONFIG")]
    pub config: String,

    /// Health endpoint to query (overrides `probe.url`)
    #[arg(long)]
    pub url: Option<String>,

    /// Give up after this many seconds (overrides `probe.timeout-secs`)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: Option<u64>,
}

impl ProbeArgs {
    /// Flags win over the config file's `probe` section, which wins over defaults.
    pub fn resolve(&self, from_file: Option<ProbeConfig>) -> ProbeConfig {
        let base = from_file.unwrap_or_default();
        ProbeConfig {
            url: self.url.clone().unwrap_or(base.url),
            timeout_secs: self.timeout_secs.unwrap_or(base.timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hostpulse_core::config::DEFAULT_PROBE_URL;

    fn check_args(extra: &[&str]) -> ProbeArgs {
        let mut argv = vec!["probe"];
        argv.extend_from_slice(extra);
        ProbeArgs::parse_from(argv)
    }

    fn file_section() -> ProbeConfig {
        ProbeConfig {
            url: "http://127.0.0.1:9100/health".to_string(),
            timeout_secs: 2,
        }
    }

    #[test]
    fn test_check_defaults_without_config() {
        let resolved = check_args(&[]).resolve(None);
        assert_eq!(resolved.url, DEFAULT_PROBE_URL);
        assert_eq!(resolved.timeout_secs, 5);
    }

    #[test]
    fn test_check_uses_config_section() {
        let resolved = check_args(&[]).resolve(Some(file_section()));
        assert_eq!(resolved.url, "http://127.0.0.1:9100/health");
        assert_eq!(resolved.timeout_secs, 2);
    }

    #[test]
    fn test_flags_override_config_section() {
        let args = check_args(&["--url", "http://10.0.0.5:8080/health", "--timeout-secs", "9"]);
        let resolved = args.resolve(Some(file_section()));
        assert_eq!(resolved.url, "http://10.0.0.5:8080/health");
        assert_eq!(resolved.timeout_secs, 9);
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(ProbeArgs::try_parse_from(["probe", "--timeout-secs", "0"]).is_err());
    }
}
