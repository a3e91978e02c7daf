use std::net::SocketAddr;

use thiserror::Error;

use kgrade_core::ClusterCredentials;
use kgrade_model::{DEFAULT_NAMESPACE, PipelineConfig};

pub const ENV_BIND: &str = "KGRADE_BIND";
pub const ENV_NAMESPACE: &str = "KGRADE_NAMESPACE";
pub const ENV_KUBECONFIG: &str = "KUBECONFIG";

const DEFAULT_BIND: &str = "0.0.0.0:5000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid KGRADE_BIND '{value}': {reason}")]
    InvalidBind { value: String, reason: String },

    #[error("invalid KGRADE_NAMESPACE '{0}'")]
    InvalidNamespace(String),
}

/// Process-level settings read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind: SocketAddr,
    pub credentials: ClusterCredentials,
    pub pipeline: PipelineConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_raw = lookup(ENV_BIND)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .trim()
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::InvalidBind {
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let namespace = lookup(ENV_NAMESPACE)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        if !is_dns_label(&namespace) {
            return Err(ConfigError::InvalidNamespace(namespace));
        }

        let credentials = ClusterCredentials::from_kubeconfig(lookup(ENV_KUBECONFIG).as_deref());

        Ok(Self {
            bind,
            credentials,
            pipeline: PipelineConfig {
                namespace,
                ..Default::default()
            },
        })
    }
}

fn is_dns_label(s: &str) -> bool {
    s.len() <= 63
        && s.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        && !s.starts_with('-')
        && !s.ends_with('-')
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::PathBuf;

    use super::*;

    fn from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<&str, &str> = pairs.iter().copied().collect();
        ServerConfig::from_lookup(|key| map.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn defaults_to_port_5000_in_cluster() {
        let cfg = from(&[]).unwrap();
        assert_eq!(cfg.bind, "0.0.0.0:5000".parse::<SocketAddr>().unwrap());
        assert_eq!(cfg.credentials, ClusterCredentials::InCluster);
        assert_eq!(cfg.pipeline.namespace, "default");
    }

    #[test]
    fn kubeconfig_selects_out_of_cluster_credentials() {
        let cfg = from(&[(ENV_KUBECONFIG, "/home/dev/.kube/config")]).unwrap();
        assert_eq!(
            cfg.credentials,
            ClusterCredentials::Kubeconfig(PathBuf::from("/home/dev/.kube/config"))
        );
    }

    #[test]
    fn custom_bind_and_namespace() {
        let cfg = from(&[(ENV_BIND, "127.0.0.1:8080"), (ENV_NAMESPACE, "grading")]).unwrap();
        assert_eq!(cfg.bind.port(), 8080);
        assert_eq!(cfg.pipeline.namespace, "grading");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            from(&[(ENV_BIND, "not-an-addr")]),
            Err(ConfigError::InvalidBind { .. })
        ));
        assert!(matches!(
            from(&[(ENV_NAMESPACE, "Bad_NS")]),
            Err(ConfigError::InvalidNamespace(_))
        ));
    }
}
