use std::path::PathBuf;

use kube::{
    Client, Config,
    config::{KubeConfigOptions, Kubeconfig},
};
use tracing::info;

use crate::error::CoreError;

/// Where the cluster client gets its credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterCredentials {
    /// Service-account token and CA mounted into the pod.
    InCluster,
    /// Out-of-cluster kubeconfig file.
    Kubeconfig(PathBuf),
}

impl ClusterCredentials {
    /// Select credentials from the value of `KUBECONFIG`.
    ///
    /// Unset or blank means in-cluster discovery.
    ///
    /// ```
    /// use kgrade_core::ClusterCredentials;
    ///
    /// assert_eq!(ClusterCredentials::from_kubeconfig(None), ClusterCredentials::InCluster);
    /// assert_eq!(ClusterCredentials::from_kubeconfig(Some("  ")), ClusterCredentials::InCluster);
    /// assert!(matches!(
    ///     ClusterCredentials::from_kubeconfig(Some("/etc/kube/config")),
    ///     ClusterCredentials::Kubeconfig(_)
    /// ));
    /// ```
    pub fn from_kubeconfig(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(path) if !path.is_empty() => Self::Kubeconfig(PathBuf::from(path)),
            _ => Self::InCluster,
        }
    }

    /// Build the client handle. Called once at startup; the handle is shared by all requests.
    pub async fn connect(&self) -> Result<Client, CoreError> {
        let config = match self {
            Self::InCluster => {
                info!("using in-cluster config");
                Config::incluster().map_err(|e| CoreError::Credentials(e.to_string()))?
            }
            Self::Kubeconfig(path) => {
                info!(path = %path.display(), "using kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path)
                    .map_err(|e| CoreError::Credentials(format!("{}: {e}", path.display())))?;
                Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
                    .await
                    .map_err(|e| CoreError::Credentials(format!("{}: {e}", path.display())))?
            }
        };

        Client::try_from(config).map_err(|e| CoreError::Credentials(e.to_string()))
    }
}
