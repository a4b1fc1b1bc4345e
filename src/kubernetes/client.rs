// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation and kubeconfig utilities

use crate::config::Config;
use crate::error::{AppKubeError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client, from the configured kubeconfig file if any
#[instrument(skip(config), fields(kubeconfig = ?config.kubeconfig_path))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig_path {
        Some(path) => {
            info!("Loading kubeconfig from {}", path);
            let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
                AppKubeError::KubeconfigError(format!("Failed to read {}: {}", path, e))
            })?;
            create_client_from_kubeconfig(&kubeconfig).await
        }
        None => {
            debug!("No kubeconfig path configured, inferring configuration");
            Client::try_default().await.map_err(AppKubeError::from)
        }
    }
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed = parse_kubeconfig(kubeconfig)?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                AppKubeError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| AppKubeError::KubeconfigError(format!("Failed to create client: {}", e)))
}

fn parse_kubeconfig(kubeconfig: &str) -> Result<Kubeconfig> {
    serde_yaml::from_str(kubeconfig)
        .map_err(|e| AppKubeError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))
}
