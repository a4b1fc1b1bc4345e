// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Namespace holding the Application resources
    pub namespace: String,
    /// Explicit kubeconfig file, the inferred configuration is used when unset
    pub kubeconfig_path: Option<String>,
    /// Page size for list requests, unlimited when unset
    pub list_page_size: Option<u32>,
    pub label_selector: Option<String>,
    pub wait_for_crd: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let namespace = lookup("APPLICATION_NAMESPACE")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "default".to_string());
        let kubeconfig_path = lookup("KUBECONFIG_PATH").filter(|s| !s.is_empty());
        let label_selector = lookup("LABEL_SELECTOR").filter(|s| !s.is_empty());

        let list_page_size = match lookup("LIST_PAGE_SIZE").filter(|s| !s.is_empty()) {
            Some(raw) => {
                let size: u32 = raw
                    .parse()
                    .with_context(|| format!("LIST_PAGE_SIZE is not a number: {}", raw))?;
                anyhow::ensure!(size > 0, "LIST_PAGE_SIZE must be positive");
                Some(size)
            }
            None => None,
        };

        let wait_for_crd: bool = lookup("WAIT_FOR_CRD")
            .unwrap_or("true".to_string())
            .parse()
            .unwrap_or(true);

        Ok(Config {
            namespace,
            kubeconfig_path,
            list_page_size,
            label_selector,
            wait_for_crd,
        })
    }
}
