// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppKubeError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Serialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl AppKubeError {
    /// HTTP status code reported by the API server, if the error came from it
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppKubeError::KubeError(kube::Error::Api(err)) => Some(err.code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// The write was rejected because the resource version was stale
    pub fn is_conflict(&self) -> bool {
        self.status_code() == Some(409)
    }
}

pub type Result<T> = std::result::Result<T, AppKubeError>;
