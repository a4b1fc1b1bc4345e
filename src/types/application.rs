// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::annotations;
use crate::models::{Service, Volume};
use kube::{CustomResource, ResourceExt};
use serde::{Deserialize, Serialize};

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, schemars::JsonSchema)]
#[kube(group = "cloud.baetyl.io", version = "v1alpha1", kind = "Application")]
#[kube(root = "ApplicationResource")]
#[kube(namespaced)]
#[kube(shortname = "app")]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSpec {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub app_type: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub selector: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub node_selector: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub volumes: Vec<Volume>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub system: bool,
}

impl ApplicationResource {
    /// Get the human readable description stored in the annotations
    pub fn description(&self) -> &str {
        self.annotations()
            .get(annotations::DESCRIPTION)
            .map(|s| s.as_str())
            .unwrap_or_default()
    }

    /// Get the resource version, empty if the server never assigned one
    pub fn version(&self) -> &str {
        self.metadata
            .resource_version
            .as_deref()
            .unwrap_or_default()
    }
}
