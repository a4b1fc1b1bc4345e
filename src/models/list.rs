// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filtering and paging options for listing applications
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListOptions {
    #[serde(
        rename = "selector",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub label_selector: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub field_selector: String,
    /// Page size, 0 means no limit
    #[serde(default, skip_serializing_if = "is_zero")]
    pub limit: u32,
    /// Opaque continue token of the next page
    #[serde(
        rename = "continue",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub continue_token: String,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

impl ListOptions {
    pub fn with_label_selector(mut self, selector: &str) -> Self {
        self.label_selector = selector.to_string();
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_continue(mut self, token: &str) -> Self {
        self.continue_token = token.to_string();
        self
    }

    /// Whether the server reported more pages after this one
    pub fn has_more(&self) -> bool {
        !self.continue_token.is_empty()
    }
}

/// Summary row of an application in a listing
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppItem {
    pub name: String,
    #[serde(rename = "type")]
    pub app_type: String,
    pub namespace: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    pub selector: String,
    #[serde(
        rename = "createTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub creation_timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub system: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationList {
    pub total: usize,
    #[serde(flatten)]
    pub list_options: ListOptions,
    pub items: Vec<AppItem>,
}
