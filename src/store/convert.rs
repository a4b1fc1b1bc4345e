// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Mapping between domain records and Application custom resources.

use crate::constants::annotations;
use crate::models::{AppItem, Application, ApplicationList, ListOptions};
use crate::types::{ApplicationResource, ApplicationSpec};
use chrono::{DateTime, Utc};
use kube::api::{ListParams, ObjectMeta};
use kube::ResourceExt;
use std::collections::BTreeMap;

fn creation_time(app: &ApplicationResource) -> Option<DateTime<Utc>> {
    app.metadata.creation_timestamp.as_ref().map(|t| t.0)
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Convert a custom resource into the domain model
pub fn to_app_model(app: &ApplicationResource) -> Application {
    Application {
        name: app.name_any(),
        app_type: app.spec.app_type.clone(),
        labels: app.labels().clone(),
        namespace: app.namespace().unwrap_or_default(),
        creation_timestamp: creation_time(app),
        version: app.version().to_string(),
        selector: app.spec.selector.clone(),
        node_selector: app.spec.node_selector.clone(),
        services: app.spec.services.clone(),
        volumes: app.spec.volumes.clone(),
        description: app.description().to_string(),
        system: app.spec.system,
    }
}

/// Convert listed custom resources into summary rows.
///
/// The list options are left empty, the caller attaches the request options.
pub fn to_app_list_model(items: &[ApplicationResource]) -> ApplicationList {
    let items: Vec<AppItem> = items
        .iter()
        .map(|item| AppItem {
            name: item.name_any(),
            app_type: item.spec.app_type.clone(),
            namespace: item.namespace().unwrap_or_default(),
            version: item.version().to_string(),
            labels: item.labels().clone(),
            selector: item.spec.selector.clone(),
            creation_timestamp: creation_time(item),
            description: item.description().to_string(),
            system: item.spec.system,
        })
        .collect();

    ApplicationList {
        total: items.len(),
        list_options: ListOptions::default(),
        items,
    }
}

/// Convert the domain model into a custom resource living in `namespace`.
///
/// The namespace of the model itself is ignored.
pub fn from_app_model(namespace: &str, app: &Application) -> ApplicationResource {
    let mut metadata_annotations = BTreeMap::new();
    if !app.description.is_empty() {
        metadata_annotations.insert(annotations::DESCRIPTION.to_string(), app.description.clone());
    }

    ApplicationResource {
        metadata: ObjectMeta {
            name: Some(app.name.clone()),
            namespace: Some(namespace.to_string()),
            resource_version: non_empty(&app.version),
            labels: (!app.labels.is_empty()).then(|| app.labels.clone()),
            annotations: (!metadata_annotations.is_empty()).then_some(metadata_annotations),
            ..Default::default()
        },
        spec: ApplicationSpec {
            app_type: app.app_type.clone(),
            selector: app.selector.clone(),
            node_selector: app.node_selector.clone(),
            services: app.services.clone(),
            volumes: app.volumes.clone(),
            system: app.system,
        },
    }
}

/// Convert list options into list parameters, leaving empty values unset
pub fn from_list_options_model(options: &ListOptions) -> ListParams {
    ListParams {
        label_selector: non_empty(&options.label_selector),
        field_selector: non_empty(&options.field_selector),
        limit: (options.limit > 0).then_some(options.limit),
        continue_token: non_empty(&options.continue_token),
        ..Default::default()
    }
}
