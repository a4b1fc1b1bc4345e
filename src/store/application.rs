// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Application storage backed by the Application custom resource.

use crate::error::Result;
use crate::models::{Application, ApplicationList, ListOptions};
use crate::store::convert::{
    from_app_model, from_list_options_model, to_app_list_model, to_app_model,
};
use crate::types::ApplicationResource;
use async_trait::async_trait;
use kube::api::{DeleteParams, GetParams, PostParams};
use kube::{Api, Client};
use std::time::Instant;
use tracing::{debug, instrument};

/// CRUD operations on applications, independent of the backing storage
#[async_trait]
pub trait ApplicationStore: Send + Sync {
    /// Get an application, at `version` when it is not empty
    async fn get_application(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
    ) -> Result<Application>;

    async fn create_application(
        &self,
        namespace: &str,
        application: &Application,
    ) -> Result<Application>;

    /// Replace an application, the version of `application` guards against lost updates
    async fn update_application(
        &self,
        namespace: &str,
        application: &Application,
    ) -> Result<Application>;

    async fn delete_application(&self, namespace: &str, name: &str) -> Result<()>;

    /// List one page of applications.
    ///
    /// The returned list carries `options` with the continue token of the next page.
    async fn list_application(
        &self,
        namespace: &str,
        options: ListOptions,
    ) -> Result<ApplicationList>;
}

/// Application store talking to the Kubernetes API server
#[derive(Clone)]
pub struct KubeApplicationStore {
    client: Client,
}

impl KubeApplicationStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<ApplicationResource> {
        Api::namespaced(self.client.clone(), namespace)
    }
}

#[async_trait]
impl ApplicationStore for KubeApplicationStore {
    #[instrument(skip(self))]
    async fn get_application(
        &self,
        namespace: &str,
        name: &str,
        version: &str,
    ) -> Result<Application> {
        let params = if version.is_empty() {
            GetParams::default()
        } else {
            GetParams::at(version)
        };

        let start = Instant::now();
        let app = self.api(namespace).get_with(name, &params).await;
        debug!(cost = ?start.elapsed(), "kube get application");

        Ok(to_app_model(&app?))
    }

    #[instrument(skip(self, application), fields(name = %application.name))]
    async fn create_application(
        &self,
        namespace: &str,
        application: &Application,
    ) -> Result<Application> {
        let app = from_app_model(namespace, application);

        let start = Instant::now();
        let created = self
            .api(namespace)
            .create(&PostParams::default(), &app)
            .await;
        debug!(cost = ?start.elapsed(), "kube create application");

        Ok(to_app_model(&created?))
    }

    #[instrument(skip(self, application), fields(name = %application.name, version = %application.version))]
    async fn update_application(
        &self,
        namespace: &str,
        application: &Application,
    ) -> Result<Application> {
        let app = from_app_model(namespace, application);

        let start = Instant::now();
        let updated = self
            .api(namespace)
            .replace(&application.name, &PostParams::default(), &app)
            .await;
        debug!(cost = ?start.elapsed(), "kube update application");

        Ok(to_app_model(&updated?))
    }

    #[instrument(skip(self))]
    async fn delete_application(&self, namespace: &str, name: &str) -> Result<()> {
        let start = Instant::now();
        let res = self
            .api(namespace)
            .delete(name, &DeleteParams::default())
            .await;
        debug!(cost = ?start.elapsed(), "kube delete application");

        res?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_application(
        &self,
        namespace: &str,
        mut options: ListOptions,
    ) -> Result<ApplicationList> {
        let params = from_list_options_model(&options);

        let start = Instant::now();
        let list = self.api(namespace).list(&params).await;
        debug!(cost = ?start.elapsed(), "kube list application");

        let list = list?;
        options.continue_token = list.metadata.continue_.clone().unwrap_or_default();

        let mut res = to_app_list_model(&list.items);
        res.list_options = options;
        Ok(res)
    }
}

/// List every application in `namespace`, following continue tokens page by page.
///
/// `options.limit` sets the page size. The result holds all items and options
/// without a continue token.
#[instrument(skip(store))]
pub async fn list_all<S>(store: &S, namespace: &str, options: ListOptions) -> Result<ApplicationList>
where
    S: ApplicationStore + ?Sized,
{
    let mut options = options;
    let mut items = Vec::new();
    let mut pages = 0;

    loop {
        let page = store.list_application(namespace, options).await?;
        pages += 1;
        items.extend(page.items);
        options = page.list_options;

        if !options.has_more() {
            break;
        }
    }

    debug!(pages, total = items.len(), "listed all applications");
    Ok(ApplicationList {
        total: items.len(),
        list_options: options,
        items,
    })
}
