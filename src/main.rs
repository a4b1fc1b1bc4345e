// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;

use appkube::config::Config;
use appkube::kubernetes::{create_client, wait_for_application_crd};
use appkube::models::ListOptions;
use appkube::store::{list_all, KubeApplicationStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!("Configuration loaded: namespace={}", config.namespace);

    let client = create_client(&config).await?;
    info!("Connected to Kubernetes cluster");

    if config.wait_for_crd {
        info!("Waiting for Application CRD to become available...");
        wait_for_application_crd(&client).await?;
    }

    let store = KubeApplicationStore::new(client);

    let options = ListOptions {
        label_selector: config.label_selector.clone().unwrap_or_default(),
        limit: config.list_page_size.unwrap_or_default(),
        ..Default::default()
    };

    let list = list_all(&store, &config.namespace, options).await?;
    println!("{}", serde_json::to_string(&list)?);

    info!("Listed {} applications in namespace {}", list.total, config.namespace);
    Ok(())
}
