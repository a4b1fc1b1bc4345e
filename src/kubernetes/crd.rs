// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Application CRD availability checks

use crate::constants::crd::{POLL_INTERVAL_SECS, POLL_MAX_INTERVAL_SECS};
use crate::error::Result;
use crate::types::ApplicationResource;
use kube::core::GroupVersionKind;
use kube::discovery::pinned_kind;
use kube::{Client, Resource};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, instrument, warn};

/// Group, version and kind the Application resource is served under
pub fn application_gvk() -> GroupVersionKind {
    GroupVersionKind::gvk(
        &<ApplicationResource as Resource>::group(&()),
        &<ApplicationResource as Resource>::version(&()),
        &<ApplicationResource as Resource>::kind(&()),
    )
}

/// Block until the API server serves the Application kind.
///
/// The delay between attempts doubles from POLL_INTERVAL_SECS up to POLL_MAX_INTERVAL_SECS.
#[instrument(skip(client))]
pub async fn wait_for_application_crd(client: &Client) -> Result<()> {
    let gvk = application_gvk();
    let mut delay = Duration::from_secs(POLL_INTERVAL_SECS);
    let mut attempt: u32 = 1;

    loop {
        match application_crd_exists(client).await {
            Ok(true) => {
                info!(attempt, "{}/{} {} is served", gvk.group, gvk.version, gvk.kind);
                return Ok(());
            }
            Ok(false) => debug!(attempt, ?delay, "{} kind not served yet", gvk.kind),
            Err(e) => warn!(attempt, ?delay, "Discovery of {} failed: {}", gvk.kind, e),
        }

        sleep(delay).await;
        delay = next_delay(delay);
        attempt += 1;
    }
}

fn next_delay(delay: Duration) -> Duration {
    (delay * 2).min(Duration::from_secs(POLL_MAX_INTERVAL_SECS))
}

/// Resolve the Application kind through API discovery.
///
/// A missing group version or a group version without the kind both count as absent.
pub async fn application_crd_exists(client: &Client) -> Result<bool> {
    match pinned_kind(client, &application_gvk()).await {
        Ok(_) => Ok(true),
        Err(kube::Error::Api(err)) if err.code == 404 => Ok(false),
        Err(kube::Error::Discovery(_)) => Ok(false),
        Err(e) => Err(e.into()),
    }
}
