// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Application storage on top of the Kubernetes API.

pub mod application;
pub mod convert;

pub use application::{list_all, ApplicationStore, KubeApplicationStore};
