// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain records exchanged with callers of the application store.

pub mod application;
pub mod list;

pub use application::{
    Application, ContainerPort, Environment, HostPathVolumeSource, ObjectReference, Service,
    Volume, VolumeMount,
};
pub use list::{AppItem, ApplicationList, ListOptions};
