// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Custom resource definitions backing the application store.

pub mod application;

pub use application::{ApplicationResource, ApplicationSpec};
