// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for KEngine hosts (config storage, settings).
//! Keeps binaries thin and storage-agnostic.

pub mod config;
pub mod settings;
