// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! The `registry` crate provides the validator registry state machine.
//!
//! This crate includes:
//! - [`Registry`], mapping validator indices to BLS public keys and stake
//! - Admission gated on a proof of possession, checked through the `Verifier` seam
//! - An event log with a [`Receipt`] per admission
//! - A Keccak-256 merkle [`commitment`] over the validator set
//! - Stake-weighted aggregate signature checks over the registered validators
//!
//! Each slot moves from empty to active at most once. A failed admission
//! leaves no trace: no stake is recorded, no slot is occupied, no event is emitted.

pub mod commitment;
mod config;
mod error;
mod event;
mod registry;


pub use config::RegistryConfig;
pub use error::{RegistryError, Result};
pub use event::{Receipt, RegistryEvent};
pub use registry::Registry;
