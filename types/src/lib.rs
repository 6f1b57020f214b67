// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Shared types for the BLS validator registry.
//!
//! This crate provides the vocabulary the signature engine and the registry agree on:
//! - Validator indices, stake amounts and the flat field-element encodings of
//!   G1 signatures and G2 public keys
//! - The [`api::Verifier`] trait, the seam through which the registry reaches a
//!   pairing engine (or a mock in tests)
//! - [`Validator`], [`Slot`] and [`ValidatorSet`] snapshots
//!
//! Key components:
//! - [`PubKey`]: G2 public key as `[x.c0, x.c1, y.c0, y.c1]`
//! - [`Signature`]: G1 signature as `[x, y]`
//! - [`SignatureError`]: the failure taxonomy of signature checks

pub mod api;
mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
mod types;
mod validator;

pub use error::SignatureError;
pub use types::{G1_COORDINATES, G2_COORDINATES, PubKey, Signature, Stake, ValidatorIndex};
pub use validator::{Slot, SlotStatus, Validator, ValidatorSet, is_strong_quorum};

// re-exports
pub use fvm_ipld_bitfield::BitField;
pub use num_bigint::BigUint;
pub use num_traits::Zero;
