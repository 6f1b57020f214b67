// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! BLS signature engine for the validator registry.
//!
//! This crate implements the pairing side of validator admission over BLS12-381,
//! with G1 for signatures and G2 for public keys:
//! - group operations on points exchanged as flat field-element lists ([`curve`])
//! - RFC 9380 hash-to-G1 with separate domains for messages and proofs of possession
//! - the [`BLSVerifier`], a cached implementation of the registry's `Verifier` seam
//! - a client-side [`SecretKey`] for key generation, signing and proofs of possession

mod aggregation;
pub mod curve;
pub mod hash;
mod signer;
mod verifier;

pub use signer::{SecretKey, keygen};
pub use verifier::BLSVerifier;
