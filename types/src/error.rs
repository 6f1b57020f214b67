// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::borrow::Cow;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SignatureError {
    /// The encoding does not decode to an on-curve point of the prime-order subgroup.
    #[error("invalid point: {0}")]
    InvalidPoint(Cow<'static, str>),

    /// The points decoded but the pairing equation does not hold.
    #[error("BLS signature verification failed")]
    VerificationFailed,

    #[error("empty public keys provided")]
    EmptyPublicKeys,

    #[error("empty signatures provided")]
    EmptySignatures,

    #[error("invalid secret key")]
    InvalidSecretKey,
}
