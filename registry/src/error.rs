// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::borrow::Cow;

use bls_validators_types::{SignatureError, Stake, ValidatorIndex};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    /// Error when a public key or signature does not decode to a valid point.
    #[error("invalid point: {0}")]
    InvalidPoint(Cow<'static, str>),

    /// Error when the proof of possession does not verify.
    #[error("proof of possession verification failed for validator {index}")]
    VerificationFailed { index: ValidatorIndex },

    /// Error when the target slot already holds a validator.
    #[error("slot {index} is already occupied")]
    SlotOccupied { index: ValidatorIndex },

    /// Error when the attached stake is below the configured minimum.
    #[error("insufficient stake for validator {index}: {stake} < {minimum}")]
    InsufficientStake {
        index: ValidatorIndex,
        stake: Stake,
        minimum: Stake,
    },

    /// Error when the registry holds as many validators as it is configured for.
    #[error("registry is full: {capacity} validators")]
    RegistryFull { capacity: usize },

    /// Error when the public key is already registered at another index.
    #[error("public key for validator {index} is already registered at index {existing}")]
    DuplicateKey {
        index: ValidatorIndex,
        existing: ValidatorIndex,
    },

    /// Error when a quorum check is given no signers.
    #[error("no signers")]
    NoSigners,

    /// Error when a signer index has no active validator.
    #[error("signer {0} is not an active validator")]
    UnknownSigner(ValidatorIndex),

    /// Error when the aggregate signature of a signer set does not verify.
    #[error("aggregate signature verification failed")]
    AggregateVerificationFailed,

    #[error("insufficient stake for quorum: {signing} <= 2/3 * {total}")]
    InsufficientQuorum { signing: Stake, total: Stake },

    /// Any other error reported by the signature engine.
    #[error(transparent)]
    Signature(SignatureError),
}

impl RegistryError {
    /// Maps an engine error raised while checking the proof of possession for `index`.
    pub(crate) fn from_pop(index: ValidatorIndex, err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidPoint(reason) => RegistryError::InvalidPoint(reason),
            SignatureError::VerificationFailed => RegistryError::VerificationFailed { index },
            other => RegistryError::Signature(other),
        }
    }

    /// Maps an engine error raised while checking an aggregate signature.
    pub(crate) fn from_aggregate(err: SignatureError) -> Self {
        match err {
            SignatureError::InvalidPoint(reason) => RegistryError::InvalidPoint(reason),
            SignatureError::VerificationFailed => RegistryError::AggregateVerificationFailed,
            SignatureError::EmptyPublicKeys => RegistryError::NoSigners,
            other => RegistryError::Signature(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
