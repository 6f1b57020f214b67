// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use bls_validators_types::{PubKey, Stake, ValidatorIndex};
use serde::Serialize;

/// Observable state transition of the registry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum RegistryEvent {
    /// A slot moved from empty to active
    ValidatorAdded {
        index: ValidatorIndex,
        pub_key: PubKey,
        stake: Stake,
    },
}

impl RegistryEvent {
    pub fn index(&self) -> ValidatorIndex {
        match self {
            RegistryEvent::ValidatorAdded { index, .. } => *index,
        }
    }
}

/// Returned by a successful admission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Receipt {
    /// Position of `event` in the registry's event log, starting at 0
    pub sequence: u64,
    pub event: RegistryEvent,
}
