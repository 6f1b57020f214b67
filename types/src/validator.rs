// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::cmp::Ordering;
use std::ops::{Deref, DerefMut};

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::{PubKey, Stake, ValidatorIndex};

/// An admitted validator. Never mutated once admitted.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    pub index: ValidatorIndex,
    pub pub_key: PubKey,
    pub stake: Stake,
}

impl Ord for Validator {
    fn cmp(&self, other: &Self) -> Ordering {
        // Heaviest stake first, ties broken by the lower index.
        match self.stake.cmp(&other.stake) {
            Ordering::Greater => Ordering::Less,
            Ordering::Equal => self.index.cmp(&other.index),
            Ordering::Less => Ordering::Greater,
        }
    }
}

impl PartialOrd for Validator {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// State of a single registry slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    Empty,
    Active(Validator),
}

impl Slot {
    pub fn status(&self) -> SlotStatus {
        match self {
            Slot::Empty => SlotStatus::Empty,
            Slot::Active(_) => SlotStatus::Active,
        }
    }

    pub fn validator(&self) -> Option<&Validator> {
        match self {
            Slot::Empty => None,
            Slot::Active(v) => Some(v),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

impl From<Option<Validator>> for Slot {
    fn from(v: Option<Validator>) -> Self {
        v.map_or(Slot::Empty, Slot::Active)
    }
}

#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "UPPERCASE")]
pub enum SlotStatus {
    Empty,
    Active,
}

/// A snapshot of the active validators, sorted by stake, descending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidatorSet(pub Vec<Validator>);

impl Deref for ValidatorSet {
    type Target = Vec<Validator>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl DerefMut for ValidatorSet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<Validator> for ValidatorSet {
    fn from_iter<T: IntoIterator<Item = Validator>>(iter: T) -> Self {
        let mut set = Self(iter.into_iter().collect());
        set.sort();
        set
    }
}

impl ValidatorSet {
    pub fn total_stake(&self) -> Stake {
        self.iter().fold(Stake::zero(), |acc, v| acc + &v.stake)
    }

    pub fn get(&self, index: ValidatorIndex) -> Option<&Validator> {
        self.iter().find(|v| v.index == index)
    }
}

/// Returns true if `signing` is strictly more than two thirds of `total`.
pub fn is_strong_quorum(signing: &Stake, total: &Stake) -> bool {
    !total.is_zero() && signing * 3u32 > total * 2u32
}
