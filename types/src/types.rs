// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::SignatureError;

/// `ValidatorIndex` is the slot a validator occupies in the registry.
pub type ValidatorIndex = u64;
/// `Stake` is the amount a validator attached when it was admitted.
pub type Stake = BigUint;

/// Number of base-field coordinates in a flat G1 encoding, `[x, y]`.
pub const G1_COORDINATES: usize = 2;
/// Number of base-field coordinates in a flat G2 encoding, `[x.c0, x.c1, y.c0, y.c1]`.
pub const G2_COORDINATES: usize = 4;

/// `PubKey` is a G2 point exchanged as a flat list of field elements.
///
/// Coordinates are ordered real part first: `[x.c0, x.c1, y.c0, y.c1]`.
/// The all-zero list stands for the point at infinity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PubKey(pub [BigUint; G2_COORDINATES]);

/// `Signature` is a G1 point exchanged as a flat list of field elements, `[x, y]`.
///
/// The all-zero list stands for the point at infinity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature(pub [BigUint; G1_COORDINATES]);

macro_rules! impl_flat_point {
    ($name:ident, $len:expr, $label:literal) => {
        impl $name {
            /// Builds the point from a flat list, checking only the coordinate count.
            /// Curve membership is checked when the point is decoded by a verifier.
            pub fn from_list(coords: &[BigUint]) -> Result<Self, SignatureError> {
                let coords: [BigUint; $len] = coords.to_vec().try_into().map_err(
                    |coords: Vec<BigUint>| {
                        SignatureError::InvalidPoint(
                            format!(
                                "{} encoding needs {} coordinates, got {}",
                                $label,
                                $len,
                                coords.len()
                            )
                            .into(),
                        )
                    },
                )?;
                Ok(Self(coords))
            }

            pub fn to_list(&self) -> Vec<BigUint> {
                self.0.to_vec()
            }

            pub fn coords(&self) -> &[BigUint; $len] {
                &self.0
            }

            /// Returns true for the all-zero encoding of the point at infinity.
            pub fn is_zero(&self) -> bool {
                self.0.iter().all(num_traits::Zero::is_zero)
            }
        }

        impl TryFrom<Vec<BigUint>> for $name {
            type Error = SignatureError;

            fn try_from(coords: Vec<BigUint>) -> Result<Self, Self::Error> {
                Self::from_list(&coords)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                // The first coordinate is enough to tell keys apart in logs.
                let head = hex::encode(self.0[0].to_bytes_be());
                let display_len = std::cmp::min(16, head.len());
                write!(f, "0x{}..", &head[..display_len])
            }
        }
    };
}

impl_flat_point!(PubKey, G2_COORDINATES, "G2");
impl_flat_point!(Signature, G1_COORDINATES, "G1");
