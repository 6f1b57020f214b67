// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use bls12_381::hash_to_curve::{ExpandMsgXmd, HashToCurve};
use bls12_381::{G1Affine, G1Projective, G2Affine};

use crate::curve::G2_UNCOMPRESSED_LENGTH;

/// Domain separation tag for message signatures
pub const SIG_DST: &[u8] = b"BLS_SIG_BLS12381G1_XMD:SHA-256_SSWU_RO_POP_";

/// Domain separation tag for proofs of possession
pub const POP_DST: &[u8] = b"BLS_POP_BLS12381G1_XMD:SHA-256_SSWU_RO_POP_";

/// Hashes `msg` onto G1 (RFC 9380, SSWU with `expand_message_xmd` over SHA-256).
pub fn hash_to_g1(msg: &[u8], dst: &[u8]) -> G1Affine {
    let point = <G1Projective as HashToCurve<ExpandMsgXmd<sha2::Sha256>>>::hash_to_curve(msg, dst);
    G1Affine::from(point)
}

/// The bytes a proof of possession signs: the key's own uncompressed encoding.
pub fn pop_message(pub_key: &G2Affine) -> [u8; G2_UNCOMPRESSED_LENGTH] {
    pub_key.to_uncompressed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_to_g1_is_deterministic() {
        let a = hash_to_g1(b"validator", SIG_DST);
        let b = hash_to_g1(b"validator", SIG_DST);
        assert_eq!(a, b);
        assert!(!bool::from(a.is_identity()));
        assert!(bool::from(a.is_torsion_free()));
    }

    #[test]
    fn test_domain_separation() {
        let sig = hash_to_g1(b"validator", SIG_DST);
        let pop = hash_to_g1(b"validator", POP_DST);
        assert_ne!(sig, pop);
    }
}
