// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Keccak-256 merkle commitment over a validator set.
//!
//! Leaves are the validators ordered by index, so the root does not depend on
//! the order in which they were admitted.

use bls_validators_types::Validator;
use keccak_hash::H256;
use sha3::{Digest, Keccak256};

/// Width of one key coordinate inside a leaf
const COORDINATE_LENGTH: usize = 48;

/// Markers separating leaves from internal nodes
const INTERNAL_MARKER: &[u8] = &[0x00];
const LEAF_MARKER: &[u8] = &[0x01];

/// Encodes a validator as `index || x.c0 || x.c1 || y.c0 || y.c1 || stake`, all big-endian.
pub fn leaf(validator: &Validator) -> Vec<u8> {
    let stake = validator.stake.to_bytes_be();
    let mut buf = Vec::with_capacity(8 + 4 * COORDINATE_LENGTH + stake.len());
    buf.extend_from_slice(&validator.index.to_be_bytes());
    for coord in validator.pub_key.coords() {
        let bytes = coord.to_bytes_be();
        // Coordinates of admitted keys are reduced field elements and always fit.
        let pad = COORDINATE_LENGTH.saturating_sub(bytes.len());
        buf.extend(std::iter::repeat_n(0u8, pad));
        buf.extend_from_slice(&bytes);
    }
    buf.extend_from_slice(&stake);
    buf
}

/// Computes the merkle root of `validators`, sorted by index first.
pub fn commitment<'a>(validators: impl IntoIterator<Item = &'a Validator>) -> H256 {
    let mut sorted: Vec<&Validator> = validators.into_iter().collect();
    sorted.sort_by_key(|v| v.index);
    let leaves: Vec<Vec<u8>> = sorted.into_iter().map(leaf).collect();
    H256(tree(&leaves))
}

/// Computes a merkle tree root from a list of byte values
pub fn tree(values: &[Vec<u8>]) -> [u8; 32] {
    if values.is_empty() {
        return [0u8; 32];
    }

    let depth = calculate_depth(values.len());
    build_tree(depth, values, &mut Keccak256::new())
}

/// Calculates the depth of the merkle tree
fn calculate_depth(length: usize) -> usize {
    if length <= 1 {
        return 0;
    }

    let bits_len = (length - 1).leading_zeros();
    (usize::BITS - bits_len) as usize
}

fn build_tree(depth: usize, values: &[Vec<u8>], hasher: &mut Keccak256) -> [u8; 32] {
    if values.is_empty() {
        return [0u8; 32];
    }

    if depth == 0 {
        // Leaf node: hash(0x01 || value)
        hasher.update(LEAF_MARKER);
        hasher.update(&values[0]);
        return finalize(hasher);
    }

    let split = std::cmp::min(1 << (depth - 1), values.len());
    let left_hash = build_tree(depth - 1, &values[..split], hasher);
    let right_hash = build_tree(depth - 1, &values[split..], hasher);

    // Internal node: hash(0x00 || left || right)
    hasher.update(INTERNAL_MARKER);
    hasher.update(left_hash);
    hasher.update(right_hash);
    finalize(hasher)
}

fn finalize(hasher: &mut Keccak256) -> [u8; 32] {
    let result = hasher.finalize_reset();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

#[cfg(test)]
mod tests {
    use super::*;
    use bls_validators_types::test_utils::create_validator_set;

    #[test]
    fn test_empty_commitment_is_zero() {
        assert_eq!(commitment(std::iter::empty::<&Validator>()), H256::zero());
    }

    #[test]
    fn test_single_leaf() {
        let set = create_validator_set(&[1000]);
        let mut hasher = Keccak256::new();
        hasher.update(LEAF_MARKER);
        hasher.update(leaf(&set[0]));
        assert_eq!(commitment(set.iter()), H256(finalize(&mut hasher)));
    }

    #[test]
    fn test_leaf_layout() {
        let set = create_validator_set(&[0x0102]);
        let encoded = leaf(&set[0]);
        assert_eq!(encoded.len(), 8 + 4 * COORDINATE_LENGTH + 2);
        assert_eq!(&encoded[..8], &0u64.to_be_bytes());
        // pub_key_from_seed(0) starts with x.c0 = 1
        assert_eq!(encoded[8 + COORDINATE_LENGTH - 1], 1);
        assert_eq!(&encoded[encoded.len() - 2..], &[0x01, 0x02]);
    }

    #[test]
    fn test_commitment_ignores_order() {
        let set = create_validator_set(&[10, 20, 30, 40, 50]);
        let mut reversed = set.0.clone();
        reversed.reverse();
        assert_eq!(commitment(set.iter()), commitment(reversed.iter()));
    }

    #[test]
    fn test_commitment_binds_stake() {
        let set = create_validator_set(&[10, 20, 30]);
        let mut changed = set.0.clone();
        changed[1].stake += 1u32;
        assert_ne!(commitment(set.iter()), commitment(changed.iter()));

        let fewer = &set[..2];
        assert_ne!(commitment(set.iter()), commitment(fewer.iter()));
    }

    /// Same tree construction as the chain-key merkle tree, checked against its golden vectors
    #[test]
    fn test_hash_tree_golden() {
        let expected_hex = [
            "3d4395573ce4d2acbce4fe8a4be67ca5e7cdfb8ee2e85b2f6733c16b24c3b175",
            "91b7c899421ca7f3228e10265c6970a03bc2ccba44367b1d44a9d8597b20a32e",
            "69abe78dc2390b4666b60d0582e1799e73e48766f6e502c515e79d6cd2ae3c45",
            "bc4ce8dbf993eb2e87c02bbf19cd4faeb3a0672188bc6be6c8d867cef9b08917",
            "538cfd0c1f6b7ab4c3d20466d4e01b438972212fe5257eae213ae0a040da977f",
        ];

        for (i, expected) in expected_hex.iter().enumerate() {
            let inputs: Vec<Vec<u8>> = (0..=i)
                .map(|j| format!("golden{:09}", j).into_bytes())
                .collect();
            assert_eq!(*expected, hex::encode(tree(&inputs)), "mismatch at index {}", i);
        }
    }

    #[test]
    fn test_tree_depth() {
        assert_eq!(calculate_depth(1), 0);
        assert_eq!(calculate_depth(2), 1);
        assert_eq!(calculate_depth(3), 2);
        assert_eq!(calculate_depth(4), 2);
        assert_eq!(calculate_depth(5), 3);
    }
}
