// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use bls12_381::Scalar;

fn g1(k: u64) -> G1Affine {
    G1Affine::from(G1Affine::generator() * Scalar::from(k))
}

fn g2(k: u64) -> G2Affine {
    G2Affine::from(G2Affine::generator() * Scalar::from(k))
}

#[test]
fn test_codec_round_trip() {
    for k in [1u64, 2, 0xdead_beef] {
        let p = g1(k);
        assert_eq!(decode_g1(&encode_g1(&p)).unwrap(), p);

        let q = g2(k);
        assert_eq!(decode_g2(&encode_g2(&q)).unwrap(), q);
    }
}

#[test]
fn test_identity_encoding() {
    assert!(encode_g1(&G1Affine::identity()).is_zero());
    assert!(encode_g2(&G2Affine::identity()).is_zero());
    assert_eq!(
        decode_g1(&Signature::default()).unwrap(),
        G1Affine::identity()
    );

    assert!(matches!(
        decode_signature(&Signature::default()),
        Err(SignatureError::InvalidPoint(_))
    ));
    assert!(matches!(
        decode_pub_key(&PubKey::default()),
        Err(SignatureError::InvalidPoint(_))
    ));
}

/// The flat G2 encoding puts the real part of each coordinate first
#[test]
fn test_g2_coordinate_order() {
    let q = g2(1);
    let bytes = q.to_uncompressed();
    let flat = encode_g2(&q);
    assert_eq!(flat.0[0], BigUint::from_bytes_be(&bytes[48..96]));
    assert_eq!(flat.0[1], BigUint::from_bytes_be(&bytes[..48]));
    assert_eq!(flat.0[2], BigUint::from_bytes_be(&bytes[144..]));
    assert_eq!(flat.0[3], BigUint::from_bytes_be(&bytes[96..144]));
}

#[test]
fn test_unreduced_coordinate_rejected() {
    let mut sig = encode_g1(&g1(7));
    // Same residue, but not reduced.
    sig.0[0] += field_modulus();
    assert!(matches!(
        decode_g1(&sig),
        Err(SignatureError::InvalidPoint(_))
    ));

    let mut pk = encode_g2(&g2(7));
    pk.0[3] = field_modulus();
    assert!(matches!(decode_g2(&pk), Err(SignatureError::InvalidPoint(_))));

    // Would set the infinity flag if written unchecked.
    let flagged = Signature([BigUint::from(1u8) << 382, BigUint::from(0u8)]);
    assert!(matches!(
        decode_g1(&flagged),
        Err(SignatureError::InvalidPoint(_))
    ));

    let wide = Signature([BigUint::from(1u8) << 400, BigUint::from(1u8)]);
    assert!(matches!(decode_g1(&wide), Err(SignatureError::InvalidPoint(_))));
}

#[test]
fn test_off_curve_rejected() {
    let mut sig = encode_g1(&g1(3));
    sig.0[1] += 1u32;
    assert!(matches!(decode_g1(&sig), Err(SignatureError::InvalidPoint(_))));

    // (0, 2) satisfies y^2 = x^3 + 4 but lies outside the prime-order subgroup.
    let torsion = Signature([BigUint::from(0u8), BigUint::from(2u8)]);
    assert!(matches!(
        decode_g1(&torsion),
        Err(SignatureError::InvalidPoint(_))
    ));
}

#[test]
fn test_group_operations() {
    let a = encode_g1(&g1(5));
    let b = encode_g1(&g1(9));
    assert_eq!(g1_add(&a, &b).unwrap(), encode_g1(&g1(14)));
    assert_eq!(g1_mul(&a, &BigUint::from(3u8)).unwrap(), encode_g1(&g1(15)));
    assert!(g1_add(&a, &g1_negate(&a).unwrap()).unwrap().is_zero());

    let c = encode_g2(&g2(5));
    let d = encode_g2(&g2(9));
    assert_eq!(g2_add(&c, &d).unwrap(), encode_g2(&g2(14)));
    assert_eq!(g2_mul(&c, &BigUint::from(3u8)).unwrap(), encode_g2(&g2(15)));

    // Scalars are taken modulo the group order.
    let k = scalar_modulus() + 2u32;
    assert_eq!(g1_mul(&a, &k).unwrap(), encode_g1(&g1(10)));
    assert!(g2_mul(&c, &scalar_modulus()).unwrap().is_zero());
}

#[test]
fn test_pairing_check() {
    // e(2*g1, 3*g2) * e(-6*g1, g2) == 1
    let lhs = (encode_g1(&g1(2)), encode_g2(&g2(3)));
    let rhs = (g1_negate(&encode_g1(&g1(6))).unwrap(), encode_g2(&g2(1)));
    assert!(pairing_check(&[lhs.clone(), rhs]).unwrap());

    let wrong = (g1_negate(&encode_g1(&g1(5))).unwrap(), encode_g2(&g2(1)));
    assert!(!pairing_check(&[lhs, wrong]).unwrap());

    assert!(pairing_check(&[]).unwrap());
}
