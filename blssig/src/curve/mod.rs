// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Group arithmetic on BLS12-381 points exchanged as flat field-element lists.
//!
//! Every coordinate must be reduced modulo the base field prime. Decoding checks
//! curve membership and the prime-order subgroup; the all-zero list is the point
//! at infinity.

use bls_validators_types::{BigUint, PubKey, Signature, SignatureError};
use bls12_381::{
    G1Affine, G1Projective, G2Affine, G2Prepared, G2Projective, Gt, Scalar, multi_miller_loop,
};

#[cfg(test)]
mod tests;

/// Length of a big-endian base field element
pub const FIELD_ELEMENT_LENGTH: usize = 48;

/// Length of an uncompressed G1 point
pub const G1_UNCOMPRESSED_LENGTH: usize = 2 * FIELD_ELEMENT_LENGTH;

/// Length of an uncompressed G2 point
pub const G2_UNCOMPRESSED_LENGTH: usize = 4 * FIELD_ELEMENT_LENGTH;

/// BLS12-381 base field modulus `p`, big-endian
const FIELD_MODULUS: [u8; FIELD_ELEMENT_LENGTH] = [
    0x1a, 0x01, 0x11, 0xea, 0x39, 0x7f, 0xe6, 0x9a, 0x4b, 0x1b, 0xa7, 0xb6, 0x43, 0x4b, 0xac, 0xd7,
    0x64, 0x77, 0x4b, 0x84, 0xf3, 0x85, 0x12, 0xbf, 0x67, 0x30, 0xd2, 0xa0, 0xf6, 0xb0, 0xf6, 0x24,
    0x1e, 0xab, 0xff, 0xfe, 0xb1, 0x53, 0xff, 0xff, 0xb9, 0xfe, 0xff, 0xff, 0xff, 0xff, 0xaa, 0xab,
];

/// BLS12-381 scalar field modulus `r` (the group order), big-endian
const SCALAR_MODULUS: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

pub fn field_modulus() -> BigUint {
    BigUint::from_bytes_be(&FIELD_MODULUS)
}

pub fn scalar_modulus() -> BigUint {
    BigUint::from_bytes_be(&SCALAR_MODULUS)
}

/// Reduces an arbitrary integer modulo the group order.
pub fn scalar_from_biguint(k: &BigUint) -> Scalar {
    let reduced = k % scalar_modulus();
    let mut wide = [0u8; 64];
    let le = reduced.to_bytes_le();
    wide[..le.len()].copy_from_slice(&le);
    Scalar::from_bytes_wide(&wide)
}

/// Writes `coord` as a 48-byte big-endian field element, rejecting values `>= p`.
fn write_coordinate(coord: &BigUint, out: &mut [u8]) -> Result<(), SignatureError> {
    let bytes = coord.to_bytes_be();
    if bytes.len() > FIELD_ELEMENT_LENGTH {
        return Err(SignatureError::InvalidPoint(
            "coordinate wider than a field element".into(),
        ));
    }

    let mut element = [0u8; FIELD_ELEMENT_LENGTH];
    element[FIELD_ELEMENT_LENGTH - bytes.len()..].copy_from_slice(&bytes);
    // Lexicographic order on equal-length big-endian arrays is numeric order.
    if element >= FIELD_MODULUS {
        return Err(SignatureError::InvalidPoint(
            "coordinate is not reduced modulo the field prime".into(),
        ));
    }

    out.copy_from_slice(&element);
    Ok(())
}

/// Decodes a G1 point. The all-zero encoding yields the identity.
pub fn decode_g1(point: &Signature) -> Result<G1Affine, SignatureError> {
    if point.is_zero() {
        return Ok(G1Affine::identity());
    }

    let [x, y] = point.coords();
    let mut buf = [0u8; G1_UNCOMPRESSED_LENGTH];
    write_coordinate(x, &mut buf[..FIELD_ELEMENT_LENGTH])?;
    write_coordinate(y, &mut buf[FIELD_ELEMENT_LENGTH..])?;

    Option::<G1Affine>::from(G1Affine::from_uncompressed(&buf)).ok_or(SignatureError::InvalidPoint(
        "G1 point is not on the curve or not in the prime-order subgroup".into(),
    ))
}

/// Decodes a G2 point. The all-zero encoding yields the identity.
pub fn decode_g2(point: &PubKey) -> Result<G2Affine, SignatureError> {
    if point.is_zero() {
        return Ok(G2Affine::identity());
    }

    // The uncompressed wire format puts the imaginary part of each coordinate first.
    let [x_c0, x_c1, y_c0, y_c1] = point.coords();
    let mut buf = [0u8; G2_UNCOMPRESSED_LENGTH];
    for (i, coord) in [x_c1, x_c0, y_c1, y_c0].into_iter().enumerate() {
        let start = i * FIELD_ELEMENT_LENGTH;
        write_coordinate(coord, &mut buf[start..start + FIELD_ELEMENT_LENGTH])?;
    }

    Option::<G2Affine>::from(G2Affine::from_uncompressed(&buf)).ok_or(SignatureError::InvalidPoint(
        "G2 point is not on the curve or not in the prime-order subgroup".into(),
    ))
}

pub fn encode_g1(point: &G1Affine) -> Signature {
    if bool::from(point.is_identity()) {
        return Signature::default();
    }

    let bytes = point.to_uncompressed();
    let (x, y) = bytes.split_at(FIELD_ELEMENT_LENGTH);
    Signature([BigUint::from_bytes_be(x), BigUint::from_bytes_be(y)])
}

pub fn encode_g2(point: &G2Affine) -> PubKey {
    if bool::from(point.is_identity()) {
        return PubKey::default();
    }

    let bytes = point.to_uncompressed();
    let element = |i: usize| {
        BigUint::from_bytes_be(&bytes[i * FIELD_ELEMENT_LENGTH..(i + 1) * FIELD_ELEMENT_LENGTH])
    };
    PubKey([element(1), element(0), element(3), element(2)])
}

/// Decodes a public key, rejecting the identity.
pub fn decode_pub_key(pub_key: &PubKey) -> Result<G2Affine, SignatureError> {
    let point = decode_g2(pub_key)?;
    if bool::from(point.is_identity()) {
        return Err(SignatureError::InvalidPoint(
            "public key is the point at infinity".into(),
        ));
    }
    Ok(point)
}

/// Decodes a signature, rejecting the identity.
pub fn decode_signature(sig: &Signature) -> Result<G1Affine, SignatureError> {
    let point = decode_g1(sig)?;
    if bool::from(point.is_identity()) {
        return Err(SignatureError::InvalidPoint(
            "signature is the point at infinity".into(),
        ));
    }
    Ok(point)
}

pub fn g1_add(a: &Signature, b: &Signature) -> Result<Signature, SignatureError> {
    let sum = G1Projective::from(decode_g1(a)?) + G1Projective::from(decode_g1(b)?);
    Ok(encode_g1(&G1Affine::from(sum)))
}

pub fn g1_mul(point: &Signature, k: &BigUint) -> Result<Signature, SignatureError> {
    let product = decode_g1(point)? * scalar_from_biguint(k);
    Ok(encode_g1(&G1Affine::from(product)))
}

pub fn g1_negate(point: &Signature) -> Result<Signature, SignatureError> {
    Ok(encode_g1(&-decode_g1(point)?))
}

pub fn g2_add(a: &PubKey, b: &PubKey) -> Result<PubKey, SignatureError> {
    let sum = G2Projective::from(decode_g2(a)?) + G2Projective::from(decode_g2(b)?);
    Ok(encode_g2(&G2Affine::from(sum)))
}

pub fn g2_mul(point: &PubKey, k: &BigUint) -> Result<PubKey, SignatureError> {
    let product = decode_g2(point)? * scalar_from_biguint(k);
    Ok(encode_g2(&G2Affine::from(product)))
}

/// Returns true iff the product of `e(g1_i, g2_i)` is the identity of GT.
///
/// An empty list is trivially true.
pub fn pairing_check(pairs: &[(Signature, PubKey)]) -> Result<bool, SignatureError> {
    let points = pairs
        .iter()
        .map(|(p, q)| Ok((decode_g1(p)?, decode_g2(q)?)))
        .collect::<Result<Vec<_>, SignatureError>>()?;
    Ok(pairing_product_is_identity(&points))
}

pub(crate) fn pairing_product_is_identity(pairs: &[(G1Affine, G2Affine)]) -> bool {
    if pairs.is_empty() {
        return true;
    }

    let prepared: Vec<G2Prepared> = pairs.iter().map(|(_, q)| G2Prepared::from(*q)).collect();
    let terms: Vec<(&G1Affine, &G2Prepared)> = pairs
        .iter()
        .zip(prepared.iter())
        .map(|((p, _), q)| (p, q))
        .collect();

    multi_miller_loop(&terms).final_exponentiation() == Gt::identity()
}
