//! # Example: validator admission
//!
//! Generates a key pair, proves possession of it and registers it at slot 0,
//! then reads the slot back.
//!
//! ## Usage:
//! ```bash
//! cargo run -p bls-validators-registry --example add_validator
//! ```
use anyhow::Result;
use bls_validators_blssig::{BLSVerifier, keygen};
use bls_validators_registry::{Registry, RegistryConfig};
use bls_validators_types::{Slot, Stake};

fn main() -> Result<()> {
    let registry = Registry::new(
        RegistryConfig::default().with_min_stake(100u32),
        BLSVerifier::new(),
    );

    let (sk, pk) = keygen(&mut rand::thread_rng());
    let sig = sk.prove_possession();
    println!("public key: {:?}", pk.to_list());
    println!("proof of possession: {:?}", sig.to_list());

    let receipt = registry.add_validator(0, pk, &sig, Stake::from(1000u32))?;
    println!("receipt: {:?}", receipt);

    match registry.get_validator(0) {
        Slot::Active(v) => println!(
            "slot 0: key {}, stake {}, total stake {}",
            v.pub_key,
            v.stake,
            registry.total_stake()
        ),
        Slot::Empty => println!("slot 0: empty"),
    }
    println!("validator set commitment: {:?}", registry.commitment());
    Ok(())
}
