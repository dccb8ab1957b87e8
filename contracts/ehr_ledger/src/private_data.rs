//! # Confidential partitions
//!
//! Stores payloads addressed by `(partition, label)` and, next to each one,
//! the SHA-256 hex digest of what was last written. Readers of the digest
//! never need the payload itself, which is what lets a verifier check a
//! revealed payload against the commitment.

use soroban_sdk::{symbol_short, Env, String, Symbol};

use crate::commitment::payload_digest;
use crate::types::DataKey;
use crate::ContractError;

/// Label under which committed payloads are stored in a partition.
pub const PAYLOAD_LABEL: Symbol = symbol_short!("message");

fn payload_key(partition: &String, label: &Symbol) -> DataKey {
    DataKey::Private(partition.clone(), label.clone())
}

fn digest_key(partition: &String, label: &Symbol) -> DataKey {
    DataKey::PrivateDigest(partition.clone(), label.clone())
}

/// Writes `payload`, records its commitment digest and returns that digest.
pub fn put_private(
    env: &Env,
    partition: &String,
    label: &Symbol,
    payload: &String,
) -> Result<String, ContractError> {
    let digest = payload_digest(env, payload)?;

    let key = payload_key(partition, label);
    env.storage().persistent().set(&key, payload);
    ehr_common::extend_persistent_ttl(env, &key);

    let key = digest_key(partition, label);
    env.storage().persistent().set(&key, &digest);
    ehr_common::extend_persistent_ttl(env, &key);

    Ok(digest)
}

pub fn get_private(env: &Env, partition: &String, label: &Symbol) -> Option<String> {
    env.storage()
        .persistent()
        .get(&payload_key(partition, label))
}

pub fn get_private_digest(env: &Env, partition: &String, label: &Symbol) -> Option<String> {
    env.storage()
        .persistent()
        .get(&digest_key(partition, label))
}
