//! Storage TTL conventions shared by every EHR ledger contract.

use soroban_sdk::{Env, IntoVal, Val};

/// Extend a persistent entry once its remaining TTL drops below this many ledgers.
pub const TTL_THRESHOLD: u32 = 5_184_000;
/// Target TTL (in ledgers) after an extension.
pub const TTL_EXTEND_TO: u32 = 10_368_000;

/// Extends the TTL of instance storage (admin, configuration).
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Extends the TTL of a persistent storage key.
pub fn extend_persistent_ttl<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}
