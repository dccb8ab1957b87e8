//! Hash reconciliation between a caller's view and the recorded view.
//!
//! The record is authoritative for which custodians a patient has registered:
//! only custodians present in `recorded` are ever reported. A custodian known
//! solely to the caller is ignored.

use soroban_sdk::{Env, Map, String, Vec};

/// Returns, in the record's key order, every custodian whose recorded hash is
/// missing from `caller` or differs from the caller's value.
pub fn stale_custodians(
    env: &Env,
    recorded: &Map<String, String>,
    caller: &Map<String, String>,
) -> Vec<String> {
    let mut flagged = Vec::new(env);
    for (custodian, hash) in recorded.iter() {
        match caller.get(custodian.clone()) {
            Some(held) if held == hash => {}
            _ => flagged.push_back(custodian),
        }
    }
    flagged
}
