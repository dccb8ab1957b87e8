//! Commit-then-reveal verification of confidential payloads.

use soroban_sdk::{Env, String};

use crate::private_data::{self, PAYLOAD_LABEL};
use crate::validation::{self, MAX_PAYLOAD_LEN};
use crate::ContractError;

/// SHA-256 hex digest of the UTF-8 bytes of `payload`.
pub fn payload_digest(env: &Env, payload: &String) -> Result<String, ContractError> {
    validation::validate_payload(payload)?;
    let len = payload.len() as usize;
    let mut buf = [0u8; MAX_PAYLOAD_LEN as usize];
    payload.copy_into_slice(&mut buf[..len]);
    Ok(ehr_common::sha256_hex_slice(env, &buf[..len]))
}

/// Succeeds only when the digest of `payload` equals the commitment recorded
/// for `partition`. A missing commitment or an oversize payload can never
/// match and is reported as a verification failure.
pub fn verify(env: &Env, partition: &String, payload: &String) -> Result<(), ContractError> {
    let recorded = private_data::get_private_digest(env, partition, &PAYLOAD_LABEL)
        .ok_or(ContractError::VerificationFailed)?;
    let current =
        payload_digest(env, payload).map_err(|_| ContractError::VerificationFailed)?;
    if current != recorded {
        return Err(ContractError::VerificationFailed);
    }
    Ok(())
}
