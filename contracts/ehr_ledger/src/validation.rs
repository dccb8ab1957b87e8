use soroban_sdk::{Map, String};

use crate::ContractError;

const MIN_ID_LEN: u32 = 1;
const MAX_ID_LEN: u32 = 64;

/// Upper bound on a confidential payload, in bytes.
pub const MAX_PAYLOAD_LEN: u32 = 2048;

/// Upper bound on a custodian pointer (location URI), in bytes.
pub const MAX_POINTER_LEN: u32 = 256;

/// Upper bound on a custodian content hash, in bytes.
pub const MAX_HASH_LEN: u32 = 128;

/// Custodians a single record may reference. Also caps the number of ACL
/// template categories. Keeps a whole record well under the host's
/// per-entry size limit.
pub const MAX_CUSTODIANS: u32 = 32;

/// Validate a patient, custodian or resource-category identifier.
/// Identifiers are opaque (DIDs, UUIDs, category names) but must be non-empty
/// and at most MAX_ID_LEN bytes.
pub fn validate_identifier(id: &String) -> Result<(), ContractError> {
    let len = id.len();
    if !(MIN_ID_LEN..=MAX_ID_LEN).contains(&len) {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

/// Every key of an ACL template must be a valid identifier and every level
/// strictly positive. An empty template is rejected.
pub fn validate_acl_template(template: &Map<String, u32>) -> Result<(), ContractError> {
    if template.is_empty() || template.len() > MAX_CUSTODIANS {
        return Err(ContractError::InvalidArgument);
    }
    for (category, level) in template.iter() {
        validate_identifier(&category)?;
        if level == 0 {
            return Err(ContractError::InvalidArgument);
        }
    }
    Ok(())
}

fn validate_bounded(value: &String, max: u32) -> Result<(), ContractError> {
    let len = value.len();
    if len == 0 || len > max {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}

pub fn validate_pointer(pointer: &String) -> Result<(), ContractError> {
    validate_bounded(pointer, MAX_POINTER_LEN)
}

pub fn validate_hash_value(hash: &String) -> Result<(), ContractError> {
    validate_bounded(hash, MAX_HASH_LEN)
}

/// Checks every key and value of a creation-time pointer or hash map.
pub fn validate_custodian_map(
    entries: &Map<String, String>,
    validate_value: fn(&String) -> Result<(), ContractError>,
) -> Result<(), ContractError> {
    for (custodian, value) in entries.iter() {
        validate_identifier(&custodian)?;
        validate_value(&value)?;
    }
    Ok(())
}

pub fn validate_payload(payload: &String) -> Result<(), ContractError> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return Err(ContractError::InvalidArgument);
    }
    Ok(())
}
