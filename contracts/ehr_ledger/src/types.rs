use soroban_sdk::{contracttype, Map, String, Symbol};

/// Per-patient access-control and integrity metadata.
///
/// `pointers` and `hashes` are keyed by custodian identifier. Their key sets
/// may diverge: a custodian can hold a hash with no pointer recorded yet and
/// vice versa.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PatientRecord {
    /// Resource category -> permission level (always > 0)
    pub acl: Map<String, u32>,
    /// Custodian -> locator of that custodian's EHR blob in external storage
    pub pointers: Map<String, String>,
    /// Custodian -> hex-encoded commitment to the blob's current content
    pub hashes: Map<String, String>,
}

/// Storage keys
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    AclTemplate,
    /// Opaque bytes written through the raw `put` passthrough
    Raw(String),
    Record(String),
    Owner(String),
    /// Confidential payload addressed by (partition, label)
    Private(String, Symbol),
    /// Channel-derived commitment digest of the payload at (partition, label)
    PrivateDigest(String, Symbol),
}
