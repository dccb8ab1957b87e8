use soroban_sdk::{symbol_short, Address, Env, Map, String};

/// Event published when the contract is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when the admin installs a new ACL template.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AclTemplateSetEvent {
    pub admin: Address,
    pub template: Map<String, u32>,
    pub timestamp: u64,
}

/// Event published when a patient record is created.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordCreatedEvent {
    pub patient_id: String,
    pub owner: Address,
    pub custodians: u32,
    pub timestamp: u64,
}

/// Event published when a custodian's pointer and hash are written together.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EntryUpdatedEvent {
    pub patient_id: String,
    pub custodian_id: String,
    pub caller: Address,
    pub timestamp: u64,
}

/// Event published when only a custodian's hash changes.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashUpdatedEvent {
    pub patient_id: String,
    pub custodian_id: String,
    pub hash: String,
    pub caller: Address,
    pub timestamp: u64,
}

/// Event published when a permission level is lowered.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AccessRevokedEvent {
    pub patient_id: String,
    pub category: String,
    pub old_level: u32,
    pub new_level: u32,
    pub timestamp: u64,
}

/// Event published when a payload is committed to a confidential partition.
/// Carries the commitment digest, never the payload.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayloadStoredEvent {
    pub partition: String,
    pub digest: String,
    pub caller: Address,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_acl_template_set(env: &Env, admin: Address, template: Map<String, u32>) {
    let topics = (symbol_short!("ACL_TPL"),);
    let data = AclTemplateSetEvent {
        admin,
        template,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when a patient record is created.
/// `custodians` counts distinct custodians holding a pointer, a hash, or both.
pub fn publish_record_created(env: &Env, patient_id: String, owner: Address, custodians: u32) {
    let topics = (symbol_short!("REC_NEW"), patient_id.clone());
    let data = RecordCreatedEvent {
        patient_id,
        owner,
        custodians,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_entry_updated(env: &Env, patient_id: String, custodian_id: String, caller: Address) {
    let topics = (
        symbol_short!("ENTRY_UP"),
        patient_id.clone(),
        custodian_id.clone(),
    );
    let data = EntryUpdatedEvent {
        patient_id,
        custodian_id,
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_hash_updated(
    env: &Env,
    patient_id: String,
    custodian_id: String,
    hash: String,
    caller: Address,
) {
    let topics = (
        symbol_short!("HASH_UP"),
        patient_id.clone(),
        custodian_id.clone(),
    );
    let data = HashUpdatedEvent {
        patient_id,
        custodian_id,
        hash,
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes an event when an ACL level is degraded.
/// Includes both the previous and the resulting level.
pub fn publish_access_revoked(
    env: &Env,
    patient_id: String,
    category: String,
    old_level: u32,
    new_level: u32,
) {
    let topics = (symbol_short!("ACL_REV"), patient_id.clone());
    let data = AccessRevokedEvent {
        patient_id,
        category,
        old_level,
        new_level,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_payload_stored(env: &Env, partition: String, digest: String, caller: Address) {
    let topics = (symbol_short!("PAY_PUT"), partition.clone());
    let data = PayloadStoredEvent {
        partition,
        digest,
        caller,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}
