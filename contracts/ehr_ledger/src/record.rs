//! Persistence of patient records.
//!
//! A record is always read and rewritten as a whole under `Record(patient_id)`;
//! there are no partial-field writes.

use soroban_sdk::{Address, Env, Map, String};

use crate::types::{DataKey, PatientRecord};
use crate::validation::MAX_CUSTODIANS;
use crate::ContractError;

fn record_key(patient_id: &String) -> DataKey {
    DataKey::Record(patient_id.clone())
}

fn owner_key(patient_id: &String) -> DataKey {
    DataKey::Owner(patient_id.clone())
}

pub fn new_record(
    acl: Map<String, u32>,
    pointers: Map<String, String>,
    hashes: Map<String, String>,
) -> PatientRecord {
    PatientRecord {
        acl,
        pointers,
        hashes,
    }
}

pub fn has_record(env: &Env, patient_id: &String) -> bool {
    env.storage().persistent().has(&record_key(patient_id))
}

pub fn load_record(env: &Env, patient_id: &String) -> Result<PatientRecord, ContractError> {
    let key = record_key(patient_id);
    let record: PatientRecord = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    ehr_common::extend_persistent_ttl(env, &key);

    // The owner entry must outlive every record it guards.
    let owner = owner_key(patient_id);
    if env.storage().persistent().has(&owner) {
        ehr_common::extend_persistent_ttl(env, &owner);
    }
    Ok(record)
}

pub fn store_record(env: &Env, patient_id: &String, record: &PatientRecord) {
    let key = record_key(patient_id);
    env.storage().persistent().set(&key, record);
    ehr_common::extend_persistent_ttl(env, &key);
}

pub fn load_owner(env: &Env, patient_id: &String) -> Result<Address, ContractError> {
    let key = owner_key(patient_id);
    let owner: Address = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    ehr_common::extend_persistent_ttl(env, &key);
    Ok(owner)
}

pub fn store_owner(env: &Env, patient_id: &String, owner: &Address) {
    let key = owner_key(patient_id);
    env.storage().persistent().set(&key, owner);
    ehr_common::extend_persistent_ttl(env, &key);
}

impl PatientRecord {
    /// Number of distinct custodians holding a pointer, a hash, or both.
    pub fn custodian_count(&self) -> u32 {
        let pointer_only = self
            .pointers
            .keys()
            .iter()
            .filter(|custodian| !self.hashes.contains_key(custodian.clone()))
            .count() as u32;
        self.hashes.len() + pointer_only
    }

    pub fn has_custodian(&self, custodian: &String) -> bool {
        self.pointers.contains_key(custodian.clone()) || self.hashes.contains_key(custodian.clone())
    }

    /// Fails with `CapacityExceeded` when writing `custodian` would add one
    /// custodian past `MAX_CUSTODIANS`. Existing custodians always fit.
    pub fn ensure_room_for(&self, custodian: &String) -> Result<(), ContractError> {
        if !self.has_custodian(custodian) && self.custodian_count() >= MAX_CUSTODIANS {
            return Err(ContractError::CapacityExceeded);
        }
        Ok(())
    }

    /// Inserts or overwrites both the pointer and the hash of `custodian`.
    pub fn upsert_entry(&mut self, custodian: &String, pointer: String, hash: String) {
        self.pointers.set(custodian.clone(), pointer);
        self.hashes.set(custodian.clone(), hash);
    }

    /// Inserts or overwrites the hash of `custodian`, leaving its pointer alone.
    pub fn upsert_hash(&mut self, custodian: &String, hash: String) {
        self.hashes.set(custodian.clone(), hash);
    }
}
