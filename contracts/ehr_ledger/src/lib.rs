#![no_std]

#[cfg(test)]
extern crate std;

pub mod acl;
pub mod commitment;
pub mod errors;
pub mod events;
pub mod private_data;
pub mod reconcile;
pub mod record;
pub mod types;
pub mod validation;


use soroban_sdk::{contract, contractimpl, Address, Bytes, Env, Map, String, Vec};

pub use errors::ContractError;
pub use types::{DataKey, PatientRecord};

use private_data::PAYLOAD_LABEL;

#[contract]
pub struct EhrLedgerContract;

#[contractimpl]
impl EhrLedgerContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the contract with an administrator and the default ACL template
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        acl::store_template(&env, &acl::default_template(&env));

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Get the admin address
    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)
    }

    /// Check if the contract is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&DataKey::Admin)
    }

    /// Replace the ACL template applied to records created from now on.
    /// Existing records keep the ACL they were created with.
    pub fn set_acl_template(
        env: Env,
        caller: Address,
        template: Map<String, u32>,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        validation::validate_acl_template(&template)?;
        acl::store_template(&env, &template);

        events::publish_acl_template_set(&env, caller, template);

        Ok(())
    }

    pub fn get_acl_template(env: Env) -> Result<Map<String, u32>, ContractError> {
        acl::load_template(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Raw ledger passthrough ───────────────────────────────────────────────

    /// Store opaque bytes under `key`. Kept apart from patient records.
    pub fn put(env: Env, key: String, value: Bytes) -> Result<(), ContractError> {
        validation::validate_identifier(&key)?;
        let key = DataKey::Raw(key);
        env.storage().persistent().set(&key, &value);
        ehr_common::extend_persistent_ttl(&env, &key);
        Ok(())
    }

    pub fn get(env: Env, key: String) -> Result<Bytes, ContractError> {
        let value: Bytes = env
            .storage()
            .persistent()
            .get(&DataKey::Raw(key))
            .unwrap_or(Bytes::new(&env));
        if value.is_empty() {
            return Err(ContractError::NotFound);
        }
        Ok(value)
    }

    // ── Patient records ──────────────────────────────────────────────────────

    /// Create the record for `patient_id` with the current ACL template and
    /// the custodian pointer/hash maps prepared by the caller.
    ///
    /// Returns the patient id as confirmation that `owner` now holds the record.
    pub fn create_record(
        env: Env,
        owner: Address,
        patient_id: String,
        pointers: Map<String, String>,
        hashes: Map<String, String>,
    ) -> Result<String, ContractError> {
        owner.require_auth();
        validation::validate_identifier(&patient_id)?;
        validation::validate_custodian_map(&pointers, validation::validate_pointer)?;
        validation::validate_custodian_map(&hashes, validation::validate_hash_value)?;

        let template = acl::load_template(&env)?;

        if record::has_record(&env, &patient_id) {
            return Err(ContractError::AlreadyExists);
        }

        let patient_record = record::new_record(template, pointers, hashes);
        let custodians = patient_record.custodian_count();
        if custodians > validation::MAX_CUSTODIANS {
            return Err(ContractError::CapacityExceeded);
        }
        record::store_record(&env, &patient_id, &patient_record);
        record::store_owner(&env, &patient_id, &owner);

        events::publish_record_created(&env, patient_id.clone(), owner, custodians);

        Ok(patient_id)
    }

    pub fn get_record(env: Env, patient_id: String) -> Result<PatientRecord, ContractError> {
        record::load_record(&env, &patient_id)
    }

    pub fn get_owner(env: Env, patient_id: String) -> Result<Address, ContractError> {
        record::load_owner(&env, &patient_id)
    }

    pub fn has_record(env: Env, patient_id: String) -> bool {
        record::has_record(&env, &patient_id)
    }

    /// Insert or overwrite a custodian's pointer and hash in one write.
    pub fn update_entry(
        env: Env,
        caller: Address,
        patient_id: String,
        custodian_id: String,
        pointer: String,
        hash: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        validation::validate_identifier(&custodian_id)?;
        validation::validate_pointer(&pointer)?;
        validation::validate_hash_value(&hash)?;

        let mut patient_record = record::load_record(&env, &patient_id)?;
        patient_record.ensure_room_for(&custodian_id)?;
        patient_record.upsert_entry(&custodian_id, pointer, hash);
        record::store_record(&env, &patient_id, &patient_record);

        events::publish_entry_updated(&env, patient_id, custodian_id, caller);

        Ok(())
    }

    /// Insert or overwrite a custodian's hash. The pointer map is untouched,
    /// so a custodian never seen before ends up with a hash and no pointer.
    pub fn update_hash(
        env: Env,
        caller: Address,
        patient_id: String,
        custodian_id: String,
        new_hash: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        validation::validate_identifier(&custodian_id)?;
        validation::validate_hash_value(&new_hash)?;

        let mut patient_record = record::load_record(&env, &patient_id)?;
        patient_record.ensure_room_for(&custodian_id)?;
        patient_record.upsert_hash(&custodian_id, new_hash.clone());
        record::store_record(&env, &patient_id, &patient_record);

        events::publish_hash_updated(&env, patient_id, custodian_id, new_hash, caller);

        Ok(())
    }

    /// Lower the permission level of `category` by `degree`.
    ///
    /// Only the record owner may degrade its ACL. A degree that would bring
    /// the level to zero or below fails with `OutOfRange` and nothing is
    /// written.
    pub fn revoke_access(
        env: Env,
        caller: Address,
        patient_id: String,
        category: String,
        degree: u32,
    ) -> Result<(), ContractError> {
        caller.require_auth();

        let mut patient_record = record::load_record(&env, &patient_id)?;
        let owner = record::load_owner(&env, &patient_id)?;
        if caller != owner {
            return Err(ContractError::Unauthorized);
        }

        let (old_level, new_level) = acl::degrade(&mut patient_record.acl, &category, degree)?;
        record::store_record(&env, &patient_id, &patient_record);

        events::publish_access_revoked(&env, patient_id, category, old_level, new_level);

        Ok(())
    }

    /// Custodians whose recorded hash is missing from, or differs from,
    /// `caller_hashes`, in the record's key order. An empty result means the
    /// caller is fully synchronized.
    ///
    /// Custodians present only in `caller_hashes` are never reported: the
    /// record decides which custodians a patient has registered.
    pub fn validate_hash(
        env: Env,
        patient_id: String,
        caller_hashes: Map<String, String>,
    ) -> Result<Vec<String>, ContractError> {
        let patient_record = record::load_record(&env, &patient_id)?;
        Ok(reconcile::stale_custodians(
            &env,
            &patient_record.hashes,
            &caller_hashes,
        ))
    }

    // ── Commitment verification ──────────────────────────────────────────────

    /// Commit `payload` to a confidential partition. The partition records the
    /// payload's SHA-256 digest alongside it.
    pub fn store_committed_payload(
        env: Env,
        caller: Address,
        partition: String,
        payload: String,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        validation::validate_identifier(&partition)?;

        let digest = private_data::put_private(&env, &partition, &PAYLOAD_LABEL, &payload)?;

        events::publish_payload_stored(&env, partition, digest, caller);

        Ok(())
    }

    pub fn retrieve_committed_payload(
        env: Env,
        partition: String,
    ) -> Result<String, ContractError> {
        private_data::get_private(&env, &partition, &PAYLOAD_LABEL)
            .ok_or(ContractError::NotFound)
    }

    pub fn get_commitment_digest(env: Env, partition: String) -> Result<String, ContractError> {
        private_data::get_private_digest(&env, &partition, &PAYLOAD_LABEL)
            .ok_or(ContractError::NotFound)
    }

    /// Check a revealed payload against the partition's recorded commitment.
    pub fn verify_commitment(
        env: Env,
        partition: String,
        payload: String,
    ) -> Result<(), ContractError> {
        commitment::verify(&env, &partition, &payload)
    }

    // ── Internal Helpers ─────────────────────────────────────────────────────

    fn require_admin(env: &Env, caller: &Address) -> Result<(), ContractError> {
        let admin: Address = env
            .storage()
            .instance()
            .get(&DataKey::Admin)
            .ok_or(ContractError::NotInitialized)?;
        if *caller != admin {
            return Err(ContractError::Unauthorized);
        }
        ehr_common::extend_instance_ttl(env);
        Ok(())
    }
}
