//! Property-based tests for hash reconciliation.
//!
//! Invariants tested:
//! - `validate_hash` returns nothing iff the caller holds an identical hash
//!   for every recorded custodian
//! - `validate_hash` is idempotent
//! - Updating a custodian's hash and presenting the new value clears its flag

use ehr_ledger::{EhrLedgerContract, EhrLedgerContractClient};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, Map, String};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn setup() -> (Env, EhrLedgerContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(EhrLedgerContract, ());
    let client = EhrLedgerContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    (env, client)
}

fn custodian(env: &Env, i: usize) -> String {
    let names = ["hosp-a", "hosp-b", "hosp-c", "hosp-d", "hosp-e", "hosp-f"];
    String::from_str(env, names[i % names.len()])
}

fn hash_value(env: &Env, v: u8) -> String {
    let values = ["h0", "h1", "h2", "h3"];
    String::from_str(env, values[(v % 4) as usize])
}

/// Recorded hashes built from (custodian index, hash value) pairs.
fn build_map(env: &Env, entries: &[(usize, u8)]) -> Map<String, String> {
    let mut map = Map::new(env);
    for &(i, v) in entries {
        map.set(custodian(env, i), hash_value(env, v));
    }
    map
}

fn create(env: &Env, client: &EhrLedgerContractClient<'static>, hashes: &Map<String, String>) {
    client.create_record(
        &Address::generate(env),
        &String::from_str(env, "p1"),
        &Map::new(env),
        hashes,
    );
}

// ── proptest! blocks ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_empty_iff_caller_matches_every_recorded_hash(
        recorded in prop::collection::vec((0usize..6, any::<u8>()), 0..6),
        caller in prop::collection::vec((0usize..6, any::<u8>()), 0..6),
    ) {
        let (env, client) = setup();
        let recorded = build_map(&env, &recorded);
        let caller = build_map(&env, &caller);
        create(&env, &client, &recorded);

        let stale = client.validate_hash(&String::from_str(&env, "p1"), &caller);

        let synchronized = recorded
            .iter()
            .all(|(k, v)| caller.get(k) == Some(v));
        prop_assert_eq!(stale.is_empty(), synchronized);

        for flagged in stale.iter() {
            prop_assert!(recorded.contains_key(flagged.clone()));
            prop_assert_ne!(caller.get(flagged.clone()), recorded.get(flagged));
        }
    }

    #[test]
    fn prop_validate_hash_idempotent(
        recorded in prop::collection::vec((0usize..6, any::<u8>()), 0..6),
        caller in prop::collection::vec((0usize..6, any::<u8>()), 0..6),
    ) {
        let (env, client) = setup();
        let recorded = build_map(&env, &recorded);
        let caller = build_map(&env, &caller);
        create(&env, &client, &recorded);
        let patient = String::from_str(&env, "p1");

        let first = client.validate_hash(&patient, &caller);
        let second = client.validate_hash(&patient, &caller);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_update_then_present_new_hash_clears_flag(
        recorded in prop::collection::vec((0usize..6, any::<u8>()), 1..6),
        pick in any::<prop::sample::Index>(),
        new_value in any::<u8>(),
    ) {
        let (env, client) = setup();
        let recorded_map = build_map(&env, &recorded);
        create(&env, &client, &recorded_map);
        let patient = String::from_str(&env, "p1");

        let (idx, _) = recorded[pick.index(recorded.len())];
        let target = custodian(&env, idx);
        let new_hash = hash_value(&env, new_value);
        client.update_hash(&Address::generate(&env), &patient, &target, &new_hash);

        let mut view = Map::new(&env);
        view.set(target.clone(), new_hash);
        let stale = client.validate_hash(&patient, &view);
        prop_assert!(!stale.contains(&target));
    }
}
