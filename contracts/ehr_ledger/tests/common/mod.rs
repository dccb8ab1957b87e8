#![allow(dead_code)]

use ehr_ledger::{EhrLedgerContract, EhrLedgerContractClient};
use soroban_sdk::{testutils::Address as _, Address, Env, Map, String};

pub struct TestContext {
    pub env: Env,
    pub client: EhrLedgerContractClient<'static>,
    pub admin: Address,
}

/// Creates a mocked Soroban environment, deploys the contract, and initializes admin.
pub fn setup_test_env() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(EhrLedgerContract, ());
    let client = EhrLedgerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    TestContext { env, client, admin }
}

pub fn s(env: &Env, v: &str) -> String {
    String::from_str(env, v)
}

/// Builds a custodian -> value map from string pairs.
pub fn string_map(env: &Env, pairs: &[(&str, &str)]) -> Map<String, String> {
    let mut map = Map::new(env);
    for (k, v) in pairs {
        map.set(s(env, k), s(env, v));
    }
    map
}

/// Creates a patient record and returns its owner.
pub fn create_patient(
    ctx: &TestContext,
    patient_id: &str,
    pointers: &[(&str, &str)],
    hashes: &[(&str, &str)],
) -> Address {
    let owner = Address::generate(&ctx.env);
    ctx.client.create_record(
        &owner,
        &s(&ctx.env, patient_id),
        &string_map(&ctx.env, pointers),
        &string_map(&ctx.env, hashes),
    );
    owner
}
