#![no_main]

use arbitrary::Arbitrary;
use ehr_ledger::{EhrLedgerContract, EhrLedgerContractClient};
use libfuzzer_sys::fuzz_target;
use soroban_sdk::{testutils::Address as _, Address, Env, Map, String};

const PATIENTS: [&str; 3] = ["p1", "p2", "p3"];
const CUSTODIANS: [&str; 4] = ["hA", "hB", "hC", "hD"];
const CATEGORIES: [&str; 6] = [
    "resource1",
    "resource2",
    "resource3",
    "resource4",
    "resource5",
    "unknown",
];

#[derive(Arbitrary, Debug)]
pub enum FuzzAction {
    Create { patient: u8 },
    UpdateEntry { patient: u8, custodian: u8, hash: u8 },
    UpdateHash { patient: u8, custodian: u8, hash: u8 },
    Revoke { patient: u8, category: u8, degree: u32 },
    Validate { patient: u8, held: Vec<(u8, u8)> },
    Commit { payload: Vec<u8> },
    Verify { payload: Vec<u8> },
}

fn pick<'a>(items: &[&'a str], n: u8) -> &'a str {
    items[n as usize % items.len()]
}

fn text(env: &Env, bytes: &[u8]) -> String {
    let ascii: std::string::String = bytes.iter().map(|b| (b'a' + b % 26) as char).collect();
    String::from_str(env, &ascii)
}

fuzz_target!(|actions: Vec<FuzzAction>| {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(EhrLedgerContract, ());
    let client = EhrLedgerContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    let owner = Address::generate(&env);
    let partition = String::from_str(&env, "fuzz");

    for action in actions {
        match action {
            FuzzAction::Create { patient } => {
                let _ = client.try_create_record(
                    &owner,
                    &String::from_str(&env, pick(&PATIENTS, patient)),
                    &Map::new(&env),
                    &Map::new(&env),
                );
            }
            FuzzAction::UpdateEntry {
                patient,
                custodian,
                hash,
            } => {
                let _ = client.try_update_entry(
                    &owner,
                    &String::from_str(&env, pick(&PATIENTS, patient)),
                    &String::from_str(&env, pick(&CUSTODIANS, custodian)),
                    &String::from_str(&env, "loc"),
                    &text(&env, &[hash]),
                );
            }
            FuzzAction::UpdateHash {
                patient,
                custodian,
                hash,
            } => {
                let _ = client.try_update_hash(
                    &owner,
                    &String::from_str(&env, pick(&PATIENTS, patient)),
                    &String::from_str(&env, pick(&CUSTODIANS, custodian)),
                    &text(&env, &[hash]),
                );
            }
            FuzzAction::Revoke {
                patient,
                category,
                degree,
            } => {
                let _ = client.try_revoke_access(
                    &owner,
                    &String::from_str(&env, pick(&PATIENTS, patient)),
                    &String::from_str(&env, pick(&CATEGORIES, category)),
                    &degree,
                );
            }
            FuzzAction::Validate { patient, held } => {
                let mut view = Map::new(&env);
                for (c, h) in held {
                    view.set(
                        String::from_str(&env, pick(&CUSTODIANS, c)),
                        text(&env, &[h]),
                    );
                }
                let _ = client.try_validate_hash(
                    &String::from_str(&env, pick(&PATIENTS, patient)),
                    &view,
                );
            }
            FuzzAction::Commit { payload } => {
                let _ = client.try_store_committed_payload(
                    &owner,
                    &partition,
                    &text(&env, &payload),
                );
            }
            FuzzAction::Verify { payload } => {
                let _ = client.try_verify_commitment(&partition, &text(&env, &payload));
            }
        }

        // Every stored permission level stays strictly positive.
        for patient in PATIENTS {
            if let Ok(Ok(record)) = client.try_get_record(&String::from_str(&env, patient)) {
                for (_, level) in record.acl.iter() {
                    assert!(level > 0);
                }
            }
        }
    }
});
