//! Property-based tests for commitment verification.
//!
//! Invariants tested:
//! - The exact committed payload always verifies
//! - Changing any single byte of the payload makes verification fail

use ehr_ledger::{ContractError, EhrLedgerContract, EhrLedgerContractClient};
use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

fn setup() -> (Env, EhrLedgerContractClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(EhrLedgerContract, ());
    let client = EhrLedgerContractClient::new(&env, &contract_id);
    client.initialize(&Address::generate(&env));

    (env, client)
}

proptest! {
    #[test]
    fn prop_committed_payload_verifies(payload in "[ -~]{0,256}") {
        let (env, client) = setup();
        let partition = String::from_str(&env, "collection");
        let payload = String::from_str(&env, &payload);

        client.store_committed_payload(&Address::generate(&env), &partition, &payload);
        prop_assert_eq!(client.try_verify_commitment(&partition, &payload), Ok(Ok(())));
    }

    #[test]
    fn prop_single_byte_change_fails(
        payload in "[a-z0-9]{1,256}",
        pick in any::<prop::sample::Index>(),
    ) {
        let (env, client) = setup();
        let partition = String::from_str(&env, "collection");

        let mut tampered = payload.clone().into_bytes();
        let at = pick.index(tampered.len());
        tampered[at] = if tampered[at] == b'#' { b'$' } else { b'#' };
        let tampered = std::string::String::from_utf8(tampered).unwrap();

        client.store_committed_payload(
            &Address::generate(&env),
            &partition,
            &String::from_str(&env, &payload),
        );
        prop_assert_eq!(
            client.try_verify_commitment(&partition, &String::from_str(&env, &tampered)),
            Err(Ok(ContractError::VerificationFailed))
        );
    }
}
