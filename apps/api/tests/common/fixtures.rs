//! Seed data mirroring the initial migration

#![allow(dead_code)]

use ledger_api::models::{Account, AccountType, Owner};
use uuid::Uuid;

pub const JOHN_ID: Uuid = Uuid::from_u128(0x5e6455ff_12c0_4b6b_80f8_e2ff35d68151);
pub const JANE_ID: Uuid = Uuid::from_u128(0x8a5d6e67_2802_4c7a_a337_dbd755e744bc);

/// Owner with no accounts anywhere in the fixtures
pub const LONELY_ID: Uuid = Uuid::from_u128(0x0c5c5c0a_0000_4000_8000_000000000001);

pub fn john() -> Owner {
    Owner {
        id: JOHN_ID,
        name: "John Doe".to_string(),
        address: "John Doe's address".to_string(),
    }
}

pub fn jane() -> Owner {
    Owner {
        id: JANE_ID,
        name: "Jane Doe".to_string(),
        address: "Jane Doe's address".to_string(),
    }
}

pub fn lonely() -> Owner {
    Owner {
        id: LONELY_ID,
        name: "Zed Nobody".to_string(),
        address: "Nowhere".to_string(),
    }
}

pub fn seed_owners() -> Vec<Owner> {
    vec![john(), jane()]
}

pub fn seed_accounts() -> Vec<Account> {
    vec![
        Account {
            id: Uuid::from_u128(0x7ac048f1_9aba_47e2_a8d8_b88bdfd271c7),
            account_type: AccountType::Cash,
            description: "Cash account for our users".to_string(),
            owner_id: JOHN_ID,
        },
        Account {
            id: Uuid::from_u128(0xb8462ef1_077d_451c_8669_212e32d6fa9a),
            account_type: AccountType::Savings,
            description: "Savings account for our users".to_string(),
            owner_id: JANE_ID,
        },
        Account {
            id: Uuid::from_u128(0x1e703cc7_2847_428f_a6b6_411e93e6a649),
            account_type: AccountType::Income,
            description: "Income account for our users".to_string(),
            owner_id: JANE_ID,
        },
    ]
}
