//! In-memory stores standing in for PostgreSQL
//!
//! The account store records every bulk call so tests can assert how many
//! round trips an execution made and with which owner ids.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use ledger_api::models::{Account, NewOwner, Owner};
use ledger_api::repositories::{AccountStore, OwnerStore};
use uuid::Uuid;

/// Owner store backed by a `Vec`
#[derive(Default)]
pub struct MockOwnerStore {
    owners: Mutex<Vec<Owner>>,
}

impl MockOwnerStore {
    pub fn with_owners(owners: Vec<Owner>) -> Self {
        Self {
            owners: Mutex::new(owners),
        }
    }

    pub fn snapshot(&self) -> Vec<Owner> {
        self.owners.lock().unwrap().clone()
    }
}

#[async_trait]
impl OwnerStore for MockOwnerStore {
    async fn find_all(&self) -> Result<Vec<Owner>, sqlx::Error> {
        let mut owners = self.snapshot();
        owners.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(owners)
    }

    async fn find_by_id(&self, owner_id: Uuid) -> Result<Option<Owner>, sqlx::Error> {
        Ok(self.snapshot().into_iter().find(|o| o.id == owner_id))
    }

    async fn create(&self, input: NewOwner) -> Result<Owner, sqlx::Error> {
        let owner = Owner::create(input);
        self.owners.lock().unwrap().push(owner.clone());
        Ok(owner)
    }

    async fn update(&self, owner_id: Uuid, input: NewOwner) -> Result<Option<Owner>, sqlx::Error> {
        let mut owners = self.owners.lock().unwrap();
        Ok(owners.iter_mut().find(|o| o.id == owner_id).map(|owner| {
            owner.name = input.name;
            owner.address = input.address;
            owner.clone()
        }))
    }

    async fn delete(&self, owner_id: Uuid) -> Result<bool, sqlx::Error> {
        let mut owners = self.owners.lock().unwrap();
        let before = owners.len();
        owners.retain(|o| o.id != owner_id);
        Ok(owners.len() < before)
    }
}

/// Account store that counts bulk calls and can be told to fail
#[derive(Default)]
pub struct MockAccountStore {
    accounts: Vec<Account>,
    calls: Mutex<Vec<Vec<Uuid>>>,
    fail: bool,
}

impl MockAccountStore {
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        Self {
            accounts,
            ..Default::default()
        }
    }

    /// Every bulk call fails with a pool timeout
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    /// Owner ids passed to each bulk call, in call order
    pub fn calls(&self) -> Vec<Vec<Uuid>> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn find_by_owner_ids(
        &self,
        owner_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Account>>, sqlx::Error> {
        self.calls.lock().unwrap().push(owner_ids.to_vec());
        if self.fail {
            return Err(sqlx::Error::PoolTimedOut);
        }

        let mut grouped: HashMap<Uuid, Vec<Account>> =
            owner_ids.iter().map(|id| (*id, Vec::new())).collect();
        for account in &self.accounts {
            if let Some(bucket) = grouped.get_mut(&account.owner_id) {
                bucket.push(account.clone());
            }
        }
        Ok(grouped)
    }
}
