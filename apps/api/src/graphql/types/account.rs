//! Account GraphQL type

use async_graphql::{Enum, Object, ID};

use crate::models::account::AccountType as DbAccountType;
use crate::models::Account as DbAccount;

/// Enumeration for the account type object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Enum)]
pub enum AccountType {
    /// Cash account
    Cash,
    /// Savings account
    Savings,
    /// Expense account
    Expense,
    /// Income account
    Income,
}

impl From<DbAccountType> for AccountType {
    fn from(account_type: DbAccountType) -> Self {
        match account_type {
            DbAccountType::Cash => Self::Cash,
            DbAccountType::Savings => Self::Savings,
            DbAccountType::Expense => Self::Expense,
            DbAccountType::Income => Self::Income,
        }
    }
}

/// Account information exposed via GraphQL
pub struct Account {
    inner: DbAccount,
}

impl From<DbAccount> for Account {
    fn from(account: DbAccount) -> Self {
        Self { inner: account }
    }
}

#[Object]
impl Account {
    /// Id property from the account object.
    async fn id(&self) -> ID {
        ID::from(self.inner.id)
    }

    /// Type property from the account object.
    #[graphql(name = "type")]
    async fn account_type(&self) -> AccountType {
        self.inner.account_type.into()
    }

    /// Description property from the account object.
    async fn description(&self) -> &str {
        &self.inner.description
    }

    /// Owner id property from the account object.
    async fn owner_id(&self) -> ID {
        ID::from(self.inner.owner_id)
    }
}
