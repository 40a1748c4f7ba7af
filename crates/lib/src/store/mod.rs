//! The account store.
//!
//! [`AccountStore`] owns the authoritative, ordered list of accounts. Storage only mirrors it:
//! the stored list is read once by [`AccountStore::hydrate`], and from then on every change
//! flows outward.
//!
//! Changes are published through an explicit observer list. Each mutating operation first
//! replaces the in-memory state and then calls every observer with the full list.
//! Persistence is one such observer, installed by `hydrate`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use credbook::{AccountPatch, AccountStore, AccountType, InMemoryStorage};
//!
//! let mut store = AccountStore::new(Arc::new(InMemoryStorage::new()));
//! store.hydrate();
//!
//! let id = store.add_empty();
//! assert!(store.has_invalid());
//!
//! store.set_type(&id, AccountType::Local);
//! store.update_partial(
//!     &id,
//!     AccountPatch::new()
//!         .with_login("alice")
//!         .with_password(Some("hunter2".to_string())),
//! );
//! assert!(!store.has_invalid());
//! ```

use std::sync::Arc;

use crate::{
    account::{Account, AccountId, AccountPatch, AccountType},
    storage::Storage,
    validation,
};

mod config;
mod persistence;

pub use config::StoreConfig;

/// Callback invoked with the full account list after each change.
pub type Observer = Box<dyn FnMut(&[Account]) + Send>;

/// Handle returned by [`AccountStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// In-memory account list mirrored to a [`Storage`].
///
/// All operations are synchronous and infallible. Operations naming an unknown id are
/// silent no-ops.
pub struct AccountStore {
    storage: Arc<dyn Storage>,
    config: StoreConfig,
    accounts: Vec<Account>,
    hydrated: bool,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for AccountStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountStore")
            .field("storage", &self.storage)
            .field("config", &self.config)
            .field("accounts", &self.accounts.len())
            .field("hydrated", &self.hydrated)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl AccountStore {
    /// Creates an empty, un-hydrated store using the default storage key.
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_config(storage, StoreConfig::default())
    }

    pub fn with_config(storage: Arc<dyn Storage>, config: StoreConfig) -> Self {
        Self {
            storage,
            config,
            accounts: Vec::new(),
            hydrated: false,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Loads the stored account list and starts mirroring changes to storage.
    ///
    /// Runs at most once per store; later calls do nothing, even if the list has since
    /// been emptied. Read failures of any kind leave the store empty, and malformed stored
    /// records are dropped. Existing observers see the loaded list, then the current list is
    /// written back immediately.
    pub fn hydrate(&mut self) {
        if self.hydrated {
            return;
        }
        self.hydrated = true;

        let key = self.config.storage_key.clone();
        self.accounts = persistence::load_accounts(self.storage.as_ref(), &key);
        tracing::debug!(key, accounts = self.accounts.len(), "Hydrated account store");
        self.notify();

        let storage = Arc::clone(&self.storage);
        let persist =
            move |accounts: &[Account]| persistence::save_accounts(storage.as_ref(), &key, accounts);
        persist(&self.accounts);
        self.push_observer(Box::new(persist));
    }

    /// Whether [`AccountStore::hydrate`] has run.
    pub fn is_hydrated(&self) -> bool {
        self.hydrated
    }

    /// Appends a new empty `LDAP` account and returns its id.
    pub fn add_empty(&mut self) -> AccountId {
        let mut account = Account::empty();
        while self.get(&account.id).is_some() {
            account.id = AccountId::generate();
        }
        let id = account.id.clone();
        self.accounts.push(account);
        tracing::debug!(%id, "Added account");
        self.notify();
        id
    }

    /// Removes the account with the given id, if any.
    pub fn remove(&mut self, id: &str) {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id.as_str() != id);
        if self.accounts.len() != before {
            tracing::debug!(id, "Removed account");
            self.notify();
        }
    }

    /// Applies `patch` to the account with the given id, replacing the whole record.
    ///
    /// The password is taken as given; it is not coerced to match the type.
    pub fn update_partial(&mut self, id: &str, patch: AccountPatch) {
        let Some(index) = self.position(id) else {
            return;
        };
        self.accounts[index] = self.accounts[index].patched(patch);
        self.notify();
    }

    /// Switches the account's type, keeping the password consistent with it.
    ///
    /// `LDAP` clears the password. `LOCAL` keeps an existing password or starts from `""`.
    pub fn set_type(&mut self, id: &str, kind: AccountType) {
        let Some(index) = self.position(id) else {
            return;
        };
        self.accounts[index] = self.accounts[index].retyped(kind);
        self.notify();
    }

    /// Validity predicate, see [`validation::is_valid`].
    pub fn is_valid(&self, account: &Account) -> bool {
        validation::is_valid(account)
    }

    /// True if any account in the store fails validation.
    pub fn has_invalid(&self) -> bool {
        self.accounts.iter().any(|a| !validation::is_valid(a))
    }

    /// Ids of all accounts that fail validation, in list order.
    pub fn invalid_ids(&self) -> Vec<AccountId> {
        self.accounts
            .iter()
            .filter(|a| !validation::is_valid(a))
            .map(|a| a.id.clone())
            .collect()
    }

    /// The account list in display order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn get(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id.as_str() == id)
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Registers `observer` to be called with the full list after every change.
    ///
    /// The observer is not called for the current state; only for later changes.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&[Account]) + Send + 'static,
    {
        self.push_observer(Box::new(observer))
    }

    /// Removes an observer. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn push_observer(&mut self, observer: Observer) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.accounts.iter().position(|a| a.id.as_str() == id)
    }

    fn notify(&mut self) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&self.accounts);
        }
    }
}
