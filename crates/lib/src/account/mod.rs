//! Account records and the types they are built from.
//!
//! An [`Account`] is a flat, fully-determined value. The store never mutates one field by
//! field; updates build a complete replacement record (see [`Account::patched`] and
//! [`Account::retyped`]) and swap it in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

mod id;

pub use id::AccountId;

/// Credential type of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AccountType {
    /// Directory-backed credentials. Never stores a password.
    #[default]
    #[serde(rename = "LDAP")]
    Ldap,
    /// Local credentials with their own password.
    #[serde(rename = "LOCAL")]
    Local,
}

impl AccountType {
    /// The wire name, `"LDAP"` or `"LOCAL"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Ldap => "LDAP",
            AccountType::Local => "LOCAL",
        }
    }
}

impl std::fmt::Display for AccountType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("ldap") {
            Ok(AccountType::Ldap)
        } else if s.eq_ignore_ascii_case("local") {
            Ok(AccountType::Local)
        } else {
            Err(Error::UnknownAccountType(s.to_string()))
        }
    }
}

/// A short free-text tag attached to an account.
///
/// The length limit is applied by [`parse_labels`](crate::labels::parse_labels), not here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// A stored credential profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    #[serde(rename = "type")]
    pub kind: AccountType,
    pub login: String,
    /// Always `None` for valid `LDAP` accounts, `Some` for valid `LOCAL` ones.
    pub password: Option<String>,
    pub labels: Vec<Label>,
}

impl Account {
    /// A new `LDAP` account with a fresh id, empty login, no password and no labels.
    pub fn empty() -> Self {
        Self {
            id: AccountId::generate(),
            kind: AccountType::Ldap,
            login: String::new(),
            password: None,
            labels: Vec::new(),
        }
    }

    /// Returns a copy of this account with the patch applied.
    ///
    /// The id is always kept. The patch does not coerce the password to match the type;
    /// use [`Account::retyped`] for that.
    pub fn patched(&self, patch: AccountPatch) -> Self {
        Self {
            id: self.id.clone(),
            kind: patch.kind.unwrap_or(self.kind),
            login: patch.login.unwrap_or_else(|| self.login.clone()),
            password: match patch.password {
                Some(password) => password,
                None => self.password.clone(),
            },
            labels: patch.labels.unwrap_or_else(|| self.labels.clone()),
        }
    }

    /// Returns a copy of this account switched to `kind`, with the password coerced.
    ///
    /// Switching to `LDAP` drops the password. Switching to `LOCAL` keeps an existing
    /// password and otherwise starts from an empty one.
    pub fn retyped(&self, kind: AccountType) -> Self {
        let password = match kind {
            AccountType::Ldap => None,
            AccountType::Local => Some(self.password.clone().unwrap_or_default()),
        };
        Self {
            id: self.id.clone(),
            kind,
            login: self.login.clone(),
            password,
            labels: self.labels.clone(),
        }
    }
}

/// A partial update for an [`Account`].
///
/// A field left as `None` keeps its current value. A field set to `Some` replaces it, even
/// with an empty string or an empty label list. `password: Some(None)` clears the password.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub kind: Option<AccountType>,
    pub login: Option<String>,
    pub password: Option<Option<String>>,
    pub labels: Option<Vec<Label>>,
}

impl AccountPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, kind: AccountType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = Some(login.into());
        self
    }

    /// Sets the password, or clears it when given `None`.
    pub fn with_password(mut self, password: Option<String>) -> Self {
        self.password = Some(password);
        self
    }

    pub fn with_labels(mut self, labels: Vec<Label>) -> Self {
        self.labels = Some(labels);
        self
    }

    /// True when the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.login.is_none()
            && self.password.is_none()
            && self.labels.is_none()
    }
}
