//! Account validation.
//!
//! Two separate checks live here:
//!
//! * [`validate`] / [`is_valid`]: whether a record satisfies the login and type/password
//!   rules. Invalid records are normal state, not errors; the store reports them through
//!   [`AccountStore::has_invalid`](crate::store::AccountStore::has_invalid).
//! * [`is_well_formed`]: whether a raw JSON value read back from storage has the shape of an
//!   account at all. Values that fail are dropped during hydration.

use serde_json::Value;
use thiserror::Error;

use crate::{
    account::{Account, AccountType},
    constants::{MAX_LOGIN_LEN, MAX_PASSWORD_LEN},
};

/// A reason an account fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("login is empty")]
    LoginEmpty,

    #[error("login is {len} characters long, at most {max} allowed", max = MAX_LOGIN_LEN)]
    LoginTooLong { len: usize },

    #[error("LOCAL account has no password")]
    PasswordMissing,

    #[error("LOCAL account has an empty password")]
    PasswordEmpty,

    #[error("password is {len} characters long, at most {max} allowed", max = MAX_PASSWORD_LEN)]
    PasswordTooLong { len: usize },

    #[error("LDAP account must not store a password")]
    PasswordNotAllowed,
}

/// Lists every rule `account` breaks. Empty when the account is valid.
pub fn validate(account: &Account) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let login_len = account.login.trim().chars().count();
    if login_len == 0 {
        issues.push(ValidationIssue::LoginEmpty);
    } else if login_len > MAX_LOGIN_LEN {
        issues.push(ValidationIssue::LoginTooLong { len: login_len });
    }

    match (account.kind, &account.password) {
        (AccountType::Local, None) => issues.push(ValidationIssue::PasswordMissing),
        (AccountType::Local, Some(password)) => {
            let len = password.chars().count();
            if len == 0 {
                issues.push(ValidationIssue::PasswordEmpty);
            } else if len > MAX_PASSWORD_LEN {
                issues.push(ValidationIssue::PasswordTooLong { len });
            }
        }
        (AccountType::Ldap, Some(_)) => issues.push(ValidationIssue::PasswordNotAllowed),
        (AccountType::Ldap, None) => {}
    }

    issues
}

/// True when the account's login is usable and its password matches its type.
pub fn is_valid(account: &Account) -> bool {
    validate(account).is_empty()
}

/// Checks that a stored value has the shape of an account.
///
/// Requires a string `id`, an array `labels`, a `type` of `"LDAP"` or `"LOCAL"`, a string
/// `login`, and a `password` that is a string or `null` (a missing password is rejected).
/// Unknown extra fields are tolerated.
pub fn is_well_formed(value: &Value) -> bool {
    let Some(obj) = value.as_object() else {
        return false;
    };

    let id_ok = obj.get("id").is_some_and(Value::is_string);
    let labels_ok = obj.get("labels").is_some_and(Value::is_array);
    let type_ok = obj
        .get("type")
        .and_then(Value::as_str)
        .is_some_and(|t| t == "LDAP" || t == "LOCAL");
    let login_ok = obj.get("login").is_some_and(Value::is_string);
    let password_ok = obj
        .get("password")
        .is_some_and(|p| p.is_string() || p.is_null());

    id_ok && labels_ok && type_ok && login_ok && password_ok
}
