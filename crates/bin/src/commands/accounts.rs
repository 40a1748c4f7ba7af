//! Account commands.
//!
//! Each command works on an already hydrated store. The store writes every change through
//! to storage itself, so nothing here saves explicitly.

use credbook::{AccountPatch, AccountStore, AccountType, parse_labels, validate};

use crate::cli::{AddArgs, Format, UpdateArgs};
use crate::output::{ACCOUNT_HEADERS, account_json, account_row, print_table};

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run the `list` command
pub fn list(store: &AccountStore, format: Format) -> CommandResult {
    match format {
        Format::Human => {
            if store.is_empty() {
                println!("No accounts.");
                return Ok(());
            }
            let rows: Vec<_> = store.accounts().iter().map(account_row).collect();
            print_table(&ACCOUNT_HEADERS, &rows);
        }
        Format::Json => {
            let accounts: Vec<_> = store.accounts().iter().map(account_json).collect();
            println!("{}", serde_json::to_string(&accounts)?);
        }
    }
    Ok(())
}

/// Run the `add` command
pub fn add(store: &mut AccountStore, args: &AddArgs, format: Format) -> CommandResult {
    let id = store.add_empty();
    if args.kind != AccountType::Ldap {
        store.set_type(&id, args.kind);
    }

    let mut patch = AccountPatch::new();
    if let Some(login) = &args.login {
        patch = patch.with_login(login.clone());
    }
    if let Some(password) = &args.password {
        patch = patch.with_password(Some(password.clone()));
    }
    if let Some(labels) = &args.labels {
        patch = patch.with_labels(parse_labels(labels));
    }
    if !patch.is_empty() {
        store.update_partial(&id, patch);
    }

    report(store, &id, "Added", format)
}

/// Run the `remove` command
pub fn remove(store: &mut AccountStore, id: &str, format: Format) -> CommandResult {
    require(store, id)?;
    store.remove(id);
    match format {
        Format::Human => println!("✓ Removed {id}"),
        Format::Json => println!("{}", serde_json::json!({ "removed": id })),
    }
    Ok(())
}

/// Run the `set-type` command
pub fn set_type(
    store: &mut AccountStore,
    id: &str,
    kind: AccountType,
    format: Format,
) -> CommandResult {
    require(store, id)?;
    store.set_type(id, kind);
    report(store, id, "Updated", format)
}

/// Run the `update` command
pub fn update(store: &mut AccountStore, args: &UpdateArgs, format: Format) -> CommandResult {
    require(store, &args.id)?;

    let mut patch = AccountPatch::new();
    if let Some(login) = &args.login {
        patch = patch.with_login(login.clone());
    }
    if args.clear_password {
        patch = patch.with_password(None);
    } else if let Some(password) = &args.password {
        patch = patch.with_password(Some(password.clone()));
    }
    if let Some(labels) = &args.labels {
        patch = patch.with_labels(parse_labels(labels));
    }
    if patch.is_empty() {
        return Err("nothing to update; pass --login, --password, --clear-password or --labels".into());
    }

    store.update_partial(&args.id, patch);
    report(store, &args.id, "Updated", format)
}

/// Run the `check` command
pub fn check(store: &AccountStore, format: Format) -> CommandResult {
    let invalid = store.invalid_ids();

    match format {
        Format::Human => {
            for id in &invalid {
                if let Some(account) = store.get(id) {
                    for issue in validate(account) {
                        println!("{id}: {issue}");
                    }
                }
            }
            if invalid.is_empty() {
                println!("✓ All {} accounts are valid", store.len());
            }
        }
        Format::Json => {
            let accounts: Vec<_> = invalid
                .iter()
                .filter_map(|id| store.get(id))
                .map(account_json)
                .collect();
            println!("{}", serde_json::json!({ "invalid": accounts }));
        }
    }

    if store.has_invalid() {
        return Err(format!("{} invalid account(s)", invalid.len()).into());
    }
    Ok(())
}

fn require(store: &AccountStore, id: &str) -> Result<(), Box<dyn std::error::Error>> {
    if store.get(id).is_none() {
        return Err(format!("no account with id {id}").into());
    }
    Ok(())
}

fn report(store: &AccountStore, id: &str, verb: &str, format: Format) -> CommandResult {
    let Some(account) = store.get(id) else {
        return Err(format!("no account with id {id}").into());
    };

    match format {
        Format::Human => {
            println!("✓ {verb} {id}");
            print_table(&ACCOUNT_HEADERS, &[account_row(account)]);
            for issue in validate(account) {
                println!("  warning: {issue}");
            }
        }
        Format::Json => println!("{}", serde_json::to_string(&account_json(account))?),
    }
    Ok(())
}
