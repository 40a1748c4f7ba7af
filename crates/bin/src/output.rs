//! Output formatting helpers for human-readable and JSON output.

use credbook::{Account, format_labels, validate};

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    // Column widths are measured in chars so labels with accents still line up
    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line: Vec<String> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| format!("{:<width$}", h, width = widths[i]))
        .collect();
    println!("{}", header_line.join("  ").trim_end());

    for row in rows {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .take(col_count)
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        println!("{}", line.join("  ").trim_end());
    }
}

/// Table row for one account. Passwords are never printed.
pub fn account_row(account: &Account) -> Vec<String> {
    vec![
        account.id.to_string(),
        account.kind.to_string(),
        account.login.clone(),
        match &account.password {
            Some(_) => "set".to_string(),
            None => "-".to_string(),
        },
        format_labels(&account.labels),
        if validate(account).is_empty() {
            "yes".to_string()
        } else {
            "no".to_string()
        },
    ]
}

pub const ACCOUNT_HEADERS: [&str; 6] = ["ID", "TYPE", "LOGIN", "PASSWORD", "LABELS", "VALID"];

/// JSON summary of one account, with the password reduced to a presence flag.
pub fn account_json(account: &Account) -> serde_json::Value {
    let issues: Vec<String> = validate(account).iter().map(ToString::to_string).collect();
    serde_json::json!({
        "id": account.id,
        "type": account.kind,
        "login": account.login,
        "has_password": account.password.is_some(),
        "labels": account.labels,
        "valid": issues.is_empty(),
        "issues": issues,
    })
}
