//! Category ledger display formatting
//!
//! Renders a category as a fixed 30-column block:
//!
//! ```text
//! *************Food*************
//! deposit                1000.00
//! groceries               -10.15
//! Total: 989.85
//! ```

use crate::models::Category;

/// Width of the whole block
pub const LEDGER_WIDTH: usize = 30;

/// Width of the description column; longer descriptions are cut
pub const DESCRIPTION_WIDTH: usize = 23;

/// Width of the right-aligned amount column
pub const AMOUNT_WIDTH: usize = LEDGER_WIDTH - DESCRIPTION_WIDTH;

/// Format a category ledger; the result has no trailing newline
pub fn format_ledger(category: &Category) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:*^width$}\n",
        category.name(),
        width = LEDGER_WIDTH
    ));

    for entry in category.ledger() {
        let description: String = entry.description.chars().take(DESCRIPTION_WIDTH).collect();
        output.push_str(&format!(
            "{:<desc_width$}{:>amount_width$}\n",
            description,
            entry.amount,
            desc_width = DESCRIPTION_WIDTH,
            amount_width = AMOUNT_WIDTH
        ));
    }

    output.push_str(&format!("Total: {}", category.balance()));

    output
}

/// Format several ledgers, separated by newlines
pub fn format_ledgers<'a>(categories: impl IntoIterator<Item = &'a Category>) -> String {
    categories
        .into_iter()
        .map(format_ledger)
        .collect::<Vec<_>>()
        .join("\n")
}
