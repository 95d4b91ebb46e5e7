use tabled::Table;

use crate::{casing::KeyCase, error, utils};

/// Prints a table of identifiers converted to snake_case.
pub fn snake(identifiers: Vec<String>) {
    print_table(&identifiers, KeyCase::Snake);
}

/// Prints a table of snake_case identifiers converted to camelCase or
/// PascalCase.
pub fn hump(identifiers: Vec<String>, case: KeyCase) {
    if case == KeyCase::Snake {
        error!("`hump` converts to camel or pascal case, use `snake` for snake_case");
    }
    print_table(&identifiers, case);
}

fn print_table(identifiers: &[String], case: KeyCase) {
    if identifiers.is_empty() {
        error!("No identifiers given");
    }

    let rows = utils::convert_identifiers(identifiers, case);
    println!("{}", Table::new(rows));
}
