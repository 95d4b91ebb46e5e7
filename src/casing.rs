//! Identifier case conversion between the application convention
//! (camelCase / PascalCase) and the wire convention (snake_case).
//!
//! All conversions are total: any input string, including the empty string,
//! produces an output string.

use std::{fmt, str::FromStr};

/// Target naming convention for a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// `email_address1`
    Snake,
    /// `emailAddress1`
    #[default]
    Camel,
    /// `EmailAddress1`
    Pascal,
}

impl KeyCase {
    pub const ALL: [KeyCase; 3] = [KeyCase::Snake, KeyCase::Camel, KeyCase::Pascal];

    /// Converts `identifier` into this case.
    ///
    /// `Snake` expects a humped input, `Camel` and `Pascal` expect a
    /// snake_case input.
    pub fn apply(&self, identifier: &str) -> String {
        match self {
            KeyCase::Snake => hump_to_snake(identifier),
            KeyCase::Camel => snake_to_camel(identifier),
            KeyCase::Pascal => snake_to_hump(identifier),
        }
    }
}

impl fmt::Display for KeyCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyCase::Snake => "snake",
            KeyCase::Camel => "camel",
            KeyCase::Pascal => "pascal",
        })
    }
}

impl FromStr for KeyCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let norm = s.trim().to_ascii_lowercase().replace(['-', '_'], "");
        match norm.as_str() {
            "snake" | "snakecase" => Ok(KeyCase::Snake),
            "camel" | "camelcase" => Ok(KeyCase::Camel),
            "pascal" | "pascalcase" => Ok(KeyCase::Pascal),
            "" => Err("case cannot be empty".to_string()),
            _ => Err(format!(
                "invalid value '{}': expected one of {}",
                s.trim(),
                KeyCase::ALL
                    .iter()
                    .map(|k| k.to_string())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// Converts a camelCase or PascalCase identifier to snake_case.
///
/// An underscore goes in front of every uppercase letter except a leading
/// one, then everything is lowercased. Digits stay with the word before them,
/// and a run of capitals is split per letter (`ABC` -> `a_b_c`) so that
/// [`snake_to_hump`] can restore it.
///
/// # Example
///
/// ```
/// assert_eq!(hump_to_snake("emailAddress1"), "email_address1");
/// assert_eq!(hump_to_snake("EmailAddress"), "email_address");
/// ```
pub fn hump_to_snake(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len() + 8);
    for (index, ch) in identifier.char_indices() {
        if ch.is_uppercase() {
            if index != 0 {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a camelCase identifier to snake_case.
pub fn camel_to_snake(identifier: &str) -> String {
    hump_to_snake(identifier)
}

/// Converts a PascalCase identifier to snake_case.
pub fn pascal_to_snake(identifier: &str) -> String {
    hump_to_snake(identifier)
}

/// Converts a snake_case identifier to PascalCase.
///
/// Every `_`-separated word is title-cased and the words are joined without
/// a separator. Empty words (doubled or leading underscores) vanish.
/// Use [`snake_to_camel`] when the first letter must stay lowercase.
///
/// # Example
///
/// ```
/// assert_eq!(snake_to_hump("email_address1"), "EmailAddress1");
/// ```
pub fn snake_to_hump(identifier: &str) -> String {
    identifier.split('_').map(title_case_word).collect()
}

/// Converts a snake_case identifier to camelCase.
pub fn snake_to_camel(identifier: &str) -> String {
    lowercase_first(&snake_to_hump(identifier))
}

/// Title-cases every space-separated word of `text`, keeping runs of spaces.
///
/// # Example
///
/// ```
/// assert_eq!(to_title_case("a mOsT uNUSUal"), "A Most Unusual");
/// ```
pub fn to_title_case(text: &str) -> String {
    text.split(' ')
        .map(title_case_word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Returns true when `identifier` already follows the wire convention:
/// only lowercase letters, digits and `_`.
pub fn is_snake_case(identifier: &str) -> bool {
    identifier
        .chars()
        .all(|c| c.is_lowercase() || c.is_ascii_digit() || c == '_')
}

fn title_case_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

fn lowercase_first(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
