use std::path::Path;

use serde_json::Value;
use tokio::io::AsyncReadExt;

use crate::{Res, casing::KeyCase, types::KeyRow};

/// Reads a JSON document from `file`, or from stdin when `file` is `None`
/// or `-`.
pub async fn read_json_input(file: Option<&Path>) -> Res<Value> {
    let content = match file {
        Some(path) if path != Path::new("-") => async_fs::read_to_string(path)
            .await
            .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?,
        _ => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await?;
            buf
        }
    };

    parse_json(&content)
}

pub fn parse_json(content: &str) -> Res<Value> {
    if content.trim().is_empty() {
        return Err("Input is empty, expected a JSON document".into());
    }
    Ok(serde_json::from_str(content)?)
}

pub fn to_pretty_json(value: &Value) -> Res<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Converts every identifier into `case`, keeping input order.
pub fn convert_identifiers(identifiers: &[String], case: KeyCase) -> Vec<KeyRow> {
    identifiers
        .iter()
        .map(|ident| KeyRow {
            input: ident.clone(),
            output: case.apply(ident),
        })
        .collect()
}

/// clap value parser for `--case`.
pub fn parse_key_case(s: &str) -> Result<KeyCase, String> {
    s.parse()
}
