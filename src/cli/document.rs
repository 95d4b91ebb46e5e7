use std::path::PathBuf;

use serde_json::Value;

use crate::{casing::KeyCase, error, transcode, utils};

/// Reads a JSON document and prints it with snake_case keys.
pub async fn encode(file: Option<PathBuf>) {
    let input = load(file).await;
    print(&transcode::encode_value(&input));
}

/// Reads a wire JSON document and prints it with humped keys.
pub async fn decode(file: Option<PathBuf>, case: KeyCase) {
    let input = load(file).await;
    print(&transcode::decode_value_as(&input, case));
}

pub(super) async fn load(file: Option<PathBuf>) -> Value {
    match utils::read_json_input(file.as_deref()).await {
        Ok(value) => value,
        Err(e) => error!("Cannot read JSON input. Err: {}", e),
    }
}

pub(super) fn print(value: &Value) {
    match utils::to_pretty_json(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Cannot serialize output. Err: {}", e),
    }
}
