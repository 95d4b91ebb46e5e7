use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{transcode, warning};

/// Echoes a wire-convention body back to the caller.
///
/// Bodies with any key that is not snake_case are answered with
/// `422 Unprocessable Entity` and the offending key paths.
pub async fn echo(Json(body): Json<Value>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let keys = transcode::non_wire_keys(&body);
    if keys.is_empty() {
        return Ok(Json(body));
    }

    warning!("Rejected body with {} non-wire key(s)", keys.len());
    Err((
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "error": "keys must be snake_case",
            "keys": keys,
        })),
    ))
}
