//! # API Module
//!
//! HTTP endpoints of the local mock backend. The mock speaks the wire
//! convention only, which makes it a quick way to check that a client
//! encodes its request bodies before sending them.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, returns status and crate version.
//! - [`echo`] - `POST /echo`, returns the JSON body unchanged when every key
//!   is snake_case, `422` with the offending key paths otherwise.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, routing::{get, post}};
//! use wirecase::api::{echo, health};
//!
//! let app = Router::new()
//!     .route("/health", get(health))
//!     .route("/echo", post(echo));
//! ```

mod echo;
mod health;

pub use echo::echo;
pub use health::health;
