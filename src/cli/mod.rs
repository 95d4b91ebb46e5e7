//! # CLI Module
//!
//! Command implementations behind the `wirecase` binary. Each command
//! delegates to the library modules and reports problems through the
//! crate's console macros; fatal problems end the process with exit code 1.
//!
//! ## Commands
//!
//! - [`snake`] - converts humped identifiers to snake_case
//! - [`hump`] - converts snake_case identifiers to camelCase or PascalCase
//! - [`encode`] - rewrites a JSON document into the wire convention
//! - [`decode`] - rewrites a wire JSON document into the application convention
//! - [`post`] - sends a document to the configured API with the standard encoding
//! - [`serve`] - runs the local mock wire API
//!
//! ## Usage Patterns
//!
//! ```bash
//! wirecase snake emailAddress1 IanaTimezone     # email_address1, iana_timezone
//! wirecase hump --case pascal email_address1    # EmailAddress1
//! echo '{"languageCode":"es"}' | wirecase encode
//! wirecase decode response.json
//! wirecase post /api/user/get_user_schedule_1 request.json
//! ```

mod convert;
mod document;
mod post;
mod serve;

pub use convert::hump;
pub use convert::snake;
pub use document::decode;
pub use document::encode;
pub use post::post;
pub use serve::serve;
