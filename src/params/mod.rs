//! Typed model parameter schemas.
//!
//! Each provider model exposes a handful of tunable parameters (temperature,
//! max tokens, image size, ...). A [`ParamSchema`] declares them, one
//! [`ParamSpec`] per parameter, and resolves caller-supplied values against
//! those declarations: rejecting unknown or ill-typed values and filling in
//! defaults.
//!
//! Schemas are written in YAML (or JSON):
//!
//! ```yaml
//! params:
//!   - name: temperature
//!     type: number
//!     min: 0
//!     max: 2
//!     default: 0.7
//!   - name: size
//!     type: enum
//!     values: ["256x256", "512x512", "1024x1024"]
//! ```

mod schema;
mod types;


pub use schema::ParamSchema;
pub use types::{ParamError, ParamKind, ParamSpec};
