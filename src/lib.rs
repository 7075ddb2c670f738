//! Read environment variables into typed values.
//!
//! The type of the default value picks the parser: `get("PORT", 8080u16)`
//! reads `PORT` as a `u16` and falls back to `8080` when it is unset, empty
//! or invalid. `must_get` returns the same value together with an
//! [`Outcome`] saying which of those happened.
//!
//! ```rust
//! use typed_env::{EnvValue, Outcome};
//!
//! #[derive(Debug, PartialEq, EnvValue)]
//! struct Workers(usize);
//!
//! let (workers, outcome) = typed_env::must_get("TYPED_ENV_DOC_LIB_WORKERS", Workers(4));
//! assert_eq!(workers, Workers(4));
//! assert_eq!(outcome, Outcome::Unset);
//! ```

// Lets the derive macro's `::typed_env` paths resolve inside this crate
extern crate self as typed_env;

pub mod error;
pub mod kind;
pub mod parse;
pub mod reader;
pub mod source;
pub mod value;

// Re-export main types
pub use error::{EnvError, Outcome, format_errors};
pub use kind::Kind;
pub use parse::ParseError;
pub use reader::{EnvReader, get, must_get, resolve, try_get};
pub use source::{DotenvFile, Layered, ProcessEnv, Source};
pub use value::{EnvValue, Scalar};

pub use num_complex::{Complex32, Complex64};

// Re-export derive macro
pub use typed_env_macros::EnvValue;
