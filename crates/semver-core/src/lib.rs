//! Parsing and precedence for Semantic Versioning 2.0.0 version strings.
//!
//! ```
//! use semver_core::{parse, sort};
//!
//! let mut versions = vec![
//!     parse("1.0.0").unwrap(),
//!     parse("1.0.0-rc.1").unwrap(),
//!     parse("0.9.12+build.7").unwrap(),
//! ];
//! sort(&mut versions);
//! assert_eq!(versions[0].to_string(), "0.9.12+build.7");
//! assert!(versions[1] < versions[2]);
//! ```

mod compare;
mod error;
mod identifier;
mod parser;
mod version;

pub use compare::{compare, sort, sorted};
pub use error::{Reason, ValidationError};
pub use identifier::{BuildMetadata, Identifier, Prerelease};
pub use parser::parse;
pub use version::Version;
