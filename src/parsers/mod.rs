//! Dependency manifest parsers.
//!
//! Only `go.mod` is supported. The parser yields the direct requirements in
//! declaration order as fresh [`Dependency`](crate::model::Dependency) records.
//!
//! ```no_run
//! use gomod_browser::parsers::parse_go_mod;
//! use std::path::Path;
//!
//! let deps = parse_go_mod(Path::new("go.mod")).unwrap();
//! for dep in &deps {
//!     println!("{} {}", dep.path(), dep.version());
//! }
//! ```

mod gomod;

pub use gomod::{parse_go_mod, parse_go_mod_str, GoModParser, MANIFEST_FILE_NAME};
