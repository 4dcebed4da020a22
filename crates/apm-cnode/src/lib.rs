//! Configuration tree for audio policy files.
//!
//! Parses the hierarchical `name { ... }` / `name value` text format into an
//! immutable tree of [`ConfigNode`]s. The tree carries no semantics: every node
//! is a name, a string value and an ordered list of children. Interpretation
//! belongs to the consumer.
//!
//! # Example
//!
//! ```rust
//! use apm_cnode::parse;
//!
//! let root = parse("audio_hw_modules {\n  primary {\n    devices { }\n  }\n}\n");
//! let primary = root.find("audio_hw_modules").and_then(|m| m.find("primary"));
//! assert!(primary.is_some());
//! ```

mod node;
mod parser;

pub use node::ConfigNode;
pub use parser::parse;
