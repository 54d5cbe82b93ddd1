//! Monogo Generics Generator Library
//!
//! This library provides the core functionality for the monogo code
//! generator: specializing Go source templates that declare placeholder
//! types via the reserved `generic` package.

pub mod aggregate;
pub mod bindings;
pub mod error;
pub mod generator;
pub mod postprocess;
pub mod scan;
pub mod subst;
pub mod validate;

// Re-export commonly used types
pub use bindings::{parse_typeset_args, ConcreteSpec, TypeSet};
pub use error::{BindingError, ImportsError, MonogoError, MonogoResult, ParseError};
pub use generator::{GenerateOptions, Generator};
pub use postprocess::{BuiltinNormalizer, GoimportsNormalizer, ImportNormalizer};
pub use scan::{Scanner, Span, Token, TokenWithPosition};
pub use validate::Validator;
