// crates/shared-kernel/src/lib.rs
pub use error::{DomainError, ErrorContext, FfmcError, InputError, OutputError, Result};

pub mod error;
pub mod value_objects;

pub use value_objects::{AdminKey, Bounds, DangerCategory, Reading, round2};
