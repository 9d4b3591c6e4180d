// crates/shared-kernel/src/value_objects/mod.rs
pub mod admin;
pub mod bounds;
pub mod category;
pub mod reading;

pub use admin::AdminKey;
pub use bounds::Bounds;
pub use category::{DangerCategory, round2};
pub use reading::Reading;
