//! Domain models with validation at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod contact;
pub mod group;

pub use validation::ValidationError;
pub use contact::Contact;
pub use group::{Group, MAX_GROUP_NAME_LEN};
