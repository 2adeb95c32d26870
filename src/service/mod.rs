//! ItemService: item persistence, one short-lived session per call.

mod crud;
pub mod validation;
pub use crud::ItemService;
pub use validation::{Validate, NAME_MAX_CHARS};
