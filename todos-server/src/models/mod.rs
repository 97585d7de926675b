//! Domain models
//!
//! Input is decoded into these types at the HTTP edge.
//! Invalid input returns ValidationError, not panic.

pub mod todo;
pub mod validation;

pub use todo::{Todo, TodoId, TodoPayload};
pub use validation::ValidationError;
