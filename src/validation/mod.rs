//! Move validation submission.
//!
//! - [`request`] - The immutable move request model
//! - [`submit`] - Submitting the request and obtaining an operation handle

mod request;
mod submit;

pub use request::MoveRequest;
pub use submit::{submit, OperationHandle};
