//! Fire-and-forget notifications about completed task operations.

mod error;
mod traits;

pub use error::{NotifyError, Result};
pub use traits::EventSink;
