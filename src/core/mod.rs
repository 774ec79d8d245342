//! Core types - pure abstractions shared across the codebase.

mod category;
mod error;
mod result;
mod state;
mod target;

pub use category::ContentKind;
pub use error::{ErrorKind, ReloadError};
pub use result::LoadResult;
pub use state::{is_shutdown, request_shutdown};
pub use target::WatchTarget;
