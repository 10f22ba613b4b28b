pub mod core;

pub use crate::core::document::Document;
pub use crate::core::entry::Entry;
pub use crate::core::error::{Result, SrtError};
pub use crate::core::modify::{Direction, Offset};
pub use crate::core::timestamp::Timestamp;
