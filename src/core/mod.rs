pub mod data;
pub mod document;
pub mod entry;
pub mod error;
pub mod log;
pub mod modify;
pub mod timestamp;
