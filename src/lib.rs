pub mod error;
pub mod geometry;
pub mod island;
pub mod math;
pub mod visibility;

pub use error::{ArchipelagoError, Result};
