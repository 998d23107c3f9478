pub mod dto;

pub use dto::{CareOverview, WatchEntry};
