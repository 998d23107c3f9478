pub mod metadata;
pub mod navigation;
pub mod wizard;
