pub mod placeholder;
pub mod settings;
