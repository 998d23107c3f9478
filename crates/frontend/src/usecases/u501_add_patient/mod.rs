//! Add-patient wizard, shown as a modal over the current view

pub mod view;
pub mod view_model;

pub use view::AddPatientModal;
