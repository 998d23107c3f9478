pub mod aggregate;
pub mod filter;

pub use aggregate::{EmergencyContact, Gender, Patient, PatientId};
pub use filter::{PatientFilter, StatusFilter};
