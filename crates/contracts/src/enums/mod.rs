pub mod appointment_status;
pub mod appointment_type;
pub mod patient_status;

pub use appointment_status::AppointmentStatus;
pub use appointment_type::AppointmentType;
pub use patient_status::PatientStatus;
