pub mod aggregate;

pub use aggregate::{appointments_on, Appointment, AppointmentId};
