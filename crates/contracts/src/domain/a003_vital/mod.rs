pub mod aggregate;

pub use aggregate::{latest, latest_for, Vital, VitalSnapshot};
