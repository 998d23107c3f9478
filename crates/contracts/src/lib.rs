//! Types and logic shared by the eldercare backend and frontend.
//!
//! Everything here is target independent, so the router, the wizard engine
//! and the dashboard summary are tested natively.

pub mod dashboards;
pub mod domain;
pub mod enums;
pub mod shared;
pub mod usecases;
