pub mod availability;
pub mod core;
pub mod dashboard;
pub mod profile;
pub mod qualifications;
pub mod schedule;
pub mod session;
pub mod teachers;
