pub mod catalog;
pub mod core;
pub mod dashboard;
pub mod ranking;
pub mod students;
pub mod tricks;
pub mod view;
