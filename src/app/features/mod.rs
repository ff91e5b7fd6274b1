pub mod join;
pub mod projects;
pub mod reports;
pub mod statistics;
pub mod tasks;
