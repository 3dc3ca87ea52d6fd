pub mod employee;
pub mod expertise;
pub mod input;
pub mod project;
