pub mod base;
pub mod bmf;
