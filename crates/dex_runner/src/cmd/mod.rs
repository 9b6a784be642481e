pub mod build;
pub mod convert;
