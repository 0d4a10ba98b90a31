pub mod app_errors;
pub mod nutrients;
pub mod whole_number;

pub use nutrients::Nutrients;
