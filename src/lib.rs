
pub mod error;
pub mod fields;
pub mod parameters;
pub mod pipeline;
pub mod precheck;
pub mod resolve;
pub mod tool;

pub use {error::Error, pipeline::run};
