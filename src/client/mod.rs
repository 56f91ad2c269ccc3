//! Generation service client module.

mod generator;
mod service;

pub use generator::*;
pub use service::*;
