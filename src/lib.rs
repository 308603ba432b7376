pub mod alloc;
pub mod benches;
pub mod corpus;
pub mod domain;
pub mod error;
pub mod harness;
pub mod input;
pub mod report;
pub mod schema;

pub use error::{Error, Result};
