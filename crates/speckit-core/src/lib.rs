pub mod agent_context;
pub mod availability;
pub mod config;
pub mod error;
pub mod feature;
pub mod git;
pub mod io;
pub mod paths;
pub mod plan;
pub mod report;
pub mod resolver;
pub mod templates;
pub mod types;
pub mod workspace;

pub use error::{Result, SpeckitError};
