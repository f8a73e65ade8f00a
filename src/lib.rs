//! # ado-link
//!
//! Link the current git branch to an Azure DevOps work item, inferring
//! project and repository from the configured git remotes.

pub mod ado;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod model;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use model::{LinkParams, RepoDefinition, WorkItemDefinition};
