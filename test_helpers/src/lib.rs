//! Test helpers shared across the `yaml_merger` workspace.
//!
//! - [`env`] serialises mutation of the process environment, which the
//!   resolver reads when sources are named by environment variables.
//! - [`documents`] writes fixture documents into a throwaway directory.

pub mod documents;
pub mod env;
