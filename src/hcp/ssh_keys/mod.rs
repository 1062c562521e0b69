//! Organization SSH key module

mod api;
mod models;

pub use models::{SshKey, SshKeyAttributes};
