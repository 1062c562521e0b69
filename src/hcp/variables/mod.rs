//! Workspace variable module

mod api;
mod commands;
mod models;

pub use commands::run_push_var_command;
pub use models::{read_value_file, Variable, VariableAttributes, VariableCategory, VariablePayload};
