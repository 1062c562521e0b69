//! Common traits for TFE resources

use serde::Deserialize;

/// Common trait for TFE resources addressed by an opaque ID and a name
pub trait TfeResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name
    fn name(&self) -> &str;
}

/// JSON:API single-resource document
#[derive(Deserialize, Debug)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// JSON:API collection document.
///
/// Only the first page returned by the API is used.
#[derive(Deserialize, Debug)]
pub struct ApiListResponse<T> {
    pub data: Vec<T>,
}
