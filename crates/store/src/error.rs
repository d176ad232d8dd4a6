//! Store-level errors.

use thiserror::Error;

use shopsync_client::ApiError;

use crate::config::ConfigError;

/// Errors surfaced by store operations.
///
/// Most operations either swallow failures (background loads) or re-throw
/// them wrapped here so the view can react - keep a form open, retry, and so
/// on. The user-facing messaging has already happened through the
/// notification sink by the time one of these reaches the caller.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
