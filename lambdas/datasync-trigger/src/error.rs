use thiserror::Error;

use crate::{config::ConfigError, execution::StartExecutionError};

#[derive(Debug, Error)]
pub enum TriggerError {
    /// Task configuration could not be loaded
    #[error(transparent)]
    Configuration(#[from] ConfigError),

    /// Transfer service rejected or failed the start request
    #[error(transparent)]
    RemoteInvocation(#[from] StartExecutionError),
}
