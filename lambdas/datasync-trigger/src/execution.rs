use std::future::Future;

use aws_config::SdkConfig;
use aws_sdk_datasync::error::DisplayErrorContext;
use thiserror::Error;

/// Descriptor for a task execution started by the transfer service
#[derive(Debug)]
pub struct ExecutionDescriptor {
    /// ARN of the started execution, when the service reports one
    pub task_execution_arn: Option<String>,
}

/// Failure reported while asking the transfer service to start a task.
///
/// The underlying cause is kept as-is, no attempt is made to classify it
/// (unknown task, execution already running, access denied, network failure)
#[derive(Debug, Error)]
#[error("failed to start task execution: {message}")]
pub struct StartExecutionError {
    message: String,
    #[source]
    source: Box<dyn std::error::Error + Send + Sync>,
}

impl StartExecutionError {
    pub fn new<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self {
            message: DisplayErrorContext(&error).to_string(),
            source: Box::new(error),
        }
    }
}

/// Capability to start an execution of a transfer task
pub trait TaskExecutionStarter {
    fn start_task_execution(
        &self,
        task_arn: &str,
    ) -> impl Future<Output = Result<ExecutionDescriptor, StartExecutionError>> + Send;
}

/// [TaskExecutionStarter] backed by AWS DataSync
pub struct DataSyncTaskStarter {
    client: aws_sdk_datasync::Client,
}

impl DataSyncTaskStarter {
    pub fn new(client: aws_sdk_datasync::Client) -> Self {
        Self { client }
    }

    pub fn from_config(aws_config: &SdkConfig) -> Self {
        Self::new(aws_sdk_datasync::Client::new(aws_config))
    }
}

impl TaskExecutionStarter for DataSyncTaskStarter {
    async fn start_task_execution(
        &self,
        task_arn: &str,
    ) -> Result<ExecutionDescriptor, StartExecutionError> {
        let output = self
            .client
            .start_task_execution()
            .task_arn(task_arn)
            .send()
            .await
            .map_err(StartExecutionError::new)?;

        Ok(ExecutionDescriptor {
            task_execution_arn: output.task_execution_arn().map(str::to_string),
        })
    }
}
