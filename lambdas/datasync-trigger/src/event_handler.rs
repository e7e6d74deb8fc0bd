use lambda_runtime::{Error, LambdaEvent, tracing};
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::{
    config::TaskTriggerConfig,
    error::TriggerError,
    execution::{DataSyncTaskStarter, TaskExecutionStarter},
};

static DEPENDENCIES: OnceCell<Dependencies> = OnceCell::const_new();

pub struct Dependencies {
    pub starter: DataSyncTaskStarter,
}

async fn dependencies() -> Dependencies {
    let aws_config = aws_config::load_from_env().await;

    // Create the DataSync client
    let starter = DataSyncTaskStarter::from_config(&aws_config);

    Dependencies { starter }
}

pub(crate) async fn outer_function_handler(event: LambdaEvent<Value>) -> Result<(), Error> {
    // Missing configuration fails before any client is built
    let config = TaskTriggerConfig::from_env().map_err(TriggerError::from)?;

    let dependencies = DEPENDENCIES.get_or_init(dependencies).await;
    function_handler(event, &config, &dependencies.starter).await?;

    Ok(())
}

/// Start one execution of the configured task. The event payload is accepted
/// but never inspected
#[tracing::instrument(skip_all, fields(request_id = %event.context.request_id))]
pub(crate) async fn function_handler<S>(
    event: LambdaEvent<Value>,
    config: &TaskTriggerConfig,
    starter: &S,
) -> Result<(), TriggerError>
where
    S: TaskExecutionStarter + Sync,
{
    let task_arn = config.task_arn.as_str();

    let execution = starter
        .start_task_execution(task_arn)
        .await
        .inspect_err(|error| {
            tracing::error!(?error, %task_arn, "failed to start task execution");
        })?;

    tracing::info!(
        %task_arn,
        task_execution_arn = execution.task_execution_arn.as_deref(),
        "started task execution"
    );

    Ok(())
}
