use thiserror::Error;

/// Environment variable holding the ARN of the DataSync task to start
pub const TASK_ARN_ENV: &str = "taskArn";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {} environment variable", TASK_ARN_ENV)]
    MissingTaskArn,
}

/// Configuration for the task trigger, loaded fresh on every invocation
#[derive(Debug)]
pub struct TaskTriggerConfig {
    /// ARN of the DataSync task to start
    pub task_arn: String,
}

impl TaskTriggerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load the configuration through the provided variable lookup
    pub fn from_vars<F>(vars: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let task_arn = vars(TASK_ARN_ENV)
            .filter(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingTaskArn)?;

        Ok(Self { task_arn })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_task_arn_from_vars() {
        let config = TaskTriggerConfig::from_vars(|key| {
            (key == TASK_ARN_ENV)
                .then(|| "arn:aws:datasync:us-east-1:123456789012:task/task-001".to_string())
        })
        .unwrap();

        assert_eq!(
            config.task_arn,
            "arn:aws:datasync:us-east-1:123456789012:task/task-001"
        );
    }

    #[test]
    fn missing_task_arn_is_rejected() {
        let error = TaskTriggerConfig::from_vars(|_| None).unwrap_err();
        assert_eq!(error, ConfigError::MissingTaskArn);
    }

    #[test]
    fn blank_task_arn_is_rejected() {
        let error = TaskTriggerConfig::from_vars(|_| Some("   ".to_string())).unwrap_err();
        assert_eq!(error, ConfigError::MissingTaskArn);
    }

    #[test]
    fn other_variables_are_ignored() {
        let error = TaskTriggerConfig::from_vars(|key| {
            (key == "TASK_ARN")
                .then(|| "arn:aws:datasync:us-east-1:123456789012:task/task-001".to_string())
        })
        .unwrap_err();

        assert_eq!(error, ConfigError::MissingTaskArn);
    }
}
