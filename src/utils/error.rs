use crate::domain::model::Step;
use std::process::ExitStatus;
use thiserror::Error;

pub const GENERATOR_DISPLAY_NAME: &str = "Spring CLI";
pub const GENERATOR_INSTALL_GUIDE: &str = "https://docs.spring.io/spring-boot/installing.html";

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("{display_name} is not installed (executable `{tool}` not found on PATH)")]
    MissingDependency {
        tool: String,
        display_name: String,
        guide_url: String,
    },

    #[error("Unsupported application type: {0}")]
    UnsupportedAppType(String),

    #[error("failed to start `{program}`: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    CommandFailed { program: String, status: ExitStatus },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid configuration value for '{field}': '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("{}: {source}", .step.failure_message())]
    StepFailed {
        step: Step,
        source: Box<ScaffoldError>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Dependency,
    Input,
    Process,
    Filesystem,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ScaffoldError {
    pub fn missing_generator(tool: &str) -> Self {
        ScaffoldError::MissingDependency {
            tool: tool.to_string(),
            display_name: GENERATOR_DISPLAY_NAME.to_string(),
            guide_url: GENERATOR_INSTALL_GUIDE.to_string(),
        }
    }

    pub fn step_failed(step: Step, source: ScaffoldError) -> Self {
        ScaffoldError::StepFailed {
            step,
            source: Box::new(source),
        }
    }

    /// The step that was running when the pipeline stopped, if any.
    pub fn failed_step(&self) -> Option<Step> {
        match self {
            ScaffoldError::StepFailed { step, .. } => Some(*step),
            _ => None,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            ScaffoldError::MissingDependency { .. } => ErrorCategory::Dependency,
            ScaffoldError::UnsupportedAppType(_) => ErrorCategory::Input,
            ScaffoldError::SpawnError { .. } | ScaffoldError::CommandFailed { .. } => {
                ErrorCategory::Process
            }
            ScaffoldError::IoError(_) => ErrorCategory::Filesystem,
            ScaffoldError::ConfigError { .. } | ScaffoldError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            ScaffoldError::StepFailed { source, .. } => source.category(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Dependency => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Process | ErrorCategory::Filesystem => {
                ErrorSeverity::High
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ScaffoldError::MissingDependency {
                display_name,
                guide_url,
                ..
            } => format!(
                "{} is not installed. Please follow the installation guide:\n{}",
                display_name, guide_url
            ),
            other => other.to_string(),
        }
    }

    /// What the user sees on stderr when a run fails: the message, then the suggestion.
    pub fn report(&self) -> String {
        format!(
            "❌ {}\n💡 {}",
            self.user_friendly_message(),
            self.recovery_suggestion()
        )
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ScaffoldError::MissingDependency { tool, guide_url, .. } => {
                format!("Install `{}` ({}) and make sure it is on your PATH", tool, guide_url)
            }
            ScaffoldError::UnsupportedAppType(_) => {
                "Run `wizcraft create-project --help` to see the supported application types"
                    .to_string()
            }
            ScaffoldError::SpawnError { program, .. } => {
                format!("Check that `{}` exists and is executable", program)
            }
            ScaffoldError::CommandFailed { program, .. } => {
                format!("Review the output of `{}` above for the cause", program)
            }
            ScaffoldError::IoError(_) => {
                "Check that the target directory exists and is writable".to_string()
            }
            ScaffoldError::ConfigError { .. } => {
                "Make sure the configuration file exists and is valid TOML".to_string()
            }
            ScaffoldError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the configuration file", field)
            }
            ScaffoldError::StepFailed { source, .. } => source.recovery_suggestion(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_generator_message_points_to_install_guide() {
        let err = ScaffoldError::missing_generator("spring");
        let message = err.user_friendly_message();

        assert!(message.starts_with("Spring CLI is not installed. Please follow the installation guide:"));
        assert!(message.ends_with(GENERATOR_INSTALL_GUIDE));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.severity().exit_code(), 3);
    }

    #[test]
    fn test_step_failure_is_prefixed_with_step_message() {
        let err = ScaffoldError::step_failed(
            Step::BuildProject,
            ScaffoldError::SpawnError {
                program: "./gradlew".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
            },
        );

        assert_eq!(
            err.to_string(),
            "Error building project: failed to start `./gradlew`: No such file"
        );
        assert_eq!(err.failed_step(), Some(Step::BuildProject));
        assert_eq!(err.category(), ErrorCategory::Process);
        assert_eq!(err.severity().exit_code(), 1);
    }

    #[test]
    fn test_report_shows_message_and_suggestion_once() {
        let err = ScaffoldError::UnsupportedAppType("next".to_string());
        let report = err.report();

        assert_eq!(
            report,
            "❌ Unsupported application type: next\n💡 Run `wizcraft create-project --help` to see the supported application types"
        );
        assert_eq!(report.matches("Unsupported application type").count(), 1);

        let report = ScaffoldError::missing_generator("spring").report();
        assert_eq!(report.matches("is not installed").count(), 1);
        assert!(report.lines().last().unwrap().starts_with("💡 Install `spring`"));
    }

    #[test]
    fn test_unsupported_app_type_message() {
        let err = ScaffoldError::UnsupportedAppType("next".to_string());
        assert_eq!(err.user_friendly_message(), "Unsupported application type: next");
        assert_eq!(err.category(), ErrorCategory::Input);
    }

    #[test]
    fn test_config_errors_are_medium_severity() {
        let err = ScaffoldError::ConfigError {
            message: "bad toml".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.severity().exit_code(), 2);
    }
}
