use crate::utils::error::{Result, ScaffoldError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

pub const JAVA_VERSION_PLACEHOLDER: &str = "{{java_version}}";

pub const DEFAULT_DOCKERFILE_TEMPLATE: &str = r#"FROM openjdk:{{java_version}}-jdk-slim
WORKDIR /app
COPY build/libs/*.jar app.jar
ENTRYPOINT ["java", "-jar", "app.jar"]
"#;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    pub tools: ToolsConfig,
    pub spring: SpringConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    /// Project generator executable, looked up on PATH during preflight.
    pub generator: String,
    /// Container build tool.
    pub container: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            generator: "spring".to_string(),
            container: "docker".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub build_tool: String,
    pub project_type: String,
    /// Relative paths are resolved against the generated project.
    pub build_wrapper: String,
    pub dockerfile_template: String,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            build_tool: "gradle".to_string(),
            project_type: "gradle-project-kotlin".to_string(),
            build_wrapper: "./gradlew".to_string(),
            dockerfile_template: DEFAULT_DOCKERFILE_TEMPLATE.to_string(),
        }
    }
}

impl ScaffoldConfig {
    /// Defaults unless a path is given, in which case the file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                let config = Self::from_file(path)?;
                config.validate()?;
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| ScaffoldError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ScaffoldError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ScaffoldError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_executable("tools.generator", &self.tools.generator)?;
        validation::validate_executable("tools.container", &self.tools.container)?;
        validation::validate_executable("spring.build_wrapper", &self.spring.build_wrapper)?;
        validation::validate_non_empty_string("spring.build_tool", &self.spring.build_tool)?;
        validation::validate_non_empty_string("spring.project_type", &self.spring.project_type)?;
        validation::validate_contains(
            "spring.dockerfile_template",
            &self.spring.dockerfile_template,
            JAVA_VERSION_PLACEHOLDER,
        )?;
        Ok(())
    }
}

impl Validate for ScaffoldConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
