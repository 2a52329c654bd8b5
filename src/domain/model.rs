use crate::utils::error::ScaffoldError;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

pub const IMAGE_TAG_SUFFIX: &str = "latest";

/// Application types the scaffolder knows a recipe for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppType {
    Spring,
}

impl AppType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppType::Spring => "spring",
        }
    }

    /// Whether the prompt collector should ask for a runtime version.
    pub fn requires_version(&self) -> bool {
        matches!(self, AppType::Spring)
    }
}

impl FromStr for AppType {
    type Err = ScaffoldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spring" => Ok(AppType::Spring),
            other => Err(ScaffoldError::UnsupportedAppType(other.to_string())),
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    GenerateProject,
    BuildProject,
    WriteDockerfile,
    BuildImage,
}

impl Step {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Step::GenerateProject => "Error initializing project",
            Step::BuildProject => "Error building project",
            Step::WriteDockerfile => "Error creating Dockerfile",
            Step::BuildImage => "Error building Docker image",
        }
    }
}

/// Raw answers read from the interactive prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectAnswers {
    pub name: String,
    pub version: String,
    pub directory: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    pub name: String,
    pub version: String,
    pub directory: PathBuf,
    pub project_path: PathBuf,
    pub image_name: String,
}

impl ProjectContext {
    /// An empty directory answer falls back to `cwd`.
    pub fn new(answers: ProjectAnswers, cwd: &Path) -> Self {
        let directory = if answers.directory.is_empty() {
            cwd.to_path_buf()
        } else {
            PathBuf::from(&answers.directory)
        };
        let project_path = join_project_path(&directory, &answers.name);
        let image_name = image_name_for(&answers.name);

        Self {
            name: answers.name,
            version: answers.version,
            directory,
            project_path,
            image_name,
        }
    }
}

/// Joins `name` under `directory` and cleans the result lexically.
///
/// A root or prefix on `name` is ignored, so the project always lands below
/// `directory`; `.` parts are dropped and `..` removes the preceding part.
/// An empty name yields `directory` itself, without a trailing separator.
pub fn join_project_path(directory: &Path, name: &str) -> PathBuf {
    let mut path = PathBuf::new();
    let name_parts = Path::new(name)
        .components()
        .filter(|c| !matches!(c, Component::RootDir | Component::Prefix(_)));

    for component in directory.components().chain(name_parts) {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match path.components().next_back() {
                Some(Component::Normal(_)) => {
                    path.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => path.push(".."),
            },
            other => path.push(other.as_os_str()),
        }
    }

    if path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        path
    }
}

pub fn image_name_for(name: &str) -> String {
    format!("{}:{}", name, IMAGE_TAG_SUFFIX)
}

/// A subprocess invocation: program, arguments and optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub current_dir: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.current_dir = Some(dir.into());
        self
    }

    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    pub fn args_lossy(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for arg in &self.args {
            let arg = arg.to_string_lossy();
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        if let Some(dir) = &self.current_dir {
            write!(f, " (in {})", dir.display())?;
        }
        Ok(())
    }
}
