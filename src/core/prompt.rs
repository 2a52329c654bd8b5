use crate::domain::model::ProjectAnswers;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

pub const NAME_PROMPT: &str = "Enter project name: ";
pub const VERSION_PROMPT: &str = "Enter Java version (e.g., 17, 21): ";
pub const DIRECTORY_PROMPT: &str = "Enter project directory (default is current directory): ";

/// Line-oriented prompt reader.
///
/// Each answer is the first whitespace-delimited token on its line; the rest of
/// the line is dropped. A failed or exhausted read yields an empty answer and
/// prompting carries on, so nothing here is fallible.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn ask(&mut self, label: &str) -> String {
        if let Err(e) = write!(self.output, "{}", label).and_then(|_| self.output.flush()) {
            tracing::debug!("Failed to write prompt: {}", e);
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(_) => line.split_whitespace().next().unwrap_or_default().to_string(),
            Err(e) => {
                tracing::debug!("Failed to read answer for {:?}: {}", label.trim(), e);
                String::new()
            }
        }
    }

    /// Name, then version when `ask_version`, then directory.
    pub fn collect(&mut self, ask_version: bool) -> ProjectAnswers {
        let name = self.ask(NAME_PROMPT);
        let version = if ask_version {
            self.ask(VERSION_PROMPT)
        } else {
            String::new()
        };
        let directory = self.ask(DIRECTORY_PROMPT);

        tracing::debug!(%name, %version, %directory, "Collected project answers");

        ProjectAnswers {
            name,
            version,
            directory,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_collect_with_version() {
        let mut p = prompter("demo\n21\n/tmp/work\n");

        let answers = p.collect(true);

        assert_eq!(answers.name, "demo");
        assert_eq!(answers.version, "21");
        assert_eq!(answers.directory, "/tmp/work");

        let output = String::from_utf8(p.into_output()).unwrap();
        assert_eq!(output, format!("{}{}{}", NAME_PROMPT, VERSION_PROMPT, DIRECTORY_PROMPT));
    }

    #[test]
    fn test_collect_without_version_skips_prompt() {
        let mut p = prompter("demo\n/tmp/work\n");

        let answers = p.collect(false);

        assert_eq!(answers.name, "demo");
        assert_eq!(answers.version, "");
        assert_eq!(answers.directory, "/tmp/work");

        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(!output.contains(VERSION_PROMPT));
    }

    #[test]
    fn test_blank_line_gives_empty_answer() {
        let mut p = prompter("demo\n21\n\n");
        let answers = p.collect(true);
        assert_eq!(answers.directory, "");
    }

    #[test]
    fn test_only_first_token_is_kept() {
        let mut p = prompter("  my project  \n21 lts\n/tmp dir\n");
        let answers = p.collect(true);

        assert_eq!(answers.name, "my");
        assert_eq!(answers.version, "21");
        assert_eq!(answers.directory, "/tmp");
    }

    #[test]
    fn test_closed_input_leaves_fields_empty() {
        let mut p = prompter("demo\n");
        let answers = p.collect(true);

        assert_eq!(answers.name, "demo");
        assert_eq!(answers.version, "");
        assert_eq!(answers.directory, "");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut p = prompter("demo\r\n17\r\n\r\n");
        let answers = p.collect(true);

        assert_eq!(answers.name, "demo");
        assert_eq!(answers.version, "17");
        assert_eq!(answers.directory, "");
    }
}
