//! Command line templates for process-backed windows.

use std::path::Path;

use super::errors::WindowError;
use super::types::WindowSpec;

const URL: &str = "{url}";
const NAME: &str = "{name}";
const FEATURES: &str = "{features}";
const PROFILE: &str = "{profile}";

const PLACEHOLDERS: [&str; 4] = [URL, NAME, FEATURES, PROFILE];

/// A whitespace-separated command line with `{url}`, `{name}`, `{features}`
/// and `{profile}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTemplate {
    program: String,
    args: Vec<String>,
}

impl CommandTemplate {
    pub fn parse(template: &str) -> Result<Self, WindowError> {
        let mut parts = template.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| WindowError::InvalidTemplate {
            message: "command is empty".to_string(),
        })?;

        if PLACEHOLDERS.iter().any(|p| program.contains(p)) {
            return Err(WindowError::InvalidTemplate {
                message: format!("program '{}' cannot contain a placeholder", program),
            });
        }

        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Whether rendering needs a scratch profile directory.
    pub fn needs_profile(&self) -> bool {
        self.args.iter().any(|arg| arg.contains(PROFILE))
    }

    /// Expand placeholders into the final argument list.
    ///
    /// Arguments that held a placeholder and expand to nothing are dropped.
    /// The URL is appended when the template never mentions `{url}`.
    pub fn render(&self, spec: &WindowSpec, profile: Option<&Path>) -> Vec<String> {
        let profile = profile
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        let mut args: Vec<String> = self
            .args
            .iter()
            .filter_map(|arg| {
                if !PLACEHOLDERS.iter().any(|p| arg.contains(p)) {
                    return Some(arg.clone());
                }
                let rendered = arg
                    .replace(URL, spec.url())
                    .replace(NAME, spec.name())
                    .replace(FEATURES, spec.features())
                    .replace(PROFILE, &profile);
                (!rendered.is_empty()).then_some(rendered)
            })
            .collect();

        if !self.args.iter().any(|arg| arg.contains(URL)) {
            args.push(spec.url().to_string());
        }

        args
    }
}

impl std::fmt::Display for CommandTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
