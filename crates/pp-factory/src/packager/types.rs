use crate::error::PackError;
use std::path::{Path, PathBuf};

/// Editable form fields, exactly as the user left them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub script_path: String,
    pub output_dir: String,
    pub one_file: bool,
    pub windowed: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            script_path: String::new(),
            output_dir: String::new(),
            one_file: true,
            windowed: true,
        }
    }
}

impl FormState {
    /// Sets the script and points the output directory at the script's folder.
    pub fn select_script(&mut self, path: &Path) {
        self.script_path = path.display().to_string();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.output_dir = parent.display().to_string();
        }
    }

    pub fn select_output(&mut self, path: &Path) {
        self.output_dir = path.display().to_string();
    }

    /// Snapshot of the form. Paths are trimmed and made absolute but not validated.
    pub fn to_request(&self) -> PackagingRequest {
        PackagingRequest {
            script_path: absolutize(self.script_path.trim()),
            output_dir: absolutize(self.output_dir.trim()),
            one_file: self.one_file,
            windowed: self.windowed,
        }
    }
}

fn absolutize(raw: &str) -> PathBuf {
    if raw.is_empty() {
        return PathBuf::new();
    }
    std::path::absolute(raw).unwrap_or_else(|_| PathBuf::from(raw))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagingRequest {
    pub script_path: PathBuf,
    pub output_dir: PathBuf,
    pub one_file: bool,
    pub windowed: bool,
}

/// Result of one finished subprocess run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    pub exit_code: i32,
    /// Only computed when `exit_code == 0`.
    pub artifact: Option<PathBuf>,
    pub log_lines: Vec<String>,
}

impl JobOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

#[derive(Debug, Clone)]
pub enum JobStatus {
    Started { command: String },
    Output(String),
    Cleaning,
    Succeeded(JobOutcome),
    Failed(PackError),
    Finished, // always the last event of a run
}

pub struct PackArgs {
    pub script_path: Option<String>,
    pub output_dir: Option<String>,
    pub one_file: bool,
    pub windowed: bool,
    pub tool: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_both_flags() {
        let form = FormState::default();
        assert!(form.one_file);
        assert!(form.windowed);
        assert!(form.script_path.is_empty());
        assert!(form.output_dir.is_empty());
    }

    #[test]
    fn selecting_a_script_fills_output_dir() {
        let mut form = FormState::default();
        form.select_script(Path::new("/proj/tools/app.py"));
        assert_eq!(form.script_path, "/proj/tools/app.py");
        assert_eq!(form.output_dir, "/proj/tools");

        form.select_output(Path::new("/out"));
        assert_eq!(form.output_dir, "/out");
    }

    #[test]
    fn empty_fields_stay_empty_in_request() {
        let request = FormState::default().to_request();
        assert!(request.script_path.as_os_str().is_empty());
        assert!(request.output_dir.as_os_str().is_empty());
    }

    #[test]
    fn request_paths_are_absolute() {
        let form = FormState {
            script_path: "  app.py ".into(),
            output_dir: "dist".into(),
            ..FormState::default()
        };
        let request = form.to_request();
        assert!(request.script_path.is_absolute());
        assert!(request.script_path.ends_with("app.py"));
        assert!(request.output_dir.is_absolute());
    }
}
