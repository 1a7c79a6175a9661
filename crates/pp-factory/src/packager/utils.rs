use super::types::PackagingRequest;
use crate::error::PackError;
use std::{
    env::consts::EXE_EXTENSION,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

pub const SCRATCH_DIR_NAME: &str = "build";
pub const SPEC_EXTENSION: &str = "spec";

/// Checks both paths right before a run. Nothing is spawned when this fails.
pub fn validate_request(request: &PackagingRequest) -> Result<(), PackError> {
    let script = &request.script_path;
    if script.as_os_str().is_empty() || !script.is_file() {
        return Err(PackError::InvalidInput(
            "Please select a valid Python script file.".into(),
        ));
    }

    let output = &request.output_dir;
    if output.as_os_str().is_empty() || !output.is_dir() {
        return Err(PackError::InvalidInput(
            "Please select a valid output directory.".into(),
        ));
    }

    Ok(())
}

/// `app.py` -> `app`. Only the last extension is dropped.
pub fn script_base_name(script: &Path) -> String {
    script
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn executable_name(base: &str) -> String {
    if EXE_EXTENSION.is_empty() {
        base.to_string()
    } else {
        format!("{}.{}", base, EXE_EXTENSION)
    }
}

/// Where the packaging tool leaves the finished executable.
pub fn artifact_path(request: &PackagingRequest) -> PathBuf {
    let base = script_base_name(&request.script_path);
    let exe_name = executable_name(&base);

    if request.one_file {
        request.output_dir.join(exe_name)
    } else {
        request.output_dir.join(&base).join(exe_name)
    }
}

/// Directory the tool runs in; scratch artifacts appear here.
pub fn work_dir(script: &Path) -> PathBuf {
    match script.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// (`<dir>/build`, `<dir>/<base>.spec`)
pub fn scratch_paths(script: &Path) -> (PathBuf, PathBuf) {
    let dir = work_dir(script);
    let spec_file = dir.join(format!("{}.{}", script_base_name(script), SPEC_EXTENSION));
    (dir.join(SCRATCH_DIR_NAME), spec_file)
}

/// Best-effort removal of the scratch directory and the spec file.
pub fn cleanup_scratch(script: &Path) {
    let (build_dir, spec_file) = scratch_paths(script);

    if build_dir.exists() {
        if let Err(e) = fs::remove_dir_all(&build_dir) {
            tracing::debug!(path = %build_dir.display(), error = %e, "scratch dir not removed");
        }
    }
    if spec_file.exists() {
        if let Err(e) = fs::remove_file(&spec_file) {
            tracing::debug!(path = %spec_file.display(), error = %e, "spec file not removed");
        }
    }
}

pub fn locate_tool(tool: &str) -> Result<PathBuf, PackError> {
    which::which(tool).map_err(|_| PackError::ToolNotFound {
        tool: tool.to_string(),
    })
}

/// Space-joined rendering for the log pane.
pub fn format_command(command: &[OsString]) -> String {
    command
        .iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    fn request(script: &str, out: &str, one_file: bool) -> PackagingRequest {
        PackagingRequest {
            script_path: PathBuf::from(script),
            output_dir: PathBuf::from(out),
            one_file,
            windowed: true,
        }
    }

    #[test]
    fn base_name_drops_only_last_extension() {
        assert_eq!(script_base_name(Path::new("/p/app.py")), "app");
        assert_eq!(script_base_name(Path::new("/p/my.tool.py")), "my.tool");
    }

    #[test]
    fn one_file_artifact_sits_in_output_dir() {
        let path = artifact_path(&request("/proj/app.py", "/proj", true));
        assert_eq!(path, Path::new("/proj").join(executable_name("app")));
    }

    #[test]
    fn folder_artifact_sits_in_named_subdir() {
        let path = artifact_path(&request("/proj/app.py", "/proj", false));
        assert_eq!(
            path,
            Path::new("/proj").join("app").join(executable_name("app"))
        );
    }

    #[test]
    fn artifact_stem_matches_script_stem() {
        for script in ["/a/x.py", "/a/b/long_name.py", "/a/v2.0.py"] {
            let req = request(script, "/out", true);
            let artifact = artifact_path(&req);
            let name = artifact.file_name().unwrap().to_string_lossy().into_owned();
            assert_eq!(
                name.strip_suffix(&format!(".{}", EXE_EXTENSION))
                    .unwrap_or(&name),
                script_base_name(&req.script_path)
            );
        }
    }

    #[cfg(windows)]
    #[test]
    fn windows_artifacts_get_exe_extension() {
        let one = artifact_path(&request(r"C:\proj\app.py", r"C:\proj", true));
        assert_eq!(one, PathBuf::from(r"C:\proj\app.exe"));

        let dir = artifact_path(&request(r"C:\proj\app.py", r"C:\proj", false));
        assert_eq!(dir, PathBuf::from(r"C:\proj\app\app.exe"));
    }

    #[test]
    fn scratch_paths_are_next_to_script() {
        let (build, spec) = scratch_paths(Path::new("/proj/app.py"));
        assert_eq!(build, PathBuf::from("/proj/build"));
        assert_eq!(spec, PathBuf::from("/proj/app.spec"));
    }

    #[test]
    fn cleanup_removes_scratch_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("app.py");
        File::create(&script).unwrap();
        fs::create_dir_all(dir.path().join("build").join("app")).unwrap();
        File::create(dir.path().join("app.spec")).unwrap();

        cleanup_scratch(&script);

        assert!(!dir.path().join("build").exists());
        assert!(!dir.path().join("app.spec").exists());
        assert!(script.exists());
    }

    #[test]
    fn cleanup_without_artifacts_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("app.py");
        File::create(&script).unwrap();

        cleanup_scratch(&script);
        cleanup_scratch(&script);

        assert!(script.exists());
    }

    #[test]
    fn validation_rejects_empty_and_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("app.py");
        File::create(&script).unwrap();
        let out = dir.path().display().to_string();

        let empty = request("", &out, true);
        assert!(matches!(
            validate_request(&empty),
            Err(PackError::InvalidInput(_))
        ));

        let missing = request(&dir.path().join("nope.py").display().to_string(), &out, true);
        assert!(matches!(
            validate_request(&missing),
            Err(PackError::InvalidInput(_))
        ));

        // a directory is not a script
        let not_file = request(&out, &out, true);
        assert!(matches!(
            validate_request(&not_file),
            Err(PackError::InvalidInput(_))
        ));

        let no_output = request(&script.display().to_string(), "", true);
        assert!(matches!(
            validate_request(&no_output),
            Err(PackError::InvalidInput(_))
        ));

        let ok = request(&script.display().to_string(), &out, true);
        assert_eq!(validate_request(&ok), Ok(()));
    }

    #[test]
    fn missing_tool_maps_to_tool_not_found() {
        let err = locate_tool("pp-factory-no-such-packager").unwrap_err();
        assert_eq!(
            err,
            PackError::ToolNotFound {
                tool: "pp-factory-no-such-packager".into()
            }
        );
    }
}
