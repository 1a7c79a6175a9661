use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::{Path, PathBuf};

pub fn pick_script(current: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new()
        .set_title("Select the Python script to package")
        .add_filter("Python files", &["py"])
        .add_filter("All files", &["*"]);
    if let Some(dir) = existing_dir(current) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_file()
}

pub fn pick_output(current: &str) -> Option<PathBuf> {
    let mut dialog = FileDialog::new().set_title("Select the output directory");
    if let Some(dir) = existing_dir(current) {
        dialog = dialog.set_directory(dir);
    }
    dialog.pick_folder()
}

/// Closest existing directory for a field value, used as the dialog's start folder.
fn existing_dir(current: &str) -> Option<&Path> {
    let path = Path::new(current.trim());
    if path.as_os_str().is_empty() {
        return None;
    }
    if path.is_dir() {
        Some(path)
    } else {
        path.parent().filter(|p| p.is_dir())
    }
}

// Blocking dialogs. Only call these from the UI thread.

pub fn notify_info(title: &str, body: &str) {
    show(MessageLevel::Info, title, body);
}

pub fn notify_error(title: &str, body: &str) {
    show(MessageLevel::Error, title, body);
}

fn show(level: MessageLevel, title: &str, body: &str) {
    tracing::debug!(title, "showing dialog");
    let _ = MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(body)
        .set_buttons(MessageButtons::Ok)
        .show();
}
