use std::time::Duration;

/// Version string the release check compares against.
pub const CURRENT_VERSION: &str = "1.1";

pub const DEFAULT_TOOL: &str = "pyinstaller";

pub const RELEASES_ENDPOINT: &str =
    "https://api.github.com/repos/pypack-factory/pypack-factory/releases/latest";
pub const DOWNLOAD_URL: &str = "https://github.com/pypack-factory/pypack-factory/releases";

pub const UPDATE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagerConfig {
    /// Executable name (or path) of the packaging tool.
    pub tool: String,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateConfig {
    pub endpoint: String,
    pub download_url: String,
    pub current_version: String,
    pub timeout: Duration,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            endpoint: RELEASES_ENDPOINT.into(),
            download_url: DOWNLOAD_URL.into(),
            current_version: CURRENT_VERSION.into(),
            timeout: UPDATE_TIMEOUT,
        }
    }
}
