use crate::error::UpdateError;
use serde::Deserialize;

/// The only field read from the release metadata endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseInfo {
    pub tag_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatus {
    Checking,
    UpToDate {
        current: String,
    },
    Available {
        current: String,
        latest: String,
        download_url: String,
    },
    Error(UpdateError),
}
