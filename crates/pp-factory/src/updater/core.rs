use super::types::{ReleaseInfo, UpdateStatus};
use crate::{config::UpdateConfig, error::UpdateError};
use ureq::Agent;

pub fn parse_release(body: &str) -> Result<ReleaseInfo, UpdateError> {
    serde_json::from_str(body).map_err(|e| UpdateError::Parse(e.to_string()))
}

/// `v2.0` -> `2.0`
pub fn normalize_tag(tag: &str) -> &str {
    let tag = tag.trim();
    tag.strip_prefix(|c: char| c == 'v' || c == 'V').unwrap_or(tag)
}

/// Plain string comparison, no semver parsing.
pub fn evaluate_release(tag: &str, config: &UpdateConfig) -> UpdateStatus {
    let latest = normalize_tag(tag);
    if latest > config.current_version.as_str() {
        UpdateStatus::Available {
            current: config.current_version.clone(),
            latest: latest.to_string(),
            download_url: config.download_url.clone(),
        }
    } else {
        UpdateStatus::UpToDate {
            current: config.current_version.clone(),
        }
    }
}

pub fn fetch_latest(config: &UpdateConfig) -> Result<ReleaseInfo, UpdateError> {
    let agent: Agent = Agent::config_builder()
        .timeout_global(Some(config.timeout))
        .build()
        .into();

    let body = agent
        .get(&config.endpoint)
        .header("Accept", "application/vnd.github+json")
        .header("User-Agent", concat!("pp-factory/", env!("CARGO_PKG_VERSION")))
        .call()
        .map_err(|e| UpdateError::Network(e.to_string()))?
        .into_body()
        .read_to_string()
        .map_err(|e| UpdateError::Network(e.to_string()))?;

    parse_release(&body)
}

/// One full check. Never fails; errors come back as `UpdateStatus::Error`.
pub fn check_for_update(config: &UpdateConfig) -> UpdateStatus {
    match fetch_latest(config) {
        Ok(release) => {
            tracing::info!(tag = %release.tag_name, "latest release fetched");
            evaluate_release(&release.tag_name, config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "update check failed");
            UpdateStatus::Error(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(current: &str) -> UpdateConfig {
        UpdateConfig {
            current_version: current.into(),
            ..UpdateConfig::default()
        }
    }

    #[test]
    fn newer_tag_offers_update() {
        let status = evaluate_release("v2.0", &config("1.1"));
        assert_eq!(
            status,
            UpdateStatus::Available {
                current: "1.1".into(),
                latest: "2.0".into(),
                download_url: UpdateConfig::default().download_url,
            }
        );
    }

    #[test]
    fn older_or_equal_tag_is_up_to_date() {
        for tag in ["v1.0", "1.1", "V1.1"] {
            assert_eq!(
                evaluate_release(tag, &config("1.1")),
                UpdateStatus::UpToDate {
                    current: "1.1".into()
                }
            );
        }
    }

    #[test]
    fn only_one_prefix_is_stripped() {
        assert_eq!(normalize_tag("v1.2"), "1.2");
        assert_eq!(normalize_tag(" 1.2 "), "1.2");
        assert_eq!(normalize_tag("vv1"), "v1");
    }

    #[test]
    fn parses_tag_name_and_ignores_other_fields() {
        let release = parse_release(r#"{"tag_name":"v2.0","name":"Second","assets":[]}"#).unwrap();
        assert_eq!(release.tag_name, "v2.0");
    }

    #[test]
    fn missing_tag_name_is_a_parse_error() {
        assert!(matches!(
            parse_release(r#"{"name":"no tag"}"#),
            Err(UpdateError::Parse(_))
        ));
        assert!(matches!(
            parse_release("<html>rate limited</html>"),
            Err(UpdateError::Parse(_))
        ));
    }

    #[test]
    fn unreachable_endpoint_is_a_network_error() {
        let config = UpdateConfig {
            endpoint: "http://127.0.0.1:9/releases/latest".into(),
            timeout: Duration::from_secs(2),
            ..UpdateConfig::default()
        };
        assert!(matches!(
            check_for_update(&config),
            UpdateStatus::Error(UpdateError::Network(_))
        ));
    }
}
