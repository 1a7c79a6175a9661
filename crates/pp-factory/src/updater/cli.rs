use super::{core::check_for_update, types::UpdateStatus};
use crate::config::UpdateConfig;
use anyhow::Result;

pub fn run_update_cli(config: UpdateConfig) -> Result<()> {
    println!("Checking for updates...");

    match check_for_update(&config) {
        UpdateStatus::Available {
            current,
            latest,
            download_url,
        } => {
            println!("⬆ New version {} available (you have {}).", latest, current);
            println!("   Download: {}", download_url);
        }
        UpdateStatus::UpToDate { current } => println!("✅ Up to date ({}).", current),
        UpdateStatus::Error(e) => eprintln!("⚠ {}", e),
        UpdateStatus::Checking => {}
    }
    Ok(())
}
