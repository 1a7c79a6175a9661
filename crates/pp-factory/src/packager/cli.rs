use super::{
    core::{resolve_outcome, run_job},
    types::{FormState, JobStatus, PackArgs},
    utils::validate_request,
};
use crate::config::PackagerConfig;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input};
use indicatif::{ProgressBar, ProgressStyle};
use std::{path::Path, time::Duration};

pub fn run_cli(args: PackArgs) -> Result<()> {
    let mut form = FormState {
        one_file: args.one_file,
        windowed: args.windowed,
        ..FormState::default()
    };

    // 1. Script + output directory (prompt for whatever is missing)
    let script: String = match args.script_path {
        Some(s) => s,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Python script to package")
            .interact_text()?,
    };
    form.select_script(Path::new(script.trim()));

    match args.output_dir {
        Some(dir) => form.output_dir = dir,
        None => {
            let dir: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Output directory")
                .default(form.output_dir.clone())
                .interact_text()?;
            form.output_dir = dir;
        }
    }

    let request = form.to_request();
    validate_request(&request)?;

    let config = PackagerConfig {
        tool: args.tool.unwrap_or_else(|| PackagerConfig::default().tool),
    };

    // 2. Run with an indeterminate spinner
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {msg}")
            .context("Invalid progress template")?,
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message("Packaging...");

    let pb_clone = pb.clone();
    let result = run_job(&config, &request, move |status| match status {
        JobStatus::Started { command } => pb_clone.println(format!("▶ {}", command)),
        JobStatus::Output(line) => pb_clone.println(line),
        JobStatus::Cleaning => pb_clone.set_message("Cleaning up..."),
        _ => {}
    });

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            pb.abandon_with_message(format!("❌ {}", e.title()));
            return Err(e.into());
        }
    };

    // 3. Report
    match resolve_outcome(&outcome) {
        Ok(artifact) => {
            pb.finish_with_message("✅ Packaging complete.");
            println!("Executable saved at: {}", artifact.display());
            Ok(())
        }
        Err(e) => {
            pb.abandon_with_message("❌ Packaging failed, see the log above.");
            Err(e.into())
        }
    }
}
