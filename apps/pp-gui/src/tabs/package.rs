use crate::{
    app::{AppEvent, PackApp},
    theme, utils,
};
use eframe::egui;
use pp_factory::{packager, updater};
use std::{sync::mpsc::channel, thread};

pub fn show(app: &mut PackApp, ui: &mut egui::Ui) {
    ui.heading("Package a Python Script");
    ui.label("Bundle a .py script and its dependencies into a standalone executable.");
    ui.add_space(15.0);

    // CARD 1: PATHS
    theme::card(ui, "1. Basic Settings", |ui| {
        ui.add_enabled_ui(!app.is_busy, |ui| {
            if theme::path_row(
                ui,
                "Main script",
                &mut app.form.script_path,
                "Path to a .py file",
            ) {
                if let Some(path) = utils::pick_script(&app.form.script_path) {
                    app.form.select_script(&path);
                }
            }

            ui.add_space(4.0);

            if theme::path_row(
                ui,
                "Output directory",
                &mut app.form.output_dir,
                "Where the executable is written",
            ) {
                if let Some(path) = utils::pick_output(&app.form.output_dir) {
                    app.form.select_output(&path);
                }
            }
        });
    });

    ui.add_space(15.0);

    // CARD 2: FLAGS
    theme::card(ui, "2. Packaging Options", |ui| {
        ui.add_enabled_ui(!app.is_busy, |ui| {
            ui.checkbox(
                &mut app.form.one_file,
                "Package as a single executable file (--onefile)",
            );
            ui.checkbox(
                &mut app.form.windowed,
                "No console window (--windowed, recommended for GUI programs)",
            );
        });
    });

    ui.add_space(20.0);

    ui.horizontal(|ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_enabled_ui(!app.is_busy, |ui| {
                if theme::styled_button(ui, "🔨 Package", theme::ButtonVariant::Primary).clicked()
                {
                    start_packaging(app, ui.ctx());
                }
            });

            ui.add_enabled_ui(!app.is_checking_update, |ui| {
                if theme::styled_button(
                    ui,
                    "⟳ Check for updates",
                    theme::ButtonVariant::Secondary,
                )
                .clicked()
                {
                    start_update_check(app, ui.ctx());
                }
            });
        });
    });
}

fn start_packaging(app: &mut PackApp, ctx: &egui::Context) {
    let request = app.form.to_request();
    let (internal_tx, internal_rx) = channel();

    // Invalid paths are rejected here, before any thread exists.
    if let Err(e) = packager::run_async(app.packager.clone(), request, internal_tx) {
        tracing::warn!(error = %e, "packaging request rejected");
        utils::notify_error(e.title(), &e.to_string());
        return;
    }

    app.logs.clear();
    app.logs.push("Starting packaging...".into());
    app.logs.push(String::new());
    app.is_busy = true;
    app.current_task = "Packaging...".into();

    // Forward worker events to the UI thread and wake it up.
    let tx = app.status_tx.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        for status in internal_rx {
            if tx.send(AppEvent::Job(status)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
}

pub fn start_update_check(app: &mut PackApp, ctx: &egui::Context) {
    app.is_checking_update = true;
    let (internal_tx, internal_rx) = channel();
    updater::run_async(app.updater.clone(), internal_tx);

    let tx = app.status_tx.clone();
    let ctx = ctx.clone();
    thread::spawn(move || {
        for status in internal_rx {
            if tx.send(AppEvent::Update(status)).is_err() {
                break;
            }
            ctx.request_repaint();
        }
    });
}
