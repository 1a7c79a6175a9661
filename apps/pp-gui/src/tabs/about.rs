use crate::{app::PackApp, tabs::package::start_update_check, theme};
use eframe::egui;
use pp_factory::CURRENT_VERSION;

pub fn show(app: &mut PackApp, ui: &mut egui::Ui) {
    ui.heading("About");
    ui.label("A desktop front-end for PyInstaller.");
    ui.add_space(15.0);

    theme::card(ui, "Version", |ui| {
        ui.label(format!("Installed version: {}", CURRENT_VERSION));
        ui.label(format!("Packaging tool: {}", app.packager.tool));
        ui.hyperlink_to("Release downloads", &app.updater.download_url);

        ui.add_space(6.0);
        ui.add_enabled_ui(!app.is_checking_update, |ui| {
            if theme::styled_button(ui, "⟳ Check for updates", theme::ButtonVariant::Secondary)
                .clicked()
            {
                start_update_check(app, ui.ctx());
            }
        });
    });

    ui.add_space(15.0);

    theme::card(ui, "How it works", |ui| {
        ui.label("The packager runs as:");
        ui.monospace("pyinstaller --clean --distpath <output> [--onefile] (--windowed|--console) <script>");
        ui.label(
            "Its build/ folder and <script>.spec file are removed after every run. \
             An existing executable at the output path is overwritten.",
        );
    });
}
