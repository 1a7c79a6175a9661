use crate::{tabs, theme, utils};
use eframe::egui;
use pp_factory::{
    packager::{FormState, JobStatus},
    updater::UpdateStatus,
    PackError, PackagerConfig, UpdateConfig,
};
use std::sync::mpsc::{channel, Receiver, Sender};

#[derive(PartialEq)]
pub enum Tab {
    Package,
    About,
}

/// Everything worker threads may tell the UI thread.
pub enum AppEvent {
    Job(JobStatus),
    Update(UpdateStatus),
}

pub struct PackApp {
    pub current_tab: Tab,
    pub theme_preference: theme::Theme,

    /// Log pane contents. Append-only while a run is in flight.
    pub logs: Vec<String>,
    pub status_rx: Receiver<AppEvent>,
    pub status_tx: Sender<AppEvent>,

    pub is_busy: bool,
    pub is_checking_update: bool,
    pub current_task: String,

    pub form: FormState,
    pub packager: PackagerConfig,
    pub updater: UpdateConfig,
}

impl Default for PackApp {
    fn default() -> Self {
        let (tx, rx) = channel::<AppEvent>();

        Self {
            current_tab: Tab::Package,
            theme_preference: theme::Theme::Dark,

            logs: vec![
                "Ready. Select a script and press Package.".into(),
                "Do not close the window while packaging.".into(),
            ],
            status_rx: rx,
            status_tx: tx,

            is_busy: false,
            is_checking_update: false,
            current_task: "Idle".into(),

            form: FormState::default(),
            packager: PackagerConfig::default(),
            updater: UpdateConfig::default(),
        }
    }
}

impl eframe::App for PackApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        let is_dark = match self.theme_preference {
            theme::Theme::Dark => true,
            theme::Theme::Light => false,
            theme::Theme::System => !matches!(frame.info().system_theme, Some(eframe::Theme::Light)),
        };
        theme::apply_settings(ctx, is_dark);

        self.handle_messages();

        // Side -> Bottom -> Central
        self.render_sidebar(ctx);
        self.render_bottom_panel(ctx);
        self.render_content(ctx);
    }
}

impl PackApp {
    fn handle_messages(&mut self) {
        while let Ok(event) = self.status_rx.try_recv() {
            match event {
                AppEvent::Job(status) => self.on_job_status(status),
                AppEvent::Update(status) => self.on_update_status(status),
            }
        }
    }

    fn on_job_status(&mut self, status: JobStatus) {
        match status {
            JobStatus::Started { command } => {
                self.logs.push(format!("Command: {}", command));
                self.logs.push(String::new());
            }
            JobStatus::Output(line) => self.logs.push(line),
            JobStatus::Cleaning => self.current_task = "Cleaning up...".into(),
            JobStatus::Succeeded(outcome) => {
                let artifact = outcome
                    .artifact
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                self.current_task = "Done".into();
                self.logs.push(String::new());
                self.logs.push("Packaging succeeded!".into());
                self.logs.push(format!("Executable location: {}", artifact));
                utils::notify_info(
                    "Success",
                    &format!("Packaging complete!\nExecutable saved to:\n{}", artifact),
                );
            }
            JobStatus::Failed(e) => {
                self.current_task = "Error".into();
                self.logs.push(String::new());
                match &e {
                    PackError::PackagingFailure { .. } => {
                        self.logs
                            .push("Packaging failed, see the log above for details.".into());
                    }
                    other => self.logs.push(format!("Error: {}", other)),
                }
                if e.is_blocking() {
                    utils::notify_error(e.title(), &e.to_string());
                }
            }
            JobStatus::Finished => {
                self.is_busy = false;
                if self.current_task != "Error" {
                    self.current_task = "Done".into();
                }
            }
        }
    }

    fn on_update_status(&mut self, status: UpdateStatus) {
        match status {
            UpdateStatus::Checking => self.logs.push("Checking for updates...".into()),
            UpdateStatus::UpToDate { current } => {
                self.is_checking_update = false;
                self.logs
                    .push(format!("You are up to date (version {}).", current));
            }
            UpdateStatus::Available {
                current,
                latest,
                download_url,
            } => {
                self.is_checking_update = false;
                self.logs
                    .push(format!("Version {} is available (current {}).", latest, current));
                utils::notify_info(
                    "Update available",
                    &format!(
                        "A new version {} is available.\nYou are running {}.\n\nDownload: {}",
                        latest, current, download_url
                    ),
                );
            }
            UpdateStatus::Error(e) => {
                self.is_checking_update = false;
                self.logs.push(e.to_string());
                if e.is_blocking() {
                    utils::notify_error(e.title(), &e.to_string());
                }
            }
        }
    }

    fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .exact_width(200.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("PYPACK")
                            .strong()
                            .size(18.0)
                            .color(theme::ACCENT),
                    );
                    ui.label(egui::RichText::new("FACTORY").weak().size(10.0));
                });
                ui.add_space(30.0);

                let nav_btn = |ui: &mut egui::Ui, label: &str, tab: Tab, current: &Tab| {
                    let selected = *current == tab;
                    let text = if selected {
                        egui::RichText::new(label)
                            .strong()
                            .color(egui::Color32::WHITE)
                    } else {
                        egui::RichText::new(label)
                    };

                    let btn = egui::Button::new(text)
                        .min_size(egui::vec2(ui.available_width(), 38.0))
                        .rounding(6.0)
                        .fill(if selected {
                            theme::ACCENT
                        } else {
                            egui::Color32::TRANSPARENT
                        });

                    ui.add(btn).clicked().then_some(tab)
                };

                if let Some(t) = nav_btn(ui, "📦  Package", Tab::Package, &self.current_tab) {
                    self.current_tab = t;
                }
                if let Some(t) = nav_btn(ui, "ℹ  About", Tab::About, &self.current_tab) {
                    self.current_tab = t;
                }

                ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                    ui.add_space(20.0);

                    let theme_text = self.theme_preference.label();
                    theme::combo_box(ui, "theme_select", theme_text, |ui| {
                        for choice in [theme::Theme::Light, theme::Theme::Dark, theme::Theme::System]
                        {
                            ui.selectable_value(&mut self.theme_preference, choice, choice.label());
                        }
                    });

                    ui.add_space(5.0);
                    ui.separator();
                });
            });
    }

    fn render_bottom_panel(&mut self, ctx: &egui::Context) {
        let bg = ctx.style().visuals.extreme_bg_color;
        let panel_frame = egui::Frame::none().fill(bg).inner_margin(15.0);

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .min_height(180.0)
            .default_height(220.0)
            .frame(panel_frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("PACKAGING LOG").strong().small());

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if self.is_busy {
                            ui.spinner();
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(theme::ACCENT),
                            );
                        } else {
                            let status_color = if self.current_task == "Error" {
                                theme::palette::ERROR
                            } else {
                                egui::Color32::from_gray(110)
                            };
                            ui.label(
                                egui::RichText::new(&self.current_task)
                                    .strong()
                                    .color(status_color),
                            );
                        }
                    });
                });

                ui.add_space(4.0);
                theme::indeterminate_bar(ui, self.is_busy);
                ui.add_space(6.0);

                egui::ScrollArea::vertical()
                    .stick_to_bottom(true)
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        for line in &self.logs {
                            ui.label(
                                egui::RichText::new(line)
                                    .font(egui::FontId::monospace(12.0))
                                    .color(ui.visuals().weak_text_color()),
                            );
                        }
                    });
            });
    }

    fn render_content(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Frame::none()
                    .inner_margin(egui::Margin {
                        left: 5.0,
                        right: 17.5,
                        top: 17.5,
                        bottom: 1.0,
                    })
                    .show(ui, |ui| match self.current_tab {
                        Tab::Package => tabs::package::show(self, ui),
                        Tab::About => tabs::about::show(self, ui),
                    });
            });
        });
    }
}
