use super::palette::{self, Palette};
use eframe::egui;

// ============================================================================
// BUTTONS
// ============================================================================

#[derive(PartialEq, Clone, Copy)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn get_colors(&self, colors: &Palette) -> (egui::Color32, egui::Color32) {
        match self {
            ButtonVariant::Primary => (colors.accent, egui::Color32::WHITE),
            ButtonVariant::Secondary => (colors.bg_input, colors.text_strong),
        }
    }
}

pub fn styled_button(ui: &mut egui::Ui, text: &str, variant: ButtonVariant) -> egui::Response {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let (bg_color, text_color) = variant.get_colors(&colors);

    ui.add(
        egui::Button::new(egui::RichText::new(text).color(text_color).strong())
            .fill(bg_color)
            .rounding(6.0)
            .min_size(egui::vec2(0.0, 32.0)),
    )
}

// ============================================================================
// CARD
// ============================================================================

/// Bordered section with a header strip.
pub fn card<R>(
    ui: &mut egui::Ui,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let colors = palette::get_colors(ui.visuals().dark_mode);

    egui::Frame::none()
        .fill(colors.bg_base)
        .rounding(8.0)
        .stroke(egui::Stroke::new(1.0, colors.border))
        .show(ui, |ui| {
            ui.spacing_mut().item_spacing.y = 0.0;

            egui::Frame::none()
                .fill(colors.bg_header)
                .rounding(egui::Rounding {
                    nw: 8.0,
                    ne: 8.0,
                    sw: 0.0,
                    se: 0.0,
                })
                .inner_margin(egui::Margin::symmetric(16.0, 10.0))
                .show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(
                        egui::RichText::new(title)
                            .strong()
                            .size(14.0)
                            .color(colors.text_strong),
                    );
                });

            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(ui.available_width(), 1.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 0.0, colors.border);

            egui::Frame::none()
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    add_contents(ui)
                })
                .inner
        })
        .inner
}

// ============================================================================
// COMBO BOX
// ============================================================================

pub fn combo_box(
    ui: &mut egui::Ui,
    id: &str,
    selected_text: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    let colors = palette::get_colors(ui.visuals().dark_mode);

    ui.scope(|ui| {
        ui.spacing_mut().button_padding = egui::vec2(10.0, 7.0);
        let v = ui.visuals_mut();

        v.widgets.inactive.rounding = 6.0.into();
        v.widgets.inactive.weak_bg_fill = colors.bg_input;
        v.widgets.inactive.bg_stroke = egui::Stroke::new(1.0, colors.border);
        v.widgets.hovered = v.widgets.inactive;
        v.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, colors.accent);
        v.widgets.open = v.widgets.hovered;

        egui::ComboBox::from_id_source(id)
            .selected_text(selected_text)
            .width(ui.available_width())
            .show_ui(ui, add_contents);
    });
}

// ============================================================================
// PATH ROW
// ============================================================================

/// Label, editable path field and a browse button. Returns true when browse was clicked.
pub fn path_row(ui: &mut egui::Ui, label: &str, value: &mut String, hint: &str) -> bool {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let mut browse = false;

    ui.label(egui::RichText::new(label).strong());
    ui.horizontal(|ui| {
        let button_width = 96.0;
        let field_width = (ui.available_width() - button_width - 8.0).max(120.0);

        egui::Frame::none()
            .inner_margin(egui::Margin::symmetric(10.0, 7.0))
            .fill(colors.bg_input)
            .rounding(6.0)
            .stroke(egui::Stroke::new(1.0, colors.border))
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(value)
                        .hint_text(hint)
                        .desired_width(field_width - 20.0)
                        .frame(false)
                        .text_color(colors.text_strong),
                );
            });

        if styled_button(ui, "📂 Browse...", ButtonVariant::Secondary).clicked() {
            browse = true;
        }
    });

    browse
}

// ============================================================================
// PROGRESS
// ============================================================================

/// Thin bar with a sliding segment while `active`; an empty track otherwise.
pub fn indeterminate_bar(ui: &mut egui::Ui, active: bool) {
    let colors = palette::get_colors(ui.visuals().dark_mode);
    let bar_height = 6.0;
    let rounding = 3.0;

    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), bar_height),
        egui::Sense::hover(),
    );
    ui.painter().rect_filled(rect, rounding, colors.track);

    if !active {
        return;
    }

    let segment = rect.width() * 0.25;
    let t = (ui.input(|i| i.time) * 0.6).fract() as f32;
    let left = rect.left() - segment + t * (rect.width() + segment);
    let fill = egui::Rect::from_min_max(
        egui::pos2(left.max(rect.left()), rect.top()),
        egui::pos2((left + segment).min(rect.right()), rect.bottom()),
    );
    if fill.width() > 0.0 {
        ui.painter().rect_filled(fill, rounding, colors.accent);
    }
    ui.ctx().request_repaint();
}
