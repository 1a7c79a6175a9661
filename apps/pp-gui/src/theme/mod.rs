pub mod palette;
pub mod style;
pub mod widgets;

pub use palette::ACCENT;
pub use style::apply_settings;
pub use widgets::{card, combo_box, indeterminate_bar, path_row, styled_button, ButtonVariant};

#[derive(PartialEq, Clone, Copy)]
pub enum Theme {
    Dark,
    Light,
    System,
}

impl Theme {
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "☀ Light",
            Theme::Dark => "🌙 Dark",
            Theme::System => "💻 System",
        }
    }
}
