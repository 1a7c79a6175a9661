use eframe::egui::Color32;

// Python blue
pub const ACCENT: Color32 = Color32::from_rgb(55, 118, 171);
pub const ERROR: Color32 = Color32::from_rgb(214, 69, 65);

// --- DARK ---
const DARK_BG_BASE: Color32 = Color32::from_rgb(30, 31, 34);
const DARK_BG_HEADER: Color32 = Color32::from_rgb(38, 40, 44);
const DARK_BG_INPUT: Color32 = Color32::from_rgb(44, 46, 51);
const DARK_BG_CONSOLE: Color32 = Color32::from_rgb(20, 20, 23);
const DARK_BORDER: Color32 = Color32::from_gray(62);
const DARK_TEXT_STRONG: Color32 = Color32::from_gray(236);
const DARK_TRACK: Color32 = Color32::from_gray(45);

// --- LIGHT ---
const LIGHT_BG_BASE: Color32 = Color32::from_rgb(255, 255, 255);
const LIGHT_BG_HEADER: Color32 = Color32::from_gray(247);
const LIGHT_BG_INPUT: Color32 = Color32::from_rgb(241, 242, 246);
const LIGHT_BG_CONSOLE: Color32 = Color32::from_rgb(240, 240, 245);
const LIGHT_BORDER: Color32 = Color32::from_gray(218);
const LIGHT_TEXT_STRONG: Color32 = Color32::from_gray(38);
const LIGHT_TRACK: Color32 = Color32::from_gray(205);

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_base: Color32,
    pub bg_header: Color32,
    pub bg_input: Color32,
    pub bg_console: Color32,
    pub border: Color32,
    pub text_strong: Color32,
    pub track: Color32,
    pub accent: Color32,
}

pub fn get_colors(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            bg_base: DARK_BG_BASE,
            bg_header: DARK_BG_HEADER,
            bg_input: DARK_BG_INPUT,
            bg_console: DARK_BG_CONSOLE,
            border: DARK_BORDER,
            text_strong: DARK_TEXT_STRONG,
            track: DARK_TRACK,
            accent: ACCENT,
        }
    } else {
        Palette {
            bg_base: LIGHT_BG_BASE,
            bg_header: LIGHT_BG_HEADER,
            bg_input: LIGHT_BG_INPUT,
            bg_console: LIGHT_BG_CONSOLE,
            border: LIGHT_BORDER,
            text_strong: LIGHT_TEXT_STRONG,
            track: LIGHT_TRACK,
            accent: ACCENT,
        }
    }
}
