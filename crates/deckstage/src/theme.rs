use eframe::egui::Color32;

/// Font sizes in points at the 1920x1080 reference resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub title: f32,
    pub section: f32,
    pub subsection: f32,
    pub body: f32,
    pub code: f32,
}

pub const TYPE_SCALE: TypeScale = TypeScale {
    title: 96.0,
    section: 72.0,
    subsection: 52.0,
    body: 44.0,
    code: 30.0,
};

/// Gold used for the accent, progress fill and particles.
pub const GOLD: Color32 = Color32::from_rgb(212, 168, 67);

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color32,
    pub foreground: Color32,
    pub heading_color: Color32,
    pub accent: Color32,
    /// Track color behind the progress fill and inactive dots.
    pub muted: Color32,
    /// Panels: code blocks, the media bar, toasts and the help card.
    pub code_background: Color32,
    pub sizes: TypeScale,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color32::from_rgb(0x12, 0x10, 0x0E),
            foreground: Color32::from_rgb(0xD8, 0xD2, 0xC6),
            heading_color: Color32::from_rgb(0xF5, 0xEE, 0xE0),
            accent: GOLD,
            muted: Color32::from_rgb(0x3A, 0x35, 0x2E),
            code_background: Color32::from_rgb(0x24, 0x21, 0x1D),
            sizes: TYPE_SCALE,
        }
    }

    /// Warm paper palette with a darker gold so the accent stays legible.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color32::from_rgb(0xFA, 0xF7, 0xF0),
            foreground: Color32::from_rgb(0x2A, 0x24, 0x1C),
            heading_color: Color32::from_rgb(0x1A, 0x14, 0x0C),
            accent: Color32::from_rgb(0xA8, 0x7C, 0x1E),
            muted: Color32::from_rgb(0xE2, 0xDA, 0xCA),
            code_background: Color32::from_rgb(0xEF, 0xEA, 0xDF),
            sizes: TYPE_SCALE,
        }
    }

    /// Unknown names fall back to the dark palette.
    pub fn from_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("light") {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn with_opacity(color: Color32, opacity: f32) -> Color32 {
        let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
        Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
    }

    pub fn heading_size(&self, level: u8) -> f32 {
        let s = &self.sizes;
        [s.title, s.section, s.subsection]
            .get(usize::from(level.max(1)) - 1)
            .copied()
            .unwrap_or(s.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_defaults_to_dark() {
        assert_eq!(Theme::from_name("light").name, "light");
        assert_eq!(Theme::from_name("dark").name, "dark");
        assert_eq!(Theme::from_name("neon").name, "dark");
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(Theme::from_name("LIGHT").name, "light");
    }

    #[test]
    fn test_heading_sizes_shrink_with_level() {
        let t = Theme::dark();
        assert_eq!(t.heading_size(1), TYPE_SCALE.title);
        assert_eq!(t.heading_size(3), TYPE_SCALE.subsection);
        assert_eq!(t.heading_size(4), TYPE_SCALE.body);
        assert_eq!(t.heading_size(0), TYPE_SCALE.title);
    }

    #[test]
    fn test_dark_accent_is_gold() {
        assert_eq!(Theme::dark().accent, GOLD);
    }

    #[test]
    fn test_with_opacity_clamps() {
        let c = Theme::with_opacity(Color32::WHITE, 2.0);
        assert_eq!(c.a(), 255);
        let c = Theme::with_opacity(Color32::WHITE, -1.0);
        assert_eq!(c.a(), 0);
    }
}
