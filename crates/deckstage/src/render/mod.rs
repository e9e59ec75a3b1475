pub mod chrome;
pub mod particles;
pub mod text;
pub mod transition;

use eframe::egui::{self, FontId, Pos2};

use crate::parser::{Block, Layout, Slide};
use crate::theme::Theme;

/// Render a single slide using its layout.
pub fn render_slide(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if opacity < 0.01 {
        return;
    }
    match slide.layout {
        Layout::Title | Layout::Section => render_centered(ui, slide, theme, rect, opacity, scale),
        Layout::Quote => render_quote(ui, slide, theme, rect, opacity, scale),
        Layout::Content => render_content(ui, slide, theme, rect, opacity, scale),
    }
}

/// Title and section slides: everything centered, headings first.
fn render_centered(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 120.0 * scale;
    let width = rect.width() - padding * 2.0;
    let gap = 28.0 * scale;

    let lines: Vec<(String, FontId, egui::Color32)> = slide
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { level, text } => Some((
                text.clone(),
                FontId::proportional(theme.heading_size(*level) * scale),
                Theme::with_opacity(theme.heading_color, opacity),
            )),
            Block::Paragraph { text } => Some((
                text.clone(),
                FontId::proportional(theme.sizes.body * 0.9 * scale),
                Theme::with_opacity(theme.accent, opacity),
            )),
            _ => None,
        })
        .collect();

    let heights: Vec<f32> = lines
        .iter()
        .map(|(text, font, color)| {
            ui.painter()
                .layout(text.clone(), font.clone(), *color, width)
                .rect
                .height()
        })
        .collect();
    let total: f32 = heights.iter().sum::<f32>() + gap * heights.len().saturating_sub(1) as f32;

    let mut y = rect.center().y - total / 2.0;
    for (text, font, color) in lines {
        let h = text::draw_text_centered(ui, &text, rect.left() + padding, y, font, color, width);
        y += h + gap;
    }

    // Accent rule under title slides
    if slide.layout == Layout::Title {
        let rule = egui::Rect::from_center_size(
            egui::pos2(rect.center().x, y + 10.0 * scale),
            egui::vec2(120.0 * scale, 3.0 * scale),
        );
        ui.painter()
            .rect_filled(rule, 1.5 * scale, Theme::with_opacity(theme.accent, opacity));
    }
}

fn render_quote(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 160.0 * scale;
    let width = rect.width() - padding * 2.0;
    let mut y = rect.top() + rect.height() * 0.3;

    for block in &slide.blocks {
        let h = match block {
            Block::Quote { text } => text::draw_text_centered(
                ui,
                &format!("\u{201C}{text}\u{201D}"),
                rect.left() + padding,
                y,
                FontId::proportional(theme.sizes.body * 1.3 * scale),
                Theme::with_opacity(theme.heading_color, opacity),
                width,
            ),
            Block::Paragraph { text } => text::draw_text_centered(
                ui,
                text,
                rect.left() + padding,
                y,
                FontId::proportional(theme.sizes.body * 0.8 * scale),
                Theme::with_opacity(theme.accent, opacity),
                width,
            ),
            other => text::draw_block(
                ui,
                other,
                theme,
                Pos2::new(rect.left() + padding, y),
                width,
                opacity,
                scale,
            ),
        };
        y += h + 40.0 * scale;
    }
}

fn render_content(
    ui: &egui::Ui,
    slide: &Slide,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    let padding = 100.0 * scale;
    let width = rect.width() - padding * 2.0;
    let mut y = rect.top() + padding;

    for block in &slide.blocks {
        let h = text::draw_block(
            ui,
            block,
            theme,
            Pos2::new(rect.left() + padding, y),
            width,
            opacity,
            scale,
        );
        let gap = match block {
            Block::Heading { .. } => 40.0,
            _ => 28.0,
        };
        y += h + gap * scale;
    }
}
