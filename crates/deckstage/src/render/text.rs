use eframe::egui::{self, FontId, Pos2};

use crate::parser::Block;
use crate::theme::Theme;

/// Lay out wrapped text at `pos`, returning the height used.
pub fn draw_text(
    ui: &egui::Ui,
    text: &str,
    pos: Pos2,
    font: FontId,
    color: egui::Color32,
    max_width: f32,
) -> f32 {
    let galley = ui
        .painter()
        .layout(text.to_string(), font, color, max_width);
    let height = galley.rect.height();
    ui.painter().galley(pos, galley, color);
    height
}

/// Same as [`draw_text`] but horizontally centered in `[left, left + width]`.
pub fn draw_text_centered(
    ui: &egui::Ui,
    text: &str,
    left: f32,
    top: f32,
    font: FontId,
    color: egui::Color32,
    width: f32,
) -> f32 {
    let galley = ui.painter().layout(text.to_string(), font, color, width);
    let height = galley.rect.height();
    let x = left + (width - galley.rect.width()) / 2.0;
    ui.painter().galley(egui::pos2(x, top), galley, color);
    height
}

#[allow(clippy::too_many_arguments)]
pub fn draw_heading(
    ui: &egui::Ui,
    text: &str,
    level: u8,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let size = theme.heading_size(level) * scale;
    let color = Theme::with_opacity(theme.heading_color, opacity);
    draw_text(ui, text, pos, FontId::proportional(size), color, max_width)
}

#[allow(clippy::too_many_arguments)]
fn draw_list(
    ui: &egui::Ui,
    ordered: bool,
    items: &[String],
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let size = theme.sizes.body * scale;
    let color = Theme::with_opacity(theme.foreground, opacity);
    let marker_color = Theme::with_opacity(theme.accent, opacity);
    let indent = size * 1.4;
    let gap = size * 0.35;

    let mut y = pos.y;
    for (i, item) in items.iter().enumerate() {
        let marker = if ordered {
            format!("{}.", i + 1)
        } else {
            "\u{2022}".to_string()
        };
        ui.painter().text(
            egui::pos2(pos.x, y),
            egui::Align2::LEFT_TOP,
            marker,
            FontId::proportional(size),
            marker_color,
        );
        let h = draw_text(
            ui,
            item,
            egui::pos2(pos.x + indent, y),
            FontId::proportional(size),
            color,
            max_width - indent,
        );
        y += h + gap;
    }
    y - pos.y
}

fn draw_quote(
    ui: &egui::Ui,
    text: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let bar_width = 4.0 * scale;
    let inset = 24.0 * scale;
    let color = Theme::with_opacity(theme.foreground, opacity);
    let h = draw_text(
        ui,
        text,
        egui::pos2(pos.x + inset, pos.y),
        FontId::proportional(theme.sizes.body * 1.15 * scale),
        color,
        max_width - inset,
    );
    let bar = egui::Rect::from_min_size(pos, egui::vec2(bar_width, h));
    ui.painter()
        .rect_filled(bar, 2.0 * scale, Theme::with_opacity(theme.accent, opacity));
    h
}

fn draw_code(
    ui: &egui::Ui,
    code: &str,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    let padding = 20.0 * scale;
    let color = Theme::with_opacity(theme.foreground, opacity);
    let galley = ui.painter().layout(
        code.to_string(),
        FontId::monospace(theme.sizes.code * scale),
        color,
        max_width - padding * 2.0,
    );
    let bg = egui::Rect::from_min_size(
        pos,
        egui::vec2(max_width, galley.rect.height() + padding * 2.0),
    );
    ui.painter().rect_filled(
        bg,
        8.0 * scale,
        Theme::with_opacity(theme.code_background, opacity),
    );
    ui.painter()
        .galley(pos + egui::vec2(padding, padding), galley, color);
    bg.height()
}

/// Draw one block, returning the height used.
pub fn draw_block(
    ui: &egui::Ui,
    block: &Block,
    theme: &Theme,
    pos: Pos2,
    max_width: f32,
    opacity: f32,
    scale: f32,
) -> f32 {
    match block {
        Block::Heading { level, text } => {
            draw_heading(ui, text, *level, theme, pos, max_width, opacity, scale)
        }
        Block::Paragraph { text } => draw_text(
            ui,
            text,
            pos,
            FontId::proportional(theme.sizes.body * scale),
            Theme::with_opacity(theme.foreground, opacity),
            max_width,
        ),
        Block::List { ordered, items } => {
            draw_list(ui, *ordered, items, theme, pos, max_width, opacity, scale)
        }
        Block::Quote { text } => draw_quote(ui, text, theme, pos, max_width, opacity, scale),
        Block::Code { code, .. } => draw_code(ui, code, theme, pos, max_width, opacity, scale),
    }
}
