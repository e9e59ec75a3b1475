//! Presentation chrome drawn over the slides: progress bar, counter, dot
//! markers, arrow controls, media bar, preloader and the shortcut overlay.

use eframe::egui::{self, FontId};

use crate::input::Intent;
use crate::media::MediaPlayback;
use crate::navigator::{ArrowState, Indicators};
use crate::theme::Theme;

const PROGRESS_HEIGHT: f32 = 4.0;
const DOT_RADIUS: f32 = 5.0;
const DOT_SPACING: f32 = 22.0;
const ARROW_RADIUS: f32 = 28.0;

pub fn draw_progress(
    ui: &egui::Ui,
    indicators: &Indicators,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) {
    let h = PROGRESS_HEIGHT * scale;
    let track = egui::Rect::from_min_size(rect.min, egui::vec2(rect.width(), h));
    ui.painter()
        .rect_filled(track, 0.0, Theme::with_opacity(theme.muted, 0.6));
    let fill_width = rect.width() * indicators.progress_percent / 100.0;
    let fill = egui::Rect::from_min_size(rect.min, egui::vec2(fill_width, h));
    ui.painter().rect_filled(fill, 0.0, theme.accent);
}

pub fn draw_counter(
    ui: &egui::Ui,
    indicators: &Indicators,
    slide_count: usize,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) {
    let current_color = theme.accent;
    let total_color = Theme::with_opacity(theme.foreground, 0.4);
    let current = ui.painter().layout_no_wrap(
        indicators.counter.clone(),
        FontId::monospace(22.0 * scale),
        current_color,
    );
    let total = ui.painter().layout_no_wrap(
        format!(" / {slide_count:02}"),
        FontId::monospace(14.0 * scale),
        total_color,
    );
    let pos = egui::pos2(
        rect.left() + 28.0 * scale,
        rect.bottom() - 28.0 * scale - current.rect.height(),
    );
    let total_pos = egui::pos2(
        pos.x + current.rect.width(),
        pos.y + current.rect.height() - total.rect.height(),
    );
    ui.painter().galley(pos, current, current_color);
    ui.painter().galley(total_pos, total, total_color);
}

/// Draw the dot markers. Returns the index of a clicked dot.
pub fn draw_dots(
    ui: &egui::Ui,
    indicators: &Indicators,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Option<usize> {
    let count = indicators.dots.len();
    let spacing = DOT_SPACING * scale;
    let y = rect.bottom() - 36.0 * scale;
    let start_x = rect.center().x - spacing * (count.saturating_sub(1)) as f32 / 2.0;

    let mut clicked = None;
    for (i, &active) in indicators.dots.iter().enumerate() {
        let center = egui::pos2(start_x + spacing * i as f32, y);
        let hit = egui::Rect::from_center_size(center, egui::vec2(spacing, spacing));
        let response = ui
            .interact(hit, egui::Id::new(("slide_dot", i)), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(format!("Go to slide {}", i + 1));

        let (radius, color) = if active {
            (DOT_RADIUS * 1.4 * scale, theme.accent)
        } else if response.hovered() {
            (DOT_RADIUS * scale, Theme::with_opacity(theme.accent, 0.6))
        } else {
            (DOT_RADIUS * scale, theme.muted)
        };
        ui.painter().circle_filled(center, radius, color);

        if response.clicked() {
            clicked = Some(i);
        }
    }
    clicked
}

/// Draw one arrow control. Disabled arrows are faded and ignore the pointer.
fn draw_arrow(
    ui: &egui::Ui,
    state: ArrowState,
    center: egui::Pos2,
    glyph: &str,
    id: &str,
    theme: &Theme,
    scale: f32,
) -> bool {
    let radius = ARROW_RADIUS * scale;
    let mut hovered = false;
    let mut clicked = false;
    if state.enabled {
        let hit = egui::Rect::from_center_size(center, egui::vec2(radius * 2.0, radius * 2.0));
        let response = ui
            .interact(hit, egui::Id::new(id), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        hovered = response.hovered();
        clicked = response.clicked();
    }

    let fill = if hovered {
        Theme::with_opacity(theme.accent, 0.25 * state.opacity)
    } else {
        Theme::with_opacity(theme.code_background, 0.7 * state.opacity)
    };
    let stroke_color = Theme::with_opacity(theme.accent, state.opacity);
    ui.painter().circle(
        center,
        radius,
        fill,
        egui::Stroke::new(1.5 * scale, stroke_color),
    );
    ui.painter().text(
        center,
        egui::Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(30.0 * scale),
        stroke_color,
    );
    clicked
}

/// Draw prev/next controls, returning the intent of a click.
pub fn draw_arrows(
    ui: &egui::Ui,
    indicators: &Indicators,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Option<Intent> {
    let margin = 48.0 * scale;
    let y = rect.center().y;
    let prev = draw_arrow(
        ui,
        indicators.prev,
        egui::pos2(rect.left() + margin, y),
        "\u{2039}",
        "nav_prev",
        theme,
        scale,
    );
    let next = draw_arrow(
        ui,
        indicators.next,
        egui::pos2(rect.right() - margin, y),
        "\u{203A}",
        "nav_next",
        theme,
        scale,
    );
    if prev {
        Some(Intent::Retreat)
    } else if next {
        Some(Intent::Advance)
    } else {
        None
    }
}

pub fn draw_footer(ui: &egui::Ui, footer: &str, theme: &Theme, rect: egui::Rect, scale: f32) {
    let color = Theme::with_opacity(theme.foreground, 0.4);
    let galley = ui.painter().layout_no_wrap(
        footer.to_string(),
        FontId::proportional(14.0 * scale),
        color,
    );
    let pos = egui::pos2(
        rect.right() - galley.rect.width() - 28.0 * scale,
        rect.bottom() - 30.0 * scale - galley.rect.height() / 2.0,
    );
    ui.painter().galley(pos, galley, color);
}

/// What the viewer did with the media bar this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaAction {
    Toggle,
    /// Seek to a fraction of the duration.
    Seek(f32),
}

/// Media bar for the designated media slide.
pub fn draw_media_bar(
    ui: &egui::Ui,
    media: &MediaPlayback,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) -> Option<MediaAction> {
    let bar_width = rect.width() * 0.5;
    let height = 44.0 * scale;
    let bar = egui::Rect::from_center_size(
        egui::pos2(rect.center().x, rect.bottom() - 100.0 * scale),
        egui::vec2(bar_width, height),
    );
    ui.painter().rect_filled(
        bar,
        height / 2.0,
        Theme::with_opacity(theme.code_background, 0.85),
    );

    let button_center = egui::pos2(bar.left() + height / 2.0, bar.center().y);
    let button = egui::Rect::from_center_size(button_center, egui::vec2(height, height));
    let response = ui
        .interact(button, egui::Id::new("media_toggle"), egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    let glyph = if media.is_playing() { "\u{23F8}" } else { "\u{25B6}" };
    ui.painter().text(
        button_center,
        egui::Align2::CENTER_CENTER,
        glyph,
        FontId::proportional(20.0 * scale),
        theme.accent,
    );

    // Timeline
    let meter_width = 60.0 * scale;
    let timeline = egui::Rect::from_min_max(
        egui::pos2(bar.left() + height, bar.center().y - 2.0 * scale),
        egui::pos2(bar.right() - meter_width - 24.0 * scale, bar.center().y + 2.0 * scale),
    );
    let scrub = ui
        .interact(
            timeline.expand2(egui::vec2(0.0, 8.0 * scale)),
            egui::Id::new("media_timeline"),
            egui::Sense::click(),
        )
        .on_hover_cursor(egui::CursorIcon::PointingHand);
    ui.painter().rect_filled(timeline, 2.0 * scale, theme.muted);
    let played = egui::Rect::from_min_size(
        timeline.min,
        egui::vec2(timeline.width() * media.progress(), timeline.height()),
    );
    ui.painter().rect_filled(played, 2.0 * scale, theme.accent);

    // Volume meter
    let meter = egui::Rect::from_min_size(
        egui::pos2(bar.right() - meter_width - 16.0 * scale, bar.center().y - 3.0 * scale),
        egui::vec2(meter_width, 6.0 * scale),
    );
    ui.painter().rect_filled(meter, 3.0 * scale, theme.muted);
    let level = egui::Rect::from_min_size(
        meter.min,
        egui::vec2(meter_width * media.volume(), meter.height()),
    );
    ui.painter()
        .rect_filled(level, 3.0 * scale, Theme::with_opacity(theme.accent, 0.8));

    let time = format!("{:.0}s / {:.0}s", media.position(), media.duration());
    let color = Theme::with_opacity(theme.foreground, 0.5);
    ui.painter().text(
        egui::pos2(timeline.center().x, bar.bottom() + 14.0 * scale),
        egui::Align2::CENTER_CENTER,
        time,
        FontId::monospace(12.0 * scale),
        color,
    );

    if response.clicked() {
        Some(MediaAction::Toggle)
    } else if scrub.clicked() {
        scrub.interact_pointer_pos().map(|pos| {
            MediaAction::Seek(((pos.x - timeline.left()) / timeline.width()).clamp(0.0, 1.0))
        })
    } else {
        None
    }
}

/// Full-window loading screen, faded by `opacity`.
pub fn draw_preloader(
    ui: &egui::Ui,
    title: &str,
    theme: &Theme,
    rect: egui::Rect,
    opacity: f32,
    scale: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    ui.painter()
        .rect_filled(rect, 0.0, Theme::with_opacity(theme.background, opacity));
    ui.painter().circle_stroke(
        rect.center() - egui::vec2(0.0, 50.0 * scale),
        24.0 * scale,
        egui::Stroke::new(3.0 * scale, Theme::with_opacity(theme.accent, opacity)),
    );
    ui.painter().text(
        rect.center() + egui::vec2(0.0, 20.0 * scale),
        egui::Align2::CENTER_CENTER,
        title,
        FontId::proportional(32.0 * scale),
        Theme::with_opacity(theme.heading_color, opacity),
    );
}

pub fn draw_toast(
    ui: &egui::Ui,
    message: &str,
    opacity: f32,
    theme: &Theme,
    rect: egui::Rect,
    scale: f32,
) {
    if opacity <= 0.0 {
        return;
    }
    let color = Theme::with_opacity(theme.foreground, opacity * 0.9);
    let bg = Theme::with_opacity(theme.code_background, opacity * 0.9);
    let galley = ui.painter().layout_no_wrap(
        message.to_string(),
        FontId::proportional(20.0 * scale),
        color,
    );
    let padding = 16.0 * scale;
    let toast_rect = egui::Rect::from_min_size(
        egui::pos2(
            rect.center().x - galley.rect.width() / 2.0 - padding,
            rect.top() + 40.0 * scale,
        ),
        galley.rect.size() + egui::vec2(padding * 2.0, padding * 2.0),
    );
    ui.painter().rect_filled(toast_rect, 8.0 * scale, bg);
    ui.painter()
        .galley(toast_rect.min + egui::vec2(padding, padding), galley, color);
}

pub fn draw_help(ui: &egui::Ui, theme: &Theme, rect: egui::Rect, scale: f32) {
    let shortcuts = [
        ("\u{2192} / \u{2193} / Space / PgDn", "Next slide"),
        ("\u{2190} / \u{2191} / PgUp", "Previous slide"),
        ("Home / End", "First / last slide"),
        ("Wheel", "Next / previous slide"),
        ("Swipe", "Left or up: next"),
        ("Enter", "Play / pause media"),
        ("F", "Toggle fullscreen"),
        ("Esc", "Leave fullscreen"),
        ("H", "Toggle this help"),
        ("Q", "Quit"),
    ];

    let bg = Theme::with_opacity(theme.code_background, 0.92);
    let text_color = Theme::with_opacity(theme.foreground, 0.9);
    let key_color = theme.accent;

    let padding = 24.0 * scale;
    let line_height = 32.0 * scale;
    let height = shortcuts.len() as f32 * line_height + padding * 2.0 + 40.0 * scale;
    let width = 460.0 * scale;
    let panel = egui::Rect::from_center_size(rect.center(), egui::vec2(width, height));
    ui.painter().rect_filled(panel, 12.0 * scale, bg);

    ui.painter().text(
        egui::pos2(panel.left() + padding, panel.top() + padding),
        egui::Align2::LEFT_TOP,
        "Keyboard Shortcuts",
        FontId::proportional(20.0 * scale),
        theme.heading_color,
    );

    let mut y = panel.top() + padding + 40.0 * scale;
    for (key, desc) in shortcuts {
        ui.painter().text(
            egui::pos2(panel.left() + padding, y),
            egui::Align2::LEFT_TOP,
            key,
            FontId::monospace(15.0 * scale),
            key_color,
        );
        ui.painter().text(
            egui::pos2(panel.left() + padding + 250.0 * scale, y),
            egui::Align2::LEFT_TOP,
            desc,
            FontId::proportional(15.0 * scale),
            text_color,
        );
        y += line_height;
    }
}
