use eframe::egui;
use rand::Rng;

use crate::particles::ParticleField;

/// Paint the particle overlay. Particle coordinates are relative to `rect`.
pub fn draw<R: Rng>(ui: &egui::Ui, field: &ParticleField<R>, rect: egui::Rect) {
    let painter = ui.painter().with_clip_rect(rect);
    for p in field.particles() {
        let color = p.color();
        if color.a() == 0 {
            continue;
        }
        painter.circle_filled(rect.min + p.pos.to_vec2(), p.size, color);
    }
}
