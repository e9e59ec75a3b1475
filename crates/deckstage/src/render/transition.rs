use eframe::egui;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    Fade,
    SlideHorizontal,
    None,
}

impl TransitionKind {
    pub fn from_name(name: &str) -> Self {
        match name {
            "slide" => Self::SlideHorizontal,
            "none" => Self::None,
            _ => Self::Fade,
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// Where to draw a slide during a transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlidePlacement {
    pub index: usize,
    pub rect: egui::Rect,
    pub opacity: f32,
}

/// Placements for the outgoing and incoming slide at raw progress `t`.
/// The outgoing slide comes first so the incoming one paints on top.
pub fn placements(
    kind: TransitionKind,
    from: usize,
    to: usize,
    t: f32,
    rect: egui::Rect,
) -> Vec<SlidePlacement> {
    let progress = ease_in_out(t.clamp(0.0, 1.0));
    match kind {
        TransitionKind::Fade => vec![
            SlidePlacement {
                index: from,
                rect,
                opacity: 1.0 - progress,
            },
            SlidePlacement {
                index: to,
                rect,
                opacity: progress,
            },
        ],
        TransitionKind::SlideHorizontal => {
            let w = rect.width();
            let sign = if to > from { -1.0 } else { 1.0 };
            let from_offset = sign * progress * w;
            let to_offset = from_offset - sign * w;
            vec![
                SlidePlacement {
                    index: from,
                    rect: rect.translate(egui::vec2(from_offset, 0.0)),
                    opacity: 1.0,
                },
                SlidePlacement {
                    index: to,
                    rect: rect.translate(egui::vec2(to_offset, 0.0)),
                    opacity: 1.0,
                },
            ]
        }
        TransitionKind::None => vec![SlidePlacement {
            index: to,
            rect,
            opacity: 1.0,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1000.0, 500.0))
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(0.5), 0.5);
        assert_eq!(ease_in_out(1.0), 1.0);
    }

    #[test]
    fn test_fade_crossfades() {
        let p = placements(TransitionKind::Fade, 2, 3, 1.0, screen());
        assert_eq!(p[0].index, 2);
        assert_eq!(p[0].opacity, 0.0);
        assert_eq!(p[1].index, 3);
        assert_eq!(p[1].opacity, 1.0);
    }

    #[test]
    fn test_slide_forward_moves_left() {
        let p = placements(TransitionKind::SlideHorizontal, 0, 1, 0.5, screen());
        assert_eq!(p[0].rect.left(), -500.0);
        assert_eq!(p[1].rect.left(), 500.0);

        let done = placements(TransitionKind::SlideHorizontal, 0, 1, 1.0, screen());
        assert_eq!(done[1].rect, screen());
    }

    #[test]
    fn test_slide_backward_moves_right() {
        let p = placements(TransitionKind::SlideHorizontal, 4, 1, 0.5, screen());
        assert_eq!(p[0].rect.left(), 500.0);
        assert_eq!(p[1].rect.left(), -500.0);
    }

    #[test]
    fn test_none_draws_target_only() {
        let p = placements(TransitionKind::None, 0, 5, 0.1, screen());
        assert_eq!(p.len(), 1);
        assert_eq!(p[0].index, 5);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(TransitionKind::from_name("slide"), TransitionKind::SlideHorizontal);
        assert_eq!(TransitionKind::from_name("none"), TransitionKind::None);
        assert_eq!(TransitionKind::from_name("fade"), TransitionKind::Fade);
        assert_eq!(TransitionKind::from_name("zoom"), TransitionKind::Fade);
    }
}
