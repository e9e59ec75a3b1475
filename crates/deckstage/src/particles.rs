//! Ambient particles: a fixed pool of gold motes drifting upward behind the
//! controls. Purely decorative, never reads navigation state.

use eframe::egui::{Color32, Pos2, Vec2, pos2, vec2};
use rand::Rng;

pub const PARTICLE_COUNT: usize = 40;
pub const PARTICLE_RGB: (u8, u8, u8) = (212, 168, 67);
/// Opacity of the whole overlay layer.
pub const LAYER_OPACITY: f32 = 0.3;
/// Life units over which a particle fades out before expiring.
pub const FADE_LIFE: f32 = 50.0;
/// Seconds per simulation step.
pub const STEP_TIME: f32 = 1.0 / 60.0;
/// Cap on catch-up steps after a stalled frame.
pub const MAX_STEPS_PER_FRAME: u32 = 4;

const MAX_LIFE: f32 = 300.0;
/// Particles may drift this far outside the surface before being recycled.
const EDGE_MARGIN: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Pos2,
    pub size: f32,
    pub velocity: Vec2,
    pub opacity: f32,
    pub life: f32,
    pub max_life: f32,
}

impl Particle {
    fn random<R: Rng>(rng: &mut R, bounds: Vec2) -> Self {
        Self {
            pos: pos2(rng.random::<f32>() * bounds.x, rng.random::<f32>() * bounds.y),
            size: rng.random::<f32>() * 2.0 + 0.5,
            velocity: vec2(
                (rng.random::<f32>() - 0.5) * 0.3,
                -rng.random::<f32>() * 0.4 - 0.1,
            ),
            opacity: rng.random::<f32>() * 0.5 + 0.1,
            life: rng.random::<f32>() * 200.0 + 100.0,
            max_life: MAX_LIFE,
        }
    }

    fn is_out_of_bounds(&self, bounds: Vec2) -> bool {
        self.pos.y < -EDGE_MARGIN
            || self.pos.x < -EDGE_MARGIN
            || self.pos.x > bounds.x + EDGE_MARGIN
    }

    /// Ramps to full strength over the last [`FADE_LIFE`] units of life.
    pub fn fade(&self) -> f32 {
        (self.life / FADE_LIFE).min(1.0)
    }

    /// Final draw color, including the layer opacity.
    pub fn color(&self) -> Color32 {
        let alpha = (self.opacity * self.fade() * LAYER_OPACITY).clamp(0.0, 1.0);
        let (r, g, b) = PARTICLE_RGB;
        Color32::from_rgba_unmultiplied(r, g, b, (alpha * 255.0) as u8)
    }
}

pub struct ParticleField<R> {
    particles: Vec<Particle>,
    bounds: Vec2,
    rng: R,
    accumulator: f32,
}

impl<R: Rng> ParticleField<R> {
    pub fn new(bounds: Vec2, mut rng: R) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| {
                let mut p = Particle::random(&mut rng, bounds);
                // stagger so the pool never expires in unison
                p.life = rng.random::<f32>() * p.max_life;
                p
            })
            .collect();
        Self {
            particles,
            bounds,
            rng,
            accumulator: 0.0,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[allow(dead_code)]
    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// Follow a viewport resize. Existing positions are kept as they are.
    pub fn resize(&mut self, bounds: Vec2) {
        if bounds != self.bounds {
            log::trace!("particle surface resized to {}x{}", bounds.x, bounds.y);
            self.bounds = bounds;
        }
    }

    /// One simulation step: move, age, and recycle expired or escaped
    /// particles at the bottom edge.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for p in &mut self.particles {
            p.pos += p.velocity;
            p.life -= 1.0;

            if p.life <= 0.0 || p.is_out_of_bounds(bounds) {
                *p = Particle::random(&mut self.rng, bounds);
                p.pos.y = bounds.y + EDGE_MARGIN;
            }
        }
    }

    /// Run as many fixed steps as `dt` seconds cover. Returns the step count.
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt.max(0.0);
        let mut steps = 0;
        while self.accumulator >= STEP_TIME && steps < MAX_STEPS_PER_FRAME {
            self.step();
            self.accumulator -= STEP_TIME;
            steps += 1;
        }
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = 0.0;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn field() -> ParticleField<StdRng> {
        ParticleField::new(vec2(800.0, 600.0), StdRng::seed_from_u64(7))
    }

    fn still(pos: Pos2, life: f32) -> Particle {
        Particle {
            pos,
            size: 1.0,
            velocity: Vec2::ZERO,
            opacity: 0.5,
            life,
            max_life: MAX_LIFE,
        }
    }

    #[test]
    fn test_pool_is_fixed_size() {
        let mut f = field();
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
        for _ in 0..1000 {
            f.step();
        }
        assert_eq!(f.particles().len(), PARTICLE_COUNT);
    }

    #[test]
    fn test_initial_particles_within_ranges() {
        let f = field();
        for p in f.particles() {
            assert!((0.0..=800.0).contains(&p.pos.x));
            assert!((0.0..=600.0).contains(&p.pos.y));
            assert!((0.5..2.5).contains(&p.size));
            assert!((-0.15..=0.15).contains(&p.velocity.x));
            assert!(p.velocity.y < 0.0 && p.velocity.y >= -0.5, "drifts upward");
            assert!((0.1..0.6).contains(&p.opacity));
            assert!((0.0..MAX_LIFE).contains(&p.life));
        }
    }

    #[test]
    fn test_initial_spread_covers_the_whole_surface() {
        let bounds = vec2(2560.0, 1440.0);
        let f = ParticleField::new(bounds, StdRng::seed_from_u64(11));
        let max_x = f.particles().iter().map(|p| p.pos.x).fold(0.0, f32::max);
        let max_y = f.particles().iter().map(|p| p.pos.y).fold(0.0, f32::max);
        assert!(max_x <= bounds.x && max_y <= bounds.y);
        assert!(max_x > bounds.x / 2.0, "x spread stops at {max_x}");
        assert!(max_y > bounds.y / 2.0, "y spread stops at {max_y}");
    }

    #[test]
    fn test_expired_particle_respawns_at_bottom_same_step() {
        let mut f = field();
        f.particles[0] = still(pos2(100.0, 100.0), 1.0);
        f.step();
        let p = &f.particles()[0];
        assert_eq!(p.pos.y, 600.0 + EDGE_MARGIN);
        assert!(p.life >= 100.0, "fresh life, got {}", p.life);
    }

    #[test]
    fn test_escaped_particles_respawn() {
        let mut f = field();
        f.particles[0] = still(pos2(100.0, -11.0), 200.0);
        f.particles[1] = still(pos2(-11.0, 300.0), 200.0);
        f.particles[2] = still(pos2(811.0, 300.0), 200.0);
        f.particles[3] = still(pos2(805.0, -5.0), 200.0);
        f.step();
        for i in 0..3 {
            assert_eq!(f.particles()[i].pos.y, 610.0, "particle {i}");
        }
        assert_eq!(f.particles()[3].pos, pos2(805.0, -5.0), "inside margin");
    }

    #[test]
    fn test_particles_move_by_velocity() {
        let mut f = field();
        f.particles[0] = Particle {
            velocity: vec2(0.1, -0.3),
            ..still(pos2(50.0, 50.0), 200.0)
        };
        f.step();
        let p = &f.particles()[0];
        assert!((p.pos.x - 50.1).abs() < 1e-4);
        assert!((p.pos.y - 49.7).abs() < 1e-4);
        assert_eq!(p.life, 199.0);
    }

    #[test]
    fn test_fade_ramps_over_last_life_units() {
        assert_eq!(still(Pos2::ZERO, 200.0).fade(), 1.0);
        assert_eq!(still(Pos2::ZERO, 50.0).fade(), 1.0);
        assert_eq!(still(Pos2::ZERO, 25.0).fade(), 0.5);
    }

    #[test]
    fn test_color_is_gold_with_scaled_alpha() {
        let p = Particle {
            opacity: 0.5,
            ..still(Pos2::ZERO, 25.0)
        };
        let c = p.color();
        // 0.5 opacity * 0.5 fade * 0.3 layer
        assert_eq!(c.a(), (0.075f32 * 255.0) as u8);
        let expected = Color32::from_rgba_unmultiplied(212, 168, 67, c.a());
        assert_eq!(c, expected);
    }

    #[test]
    fn test_resize_keeps_positions() {
        let mut f = field();
        let before: Vec<Pos2> = f.particles().iter().map(|p| p.pos).collect();
        f.resize(vec2(200.0, 100.0));
        assert_eq!(f.bounds(), vec2(200.0, 100.0));
        let after: Vec<Pos2> = f.particles().iter().map(|p| p.pos).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_advance_runs_fixed_steps() {
        let mut f = field();
        assert_eq!(f.advance(STEP_TIME * 0.5), 0);
        assert_eq!(f.advance(STEP_TIME * 0.6), 1);
        assert_eq!(f.advance(STEP_TIME * 2.0), 2);
        assert_eq!(f.advance(10.0), MAX_STEPS_PER_FRAME, "stall is capped");
        assert_eq!(f.advance(0.0), 0, "backlog dropped after a stall");
    }
}
