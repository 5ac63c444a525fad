use super::config::FieldConfig;
use glam::DVec2;
use rand::Rng;

/// A single drifting dot.
///
/// `radius` and `opacity` are chosen at spawn time and never change; only
/// position and velocity evolve.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    pub velocity: DVec2,
    radius: f64,
    opacity: f64,
}

impl Particle {
    pub fn new(position: DVec2, velocity: DVec2, radius: f64, opacity: f64) -> Self {
        Self {
            position,
            velocity,
            radius,
            opacity,
        }
    }

    /// Random particle somewhere on a `size.x` x `size.y` surface.
    pub fn spawn<R: Rng>(rng: &mut R, size: DVec2, config: &FieldConfig) -> Self {
        let position = DVec2::new(uniform(rng, 0.0, size.x), uniform(rng, 0.0, size.y));
        let s = config.max_speed;
        let velocity = DVec2::new(uniform(rng, -s, s), uniform(rng, -s, s));
        let radius = uniform(rng, config.radius_range.start, config.radius_range.end);
        let opacity = uniform(rng, config.opacity_range.start, config.opacity_range.end);
        Self::new(position, velocity, radius, opacity)
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Advance one frame: drift, get pushed by the pointer, then bounce.
    ///
    /// Bouncing only flips the velocity, and only while the particle is still
    /// heading outward; the position is never clamped, so a particle may sit
    /// outside the surface for a few frames before drifting back.
    pub fn step(&mut self, size: DVec2, pointer: DVec2, config: &FieldConfig) {
        self.position += self.velocity;
        self.position += repulsion(
            self.position,
            pointer,
            config.repulse_radius,
            config.repulse_force,
        );

        let (p, v) = (self.position, self.velocity);
        if (p.x < 0.0 && v.x < 0.0) || (p.x > size.x && v.x > 0.0) {
            self.velocity.x = -v.x;
        }
        if (p.y < 0.0 && v.y < 0.0) || (p.y > size.y && v.y > 0.0) {
            self.velocity.y = -v.y;
        }
    }
}

/// Displacement pushing `position` away from `pointer`.
///
/// Linear falloff: `force` at the pointer, zero at `radius` and beyond. A
/// particle exactly on the pointer has no direction and is left alone.
#[inline]
pub fn repulsion(position: DVec2, pointer: DVec2, radius: f64, force: f64) -> DVec2 {
    let away = position - pointer;
    let distance = away.length();
    if distance >= radius || distance == 0.0 {
        return DVec2::ZERO;
    }
    let strength = (radius - distance) / radius * force;
    away / distance * strength
}

// `gen_range` panics on empty ranges; zero-sized surfaces still spawn at the edge.
#[inline]
fn uniform<R: Rng>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
