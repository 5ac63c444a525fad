use super::config::FieldConfig;
use super::paint::Painter;
use super::particles::Particle;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A connecting line between two nearby particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub opacity: f64,
}

/// Animated particle set bound to one drawing surface.
///
/// Owns the particles, the last known pointer position and the RNG used to
/// respawn particles on resize. Nothing outside the field mutates them.
///
/// Typical usage:
/// - Construct with `ParticleField::new(config, width, height, seed)`
/// - Call `tick(&mut painter)` once per display refresh
/// - Forward `resize` and `set_pointer` from the host's events
pub struct ParticleField {
    config: FieldConfig,
    size: DVec2,
    particles: Vec<Particle>,
    pointer: DVec2,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f64, height: f64, seed: u64) -> Self {
        Self::with_rng(config, width, height, StdRng::seed_from_u64(seed))
    }

    pub fn with_rng(config: FieldConfig, width: f64, height: f64, rng: StdRng) -> Self {
        let mut field = Self {
            config,
            size: DVec2::ZERO,
            particles: Vec::new(),
            pointer: DVec2::ZERO,
            rng,
        };
        field.resize(width, height);
        field
    }

    /// Field over an explicit particle set, e.g. to replay a known layout.
    #[cfg(test)]
    pub fn with_particles(
        config: FieldConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            config,
            size: DVec2::new(width.max(0.0), height.max(0.0)),
            particles,
            pointer: DVec2::ZERO,
            rng: StdRng::seed_from_u64(0),
        }
    }

    pub fn size(&self) -> DVec2 {
        self.size
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }

    /// Adopt a new surface size and respawn every particle for it.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.size = DVec2::new(width.max(0.0), height.max(0.0));
        let count = self.config.particle_count(width, height);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(&mut self.rng, self.size, &self.config);
            self.particles.push(p);
        }
    }

    /// Raw surface-local pointer position; used as-is by the next tick.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = DVec2::new(x, y);
    }

    /// Advance every particle one frame without drawing.
    #[cfg(test)]
    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.step(self.size, self.pointer, &self.config);
        }
    }

    /// One full frame: clear, grid, move+draw particles, then links.
    pub fn tick<P: Painter + ?Sized>(&mut self, painter: &mut P) {
        painter.clear(self.size);
        self.draw_grid(painter);

        let cfg = &self.config;
        for p in &mut self.particles {
            p.step(self.size, self.pointer, cfg);
            painter.circle(p.position, p.radius(), cfg.particle_color, p.opacity());
        }

        for link in self.links() {
            let a = self.particles[link.a].position;
            let b = self.particles[link.b].position;
            painter.line(a, b, cfg.link_color, link.opacity);
        }
    }

    /// Every unordered pair closer than the link distance.
    ///
    /// Quadratic in particle count; the density cap keeps the count small.
    pub fn links(&self) -> Vec<Link> {
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let distance = a.position.distance(b.position);
                if let Some(opacity) = self.config.link_opacity(distance) {
                    out.push(Link {
                        a: i,
                        b: j,
                        distance,
                        opacity,
                    });
                }
            }
        }
        out
    }

    fn draw_grid<P: Painter + ?Sized>(&self, painter: &mut P) {
        let spacing = self.config.grid_spacing;
        if spacing <= 0.0 {
            return;
        }
        let (w, h) = (self.size.x, self.size.y);
        let (color, alpha) = (self.config.grid_color, self.config.grid_alpha);

        let mut x = 0.0;
        while x <= w {
            painter.line(DVec2::new(x, 0.0), DVec2::new(x, h), color, alpha);
            x += spacing;
        }
        let mut y = 0.0;
        while y <= h {
            painter.line(DVec2::new(0.0, y), DVec2::new(w, y), color, alpha);
            y += spacing;
        }
    }
}
