// Tuning parameters for the particle backdrop. Plain data with no browser
// dependency; the same values drive the wasm frontend and host-side tests.

use std::ops::Range;

// Background grid
pub const GRID_SPACING: f64 = 50.0;
pub const GRID_ALPHA: f64 = 0.1;

// One particle per this many square surface units
pub const AREA_PER_PARTICLE: f64 = 15_000.0;

// Proximity links between particle pairs
pub const LINK_DISTANCE: f64 = 100.0;
pub const LINK_ALPHA_MAX: f64 = 0.2;

// Pointer repulsion field
pub const REPULSE_RADIUS: f64 = 100.0;
pub const REPULSE_FORCE: f64 = 0.01;

// Spawn ranges
pub const MAX_SPEED: f64 = 0.25; // per-axis, surface units per frame
pub const RADIUS_RANGE: Range<f64> = 1.0..3.0;
pub const OPACITY_RANGE: Range<f64> = 0.2..0.7;

// Default palette
pub const PARTICLE_COLOR: Rgb = Rgb::new(0x4f, 0x46, 0xe5); // indigo
pub const LINK_COLOR: Rgb = Rgb::new(0xa8, 0x55, 0xf7); // purple
pub const GRID_COLOR: Rgb = Rgb::new(79, 70, 229);

/// 8-bit sRGB color as accepted by canvas style strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (leading `#` optional). Returns `None` for anything else.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS form, e.g. `#4f46e5`.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Parameters for one particle field instance.
///
/// - `grid_spacing`: distance between background grid lines
/// - `area_per_particle`: surface area that yields one particle
/// - `link_distance`: pairs closer than this get a connecting line
/// - `link_alpha`: line opacity for a pair at distance zero
/// - `repulse_radius` / `repulse_force`: pointer repulsion reach and peak step
/// - `max_speed`: per-axis bound of the initial velocity
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub grid_spacing: f64,
    pub grid_alpha: f64,
    pub area_per_particle: f64,
    pub link_distance: f64,
    pub link_alpha: f64,
    pub repulse_radius: f64,
    pub repulse_force: f64,
    pub max_speed: f64,
    pub radius_range: Range<f64>,
    pub opacity_range: Range<f64>,
    pub particle_color: Rgb,
    pub link_color: Rgb,
    pub grid_color: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            grid_spacing: GRID_SPACING,
            grid_alpha: GRID_ALPHA,
            area_per_particle: AREA_PER_PARTICLE,
            link_distance: LINK_DISTANCE,
            link_alpha: LINK_ALPHA_MAX,
            repulse_radius: REPULSE_RADIUS,
            repulse_force: REPULSE_FORCE,
            max_speed: MAX_SPEED,
            radius_range: RADIUS_RANGE,
            opacity_range: OPACITY_RANGE,
            particle_color: PARTICLE_COLOR,
            link_color: LINK_COLOR,
            grid_color: GRID_COLOR,
        }
    }
}

impl FieldConfig {
    /// Number of particles for a `width` x `height` surface.
    ///
    /// Degenerate or non-finite sizes yield zero.
    pub fn particle_count(&self, width: f64, height: f64) -> usize {
        let area = width * height;
        if !(area.is_finite() && area > 0.0) || self.area_per_particle <= 0.0 {
            return 0;
        }
        (area / self.area_per_particle).floor() as usize
    }

    /// Opacity of the link between two particles `distance` apart, if any.
    #[inline]
    pub fn link_opacity(&self, distance: f64) -> Option<f64> {
        (distance < self.link_distance)
            .then(|| (self.link_distance - distance) / self.link_distance * self.link_alpha)
    }
}

/// Optional palette and force overrides, e.g. supplied from JS.
///
/// Malformed colors and non-finite forces are skipped with a warning and the
/// default stays in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigOverrides {
    pub particle_color: Option<String>,
    pub link_color: Option<String>,
    pub grid_color: Option<String>,
    pub repulse_force: Option<f64>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: FieldConfig) -> FieldConfig {
        override_color(&mut config.particle_color, self.particle_color.as_deref());
        override_color(&mut config.link_color, self.link_color.as_deref());
        override_color(&mut config.grid_color, self.grid_color.as_deref());
        if let Some(force) = self.repulse_force {
            if force.is_finite() {
                config.repulse_force = force;
            } else {
                log::warn!("[backdrop] ignoring non-finite repulse force");
            }
        }
        config
    }
}

fn override_color(slot: &mut Rgb, hex: Option<&str>) {
    let Some(hex) = hex else {
        return;
    };
    match Rgb::from_hex(hex) {
        Some(c) => *slot = c,
        None => log::warn!("[backdrop] ignoring malformed color {:?}", hex),
    }
}
