/// Web-side wiring constants.
///
/// Simulation tuning lives in `core::config`; these only concern how the
/// backdrop attaches to the page and how it reports on itself.
// Mount point looked up at startup
pub const DEFAULT_CANVAS_ID: &str = "gridCanvas";

// Low frame-rate monitor (development hosts only)
pub const FPS_WARN_THRESHOLD: f32 = 30.0;
pub const FPS_WINDOW_FRAMES: u32 = 60;
pub const DEV_HOSTS: [&str; 2] = ["localhost", "127.0.0.1"];

// Grid stroke width in canvas pixels
pub const LINE_WIDTH: f64 = 1.0;
