use super::config::Rgb;
use glam::DVec2;

/// Drawing surface the field renders onto.
///
/// The browser implementation wraps a 2D canvas context; tests record calls.
/// Every primitive carries its own alpha so implementations never leak state
/// from one draw into the next.
pub trait Painter {
    fn clear(&mut self, size: DVec2);
    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64);
    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64);
}
