// Shared host-side harness. The main crate is wasm-only, so the pure-Rust
// core modules are included directly, plus stand-ins for the browser.

#![allow(dead_code)]

pub mod core {
    pub mod config {
        include!("../../src/core/config.rs");
    }
    pub mod paint {
        include!("../../src/core/paint.rs");
    }
    pub mod particles {
        include!("../../src/core/particles.rs");
    }
    pub mod field {
        include!("../../src/core/field.rs");
    }
    pub mod schedule {
        include!("../../src/core/schedule.rs");
    }
    pub mod fps {
        include!("../../src/core/fps.rs");
    }
    pub mod driver {
        include!("../../src/core/driver.rs");
    }
}

use self::core::config::Rgb;
use self::core::paint::Painter;
use self::core::schedule::FrameScheduler;
use glam::DVec2;

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Clear(DVec2),
    Line {
        from: DVec2,
        to: DVec2,
        color: Rgb,
        alpha: f64,
    },
    Circle {
        center: DVec2,
        radius: f64,
        color: Rgb,
        alpha: f64,
    },
}

/// Painter that just remembers what it was asked to draw.
#[derive(Default)]
pub struct RecordingPainter {
    pub calls: Vec<Draw>,
}

impl RecordingPainter {
    pub fn circles(&self) -> usize {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Circle { .. }))
            .count()
    }

    pub fn lines_with_color(&self, color: Rgb) -> Vec<&Draw> {
        self.calls
            .iter()
            .filter(|d| matches!(d, Draw::Line { color: c, .. } if *c == color))
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn clear(&mut self, size: DVec2) {
        self.calls.push(Draw::Clear(size));
    }

    fn line(&mut self, from: DVec2, to: DVec2, color: Rgb, alpha: f64) {
        self.calls.push(Draw::Line {
            from,
            to,
            color,
            alpha,
        });
    }

    fn circle(&mut self, center: DVec2, radius: f64, color: Rgb, alpha: f64) {
        self.calls.push(Draw::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }
}

/// Scheduler standing in for requestAnimationFrame: hands out increasing
/// handles and tracks which are still outstanding.
#[derive(Default)]
pub struct FakeScheduler {
    next: i32,
    pub outstanding: Vec<i32>,
    pub cancelled: Vec<i32>,
    pub requests: usize,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<i32> {
        self.next += 1;
        self.requests += 1;
        self.outstanding.push(self.next);
        Some(self.next)
    }

    fn cancel_frame(&mut self, handle: i32) {
        self.outstanding.retain(|h| *h != handle);
        self.cancelled.push(handle);
    }
}
