pub mod config;
pub mod driver;
pub mod field;
pub mod fps;
pub mod paint;
pub mod particles;
pub mod schedule;

pub use config::*;
pub use driver::FieldDriver;
pub use field::{Link, ParticleField};
pub use fps::FrameStats;
pub use paint::Painter;
pub use particles::{repulsion, Particle};
pub use schedule::{FrameLoop, FrameScheduler};
