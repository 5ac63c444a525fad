use super::field::ParticleField;
use super::paint::Painter;
use super::schedule::{FrameLoop, FrameScheduler};

/// Single owner of a field, its frame loop and the host scheduler.
///
/// Every host notification (frame, resize, pointer, visibility, teardown)
/// goes through here, so the particle set and the pending frame handle are
/// only ever touched by one object.
pub struct FieldDriver<S: FrameScheduler> {
    field: ParticleField,
    frame_loop: FrameLoop,
    scheduler: S,
}

impl<S: FrameScheduler> FieldDriver<S> {
    pub fn new(field: ParticleField, scheduler: S) -> Self {
        Self {
            field,
            frame_loop: FrameLoop::new(),
            scheduler,
        }
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    #[cfg(test)]
    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frame_loop
    }

    #[cfg(test)]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    #[cfg(test)]
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn start(&mut self) {
        self.frame_loop.start(&mut self.scheduler);
    }

    /// Run one frame if the callback is still wanted, then chain the next.
    /// Returns whether anything was drawn.
    pub fn on_frame<P: Painter + ?Sized>(&mut self, painter: &mut P) -> bool {
        if !self.frame_loop.begin_frame() {
            return false;
        }
        self.field.tick(painter);
        self.frame_loop.end_frame(&mut self.scheduler);
        true
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.field.resize(width, height);
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.field.set_pointer(x, y);
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        if hidden {
            self.frame_loop.hide(&mut self.scheduler);
        } else {
            self.frame_loop.show(&mut self.scheduler);
        }
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop(&mut self.scheduler);
    }
}
