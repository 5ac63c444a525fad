/// Host mechanism that calls back once on the next display refresh.
///
/// In the browser this is `requestAnimationFrame`/`cancelAnimationFrame`.
pub trait FrameScheduler {
    /// Request one callback; `None` if the host refused.
    fn request_frame(&mut self) -> Option<i32>;
    fn cancel_frame(&mut self, handle: i32);
}

/// Tracks the single outstanding frame request across hide/show/stop.
///
/// At most one request is ever pending. Hiding cancels it, showing requests a
/// fresh one, and stopping cancels it for good.
#[derive(Debug, Default)]
pub struct FrameLoop {
    pending: Option<i32>,
    hidden: bool,
    stopped: bool,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<i32> {
        self.pending
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Request a frame unless one is already pending or the loop is paused.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if self.hidden || self.stopped || self.pending.is_some() {
            return;
        }
        self.pending = scheduler.request_frame();
    }

    /// Called when the host fires a frame callback. Returns whether the frame
    /// should run; stale callbacks after hide/stop are dropped.
    pub fn begin_frame(&mut self) -> bool {
        let was_pending = self.pending.take().is_some();
        was_pending && !self.hidden && !self.stopped
    }

    /// Chain the next frame after a completed one.
    pub fn end_frame<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.start(scheduler);
    }

    pub fn hide<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.hidden = true;
        self.cancel(scheduler);
    }

    /// Resume from a fresh frame; missed frames are not replayed.
    pub fn show<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.hidden = false;
        self.start(scheduler);
    }

    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.stopped = true;
        self.cancel(scheduler);
    }

    fn cancel<S: FrameScheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.pending.take() {
            scheduler.cancel_frame(handle);
        }
    }
}
