/// Averages frame intervals over fixed windows and reports slow windows.
#[derive(Clone, Debug)]
pub struct FrameStats {
    window: u32,
    threshold_fps: f32,
    frames: u32,
    elapsed_sec: f32,
}

impl FrameStats {
    pub fn new(window: u32, threshold_fps: f32) -> Self {
        Self {
            window: window.max(1),
            threshold_fps,
            frames: 0,
            elapsed_sec: 0.0,
        }
    }

    /// Record one frame interval. Returns the window's average fps when a
    /// window completes below the threshold.
    pub fn record(&mut self, dt_sec: f32) -> Option<f32> {
        if !(dt_sec.is_finite() && dt_sec > 0.0) {
            return None;
        }
        self.frames += 1;
        self.elapsed_sec += dt_sec;
        if self.frames < self.window {
            return None;
        }
        let fps = self.frames as f32 / self.elapsed_sec;
        self.reset();
        (fps < self.threshold_fps).then_some(fps)
    }

    /// Drop the partial window, e.g. after the loop was paused.
    pub fn reset(&mut self) {
        self.frames = 0;
        self.elapsed_sec = 0.0;
    }
}
