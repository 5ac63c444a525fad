use crate::core::{FieldDriver, FrameScheduler, FrameStats};
use crate::render::CanvasPainter;
use instant::Instant;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` as a `FrameScheduler`.
///
/// Holds the tick closure weakly; once the backdrop drops the closure every
/// request fails and the loop winds down on its own.
pub struct RafScheduler {
    tick: Weak<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl RafScheduler {
    pub fn new(tick: &TickCell) -> Self {
        Self {
            tick: Rc::downgrade(tick),
        }
    }
}

impl FrameScheduler for RafScheduler {
    fn request_frame(&mut self) -> Option<i32> {
        let tick = self.tick.upgrade()?;
        let window = web::window()?;
        let slot = tick.borrow();
        let closure = slot.as_ref()?;
        window
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(handle);
        }
    }
}

pub struct FrameContext {
    pub driver: FieldDriver<RafScheduler>,
    pub painter: CanvasPainter,
    pub canvas: web::HtmlCanvasElement,
    // Only on development hosts
    pub stats: Option<FrameStats>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        if !self.driver.on_frame(&mut self.painter) {
            return;
        }
        if let Some(stats) = &mut self.stats {
            if let Some(fps) = stats.record(dt_sec) {
                log::warn!("[backdrop] low frame rate: {:.0} fps", fps);
            }
        }
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        log::debug!("[backdrop] page hidden={}", hidden);
        self.driver.set_hidden(hidden);
        // Time spent hidden is not a slow frame
        self.last_instant = Instant::now();
        if let Some(stats) = &mut self.stats {
            stats.reset();
        }
    }
}

pub fn start_loop(frame_ctx: &Rc<RefCell<FrameContext>>, tick: &TickCell) {
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
    }) as Box<dyn FnMut()>));
    frame_ctx.borrow_mut().driver.start();
}
