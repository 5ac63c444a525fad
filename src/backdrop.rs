use crate::constants::{FPS_WARN_THRESHOLD, FPS_WINDOW_FRAMES};
use crate::core::{FieldConfig, FieldDriver, FrameStats, ParticleField};
use crate::dom::{self, EventListener};
use crate::events;
use crate::frame::{self, FrameContext, RafScheduler, TickCell};
use crate::render::CanvasPainter;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A running particle field mounted on one canvas.
///
/// Dropping it (or calling `teardown`) cancels the pending frame and detaches
/// every listener it registered.
pub struct MountedField {
    frame_ctx: Rc<RefCell<FrameContext>>,
    tick: TickCell,
    _listeners: Vec<EventListener>,
}

/// Mount a field on the canvas with id `canvas_id`.
///
/// A missing element is not an error: the backdrop is optional and `Ok(None)`
/// is returned without logging.
pub fn mount(canvas_id: &str, config: FieldConfig) -> anyhow::Result<Option<MountedField>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let Some(canvas_el) = document.get_element_by_id(canvas_id) else {
        return Ok(None);
    };
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", canvas_id, e))?;
    let painter = CanvasPainter::new(&canvas)?;

    let (w, h) = dom::sync_canvas_backing_size(&canvas);
    let field = ParticleField::with_rng(config, w, h, StdRng::from_entropy());
    log::info!(
        "[backdrop] mounted #{} {}x{} particles={}",
        canvas_id,
        w,
        h,
        field.particles().len()
    );

    let tick: TickCell = Rc::new(RefCell::new(None));
    let stats =
        dom::is_dev_host().then(|| FrameStats::new(FPS_WINDOW_FRAMES, FPS_WARN_THRESHOLD));
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        driver: FieldDriver::new(field, RafScheduler::new(&tick)),
        painter,
        canvas: canvas.clone(),
        stats,
        last_instant: Instant::now(),
    }));

    let listeners = vec![
        events::wire_pointer(&canvas, &frame_ctx),
        events::wire_resize(&window, &frame_ctx),
        events::wire_visibility(&document, &frame_ctx),
    ];

    frame::start_loop(&frame_ctx, &tick);
    if document.hidden() {
        frame_ctx.borrow_mut().set_hidden(true);
    }

    Ok(Some(MountedField {
        frame_ctx,
        tick,
        _listeners: listeners,
    }))
}

impl MountedField {
    pub fn particle_count(&self) -> usize {
        self.frame_ctx.borrow().driver.field().particles().len()
    }

    pub fn teardown(self) {
        drop(self);
    }
}

impl Drop for MountedField {
    fn drop(&mut self) {
        if let Ok(mut ctx) = self.frame_ctx.try_borrow_mut() {
            ctx.driver.stop();
        }
        // Breaks tick -> closure -> frame_ctx so both are freed
        self.tick.borrow_mut().take();
        log::debug!("[backdrop] torn down");
    }
}
