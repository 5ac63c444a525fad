#![cfg(target_arch = "wasm32")]
use crate::constants::DEFAULT_CANVAS_ID;
use crate::core::{ConfigOverrides, FieldConfig};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

mod backdrop;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod render;

thread_local! {
    // Field mounted by `start` on the default canvas; lives for the page.
    static AUTO_MOUNTED: RefCell<Option<backdrop::MountedField>> = const { RefCell::new(None) };
}

/// Palette and force overrides accepted from JS.
#[wasm_bindgen]
#[derive(Default)]
pub struct BackdropOptions {
    overrides: ConfigOverrides,
}

#[wasm_bindgen]
impl BackdropOptions {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    #[wasm_bindgen(setter = particleColor)]
    pub fn set_particle_color(&mut self, hex: String) {
        self.overrides.particle_color = Some(hex);
    }

    #[wasm_bindgen(setter = linkColor)]
    pub fn set_link_color(&mut self, hex: String) {
        self.overrides.link_color = Some(hex);
    }

    #[wasm_bindgen(setter = gridColor)]
    pub fn set_grid_color(&mut self, hex: String) {
        self.overrides.grid_color = Some(hex);
    }

    #[wasm_bindgen(setter = repulseForce)]
    pub fn set_repulse_force(&mut self, force: f64) {
        self.overrides.repulse_force = Some(force);
    }
}

/// Handle to a backdrop mounted from JS.
#[wasm_bindgen]
pub struct Backdrop {
    inner: Option<backdrop::MountedField>,
}

#[wasm_bindgen]
impl Backdrop {
    #[wasm_bindgen(getter = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.inner.as_ref().map_or(0, |m| m.particle_count())
    }

    /// Cancel the animation loop and detach all listeners. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(m) = self.inner.take() {
            m.teardown();
        }
    }
}

/// Mount a backdrop on the canvas with the given id. Returns `undefined`
/// when no such element exists.
#[wasm_bindgen(js_name = mountBackdrop)]
pub fn mount_backdrop(
    canvas_id: &str,
    options: Option<BackdropOptions>,
) -> Result<Option<Backdrop>, JsValue> {
    let config = options
        .map(|o| o.overrides.apply(FieldConfig::default()))
        .unwrap_or_default();
    match backdrop::mount(canvas_id, config) {
        Ok(inner) => Ok(inner.map(|m| Backdrop { inner: Some(m) })),
        Err(e) => Err(JsValue::from_str(&format!("{:#}", e))),
    }
}

/// Tear down the backdrop mounted automatically at startup, if any.
#[wasm_bindgen(js_name = destroyDefaultBackdrop)]
pub fn destroy_default_backdrop() {
    if let Some(m) = AUTO_MOUNTED.with(|slot| slot.borrow_mut().take()) {
        m.teardown();
    }
}

fn mount_default() {
    if AUTO_MOUNTED.with(|slot| slot.borrow().is_some()) {
        return;
    }
    match backdrop::mount(DEFAULT_CANVAS_ID, FieldConfig::default()) {
        Ok(Some(m)) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(m)),
        Ok(None) => {}
        Err(e) => log::error!("backdrop init error: {:?}", e),
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("gridfield-web starting");

    let Some(document) = dom::window_document() else {
        return Ok(());
    };
    if document.ready_state() == "loading" {
        let closure = Closure::wrap(Box::new(mount_default) as Box<dyn FnMut()>);
        _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    } else {
        mount_default();
    }
    Ok(())
}
