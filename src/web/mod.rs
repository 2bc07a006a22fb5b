//! Browser entry point
//!
//! Page JS calls `startHero(configJson?)` once the DOM is ready. Expected
//! elements: `#heroBackground` (container, required), `#backgroundToggle`,
//! `#darkModeToggle`, `.toggle-icon` and `#navbar` (all optional).

mod canvas;
mod dom;
mod frame_loop;
mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use rand::rngs::StdRng;
use tracing::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, Window};

use crate::core::{FieldConfig, FramePacer, HeroBackground, ParticleField, Surface, SurfaceSize};
use crate::error::HostError;
use crate::prefs::BackgroundMode;

use canvas::CanvasSurface;
use dom::{media_matches, DocumentTheme};
use storage::LocalStore;

/// Everything the frame loop and event handlers share
pub(crate) struct HeroState {
    pub background: HeroBackground<LocalStore, DocumentTheme, StdRng>,
    pub surface: CanvasSurface,
    pub pacer: FramePacer,
    /// Document hidden: keep the loop alive but skip ticks
    pub hidden: bool,
    pub loop_running: bool,
    pub frames: u64,
}

impl From<HostError> for JsValue {
    fn from(e: HostError) -> Self {
        JsValue::from_str(&e.to_string())
    }
}

pub(crate) fn js_err(e: JsValue) -> HostError {
    HostError::Js(format!("{e:?}"))
}

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();

    // Initialize tracing for browser console
    tracing_wasm::set_as_global_default();
}

/// Wire up the hero background, theme toggle and navbar
#[wasm_bindgen(js_name = startHero)]
pub fn start_hero(config_json: Option<String>) -> Result<(), JsValue> {
    run(config_json.as_deref()).map_err(Into::into)
}

fn run(config_json: Option<&str>) -> Result<(), HostError> {
    let config = match config_json {
        Some(json) => FieldConfig::from_json(json)?,
        None => FieldConfig::default(),
    };

    let window = web_sys::window().ok_or(HostError::MissingGlobal("window"))?;
    let document = window
        .document()
        .ok_or(HostError::MissingGlobal("document"))?;
    let store = LocalStore::open(&window);

    dom::init_theme(&window, &document, store.clone());
    dom::init_navbar(&window, &document);

    let container = document
        .get_element_by_id("heroBackground")
        .ok_or_else(|| HostError::ElementNotFound("heroBackground".into()))?;
    let canvas = document
        .create_element("canvas")
        .map_err(js_err)?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::WrongElementType {
            id: "canvas".into(),
            expected: "HtmlCanvasElement",
        })?;
    container.append_child(&canvas).map_err(js_err)?;

    let surface = CanvasSurface::new(canvas)?;
    let size = container_size(&container);
    surface.set_size(size);

    let reduced_motion = media_matches(&window, "(prefers-reduced-motion: reduce)");
    let pacer = FramePacer::new(config.fps);
    let mut field = ParticleField::new(config, DocumentTheme::new(&document)?);
    field.set_reduced_motion(reduced_motion);

    let mut background = HeroBackground::new(field, store);
    let mode = background.start(size, BackgroundMode::Gradient);
    container.set_class_name(mode.css_class());
    info!(mode = mode.as_str(), reduced_motion, "Hero background ready");

    let state = Rc::new(RefCell::new(HeroState {
        background,
        surface,
        pacer,
        hidden: document.hidden(),
        loop_running: false,
        frames: 0,
    }));

    frame_loop::ensure_running(&window, &state);
    init_toggle(&window, &document, &container, &state)?;
    init_resize(&window, &container, &state)?;
    init_visibility(&document, &state)?;
    Ok(())
}

fn container_size(container: &Element) -> SurfaceSize {
    let rect = container.get_bounding_client_rect();
    SurfaceSize::new(rect.width(), rect.height()).rounded()
}

fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: Box<dyn FnMut()>,
) -> Result<(), HostError> {
    let closure = Closure::wrap(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

fn init_toggle(
    window: &Window,
    document: &Document,
    container: &Element,
    state: &Rc<RefCell<HeroState>>,
) -> Result<(), HostError> {
    let Some(button) = document.get_element_by_id("backgroundToggle") else {
        debug!("No #backgroundToggle, background mode is fixed");
        return Ok(());
    };

    let win = window.clone();
    let container = container.clone();
    let state = state.clone();
    listen(
        &button,
        "click",
        Box::new(move || {
            let mode = {
                let mut s = state.borrow_mut();
                let mode = s.background.toggle();
                if mode == BackgroundMode::Gradient {
                    let size = s.background.field().size();
                    s.surface.clear(size);
                }
                mode
            };
            container.set_class_name(mode.css_class());
            frame_loop::ensure_running(&win, &state);
        }),
    )
}

fn init_resize(
    window: &Window,
    container: &Element,
    state: &Rc<RefCell<HeroState>>,
) -> Result<(), HostError> {
    let container = container.clone();
    let state = state.clone();
    listen(
        window,
        "resize",
        Box::new(move || {
            let size = container_size(&container);
            let mut s = state.borrow_mut();
            s.surface.set_size(size);
            s.background.field_mut().schedule_resize(size);
        }),
    )
}

fn init_visibility(document: &Document, state: &Rc<RefCell<HeroState>>) -> Result<(), HostError> {
    let doc = document.clone();
    let state = state.clone();
    listen(
        document,
        "visibilitychange",
        Box::new(move || {
            let hidden = doc.hidden();
            let mut s = state.borrow_mut();
            s.hidden = hidden;
            if !hidden {
                s.pacer.reset();
            }
            debug!(hidden, "Visibility changed");
        }),
    )
}
