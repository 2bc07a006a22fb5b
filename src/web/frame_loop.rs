//! `requestAnimationFrame` driven loop
//!
//! Each callback checks the active flag first: an inactive field ends the
//! chain and drops its closure. Otherwise the next frame is requested before
//! any work runs, then at most one paced tick is drawn.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use super::HeroState;
use crate::core::TickOutcome;
use crate::time::now_millis;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Start the frame chain unless it is already running
pub fn ensure_running(window: &Window, state: &Rc<RefCell<HeroState>>) {
    {
        let mut s = state.borrow_mut();
        if s.loop_running || !s.background.field().is_active() {
            return;
        }
        s.loop_running = true;
        s.pacer.reset();
    }
    debug!("Frame loop started");

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let next = callback.clone();
    let win = window.clone();
    let loop_state = state.clone();

    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut s = loop_state.borrow_mut();
        if !s.background.field().is_active() {
            s.loop_running = false;
            drop(s);
            debug!("Frame loop stopped");
            // Drops this closure; nothing runs after this point
            let _ = next.borrow_mut().take();
            return;
        }

        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = win.request_animation_frame(cb.as_ref().unchecked_ref()) {
                error!(?e, "requestAnimationFrame failed, stopping loop");
                s.loop_running = false;
                return;
            }
        }

        if s.hidden || !s.pacer.ready(now_millis()) {
            return;
        }
        let HeroState {
            ref mut background,
            ref mut surface,
            ..
        } = *s;
        let outcome = background.field_mut().tick(surface);
        if let TickOutcome::Drawn(stats) = outcome {
            s.frames += 1;
            if s.frames % 600 == 0 {
                debug!(
                    frames = s.frames,
                    particles = stats.particles,
                    connections = stats.connections,
                    "Frame loop heartbeat"
                );
            }
        }
    }) as Box<dyn FnMut()>));

    if let Some(cb) = callback.borrow().as_ref() {
        if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            error!(?e, "requestAnimationFrame failed");
            state.borrow_mut().loop_running = false;
        }
    }
}
