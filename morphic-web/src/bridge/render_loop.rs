//! requestAnimationFrame loop
//!
//! The closure re-schedules itself every frame. `stop` cancels the pending
//! frame and drops the closure, which breaks the self-reference.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::MorphicError;

type FrameClosure = Closure<dyn FnMut(f64)>;

pub struct RenderLoop {
    handle: Rc<Cell<Option<i32>>>,
    closure: Rc<RefCell<Option<FrameClosure>>>,
}

fn request_frame(callback: &FrameClosure) -> Result<i32, MorphicError> {
    let window = web_sys::window().ok_or_else(|| MorphicError::RenderLoop("no window".into()))?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| MorphicError::RenderLoop(format!("{:?}", e)))
}

impl RenderLoop {
    /// Schedule `on_frame` every display refresh with the timestamp in seconds
    pub fn start<F>(mut on_frame: F) -> Result<Self, MorphicError>
    where
        F: FnMut(f64) + 'static,
    {
        let handle = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let next = closure.clone();
        let next_handle = handle.clone();
        *closure.borrow_mut() = Some(Closure::new(move |timestamp_ms: f64| {
            on_frame(timestamp_ms / 1000.0);
            if let Some(callback) = next.borrow().as_ref() {
                match request_frame(callback) {
                    Ok(id) => next_handle.set(Some(id)),
                    Err(e) => {
                        tracing::warn!(error = %e, "render loop stalled");
                        next_handle.set(None);
                    }
                }
            }
        }));

        let id = match closure.borrow().as_ref() {
            Some(callback) => request_frame(callback)?,
            None => return Err(MorphicError::RenderLoop("frame callback missing".into())),
        };
        handle.set(Some(id));

        Ok(Self { handle, closure })
    }

    /// Cancel the recurring schedule. Safe to call more than once.
    pub fn stop(&mut self) {
        if let Some(id) = self.handle.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.closure.borrow_mut().take();
    }
}

impl Drop for RenderLoop {
    fn drop(&mut self) {
        self.stop();
    }
}
