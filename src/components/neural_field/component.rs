//! Leptos component wrapping the neural field canvas.
//!
//! The component creates a fullscreen canvas element behind the page content
//! and drives the animation via `requestAnimationFrame`. Each tick advances
//! the session state and renders it; a window resize listener keeps the
//! camera aspect in step with the surface. Everything registered at start is
//! deregistered on cleanup, and a tick or resize that fires after teardown
//! finds no session and does nothing.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::config::FieldConfig;
use super::render;
use super::state::FieldState;
use super::theme::ColorMode;

type SharedSession = Rc<RefCell<Option<FieldState>>>;
type SharedClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type SharedFrameHandle = Rc<Cell<Option<i32>>>;

/// Renders the animated node-field background on a fixed fullscreen canvas.
///
/// `mode` recolors the live session in place whenever it changes; the node
/// layout and in-flight animation phase survive the switch. Pass a
/// [`FieldConfig`] to override the default field density.
#[component]
pub fn NeuralFieldCanvas(
	#[prop(into)] mode: Signal<ColorMode>,
	#[prop(default = None)] config: Option<FieldConfig>,
) -> impl IntoView {
	let config = config.unwrap_or_default();

	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let session: SharedSession = Rc::new(RefCell::new(None));
	let animate: SharedClosure = Rc::new(RefCell::new(None));
	let resize_cb: SharedClosure = Rc::new(RefCell::new(None));
	let frame_handle: SharedFrameHandle = Rc::new(Cell::new(None));
	let (session_init, animate_init, resize_cb_init, frame_init) = (
		session.clone(),
		animate.clone(),
		resize_cb.clone(),
		frame_handle.clone(),
	);

	// Owned by the component's reactive owner; dropped on unmount, which
	// tears the session down before any further tick can fire.
	let _guard = StoredValue::new_local(SessionGuard {
		session: session.clone(),
		animate: animate.clone(),
		resize_cb: resize_cb.clone(),
		frame_handle: frame_handle.clone(),
	});

	Effect::new(move |_| {
		// Surface not attached yet: skip and let a later run initialize.
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		// One live session per canvas.
		if session_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();
		let window: Window = web_sys::window().unwrap();

		let (w, h) = (
			window.inner_width().unwrap().as_f64().unwrap(),
			window.inner_height().unwrap().as_f64().unwrap(),
		);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")
			.unwrap()
			.unwrap()
			.dyn_into()
			.unwrap();

		*session_init.borrow_mut() = Some(FieldState::new(
			config,
			w,
			h,
			mode.get_untracked(),
		));
		info!(
			"neural-field: session started ({} nodes, {} connection slots)",
			config.node_count, config.max_connections
		);

		let (session_resize, canvas_resize) = (session_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (nw, nh) = (
				win.inner_width().unwrap().as_f64().unwrap(),
				win.inner_height().unwrap().as_f64().unwrap(),
			);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			if let Some(ref mut s) = *session_resize.borrow_mut() {
				s.resize(nw, nh);
			}
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (session_anim, animate_inner, frame_anim) = (
			session_init.clone(),
			animate_init.clone(),
			frame_init.clone(),
		);
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			frame_anim.set(None);
			// A tick that outlives the session is a no-op.
			let mut slot = session_anim.borrow_mut();
			let Some(ref mut s) = *slot else {
				return;
			};

			let time = js_sys::Date::now() * 0.001;
			s.advance(time);
			render::render(s, &ctx, time);

			if let Some(ref cb) = *animate_inner.borrow() {
				if let Ok(id) = web_sys::window()
					.unwrap()
					.request_animation_frame(cb.as_ref().unchecked_ref())
				{
					frame_anim.set(Some(id));
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				frame_init.set(Some(id));
			}
		}
	});

	// Color mode changes recolor the live session in place; no teardown.
	let session_theme = session.clone();
	Effect::new(move |_| {
		let mode = mode.get();
		if let Some(ref mut s) = *session_theme.borrow_mut() {
			s.set_color_mode(mode);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="neural-field-canvas"
			style="position: fixed; top: 0; left: 0; width: 100%; height: 100%; z-index: -1; pointer-events: none;"
		/>
	}
}

/// Holds a running session's registrations and stops the session when
/// dropped.
struct SessionGuard {
	session: SharedSession,
	animate: SharedClosure,
	resize_cb: SharedClosure,
	frame_handle: SharedFrameHandle,
}

impl Drop for SessionGuard {
	fn drop(&mut self) {
		stop_session(
			&self.session,
			&self.animate,
			&self.resize_cb,
			&self.frame_handle,
		);
	}
}

/// Tear down a session: cancel the pending frame, detach the resize
/// listener, and release the session state. Every step takes its resource
/// out of its slot, so calling this on an already-stopped session finds
/// empty slots and does nothing.
fn stop_session(
	session: &SharedSession,
	animate: &SharedClosure,
	resize_cb: &SharedClosure,
	frame_handle: &SharedFrameHandle,
) {
	let window = web_sys::window();

	// Cancellation lands before the next scheduled tick could fire.
	if let Some(id) = frame_handle.take() {
		if let Some(ref win) = window {
			let _ = win.cancel_animation_frame(id);
		}
	}

	if let Some(cb) = resize_cb.borrow_mut().take() {
		if let Some(ref win) = window {
			let _ =
				win.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}
	}

	// Dropping the closure breaks its self-referencing cycle.
	animate.borrow_mut().take();

	if session.borrow_mut().take().is_some() {
		info!("neural-field: session stopped");
	}
}
