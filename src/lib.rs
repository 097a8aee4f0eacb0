//! neural-field-canvas: animated node-field background for a portfolio page.
//!
//! This crate provides a WASM-based background animation: drifting 3-D nodes
//! joined by proximity lines, projected through an orbiting camera onto a
//! fullscreen canvas, plus a minimal host page with a dark/light toggle.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::neural_field::{ColorMode, FieldConfig, NeuralFieldCanvas};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("neural-field-canvas: logging initialized");
}

/// Preference store key holding the color mode.
const THEME_STORAGE_KEY: &str = "theme";

/// Read the persisted color mode. A missing store, absent key, or
/// unrecognized value all fall back to dark.
fn load_color_mode() -> ColorMode {
	let Some(value) = web_sys::window()
		.and_then(|w| w.local_storage().ok().flatten())
		.and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten())
	else {
		return ColorMode::default();
	};

	if !matches!(value.as_str(), "dark" | "light") {
		warn!("neural-field-canvas: unrecognized color mode {value:?}, using dark");
	}
	ColorMode::parse(&value)
}

/// Persist the color mode. Storage failures are logged, never fatal.
fn store_color_mode(mode: ColorMode) {
	let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
		warn!("neural-field-canvas: preference store unavailable");
		return;
	};
	if storage.set_item(THEME_STORAGE_KEY, mode.as_str()).is_err() {
		warn!("neural-field-canvas: failed to persist color mode");
	}
}

/// Load field configuration from a script element with id="field-config".
/// Expected format: a JSON object with any subset of the config keys.
/// Absent or unparsable element means defaults.
fn load_field_config() -> FieldConfig {
	let Some(json_text) = read_config_element() else {
		return FieldConfig::default();
	};

	match serde_json::from_str::<FieldConfig>(&json_text) {
		Ok(config) => {
			info!(
				"neural-field-canvas: loaded config ({} nodes, {} connection slots)",
				config.node_count, config.max_connections
			);
			config
		}
		Err(e) => {
			warn!("neural-field-canvas: failed to parse field config: {e}");
			FieldConfig::default()
		}
	}
}

fn read_config_element() -> Option<String> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("field-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

/// Main application component: the animated background behind a minimal
/// overlay with the site heading and a theme toggle.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_field_config();
	let (mode, set_mode) = signal(load_color_mode());

	let toggle = move |_| {
		let next = mode.get_untracked().toggled();
		set_mode.set(next);
		store_color_mode(next);
	};

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Aradhya Sharma" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<NeuralFieldCanvas mode=mode config=Some(config) />

		<div class="page-overlay">
			<header class="page-header">
				<h1>"Aradhya Sharma"</h1>
				<button class="theme-toggle" on:click=toggle>
					{move || match mode.get() {
						ColorMode::Dark => "Light mode",
						ColorMode::Light => "Dark mode",
					}}
				</button>
			</header>
			<main class="page-hero">
				<h2>"Bridging Engineering with IoT and Embedded Systems"</h2>
				<p class="subtitle">
					"Biomedical engineer prototyping devices, from fNIRS headbands to autonomous robots."
				</p>
			</main>
		</div>
	}
}
