//! Session state for one running neural field.
//!
//! Created once when the component mounts, then mutated each frame by the
//! animation loop: every node drifts a little, and the connection buffer is
//! repacked with the node pairs currently within linking distance.

use super::buffer::ConnectionBuffer;
use super::camera::{Camera, Vec3};
use super::config::FieldConfig;
use super::theme::{ColorMode, FieldTheme};

/// Couples the drift phase of one axis to the position on another, so the
/// motion never settles into a visible cycle.
const PHASE_SCALE: f64 = 0.01;

/// An animated point in the field. Appearance (radius, color, opacity) is
/// shared session-wide through [`FieldTheme`]; only the position is per-node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	pub pos: Vec3,
}

/// Everything a running animation session owns: the node set, the shared
/// connection buffer, the camera, the shared appearance, and the surface
/// dimensions.
#[derive(Clone, Debug)]
pub struct FieldState {
	pub config: FieldConfig,
	pub theme: FieldTheme,
	pub nodes: Vec<Node>,
	pub lines: ConnectionBuffer,
	pub camera: Camera,
	pub width: f64,
	pub height: f64,
}

impl FieldState {
	/// Build a session for a surface of the given pixel dimensions.
	///
	/// Scatters exactly `config.node_count` nodes uniformly through the
	/// field cube using an index-seeded hash, so every session with the same
	/// configuration starts from the same layout.
	pub fn new(config: FieldConfig, width: f64, height: f64, mode: ColorMode) -> Self {
		let half = config.cube_half_extent;
		let mut nodes = Vec::with_capacity(config.node_count);
		for i in 0..config.node_count {
			let seed = i as f64;
			nodes.push(Node {
				pos: Vec3::new(
					(pseudo_random(seed * 1.1) * 2.0 - 1.0) * half,
					(pseudo_random(seed * 2.3) * 2.0 - 1.0) * half,
					(pseudo_random(seed * 3.7) * 2.0 - 1.0) * half,
				),
			});
		}

		Self {
			theme: FieldTheme::for_mode(mode),
			nodes,
			lines: ConnectionBuffer::new(config.max_connections),
			camera: Camera::new(width / height, config.camera_distance),
			width,
			height,
			config,
		}
	}

	/// Advance the session to the given time (seconds): drift every node,
	/// then rebuild the connection buffer for the new layout.
	pub fn advance(&mut self, time: f64) {
		self.drift(time);
		self.reconnect();
	}

	/// Nudge each coordinate by a smooth pseudo-periodic step. The phase
	/// term reads the node's own current position, so the position feeds
	/// back into the motion and no velocity state is needed.
	fn drift(&mut self, time: f64) {
		let step = self.config.drift_step;
		for node in &mut self.nodes {
			node.pos.x += (time + node.pos.y * PHASE_SCALE).sin() * step;
			node.pos.y += (time + node.pos.x * PHASE_SCALE).cos() * step;
			node.pos.z += (time + node.pos.z * PHASE_SCALE).sin() * step;
		}
	}

	/// Repack the connection buffer from the current node layout.
	///
	/// Pairs are enumerated in ascending index order `(i, j), i < j`, so
	/// when more pairs qualify than the buffer holds, the same leading
	/// subset wins on every run. Closer pairs get brighter lines.
	fn reconnect(&mut self) {
		let threshold = self.config.connection_threshold;
		self.lines.begin_frame();

		'scan: for i in 0..self.nodes.len() {
			for j in (i + 1)..self.nodes.len() {
				if self.lines.is_full() {
					break 'scan;
				}
				let dist = self.nodes[i].pos.distance_to(self.nodes[j].pos);
				if dist < threshold {
					let intensity = (1.0 - dist / threshold) as f32;
					self.lines.push(self.nodes[i].pos, self.nodes[j].pos, intensity);
				}
			}
		}
	}

	/// Adopt new surface dimensions. Touches the camera aspect and the
	/// stored dimensions only; nodes and the connection buffer survive.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.camera.set_aspect(width / height);
	}

	/// Recolor the live session in place. Node layout, node count, buffer
	/// geometry, and camera are untouched.
	pub fn set_color_mode(&mut self, mode: ColorMode) {
		self.theme = FieldTheme::for_mode(mode);
	}
}

/// Deterministic index-to-unit-interval hash.
fn pseudo_random(seed: f64) -> f64 {
	let x = (seed * 12.9898 + seed * 78.233).sin() * 43758.5453;
	x - x.floor()
}
