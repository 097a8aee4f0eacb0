//! Fixed-capacity vertex/color storage for connection lines.
//!
//! Allocated once per session and overwritten in place every frame. Each
//! connection occupies one slot: two endpoint coordinate triples in the
//! position array and two grayscale triples in the color array. Only the
//! first `active() * 2` vertices are valid; the tail beyond the draw range
//! is stale data from earlier frames and must never be drawn.

use super::camera::Vec3;

/// Floats per connection slot in each array (2 endpoints x 3 components).
const FLOATS_PER_SLOT: usize = 6;

/// Reusable line-segment buffer with an explicit active range.
#[derive(Clone, Debug)]
pub struct ConnectionBuffer {
	positions: Vec<f32>,
	colors: Vec<f32>,
	capacity: usize,
	active: usize,
	positions_dirty: bool,
	colors_dirty: bool,
}

impl ConnectionBuffer {
	/// Allocate storage for at most `capacity` simultaneous connections.
	pub fn new(capacity: usize) -> Self {
		Self {
			positions: vec![0.0; capacity * FLOATS_PER_SLOT],
			colors: vec![0.0; capacity * FLOATS_PER_SLOT],
			capacity,
			active: 0,
			positions_dirty: false,
			colors_dirty: false,
		}
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	/// Connections written since the last `begin_frame`.
	pub fn active(&self) -> usize {
		self.active
	}

	pub fn is_full(&self) -> bool {
		self.active >= self.capacity
	}

	/// Valid vertex count for this frame's draw call.
	pub fn draw_range(&self) -> usize {
		self.active * 2
	}

	/// Reset the active range for a new frame. Slot contents are left in
	/// place to be overwritten; nothing is reallocated.
	pub fn begin_frame(&mut self) {
		self.active = 0;
	}

	/// Append one connection, writing both endpoints and the shared
	/// grayscale intensity into both endpoint color triples.
	///
	/// Returns `false` without writing when the buffer is full.
	pub fn push(&mut self, a: Vec3, b: Vec3, intensity: f32) -> bool {
		if self.is_full() {
			return false;
		}

		let base = self.active * FLOATS_PER_SLOT;
		self.positions[base] = a.x as f32;
		self.positions[base + 1] = a.y as f32;
		self.positions[base + 2] = a.z as f32;
		self.positions[base + 3] = b.x as f32;
		self.positions[base + 4] = b.y as f32;
		self.positions[base + 5] = b.z as f32;

		for channel in 0..FLOATS_PER_SLOT {
			self.colors[base + channel] = intensity;
		}

		self.active += 1;
		self.positions_dirty = true;
		self.colors_dirty = true;
		true
	}

	/// Endpoints of an active slot.
	pub fn endpoints(&self, slot: usize) -> (Vec3, Vec3) {
		debug_assert!(slot < self.active, "slot outside the active range");
		let base = slot * FLOATS_PER_SLOT;
		(
			Vec3::new(
				self.positions[base] as f64,
				self.positions[base + 1] as f64,
				self.positions[base + 2] as f64,
			),
			Vec3::new(
				self.positions[base + 3] as f64,
				self.positions[base + 4] as f64,
				self.positions[base + 5] as f64,
			),
		)
	}

	/// Grayscale intensity of an active slot (identical on both endpoints).
	pub fn intensity(&self, slot: usize) -> f32 {
		debug_assert!(slot < self.active, "slot outside the active range");
		self.colors[slot * FLOATS_PER_SLOT]
	}

	/// Drain the upload marks for the position and color regions. Returns
	/// `(positions_dirty, colors_dirty)` and clears both.
	pub fn take_dirty(&mut self) -> (bool, bool) {
		let dirty = (self.positions_dirty, self.colors_dirty);
		self.positions_dirty = false;
		self.colors_dirty = false;
		dirty
	}

	/// Raw position floats, including the stale tail.
	pub fn positions(&self) -> &[f32] {
		&self.positions
	}

	/// Raw color floats, including the stale tail.
	pub fn colors(&self) -> &[f32] {
		&self.colors
	}
}
