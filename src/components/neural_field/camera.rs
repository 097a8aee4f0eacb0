//! Perspective camera with a fixed orbital motion path.
//!
//! The camera swings on a Lissajous-like path around the scene origin while
//! always looking at it. The eye position is a pure function of elapsed time,
//! so the camera carries no per-frame motion state of its own.

/// A point or direction in field space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec3 {
	pub x: f64,
	pub y: f64,
	pub z: f64,
}

impl Vec3 {
	pub const fn new(x: f64, y: f64, z: f64) -> Self {
		Self { x, y, z }
	}

	pub fn sub(self, other: Self) -> Self {
		Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
	}

	pub fn dot(self, other: Self) -> f64 {
		self.x * other.x + self.y * other.y + self.z * other.z
	}

	pub fn cross(self, other: Self) -> Self {
		Self::new(
			self.y * other.z - self.z * other.y,
			self.z * other.x - self.x * other.z,
			self.x * other.y - self.y * other.x,
		)
	}

	pub fn length(self) -> f64 {
		self.dot(self).sqrt()
	}

	pub fn normalized(self) -> Self {
		let len = self.length();
		if len < 1e-9 {
			return Self::default();
		}
		Self::new(self.x / len, self.y / len, self.z / len)
	}

	pub fn distance_to(self, other: Self) -> f64 {
		self.sub(other).length()
	}
}

/// Vertical field of view, degrees.
const FOV_Y_DEGREES: f64 = 75.0;
/// Near clip plane; geometry closer than this is not drawn.
const NEAR: f64 = 0.1;
/// Far clip plane.
const FAR: f64 = 1000.0;

/// Horizontal swing amplitude of the orbit.
const ORBIT_X_AMPLITUDE: f64 = 120.0;
/// Vertical swing amplitude of the orbit.
const ORBIT_Y_AMPLITUDE: f64 = 80.0;
/// Angular rate of the horizontal swing, radians per second.
const ORBIT_X_RATE: f64 = 0.1;
/// Angular rate of the vertical swing, radians per second.
const ORBIT_Y_RATE: f64 = 0.15;

/// Perspective camera aimed at the scene origin.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
	aspect: f64,
	/// Resting distance from the origin along the view axis.
	distance: f64,
}

impl Camera {
	pub fn new(aspect: f64, distance: f64) -> Self {
		Self {
			aspect: sane_aspect(aspect),
			distance,
		}
	}

	pub fn aspect(&self) -> f64 {
		self.aspect
	}

	/// Update the aspect ratio after a surface resize.
	pub fn set_aspect(&mut self, aspect: f64) {
		self.aspect = sane_aspect(aspect);
	}

	/// Eye position at the given time along the orbit path.
	pub fn eye(&self, time: f64) -> Vec3 {
		Vec3::new(
			(time * ORBIT_X_RATE).sin() * ORBIT_X_AMPLITUDE,
			(time * ORBIT_Y_RATE).cos() * ORBIT_Y_AMPLITUDE,
			self.distance,
		)
	}

	/// Snapshot of the view at the given time, ready to project points.
	pub fn view_at(&self, time: f64) -> ViewFrame {
		let eye = self.eye(time);
		let forward = Vec3::new(-eye.x, -eye.y, -eye.z).normalized();

		// World up, unless the view axis degenerates onto it.
		let mut right = forward.cross(Vec3::new(0.0, 1.0, 0.0));
		if right.length() < 1e-6 {
			right = forward.cross(Vec3::new(0.0, 0.0, 1.0));
		}
		let right = right.normalized();
		let up = right.cross(forward);

		ViewFrame {
			eye,
			right,
			up,
			forward,
			focal: 1.0 / (FOV_Y_DEGREES.to_radians() / 2.0).tan(),
			aspect: self.aspect,
		}
	}
}

/// One frame's view: eye position, orthonormal basis, and projection factors.
#[derive(Clone, Copy, Debug)]
pub struct ViewFrame {
	pub eye: Vec3,
	right: Vec3,
	up: Vec3,
	forward: Vec3,
	focal: f64,
	aspect: f64,
}

/// A field-space point mapped onto the surface.
#[derive(Clone, Copy, Debug)]
pub struct Projected {
	/// Surface x, pixels.
	pub x: f64,
	/// Surface y, pixels.
	pub y: f64,
	/// Pixels per world unit at this point's depth. Scales node radii.
	pub scale: f64,
}

impl ViewFrame {
	/// Project a point onto a surface of the given pixel dimensions.
	///
	/// Returns `None` for points outside the near/far clip range.
	pub fn project(&self, p: Vec3, width: f64, height: f64) -> Option<Projected> {
		let v = p.sub(self.eye);
		let depth = v.dot(self.forward);
		if depth < NEAR || depth > FAR {
			return None;
		}

		// Vertical fov governs; the horizontal axis is widened by the
		// camera's aspect ratio. With aspect == width / height the two
		// pixel scales coincide.
		let scale_y = self.focal * (height / 2.0) / depth;
		let scale_x = (self.focal / self.aspect) * (width / 2.0) / depth;
		Some(Projected {
			x: width / 2.0 + v.dot(self.right) * scale_x,
			y: height / 2.0 - v.dot(self.up) * scale_y,
			scale: scale_y,
		})
	}
}

fn sane_aspect(aspect: f64) -> f64 {
	if aspect.is_finite() && aspect > 0.0 {
		aspect
	} else {
		1.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn eye_starts_at_the_top_of_the_vertical_swing() {
		let camera = Camera::new(16.0 / 9.0, 100.0);
		let eye = camera.eye(0.0);
		assert!(eye.x.abs() < EPS);
		assert!((eye.y - 80.0).abs() < EPS);
		assert!((eye.z - 100.0).abs() < EPS);
	}

	#[test]
	fn eye_stays_within_orbit_amplitudes() {
		let camera = Camera::new(1.0, 100.0);
		for i in 0..200 {
			let eye = camera.eye(i as f64 * 0.37);
			assert!(eye.x.abs() <= 120.0 + EPS);
			assert!(eye.y.abs() <= 80.0 + EPS);
			assert_eq!(eye.z, 100.0);
		}
	}

	#[test]
	fn origin_projects_to_surface_center() {
		let camera = Camera::new(800.0 / 600.0, 100.0);
		let view = camera.view_at(3.7);
		let projected = view
			.project(Vec3::default(), 800.0, 600.0)
			.expect("origin is always in front of the orbiting camera");
		assert!((projected.x - 400.0).abs() < 1e-6);
		assert!((projected.y - 300.0).abs() < 1e-6);
	}

	#[test]
	fn points_behind_the_eye_are_clipped() {
		let camera = Camera::new(1.0, 100.0);
		let view = camera.view_at(0.0);
		// Directly behind the eye relative to the origin.
		let behind = Vec3::new(0.0, 160.0, 200.0);
		assert!(view.project(behind, 640.0, 480.0).is_none());
	}

	#[test]
	fn nearer_points_project_larger() {
		let camera = Camera::new(1.0, 100.0);
		let view = camera.view_at(0.0);
		let near = view
			.project(Vec3::new(0.0, 40.0, 50.0), 640.0, 480.0)
			.unwrap();
		let far = view.project(Vec3::default(), 640.0, 480.0).unwrap();
		assert!(near.scale > far.scale);
	}

	#[test]
	fn aspect_guard_rejects_degenerate_values() {
		let mut camera = Camera::new(0.0, 100.0);
		assert_eq!(camera.aspect(), 1.0);
		camera.set_aspect(f64::NAN);
		assert_eq!(camera.aspect(), 1.0);
		camera.set_aspect(2.0);
		assert_eq!(camera.aspect(), 2.0);
	}

	#[test]
	fn view_basis_is_orthonormal() {
		let camera = Camera::new(1.5, 100.0);
		for i in 0..50 {
			let view = camera.view_at(i as f64 * 1.3);
			assert!(view.right.dot(view.up).abs() < 1e-9);
			assert!(view.right.dot(view.forward).abs() < 1e-9);
			assert!((view.right.length() - 1.0).abs() < 1e-9);
			assert!((view.up.length() - 1.0).abs() < 1e-9);
		}
	}

	#[test]
	fn degenerate_vertical_view_still_produces_a_basis() {
		// Zero camera distance puts the eye straight above the origin at
		// t = 0, where forward is parallel to world up.
		let camera = Camera::new(1.0, 0.0);
		let view = camera.view_at(0.0);
		assert!((view.right.length() - 1.0).abs() < 1e-9);
		assert!(view.project(Vec3::default(), 100.0, 100.0).is_some());
	}
}
