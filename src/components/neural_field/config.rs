//! Tunable parameters for the neural field animation.

use serde::Deserialize;

/// Configuration surface of the field. Every field has a default matching
/// the smaller of the two observed page variants; the denser variant
/// (60 nodes, 1000 connections) is reachable through configuration alone.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Number of nodes scattered through the field.
	pub node_count: usize,
	/// Upper bound on simultaneous connections per frame. Sizes the
	/// connection buffer once; pairs beyond the cap are dropped.
	pub max_connections: usize,
	/// Two nodes closer than this (world units) get a connecting line.
	pub connection_threshold: f64,
	/// Nodes start uniformly inside `[-cube_half_extent, +cube_half_extent]`
	/// on every axis.
	pub cube_half_extent: f64,
	/// Per-frame drift amplitude applied along each axis.
	pub drift_step: f64,
	/// Resting distance of the camera from the scene origin along the view
	/// axis.
	pub camera_distance: f64,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			node_count: 30,
			max_connections: 500,
			connection_threshold: 50.0,
			cube_half_extent: 100.0,
			drift_step: 0.02,
			camera_distance: 100.0,
		}
	}
}
