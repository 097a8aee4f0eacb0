//! Canvas rendering for the neural field.
//!
//! Runs once per animation tick, after the session state has advanced.
//! Projection happens in two passes for correct layering: connection lines
//! first, nodes on top.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::camera::ViewFrame;
use super::state::FieldState;

/// Draw the current frame: drain the buffer's upload marks, stroke exactly
/// the active connection range, then fill the nodes, all through the camera
/// position for this instant.
pub fn render(state: &mut FieldState, ctx: &CanvasRenderingContext2d, time: f64) {
	// The updater marked both buffer regions when it wrote this frame's
	// connections; draining the marks here is the upload step that must
	// precede the draw.
	state.lines.take_dirty();

	ctx.clear_rect(0.0, 0.0, state.width, state.height);

	let view = state.camera.view_at(time);
	draw_lines(state, ctx, &view);
	draw_nodes(state, ctx, &view);
}

fn draw_lines(state: &FieldState, ctx: &CanvasRenderingContext2d, view: &ViewFrame) {
	let opacity = state.theme.line_opacity;
	ctx.set_line_width(1.0);

	// Visible vertex range is exactly twice the active connection count;
	// the buffer tail beyond it is stale.
	let segments = state.lines.draw_range() / 2;
	for slot in 0..segments {
		let (a, b) = state.lines.endpoints(slot);
		let (Some(pa), Some(pb)) = (
			view.project(a, state.width, state.height),
			view.project(b, state.width, state.height),
		) else {
			// Either endpoint outside the clip range drops the segment whole.
			continue;
		};

		let shade = (state.lines.intensity(slot).clamp(0.0, 1.0) * 255.0) as u8;
		ctx.set_stroke_style_str(&format!(
			"rgba({shade}, {shade}, {shade}, {opacity})"
		));
		ctx.begin_path();
		ctx.move_to(pa.x, pa.y);
		ctx.line_to(pb.x, pb.y);
		ctx.stroke();
	}
}

fn draw_nodes(state: &FieldState, ctx: &CanvasRenderingContext2d, view: &ViewFrame) {
	// One shared material: set the fill once for every node.
	ctx.set_fill_style_str(
		&state
			.theme
			.node_color
			.to_css_rgba(state.theme.node_opacity),
	);

	for node in &state.nodes {
		let Some(p) = view.project(node.pos, state.width, state.height) else {
			continue;
		};

		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, state.theme.node_radius * p.scale, 0.0, PI * 2.0);
		ctx.fill();
	}
}
