//! Read-only inputs handed to the presentation layer.
//!
//! The canvas renderer and list displays are pure consumers: they receive a
//! frame or a snapshot and emit intents by id, but never mutate the store
//! themselves.

use crate::config::{
    CANVAS_HEIGHT_FRACTION, CANVAS_WIDTH_FRACTION, MIN_CANVAS_SIZE, SHADER_COUNT, SIDEBAR_WIDTH,
};
use serde::Serialize;

/// Everything the canvas renderer consumes on a re-render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasFrame {
    /// Target square dimension in logical pixels
    pub size: u32,
    pub has_active_reminders: bool,
    pub has_upcoming_reminders: bool,
    /// Selected shader variant, 1..=SHADER_COUNT
    pub shader_id: u8,
}

/// Square canvas dimension for the current viewport: the canvas takes 70% of
/// the width left over after the sidebar, capped at 80% of the height, and
/// never shrinks below the minimum size.
pub fn canvas_size(viewport_width: f64, viewport_height: f64) -> u32 {
    let available_width = (viewport_width - SIDEBAR_WIDTH).max(0.0);
    let size = (available_width * CANVAS_WIDTH_FRACTION).min(viewport_height * CANVAS_HEIGHT_FRACTION);
    size.max(MIN_CANVAS_SIZE).round() as u32
}

/// Keep a selected shader variant within the selectable range.
pub fn clamp_shader_id(id: u8) -> u8 {
    id.clamp(1, SHADER_COUNT)
}
