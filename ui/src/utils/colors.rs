//! Shared color constants for the UI.

use egui::Color32;

/// Forest green for success toasts.
pub const COLOR_GREEN: Color32 = Color32::from_rgb(34, 139, 34);

/// Red for error toasts and the delete control.
pub const COLOR_RED: Color32 = Color32::from_rgb(220, 53, 69);

/// Accent of official cards and badges.
pub const COLOR_OFFICIAL: Color32 = Color32::from_rgb(59, 91, 219);

/// Accent of volunteer cards and badges.
pub const COLOR_VOLUNTEER: Color32 = Color32::from_rgb(13, 148, 176);

/// Secondary text on cards.
pub const COLOR_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
