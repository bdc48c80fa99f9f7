//! Color theme constants for the Ayur-Connect UI.
//!
//! Defines the herbal palette used throughout the screens.

use ratatui::style::Color;

// ============================================================================
// Herbal Palette
// ============================================================================

/// Primary brand color - herbal green
pub const COLOR_PRIMARY: Color = Color::Rgb(74, 124, 89); // green #4A7C59

/// Primary border color - dark gray for a calm aesthetic
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color - white for highlights and important text
pub const COLOR_ACCENT: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Header/title text color
pub const COLOR_HEADER: Color = Color::White;

/// Completed therapies and positive feedback - green
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Urgent alerts and severe feedback - red
pub const COLOR_ALERT: Color = Color::Red;

/// Warm highlight for the today's-focus card
pub const COLOR_FOCUS: Color = Color::Rgb(214, 162, 77); // amber #D6A24D

/// Progress gauge fill
pub const COLOR_PROGRESS: Color = Color::Rgb(74, 124, 89);

/// Progress gauge background
pub const COLOR_PROGRESS_BG: Color = Color::DarkGray;

/// Background for overlay dialogs
pub const COLOR_DIALOG_BG: Color = Color::Rgb(18, 26, 20);

/// Selected row / active tab highlight
pub const COLOR_SELECTED: Color = Color::Rgb(74, 124, 89);
