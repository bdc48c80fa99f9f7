//! Application view state and transitions.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Top-level mode (login, onboarding, patient, practitioner)
//! - [`PatientTab`] / [`PractitionerTab`] - Sub-view within a mode
//! - [`DetailTab`] / [`FeedbackFocus`] - Overlay-local state
//!
//! [`App`] owns every piece of mutable state in the prototype. All fields are
//! created with fixed initial values at startup and change only inside the
//! transition methods in `navigation.rs`, in direct response to a key event.
//! Nothing here persists, retries, or fails.

mod handlers;
mod navigation;
mod types;

pub use types::{DetailTab, FeedbackFocus, PatientTab, PractitionerTab, Screen, UserRole};

use color_eyre::Result;

use crate::content;
use crate::models::Therapy;
use crate::widgets::input_box::InputBox;

/// Complete view state for the prototype.
///
/// One struct, no globals: the whole application is single-session and
/// single-user, so grouping the mode enums, overlay flags, and list cursors
/// here keeps every transition a plain `&mut self` method.
pub struct App {
    // =========================================================================
    // Mode routing
    // =========================================================================
    /// Current top-level screen.
    pub screen: Screen,

    /// Which kind of user signed in.
    pub user_role: UserRole,

    /// Active tab in patient mode.
    pub patient_tab: PatientTab,

    /// Active tab in practitioner mode.
    pub practitioner_tab: PractitionerTab,

    /// Current onboarding slide index. Always a valid index into
    /// [`content::onboarding_slides`]; the advance-or-finish branch prevents
    /// stepping past the end by construction.
    pub onboarding_step: usize,

    // =========================================================================
    // Overlays
    // =========================================================================
    /// Feedback capture overlay visibility.
    pub feedback_modal_open: bool,

    /// Therapy detail overlay visibility.
    pub detail_modal_open: bool,

    /// Therapy shown in the detail overlay. `Some` only while the overlay is
    /// open; cleared back to `None` on close.
    pub selected_therapy: Option<Therapy>,

    /// Active tab inside the detail overlay.
    pub detail_tab: DetailTab,

    /// Which section of the feedback overlay has focus.
    pub feedback_focus: FeedbackFocus,

    /// Selected mood in the feedback overlay.
    pub mood_index: usize,

    /// Cursor position in the symptom checklist.
    pub symptom_index: usize,

    /// Checked state per symptom, same order as [`content::SYMPTOMS`].
    pub symptoms_checked: Vec<bool>,

    /// Free-text notes in the feedback overlay.
    pub notes: InputBox,

    // =========================================================================
    // List cursors
    // =========================================================================
    /// Selected entry in the login menu.
    pub login_index: usize,

    /// Selected therapy row on the patient schedule.
    pub schedule_index: usize,

    // =========================================================================
    // Loop bookkeeping
    // =========================================================================
    /// Flag indicating the app should quit.
    pub should_quit: bool,

    /// Whether the next loop iteration needs a redraw.
    pub needs_redraw: bool,
}

impl App {
    /// Create the application with its fixed initial view state.
    pub fn new() -> Result<Self> {
        Ok(Self {
            screen: Screen::Login,
            user_role: UserRole::Patient,
            patient_tab: PatientTab::Dashboard,
            practitioner_tab: PractitionerTab::Dashboard,
            onboarding_step: 0,
            feedback_modal_open: false,
            detail_modal_open: false,
            selected_therapy: None,
            detail_tab: DetailTab::Description,
            feedback_focus: FeedbackFocus::Mood,
            mood_index: 2,
            symptom_index: 0,
            symptoms_checked: vec![false; content::SYMPTOMS.len()],
            notes: InputBox::new(),
            login_index: 0,
            schedule_index: 0,
            should_quit: false,
            needs_redraw: true,
        })
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Mark the app to quit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}
