//! Type definitions for the application view state.
//!
//! Contains the closed enums that drive screen routing:
//! - [`Screen`] - Top-level mode
//! - [`PatientTab`] / [`PractitionerTab`] - Per-mode sub-views
//! - [`UserRole`] - Which kind of user signed in
//! - [`DetailTab`] - Internal tabs of the therapy detail overlay
//! - [`FeedbackFocus`] - Which section of the feedback overlay has focus

/// Top-level mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Onboarding,
    Patient,
    Practitioner,
}

/// Which kind of user signed in. Set alongside the login transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserRole {
    #[default]
    Patient,
    Practitioner,
}

/// Sub-view within patient mode.
///
/// `Feedback` has no screen of its own; the render dispatch sends it through
/// the dashboard fallback arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatientTab {
    #[default]
    Dashboard,
    Schedule,
    Feedback,
    Profile,
}

impl PatientTab {
    /// Tabs in bottom-bar display order.
    pub const ALL: [PatientTab; 4] = [
        PatientTab::Dashboard,
        PatientTab::Schedule,
        PatientTab::Feedback,
        PatientTab::Profile,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PatientTab::Dashboard => "Home",
            PatientTab::Schedule => "Schedule",
            PatientTab::Feedback => "Feedback",
            PatientTab::Profile => "Profile",
        }
    }
}

/// Sub-view within practitioner mode.
///
/// `Schedule` and `Analytics` have no screens of their own and fall back to
/// the dashboard render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PractitionerTab {
    #[default]
    Dashboard,
    Patients,
    Schedule,
    AiAssistant,
    Analytics,
}

impl PractitionerTab {
    /// Tabs in sidebar display order.
    pub const ALL: [PractitionerTab; 5] = [
        PractitionerTab::Dashboard,
        PractitionerTab::Patients,
        PractitionerTab::Schedule,
        PractitionerTab::AiAssistant,
        PractitionerTab::Analytics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PractitionerTab::Dashboard => "Dashboard",
            PractitionerTab::Patients => "Patients",
            PractitionerTab::Schedule => "Schedule",
            PractitionerTab::AiAssistant => "AI Assistant",
            PractitionerTab::Analytics => "Analytics",
        }
    }
}

/// Internal tabs of the therapy detail overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Description,
    PreCare,
    PostCare,
}

impl DetailTab {
    pub const ALL: [DetailTab; 3] = [DetailTab::Description, DetailTab::PreCare, DetailTab::PostCare];

    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Description => "Description",
            DetailTab::PreCare => "Pre-care",
            DetailTab::PostCare => "Post-care",
        }
    }

    pub fn next(&self) -> DetailTab {
        match self {
            DetailTab::Description => DetailTab::PreCare,
            DetailTab::PreCare => DetailTab::PostCare,
            DetailTab::PostCare => DetailTab::Description,
        }
    }

    pub fn prev(&self) -> DetailTab {
        match self {
            DetailTab::Description => DetailTab::PostCare,
            DetailTab::PreCare => DetailTab::Description,
            DetailTab::PostCare => DetailTab::PreCare,
        }
    }
}

/// Which section of the feedback overlay receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackFocus {
    #[default]
    Mood,
    Symptoms,
    Notes,
}

impl FeedbackFocus {
    pub fn next(&self) -> FeedbackFocus {
        match self {
            FeedbackFocus::Mood => FeedbackFocus::Symptoms,
            FeedbackFocus::Symptoms => FeedbackFocus::Notes,
            FeedbackFocus::Notes => FeedbackFocus::Mood,
        }
    }
}
