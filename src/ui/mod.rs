//! UI rendering for the Ayur-Connect prototype.
//!
//! One render function per screen, all pure functions of the [`App`] view
//! state and the static content store. The top-level [`render`] dispatches on
//! the closed [`Screen`] enum and layers the overlay dialogs last so they sit
//! above whichever screen is active.

mod helpers;
pub mod login;
mod modals;
mod onboarding;
mod patient;
mod practitioner;
pub mod theme;

// Re-export helpers used by widgets and tests
pub use helpers::{centered_rect, keybind_hints, pad_center, tone_color, truncate_string};

use ratatui::Frame;

use crate::app::{App, Screen};
use login::render_login;
use modals::render_overlays;
use onboarding::render_onboarding;
use patient::render_patient;
use practitioner::render_practitioner;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on the current screen.
pub fn render(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::Login => render_login(frame, app),
        Screen::Onboarding => render_onboarding(frame, app),
        Screen::Patient => render_patient(frame, app),
        Screen::Practitioner => render_practitioner(frame, app),
    }

    // Overlay dialogs (if visible) - must be last for proper layering
    render_overlays(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{PatientTab, PractitionerTab};
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_string(app: &App) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_login_screen_renders_menu() {
        let app = App::new().unwrap();
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Continue with Google"));
        assert!(buffer.contains("Portal Access"));
        assert!(buffer.contains("Your journey to wellness begins here"));
    }

    #[test]
    fn test_onboarding_screen_shows_current_slide_only() {
        let mut app = App::new().unwrap();
        app.sign_in();
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Welcome to Your Healing Journey"));
        assert!(!buffer.contains("Stay on Track, Effortlessly"));

        app.advance_onboarding();
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Stay on Track, Effortlessly"));
        assert!(!buffer.contains("Welcome to Your Healing Journey"));
    }

    #[test]
    fn test_patient_dashboard_shows_focus_and_journey() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Hello, Anjali Sharma!"));
        assert!(buffer.contains("Virechana (Purgation Therapy)"));
        assert!(buffer.contains("Day 7 of 21"));
        assert!(buffer.contains("Recent Guidance"));
    }

    #[test]
    fn test_patient_feedback_tab_falls_back_to_dashboard() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        let dashboard = buffer_string(&app);

        app.patient_tab = PatientTab::Feedback;
        let feedback = buffer_string(&app);
        assert!(feedback.contains("Hello, Anjali Sharma!"));
        // Same screen content; only the tab highlight differs.
        assert!(feedback.contains("Day 7 of 21"));
        assert!(dashboard.contains("Day 7 of 21"));
    }

    #[test]
    fn test_patient_schedule_lists_all_therapies() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        app.patient_tab = PatientTab::Schedule;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Abhyanga (Oil Massage)"));
        assert!(buffer.contains("Virechana (Purgation Therapy)"));
        assert!(buffer.contains("Shirodhara (Oil Pouring)"));
        assert!(buffer.contains("[today]"));
        assert!(buffer.contains("[upcoming]"));
    }

    #[test]
    fn test_patient_profile_shows_initials_and_milestones() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        app.patient_tab = PatientTab::Profile;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("AS"));
        assert!(buffer.contains("Patient ID: #12345"));
        assert!(buffer.contains("7 Days Complete!"));
        assert!(buffer.contains("Overall feeling trend"));
    }

    #[test]
    fn test_practitioner_dashboard_shows_urgent_alert_once() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Immediate Attention"));
        assert!(buffer.contains("Severe Nausea"));
        assert!(buffer.contains("Dr. Sonal Mehta"));
        assert!(buffer.contains("Total Patients Today"));
        // Non-urgent patients are not in the alert card.
        assert_eq!(buffer.matches("Reported:").count(), 1);
    }

    #[test]
    fn test_practitioner_patients_screen_lists_roster() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        app.practitioner_tab = PractitionerTab::Patients;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Patient Management"));
        assert!(buffer.contains("Rajesh Kumar"));
        assert!(buffer.contains("RK"));
        assert!(buffer.contains("Priya Patel"));
        assert!(buffer.contains("Day 14/21"));
    }

    #[test]
    fn test_practitioner_unbuilt_tabs_fall_back_to_dashboard() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        for tab in [PractitionerTab::Schedule, PractitionerTab::Analytics] {
            app.practitioner_tab = tab;
            let buffer = buffer_string(&app);
            assert!(
                buffer.contains("Immediate Attention"),
                "{:?} should render the dashboard",
                tab
            );
        }
    }

    #[test]
    fn test_practitioner_dashboard_identical_after_tab_round_trip() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        let before = buffer_string(&app);

        for tab in PractitionerTab::ALL {
            app.set_practitioner_tab(tab);
        }
        app.set_practitioner_tab(PractitionerTab::Dashboard);
        let after = buffer_string(&app);
        assert_eq!(before, after, "navigation must not accumulate hidden state");
    }

    #[test]
    fn test_ai_assistant_screen_shows_static_insight() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        app.practitioner_tab = PractitionerTab::AiAssistant;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("AI Scheduling Assistant"));
        assert!(buffer.contains("Vamana (Emesis)"));
        assert!(buffer.contains("AI Insight:"));
    }

    #[test]
    fn test_feedback_overlay_renders_above_dashboard() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        app.open_feedback();
        let buffer = buffer_string(&app);
        assert!(buffer.contains("How are you feeling after your session?"));
        assert!(buffer.contains("Headache"));
        assert!(buffer.contains("Anything else you'd like to share?"));
    }

    #[test]
    fn test_detail_overlay_shows_selected_therapy_fields() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        app.patient_tab = PatientTab::Schedule;
        app.open_detail(crate::content::therapies()[2].clone());
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Shirodhara (Oil Pouring)"));
        assert!(buffer.contains("Continuous pouring of oil on forehead"));
        assert!(buffer.contains("Tomorrow"));
    }

    #[test]
    fn test_detail_overlay_pre_care_tab() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        app.open_detail(crate::content::therapies()[1].clone());
        app.detail_tab = crate::app::DetailTab::PreCare;
        let buffer = buffer_string(&app);
        assert!(buffer.contains("Light breakfast recommended"));
        assert!(!buffer.contains("Rest for 30 minutes"));
    }

    #[test]
    fn test_no_overlay_without_modal_flags() {
        let mut app = App::new().unwrap();
        app.screen = Screen::Patient;
        let buffer = buffer_string(&app);
        assert!(!buffer.contains("How are you feeling after your session?"));
        assert!(!buffer.contains("Therapy Details & Options"));
    }

    #[test]
    fn test_every_screen_renders_content_on_small_terminal() {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new().unwrap();
        for screen in [
            Screen::Login,
            Screen::Onboarding,
            Screen::Patient,
            Screen::Practitioner,
        ] {
            app.screen = screen;
            terminal.draw(|f| render(f, &app)).unwrap();
            let has_content = terminal
                .backend()
                .buffer()
                .content()
                .iter()
                .any(|cell| cell.symbol() != " ");
            assert!(has_content, "{:?} should render content", screen);
        }
    }
}
