//! State transitions for the App.
//!
//! Every method here is total over its closed enum domain: no validation, no
//! failure path. The top-level mode machine is `Login -> Onboarding ->
//! Patient` (any sign-in action, then finishing the carousel) with a side
//! door `Login -> Practitioner` (portal access); `Patient` and
//! `Practitioner` have no exit short of quitting.

use tracing::debug;

use super::{App, DetailTab, FeedbackFocus, PatientTab, PractitionerTab, Screen, UserRole};
use crate::content;
use crate::models::Therapy;

impl App {
    /// Any sign-in action: enter onboarding as a patient.
    pub fn sign_in(&mut self) {
        self.user_role = UserRole::Patient;
        self.screen = Screen::Onboarding;
        self.onboarding_step = 0;
        debug!(screen = ?self.screen, "sign in");
    }

    /// Portal access: go straight to the practitioner dashboard.
    pub fn open_practitioner_portal(&mut self) {
        self.user_role = UserRole::Practitioner;
        self.screen = Screen::Practitioner;
        self.practitioner_tab = PractitionerTab::Dashboard;
        debug!(screen = ?self.screen, "portal access");
    }

    /// Advance the onboarding carousel, or finish it from the last slide.
    ///
    /// Finishing transitions the top-level mode to `Patient`. The step index
    /// never reaches `slides.len()`, so slide lookups cannot go out of range.
    pub fn advance_onboarding(&mut self) {
        let last = content::onboarding_slides().len() - 1;
        if self.onboarding_step < last {
            self.onboarding_step += 1;
            debug!(step = self.onboarding_step, "onboarding advance");
        } else {
            self.screen = Screen::Patient;
            self.patient_tab = PatientTab::Dashboard;
            debug!("onboarding complete");
        }
    }

    /// Switch the patient sub-view.
    pub fn set_patient_tab(&mut self, tab: PatientTab) {
        self.patient_tab = tab;
        debug!(?tab, "patient tab");
    }

    /// Switch the practitioner sub-view.
    pub fn set_practitioner_tab(&mut self, tab: PractitionerTab) {
        self.practitioner_tab = tab;
        debug!(?tab, "practitioner tab");
    }

    /// Cycle to the next patient tab in display order.
    pub fn next_patient_tab(&mut self) {
        let tabs = PatientTab::ALL;
        let pos = tabs.iter().position(|t| *t == self.patient_tab).unwrap_or(0);
        self.set_patient_tab(tabs[(pos + 1) % tabs.len()]);
    }

    /// Cycle to the next practitioner tab in display order.
    pub fn next_practitioner_tab(&mut self) {
        let tabs = PractitionerTab::ALL;
        let pos = tabs
            .iter()
            .position(|t| *t == self.practitioner_tab)
            .unwrap_or(0);
        self.set_practitioner_tab(tabs[(pos + 1) % tabs.len()]);
    }

    /// Open the feedback capture overlay with a fresh capture state.
    pub fn open_feedback(&mut self) {
        self.feedback_modal_open = true;
        self.reset_feedback_capture();
        debug!("feedback overlay open");
    }

    /// Close the feedback overlay. Nothing captured is kept; submit and
    /// dismiss are the same transition.
    pub fn close_feedback(&mut self) {
        self.feedback_modal_open = false;
        self.reset_feedback_capture();
        debug!("feedback overlay closed");
    }

    fn reset_feedback_capture(&mut self) {
        self.feedback_focus = FeedbackFocus::Mood;
        self.mood_index = 2;
        self.symptom_index = 0;
        self.symptoms_checked = vec![false; content::SYMPTOMS.len()];
        self.notes.clear();
    }

    /// Open the therapy detail overlay for one therapy.
    pub fn open_detail(&mut self, therapy: Therapy) {
        debug!(therapy = %therapy.name, "detail overlay open");
        self.selected_therapy = Some(therapy);
        self.detail_tab = DetailTab::Description;
        self.detail_modal_open = true;
    }

    /// Close the detail overlay and clear the selection.
    pub fn close_detail(&mut self) {
        self.detail_modal_open = false;
        self.selected_therapy = None;
        debug!("detail overlay closed");
    }

    /// Move the login menu cursor up.
    pub fn login_cursor_up(&mut self) {
        if self.login_index > 0 {
            self.login_index -= 1;
        }
    }

    /// Move the login menu cursor down.
    pub fn login_cursor_down(&mut self, option_count: usize) {
        if option_count > 0 && self.login_index < option_count - 1 {
            self.login_index += 1;
        }
    }

    /// Move the schedule cursor up.
    pub fn schedule_cursor_up(&mut self) {
        if self.schedule_index > 0 {
            self.schedule_index -= 1;
        }
    }

    /// Move the schedule cursor down.
    pub fn schedule_cursor_down(&mut self) {
        let max = content::therapies().len();
        if max > 0 && self.schedule_index < max - 1 {
            self.schedule_index += 1;
        }
    }

    /// Open the detail overlay for the therapy under the schedule cursor.
    pub fn open_selected_therapy(&mut self) {
        let therapies = content::therapies();
        if let Some(therapy) = therapies.get(self.schedule_index) {
            self.open_detail(therapy.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_sign_in_enters_onboarding_as_patient() {
        let mut app = App::new().unwrap();
        app.sign_in();
        assert_eq!(app.screen, Screen::Onboarding);
        assert_eq!(app.user_role, UserRole::Patient);
        assert_eq!(app.onboarding_step, 0);
    }

    #[test]
    fn test_portal_access_skips_onboarding() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        assert_eq!(app.screen, Screen::Practitioner);
        assert_eq!(app.user_role, UserRole::Practitioner);
        assert_eq!(app.practitioner_tab, PractitionerTab::Dashboard);
    }

    #[test]
    fn test_onboarding_finishes_on_third_advance_never_before() {
        let mut app = App::new().unwrap();
        app.sign_in();

        app.advance_onboarding();
        assert_eq!(app.screen, Screen::Onboarding);
        assert_eq!(app.onboarding_step, 1);

        app.advance_onboarding();
        assert_eq!(app.screen, Screen::Onboarding);
        assert_eq!(app.onboarding_step, 2);

        app.advance_onboarding();
        assert_eq!(app.screen, Screen::Patient);
        assert_eq!(app.patient_tab, PatientTab::Dashboard);
    }

    #[test]
    fn test_onboarding_step_never_indexes_past_the_slides() {
        let mut app = App::new().unwrap();
        app.sign_in();
        for _ in 0..10 {
            app.advance_onboarding();
            assert!(app.onboarding_step < content::onboarding_slides().len());
        }
    }

    #[test]
    fn test_patient_tabs_freely_reachable() {
        let mut app = App::new().unwrap();
        app.set_patient_tab(PatientTab::Profile);
        assert_eq!(app.patient_tab, PatientTab::Profile);
        app.set_patient_tab(PatientTab::Schedule);
        assert_eq!(app.patient_tab, PatientTab::Schedule);
        app.set_patient_tab(PatientTab::Dashboard);
        assert_eq!(app.patient_tab, PatientTab::Dashboard);
    }

    #[test]
    fn test_tab_cycling_wraps_around() {
        let mut app = App::new().unwrap();
        for _ in 0..PatientTab::ALL.len() {
            app.next_patient_tab();
        }
        assert_eq!(app.patient_tab, PatientTab::Dashboard);

        for _ in 0..PractitionerTab::ALL.len() {
            app.next_practitioner_tab();
        }
        assert_eq!(app.practitioner_tab, PractitionerTab::Dashboard);
    }

    #[test]
    fn test_closing_detail_clears_selection() {
        let mut app = App::new().unwrap();
        let therapy = content::therapies()[1].clone();
        app.open_detail(therapy);
        assert!(app.detail_modal_open);
        assert!(app.selected_therapy.is_some());

        app.close_detail();
        assert!(!app.detail_modal_open);
        assert!(app.selected_therapy.is_none());
    }

    #[test]
    fn test_reopening_detail_shows_only_new_selection() {
        let mut app = App::new().unwrap();
        app.open_detail(content::therapies()[0].clone());
        app.detail_tab = DetailTab::PostCare;
        app.close_detail();

        app.open_detail(content::therapies()[2].clone());
        let selected = app.selected_therapy.as_ref().unwrap();
        assert_eq!(selected.id, content::therapies()[2].id);
        assert_eq!(selected.name, "Shirodhara (Oil Pouring)");
        // Overlay-local tab resets with the new selection.
        assert_eq!(app.detail_tab, DetailTab::Description);
    }

    #[test]
    fn test_feedback_close_discards_capture_state() {
        let mut app = App::new().unwrap();
        app.open_feedback();
        app.mood_index = 4;
        app.symptoms_checked[1] = true;
        app.notes.insert_char('h');
        app.notes.insert_char('i');

        app.close_feedback();
        assert!(!app.feedback_modal_open);
        assert_eq!(app.mood_index, 2);
        assert!(app.symptoms_checked.iter().all(|checked| !checked));
        assert!(app.notes.is_empty());
    }

    #[test]
    fn test_schedule_cursor_stays_in_bounds() {
        let mut app = App::new().unwrap();
        let max = content::therapies().len();
        for _ in 0..max + 3 {
            app.schedule_cursor_down();
        }
        assert_eq!(app.schedule_index, max - 1);
        for _ in 0..max + 3 {
            app.schedule_cursor_up();
        }
        assert_eq!(app.schedule_index, 0);
    }

    #[test]
    fn test_open_selected_therapy_uses_cursor_row() {
        let mut app = App::new().unwrap();
        app.schedule_cursor_down();
        app.open_selected_therapy();
        assert_eq!(
            app.selected_therapy.as_ref().unwrap().id,
            content::therapies()[1].id
        );
    }
}
