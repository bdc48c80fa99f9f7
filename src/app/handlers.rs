//! Key-event routing.
//!
//! One entry point, [`App::handle_key`], dispatching on the current screen.
//! Overlays are checked first so an open modal captures every key except the
//! global quit binding. All bindings funnel into the transition methods in
//! `navigation.rs`; nothing here mutates state directly except the overlay
//! capture widgets (mood/symptom cursors, notes input).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{App, FeedbackFocus, PatientTab, PractitionerTab, Screen};
use crate::content;
use crate::ui::login::LOGIN_OPTIONS;

impl App {
    /// Route one key press. Any press may change state, so callers mark the
    /// frame dirty before invoking this.
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+C always quits, even with an overlay open.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.feedback_modal_open {
            self.handle_feedback_modal_key(key);
            return;
        }
        if self.detail_modal_open {
            self.handle_detail_modal_key(key);
            return;
        }

        match self.screen {
            Screen::Login => self.handle_login_key(key),
            Screen::Onboarding => self.handle_onboarding_key(key),
            Screen::Patient => self.handle_patient_key(key),
            Screen::Practitioner => self.handle_practitioner_key(key),
        }
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.login_cursor_up(),
            KeyCode::Down | KeyCode::Char('j') => self.login_cursor_down(LOGIN_OPTIONS.len()),
            KeyCode::Enter => {
                // The last menu entry is the practitioner portal; every other
                // action is a patient sign-in.
                if self.login_index == LOGIN_OPTIONS.len() - 1 {
                    self.open_practitioner_portal();
                } else {
                    self.sign_in();
                }
            }
            KeyCode::Char('o') => self.open_practitioner_portal(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_onboarding_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right => self.advance_onboarding(),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_patient_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.next_patient_tab(),
            KeyCode::Char('1') => self.set_patient_tab(PatientTab::Dashboard),
            KeyCode::Char('2') => self.set_patient_tab(PatientTab::Schedule),
            KeyCode::Char('3') => self.set_patient_tab(PatientTab::Feedback),
            KeyCode::Char('4') => self.set_patient_tab(PatientTab::Profile),
            // Dashboard quick actions.
            KeyCode::Char('f') => self.open_feedback(),
            KeyCode::Char('s') => self.set_patient_tab(PatientTab::Schedule),
            KeyCode::Esc => self.set_patient_tab(PatientTab::Dashboard),
            KeyCode::Up | KeyCode::Char('k') if self.patient_tab == PatientTab::Schedule => {
                self.schedule_cursor_up()
            }
            KeyCode::Down | KeyCode::Char('j') if self.patient_tab == PatientTab::Schedule => {
                self.schedule_cursor_down()
            }
            KeyCode::Enter if self.patient_tab == PatientTab::Schedule => {
                self.open_selected_therapy()
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_practitioner_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab => self.next_practitioner_tab(),
            KeyCode::Char('1') => self.set_practitioner_tab(PractitionerTab::Dashboard),
            KeyCode::Char('2') => self.set_practitioner_tab(PractitionerTab::Patients),
            KeyCode::Char('3') => self.set_practitioner_tab(PractitionerTab::Schedule),
            KeyCode::Char('4') => self.set_practitioner_tab(PractitionerTab::AiAssistant),
            KeyCode::Char('5') => self.set_practitioner_tab(PractitionerTab::Analytics),
            KeyCode::Esc => self.set_practitioner_tab(PractitionerTab::Dashboard),
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
    }

    fn handle_detail_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_detail(),
            // Primary action: request a reschedule. Closes with no other
            // effect, like every mutation in this prototype.
            KeyCode::Enter | KeyCode::Char('r') => self.close_detail(),
            KeyCode::Right | KeyCode::Tab => self.detail_tab = self.detail_tab.next(),
            KeyCode::Left => self.detail_tab = self.detail_tab.prev(),
            _ => {}
        }
    }

    fn handle_feedback_modal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.close_feedback();
                return;
            }
            KeyCode::Tab => {
                self.feedback_focus = self.feedback_focus.next();
                return;
            }
            KeyCode::Enter => {
                // Submit: closes and discards, identical to dismissing.
                self.close_feedback();
                return;
            }
            _ => {}
        }

        match self.feedback_focus {
            FeedbackFocus::Mood => match key.code {
                KeyCode::Left if self.mood_index > 0 => self.mood_index -= 1,
                KeyCode::Right if self.mood_index < content::MOODS.len() - 1 => {
                    self.mood_index += 1
                }
                _ => {}
            },
            FeedbackFocus::Symptoms => match key.code {
                KeyCode::Up if self.symptom_index > 0 => self.symptom_index -= 1,
                KeyCode::Down if self.symptom_index < content::SYMPTOMS.len() - 1 => {
                    self.symptom_index += 1
                }
                KeyCode::Char(' ') => {
                    self.symptoms_checked[self.symptom_index] =
                        !self.symptoms_checked[self.symptom_index];
                }
                _ => {}
            },
            FeedbackFocus::Notes => match key.code {
                KeyCode::Char(c) => self.notes.insert_char(c),
                KeyCode::Backspace => self.notes.backspace(),
                KeyCode::Delete => self.notes.delete_char(),
                KeyCode::Left => self.notes.move_cursor_left(),
                KeyCode::Right => self.notes.move_cursor_right(),
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DetailTab;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_ctrl_c_quits_from_any_screen() {
        let mut app = App::new().unwrap();
        app.open_feedback();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_login_enter_on_sign_in_option_starts_onboarding() {
        let mut app = App::new().unwrap();
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Onboarding);
    }

    #[test]
    fn test_login_last_option_opens_portal() {
        let mut app = App::new().unwrap();
        for _ in 0..LOGIN_OPTIONS.len() {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.login_index, LOGIN_OPTIONS.len() - 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Practitioner);
    }

    #[test]
    fn test_full_patient_login_flow() {
        let mut app = App::new().unwrap();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen, Screen::Patient);
        assert_eq!(app.patient_tab, PatientTab::Dashboard);
    }

    fn patient_app() -> App {
        let mut app = App::new().unwrap();
        app.sign_in();
        app.advance_onboarding();
        app.advance_onboarding();
        app.advance_onboarding();
        app
    }

    #[test]
    fn test_number_keys_switch_patient_tabs() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.patient_tab, PatientTab::Schedule);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.patient_tab, PatientTab::Profile);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.patient_tab, PatientTab::Dashboard);
    }

    #[test]
    fn test_schedule_enter_opens_detail_for_cursor_row() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.detail_modal_open);
        assert_eq!(
            app.selected_therapy.as_ref().unwrap().name,
            "Virechana (Purgation Therapy)"
        );
    }

    #[test]
    fn test_detail_modal_captures_tab_key() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        let tab_before = app.patient_tab;
        press(&mut app, KeyCode::Tab);
        // Tab cycles the overlay tabs, not the patient tabs.
        assert_eq!(app.patient_tab, tab_before);
        assert_eq!(app.detail_tab, DetailTab::PreCare);
    }

    #[test]
    fn test_reschedule_request_only_closes_overlay() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('r'));
        assert!(!app.detail_modal_open);
        assert!(app.selected_therapy.is_none());
        // Schedule data is untouched.
        assert!(!content::therapies()[0].name.is_empty());
    }

    #[test]
    fn test_feedback_quick_action_and_capture_keys() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('f'));
        assert!(app.feedback_modal_open);

        press(&mut app, KeyCode::Right);
        assert_eq!(app.mood_index, 3);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.symptoms_checked[1]);

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('o'));
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.notes.content(), "ok");

        // Submit discards everything.
        press(&mut app, KeyCode::Enter);
        assert!(!app.feedback_modal_open);
        assert!(app.notes.is_empty());
        assert!(app.symptoms_checked.iter().all(|checked| !checked));
    }

    #[test]
    fn test_q_inside_notes_is_text_not_quit() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('f'));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.notes.content(), "q");
    }

    #[test]
    fn test_practitioner_tab_bindings() {
        let mut app = App::new().unwrap();
        app.open_practitioner_portal();
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.practitioner_tab, PractitionerTab::AiAssistant);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.practitioner_tab, PractitionerTab::Dashboard);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.practitioner_tab, PractitionerTab::Patients);
    }

    #[test]
    fn test_mood_cursor_clamps_at_both_ends() {
        let mut app = patient_app();
        press(&mut app, KeyCode::Char('f'));
        for _ in 0..10 {
            press(&mut app, KeyCode::Left);
        }
        assert_eq!(app.mood_index, 0);
        for _ in 0..10 {
            press(&mut app, KeyCode::Right);
        }
        assert_eq!(app.mood_index, content::MOODS.len() - 1);
    }
}
