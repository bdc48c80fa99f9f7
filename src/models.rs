//! Core data records for the prototype.
//!
//! Every record here is immutable for the session: the static content store
//! builds the fixed lists once at startup and nothing ever writes to them.
//! The only "logic" in this module is display-derived data (progress
//! fractions, avatar initials, feedback tone) reproduced from the product
//! behavior.

use serde::{Deserialize, Serialize};

/// A patient enrolled in a Panchakarma program.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub diagnosis: String,
    /// Day the patient is currently on. Invariant: `0 <= current_day <= total_days`.
    pub current_day: u32,
    pub total_days: u32,
    /// Free-text label from the patient's latest session feedback.
    pub recent_feedback: String,
    /// Placeholder image path. Opaque; never resolved to a real asset.
    pub avatar: String,
}

impl Patient {
    /// Fraction of the program completed, in `[0, 1]` for all static records.
    ///
    /// Intentionally unclamped: the data is fixed and valid, and the source
    /// behavior computes the raw ratio. Clamp at the widget boundary where a
    /// gauge contract requires it.
    pub fn progress(&self) -> f64 {
        self.current_day as f64 / self.total_days as f64
    }

    /// Whether this patient's feedback needs immediate practitioner attention.
    ///
    /// Case-sensitive substring match on the feedback label, matching the
    /// product rule exactly.
    pub fn is_urgent(&self) -> bool {
        self.recent_feedback.contains("Severe")
    }

    /// Tone bucket for coloring the feedback label.
    pub fn feedback_tone(&self) -> FeedbackTone {
        FeedbackTone::of(&self.recent_feedback)
    }

    /// Avatar fallback initials: first character of each name token,
    /// concatenated in order ("Anjali Sharma" -> "AS").
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

/// Tone of a feedback label, derived by substring match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackTone {
    Alert,
    Positive,
    Neutral,
}

impl FeedbackTone {
    /// "Severe" wins over "Great"; anything else is neutral.
    pub fn of(feedback: &str) -> Self {
        if feedback.contains("Severe") {
            FeedbackTone::Alert
        } else if feedback.contains("Great") {
            FeedbackTone::Positive
        } else {
            FeedbackTone::Neutral
        }
    }
}

/// First character of each whitespace-separated token, concatenated.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}

/// Which bucket a therapy session falls into on the schedule.
///
/// Asserted data on the record, not derived from the date label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TherapyPhase {
    Upcoming,
    Today,
    Past,
}

impl TherapyPhase {
    /// Badge label shown on schedule cards.
    pub fn label(&self) -> &'static str {
        match self {
            TherapyPhase::Upcoming => "upcoming",
            TherapyPhase::Today => "today",
            TherapyPhase::Past => "past",
        }
    }
}

/// A scheduled or completed treatment session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Therapy {
    pub id: String,
    pub name: String,
    /// Time-of-day label, e.g. "2:00 PM".
    pub time: String,
    pub description: String,
    /// Date label, e.g. "Today" or "Tomorrow". Not parsed.
    pub date: String,
    pub completed: bool,
    pub phase: TherapyPhase,
}

/// One slide of the onboarding carousel.
///
/// Serialize-only: the icon glyph is a borrowed constant.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingSlide {
    pub title: String,
    pub description: String,
    /// Glyph standing in for the slide illustration.
    pub icon: &'static str,
}

/// Header summary for the signed-in patient.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentPatient {
    pub name: String,
    pub current_day: u32,
    pub total_days: u32,
    pub next_therapy: String,
    pub next_time: String,
}

impl CurrentPatient {
    /// See [`Patient::progress`]; same unclamped ratio.
    pub fn progress(&self) -> f64 {
        self.current_day as f64 / self.total_days as f64
    }
}

/// Headline numbers on the practitioner dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicStats {
    pub patients_today: u32,
    pub therapies_completed: u32,
    /// Preformatted label, e.g. "85%".
    pub occupancy: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patient(name: &str, current_day: u32, total_days: u32, feedback: &str) -> Patient {
        Patient {
            id: "p-test".to_string(),
            name: name.to_string(),
            age: 30,
            diagnosis: "Test".to_string(),
            current_day,
            total_days,
            recent_feedback: feedback.to_string(),
            avatar: "/api/placeholder/40/40".to_string(),
        }
    }

    #[test]
    fn test_progress_fraction() {
        let p = patient("Anjali Sharma", 7, 21, "Severe Nausea");
        assert!((p.progress() - 7.0 / 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_monotonic_in_current_day() {
        let mut last = 0.0;
        for day in 0..=21 {
            let p = patient("X Y", day, 21, "ok");
            let fraction = p.progress();
            assert!(fraction >= last, "fraction must not decrease as days advance");
            last = fraction;
        }
    }

    #[test]
    fn test_urgent_is_case_sensitive_substring() {
        assert!(patient("A B", 1, 21, "Severe Nausea").is_urgent());
        assert!(patient("A B", 1, 21, "Very Severe").is_urgent());
        assert!(!patient("A B", 1, 21, "severe nausea").is_urgent());
        assert!(!patient("A B", 1, 21, "Feeling Great").is_urgent());
    }

    #[test]
    fn test_feedback_tone_buckets() {
        assert_eq!(FeedbackTone::of("Severe Nausea"), FeedbackTone::Alert);
        assert_eq!(FeedbackTone::of("Feeling Great"), FeedbackTone::Positive);
        assert_eq!(FeedbackTone::of("Mild Improvement"), FeedbackTone::Neutral);
    }

    #[test]
    fn test_initials_from_name_tokens() {
        assert_eq!(initials("Anjali Sharma"), "AS");
        assert_eq!(initials("Rajesh Kumar"), "RK");
        assert_eq!(initials("Priya Patel"), "PP");
        assert_eq!(initials("Dr. Sonal Mehta"), "DSM");
    }

    #[test]
    fn test_initials_collapses_extra_whitespace() {
        assert_eq!(initials("  Anjali   Sharma "), "AS");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(TherapyPhase::Today.label(), "today");
        assert_eq!(TherapyPhase::Upcoming.label(), "upcoming");
        assert_eq!(TherapyPhase::Past.label(), "past");
    }
}
