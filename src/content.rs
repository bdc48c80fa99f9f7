//! Static content store.
//!
//! All mock data for the prototype lives here: built once on first access,
//! read-only for the lifetime of the process. Accessors are pure and cannot
//! fail; every list is fixed-length and non-empty.

use once_cell::sync::Lazy;

use crate::models::{
    ClinicStats, CurrentPatient, OnboardingSlide, Patient, Therapy, TherapyPhase,
};

/// Display name of the clinic shown on the practitioner dashboard.
pub const CLINIC_NAME: &str = "Ayurveda Wellness Clinic";

/// Signed-in practitioner identity.
pub const PRACTITIONER_NAME: &str = "Dr. Sonal Mehta";
pub const PRACTITIONER_TITLE: &str = "Ayurveda Specialist";

/// Mood options in the feedback overlay, worst to best.
pub const MOODS: &[&str] = &["Awful", "Low", "Okay", "Good", "Wonderful"];

/// Symptom checklist in the feedback overlay.
pub const SYMPTOMS: &[&str] = &[
    "Headache",
    "Nausea",
    "Fatigue",
    "Bloating",
    "Energetic",
    "Calm",
];

/// Therapy protocol checklist on the AI assistant screen.
pub const PROTOCOL_OPTIONS: &[&str] = &[
    "Vamana (Emesis)",
    "Virechana (Purgation)",
    "Basti (Enema)",
    "Nasya (Nasal)",
];

/// Pre-care instructions in the therapy detail overlay.
pub const PRE_CARE: &[&str] = &[
    "Light breakfast recommended",
    "Avoid heavy physical activity",
    "Arrive 15 minutes early",
    "Wear comfortable clothing",
];

/// Post-care instructions in the therapy detail overlay.
pub const POST_CARE: &[&str] = &[
    "Rest for 30 minutes after treatment",
    "Drink warm water",
    "Avoid cold foods and drinks",
    "Monitor any reactions",
];

/// Guidance reminders on the patient dashboard.
pub const RECENT_GUIDANCE: &[&str] = &[
    "Reminder: Please have a light, liquid breakfast this morning.",
    "Your next therapy session is in 2 hours. Please arrive 15 minutes early.",
];

/// The static "AI insight" recommendation string.
pub const AI_INSIGHT: &str = "Based on current patient load and resource availability, \
starting the treatment plan on Monday would provide optimal therapist allocation and \
facility usage.";

/// Overall feeling trend on the profile screen (1-5 scale).
pub const FEELING_TREND: &[u8] = &[3, 4, 3, 5, 4, 5, 4];

static PATIENTS: Lazy<Vec<Patient>> = Lazy::new(|| {
    vec![
        Patient {
            id: "1".to_string(),
            name: "Anjali Sharma".to_string(),
            age: 34,
            diagnosis: "Stress & Anxiety".to_string(),
            current_day: 7,
            total_days: 21,
            recent_feedback: "Severe Nausea".to_string(),
            avatar: "/api/placeholder/40/40".to_string(),
        },
        Patient {
            id: "2".to_string(),
            name: "Rajesh Kumar".to_string(),
            age: 45,
            diagnosis: "Digestive Issues".to_string(),
            current_day: 14,
            total_days: 21,
            recent_feedback: "Feeling Great".to_string(),
            avatar: "/api/placeholder/40/40".to_string(),
        },
        Patient {
            id: "3".to_string(),
            name: "Priya Patel".to_string(),
            age: 28,
            diagnosis: "Chronic Fatigue".to_string(),
            current_day: 3,
            total_days: 21,
            recent_feedback: "Mild Improvement".to_string(),
            avatar: "/api/placeholder/40/40".to_string(),
        },
    ]
});

static THERAPIES: Lazy<Vec<Therapy>> = Lazy::new(|| {
    vec![
        Therapy {
            id: "1".to_string(),
            name: "Abhyanga (Oil Massage)".to_string(),
            time: "9:00 AM".to_string(),
            description: "Full body oil massage with warm herbal oils".to_string(),
            date: "Today".to_string(),
            completed: true,
            phase: TherapyPhase::Past,
        },
        Therapy {
            id: "2".to_string(),
            name: "Virechana (Purgation Therapy)".to_string(),
            time: "2:00 PM".to_string(),
            description: "Therapeutic purification process".to_string(),
            date: "Today".to_string(),
            completed: false,
            phase: TherapyPhase::Today,
        },
        Therapy {
            id: "3".to_string(),
            name: "Shirodhara (Oil Pouring)".to_string(),
            time: "10:00 AM".to_string(),
            description: "Continuous pouring of oil on forehead".to_string(),
            date: "Tomorrow".to_string(),
            completed: false,
            phase: TherapyPhase::Upcoming,
        },
    ]
});

static ONBOARDING_SLIDES: Lazy<Vec<OnboardingSlide>> = Lazy::new(|| {
    vec![
        OnboardingSlide {
            title: "Welcome to Your Healing Journey".to_string(),
            description: "Ayur-Connect is your personal companion for a seamless \
                          Panchakarma experience."
                .to_string(),
            icon: "❀",
        },
        OnboardingSlide {
            title: "Stay on Track, Effortlessly".to_string(),
            description: "Receive personalized schedules and timely reminders for your \
                          therapies, diet, and lifestyle."
                .to_string(),
            icon: "◷",
        },
        OnboardingSlide {
            title: "Your Feedback Matters".to_string(),
            description: "Share how you're feeling after each session to help your \
                          practitioner tailor your treatment."
                .to_string(),
            icon: "✎",
        },
    ]
});

static CURRENT_PATIENT: Lazy<CurrentPatient> = Lazy::new(|| CurrentPatient {
    name: "Anjali Sharma".to_string(),
    current_day: 7,
    total_days: 21,
    next_therapy: "Virechana (Purgation Therapy)".to_string(),
    next_time: "2:00 PM".to_string(),
});

static CLINIC_STATS: Lazy<ClinicStats> = Lazy::new(|| ClinicStats {
    patients_today: 12,
    therapies_completed: 8,
    occupancy: "85%".to_string(),
});

/// All patients under the practitioner's care.
pub fn patients() -> &'static [Patient] {
    &PATIENTS
}

/// The full therapy schedule for the signed-in patient.
pub fn therapies() -> &'static [Therapy] {
    &THERAPIES
}

/// Onboarding carousel slides, in display order.
pub fn onboarding_slides() -> &'static [OnboardingSlide] {
    &ONBOARDING_SLIDES
}

/// Summary data for the signed-in patient.
pub fn current_patient() -> &'static CurrentPatient {
    &CURRENT_PATIENT
}

/// Headline numbers for the practitioner dashboard.
pub fn clinic_stats() -> &'static ClinicStats {
    &CLINIC_STATS
}

/// Patients whose latest feedback needs immediate attention.
pub fn urgent_patients() -> Vec<&'static Patient> {
    PATIENTS.iter().filter(|p| p.is_urgent()).collect()
}
