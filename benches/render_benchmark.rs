//! Performance benchmarks for screen rendering
//!
//! Measures full-frame render time for each screen and overlay combination.
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::{backend::TestBackend, Terminal};

use ayur_connect::app::{App, PatientTab, PractitionerTab, Screen};
use ayur_connect::{content, ui};

fn draw_once(app: &App, width: u16, height: u16) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| ui::render(f, black_box(app))).unwrap();
}

/// Benchmark each top-level screen at a typical terminal size
fn bench_screen_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("screen_render");

    let screens: &[(&str, Screen)] = &[
        ("login", Screen::Login),
        ("onboarding", Screen::Onboarding),
        ("patient_dashboard", Screen::Patient),
        ("practitioner_dashboard", Screen::Practitioner),
    ];

    for (name, screen) in screens {
        let mut app = App::new().unwrap();
        app.screen = *screen;

        group.bench_with_input(BenchmarkId::from_parameter(name), &app, |b, app| {
            b.iter(|| draw_once(app, 100, 32));
        });
    }

    group.finish();
}

/// Benchmark the list-heavy sub-views
fn bench_sub_view_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub_view_render");

    let mut schedule = App::new().unwrap();
    schedule.screen = Screen::Patient;
    schedule.patient_tab = PatientTab::Schedule;
    group.bench_function("patient_schedule", |b| {
        b.iter(|| draw_once(&schedule, 100, 32));
    });

    let mut roster = App::new().unwrap();
    roster.screen = Screen::Practitioner;
    roster.practitioner_tab = PractitionerTab::Patients;
    group.bench_function("practitioner_patients", |b| {
        b.iter(|| draw_once(&roster, 100, 32));
    });

    group.finish();
}

/// Benchmark overlay rendering layered over the schedule
fn bench_overlay_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay_render");

    let mut detail = App::new().unwrap();
    detail.screen = Screen::Patient;
    detail.patient_tab = PatientTab::Schedule;
    detail.open_detail(content::therapies()[1].clone());
    group.bench_function("therapy_detail", |b| {
        b.iter(|| draw_once(&detail, 100, 32));
    });

    let mut feedback = App::new().unwrap();
    feedback.screen = Screen::Patient;
    feedback.open_feedback();
    group.bench_function("feedback_capture", |b| {
        b.iter(|| draw_once(&feedback, 100, 32));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_screen_render,
    bench_sub_view_render,
    bench_overlay_render,
);

criterion_main!(benches);
