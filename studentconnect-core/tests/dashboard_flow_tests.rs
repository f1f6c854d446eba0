#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for a full dashboard page lifecycle: intent hand-off
//! across a reload, view switching, the event form stepper and the board.

use studentconnect_core::error::ValidationError;
use studentconnect_core::services::{
    CategoryFilter, EventBoard, FormStepSequence, LinkOutcome, MultiStepForm, SearchScope,
    SubmitControl, SubmitOutcome, ViewController, persist_pending_navigation,
    take_pending_navigation,
};
use studentconnect_core::traits::{InMemoryIntentStore, IntentStore};
use studentconnect_core::types::{
    DashboardLayout, DashboardRole, EventRow, ExternalLink, FieldMark, FormField,
    PendingNavigation, ViewId, views,
};

// ===== Helpers =====

fn load_page(role: DashboardRole, store: &mut dyn IntentStore) -> ViewController {
    let pending = take_pending_navigation(store).expect("intent store readable");
    ViewController::initialize(role.layout(), pending).expect("layout resolves")
}

fn create_event_form() -> MultiStepForm {
    MultiStepForm::new(
        FormStepSequence::new(["basics", "schedule", "details", "media"]).unwrap(),
        vec![
            FormField::required("title", 0),
            FormField::required("category", 0),
            FormField::required("description", 0),
            FormField::required("date", 1),
            FormField::required("time", 1),
            FormField::required("location", 1),
            FormField::required("event_link", 2),
            FormField::optional("contact_email", 2),
            FormField::optional("prizes", 2),
            FormField::optional("flyer", 3),
        ],
        SubmitControl::new("Submit Event", "Submitting..."),
    )
    .unwrap()
}

fn event(id: &str, title: &str, category: &str, status: &str, location: &str) -> EventRow {
    EventRow {
        id: id.into(),
        title: title.into(),
        category: category.into(),
        date: "2025-11-01".into(),
        status: status.into(),
        organizer: Some("Campus Tech Club".into()),
        location: Some(location.into()),
    }
}

// ===== Navigation =====

#[test]
fn profile_intent_survives_exactly_one_reload() {
    let mut store = InMemoryIntentStore::new();
    persist_pending_navigation(&mut store, PendingNavigation::Profile).unwrap();

    let first = load_page(DashboardRole::Organizer, &mut store);
    assert!(first.is_visible(&ViewId::new(views::PROFILE)));
    assert_eq!(first.active_link().map(|link| link.key), Some("profile"));

    let second = load_page(DashboardRole::Organizer, &mut store);
    assert!(second.is_visible(&ViewId::new(views::OVERVIEW)));
}

#[test]
fn any_sequence_of_clicks_keeps_one_view_visible() {
    let mut store = InMemoryIntentStore::new();
    let mut controller = load_page(DashboardRole::Student, &mut store);

    for index in [0, 1, 3, 2, 0, 1, 7, 1] {
        let _ = controller.follow_link(index);
        assert_eq!(controller.visible_count(), 1);
    }
    assert!(controller.is_visible(&ViewId::new(views::PROFILE)));
}

#[test]
fn logout_link_is_left_to_the_caller() {
    let mut controller = ViewController::initialize(DashboardLayout::student(), None).unwrap();
    assert_eq!(
        controller.follow_link(3),
        LinkOutcome::External(ExternalLink::Logout)
    );
    assert!(controller.is_visible(&ViewId::new(views::DISCOVER)));
}

// ===== Event form =====

#[test]
fn stepping_through_the_event_form() {
    let mut form = create_event_form();
    let controls = form.steps().controls();
    assert!(!controls.previous_visible && controls.next_visible && !controls.submit_visible);

    while form.advance_step() {}
    assert_eq!(form.steps().current_step(), "media");
    let controls = form.steps().controls();
    assert!(controls.previous_visible && !controls.next_visible && controls.submit_visible);

    // Already on the last step
    assert!(!form.advance_step());
    assert_eq!(form.steps().current_index(), 3);
}

#[test]
fn submission_reports_fields_hidden_on_earlier_steps() {
    let mut form = create_event_form();
    for (name, value) in [
        ("title", "Rust Meetup"),
        ("category", "techevent"),
        ("description", "Monthly meetup"),
        ("date", "2099-01-01"),
        ("time", "18:00"),
    ] {
        assert!(form.set_value(name, value));
    }
    while form.advance_step() {}

    let err = form.submit().unwrap_err();
    assert_eq!(
        err,
        ValidationError::RequiredFieldsMissing(vec!["location".into(), "event_link".into()])
    );
    assert_eq!(form.field("location").unwrap().mark, FieldMark::Invalid);
    assert_eq!(form.field("title").unwrap().mark, FieldMark::Valid);
    assert!(!form.submit_control().is_disabled());

    form.set_value("location", "Auditorium");
    form.set_value("event_link", "https://example.org/meetup");
    let SubmitOutcome::Accepted(data) = form.submit().unwrap() else {
        panic!("expected accepted submission");
    };
    assert_eq!(data.get("location"), Some("Auditorium"));
    assert_eq!(form.submit_control().label(), "Submitting...");
    assert_eq!(form.submit().unwrap(), SubmitOutcome::Ignored);
}

// ===== Event board =====

#[test]
fn student_grid_search_and_filter() {
    let mut board = EventBoard::new(vec![
        event("1", "AI Workshop", "workshop", "Approved", "Online"),
        event("2", "Code Sprint", "hackathon", "Pending", "Bangalore"),
        event("3", "Cloud Summit", "techevent", "Approved", "Delhi"),
    ]);

    board.search("bangalore", SearchScope::TitleOrganizerLocation);
    let shown: Vec<&str> = board.displayed_rows().map(|(_, r)| r.id.as_str()).collect();
    assert_eq!(shown, ["2"]);

    board.filter_category(&CategoryFilter::from_value("techevent"));
    let shown: Vec<&str> = board.displayed_rows().map(|(_, r)| r.id.as_str()).collect();
    assert_eq!(shown, ["3"]);

    board.filter_category(&CategoryFilter::from_value("all"));
    assert_eq!(board.displayed_count(), 3);

    let analytics = board.analytics();
    assert_eq!((analytics.total, analytics.pending, analytics.approved), (3, 1, 2));
}
