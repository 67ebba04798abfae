use assistor_forms::application::{FormSubmitter, FormTransport, SubmissionView};
use assistor_forms::domain::errors::{AppError, AppResult, RouteError};
use assistor_forms::domain::forms::FieldErrorSet;
use assistor_forms::domain::routes::ResourceAction;
use assistor_forms::domain::submission::{HttpReply, SubmissionOutcome};
use futures::executor::block_on;
use futures::future::{self, FutureExt, LocalBoxFuture};
use futures::task::noop_waker_ref;
use std::future::Future;
use std::task::{Context, Poll};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

const IDLE: &str = "Save";
const BUSY: &str = "<spinner>";

/// In-memory page: page ids, one shared trigger label, and a record of
/// everything the submitter did to it.
struct FakePage {
    page_ids: HashMap<&'static str, &'static str>,
    trigger: Rc<RefCell<String>>,
    busy_entries: Cell<usize>,
    rendered: RefCell<Vec<(String, FieldErrorSet)>>,
    navigations: RefCell<Vec<String>>,
}

impl FakePage {
    fn new(page_ids: &[(&'static str, &'static str)]) -> Self {
        Self {
            page_ids: page_ids.iter().copied().collect(),
            trigger: Rc::new(RefCell::new(IDLE.to_string())),
            busy_entries: Cell::new(0),
            rendered: RefCell::new(Vec::new()),
            navigations: RefCell::new(Vec::new()),
        }
    }
}

impl SubmissionView for FakePage {
    type Payload = String;

    fn page_value(&self, element_id: &str) -> Option<String> {
        self.page_ids.get(element_id).map(|value| value.to_string())
    }

    fn capture_form(&self, form_name: &str) -> AppResult<String> {
        Ok(format!("payload:{form_name}"))
    }

    fn enter_busy(&self, _trigger_id: &str) -> bool {
        self.busy_entries.set(self.busy_entries.get() + 1);
        *self.trigger.borrow_mut() = BUSY.to_string();
        true
    }

    fn leave_busy(&self, _trigger_id: &str) {
        *self.trigger.borrow_mut() = IDLE.to_string();
    }

    fn render_errors(&self, form_name: &str, errors: &FieldErrorSet) -> AppResult<()> {
        self.rendered.borrow_mut().push((form_name.to_string(), errors.clone()));
        Ok(())
    }

    fn navigate(&self, url: &str) -> AppResult<()> {
        self.navigations.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Answers every POST with one scripted result and notes what the trigger
/// showed while the request was in flight.
struct ScriptedTransport {
    reply: Result<HttpReply, AppError>,
    trigger: Rc<RefCell<String>>,
    requests: RefCell<Vec<(String, String)>>,
    trigger_during_request: RefCell<Option<String>>,
}

impl FormTransport for ScriptedTransport {
    type Payload = String;

    fn post<'a>(&'a self, path: &'a str, payload: String) -> LocalBoxFuture<'a, AppResult<HttpReply>> {
        async move {
            self.requests.borrow_mut().push((path.to_string(), payload));
            *self.trigger_during_request.borrow_mut() = Some(self.trigger.borrow().clone());
            self.reply.clone()
        }
        .boxed_local()
    }
}

fn submitter(
    page_ids: &[(&'static str, &'static str)],
    reply: Result<HttpReply, AppError>,
) -> FormSubmitter<FakePage, ScriptedTransport> {
    let page = FakePage::new(page_ids);
    let transport = ScriptedTransport {
        reply,
        trigger: Rc::clone(&page.trigger),
        requests: RefCell::new(Vec::new()),
        trigger_during_request: RefCell::new(None),
    };
    FormSubmitter::new(page, transport)
}

#[test]
fn created_course_navigates_to_its_page() {
    let submitter = submitter(&[], Ok(HttpReply::new(201, r#"{"id": 42}"#)));
    let outcome = block_on(submitter.submit(ResourceAction::CourseCreate)).unwrap();

    assert!(matches!(outcome, SubmissionOutcome::Created(_)));
    assert_eq!(*submitter.view().navigations.borrow(), ["/courses/42"]);
    assert!(submitter.view().rendered.borrow().is_empty());
    assert_eq!(
        *submitter.transport().requests.borrow(),
        [("/courses/new".to_string(), "payload:newCourseForm".to_string())]
    );
}

#[test]
fn trigger_is_busy_during_request_and_restored_after() {
    let submitter = submitter(&[], Ok(HttpReply::new(201, r#"{"id": 1}"#)));
    block_on(submitter.submit(ResourceAction::ReminderCreate)).unwrap();

    assert_eq!(submitter.transport().trigger_during_request.borrow().as_deref(), Some(BUSY));
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
    assert_eq!(*submitter.view().navigations.borrow(), ["/reminders/1"]);
}

#[test]
fn file_edit_uses_both_page_ids_and_owning_course() {
    let submitter = submitter(
        &[("course_id", "3"), ("file_id", "9")],
        Ok(HttpReply::new(201, r#"{"id": 9, "course": 3}"#)),
    );
    block_on(submitter.submit(ResourceAction::FileEdit)).unwrap();

    assert_eq!(submitter.transport().requests.borrow()[0].0, "/courses/3/files/9/edit");
    assert_eq!(*submitter.view().navigations.borrow(), ["/courses/3/files/9"]);
}

#[test]
fn instructor_lands_back_on_course() {
    let submitter = submitter(
        &[("course_id", "5")],
        Ok(HttpReply::new(201, r#"{"id": 17, "course": "5"}"#)),
    );
    block_on(submitter.submit(ResourceAction::InstructorCreate)).unwrap();
    assert_eq!(*submitter.view().navigations.borrow(), ["/courses/5"]);
}

#[test]
fn validation_failure_renders_exact_set_without_navigating() {
    let body = r#"{"title": ["This field is required."], "grade": ["Enter a whole number.", "Too large."]}"#;
    let submitter = submitter(&[("course_id", "7")], Ok(HttpReply::new(400, body)));
    let outcome = block_on(submitter.submit(ResourceAction::CourseEdit)).unwrap();

    let expected = FieldErrorSet::from_json(body).unwrap();
    assert_eq!(outcome, SubmissionOutcome::ValidationFailed(expected.clone()));
    assert_eq!(*submitter.view().rendered.borrow(), [("editCourseForm".to_string(), expected)]);
    assert!(submitter.view().navigations.borrow().is_empty());
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
}

#[test]
fn network_failure_still_restores_trigger() {
    let submitter = submitter(
        &[("course_id", "2")],
        Err(AppError::Network("connection reset".into())),
    );
    let result = block_on(submitter.submit(ResourceAction::LinkCreate));

    assert_eq!(result, Err(AppError::Network("connection reset".into())));
    assert_eq!(submitter.view().busy_entries.get(), 1);
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
    assert!(submitter.view().navigations.borrow().is_empty());
}

#[test]
fn unhandled_status_neither_navigates_nor_renders() {
    let submitter = submitter(&[("course_id", "2")], Ok(HttpReply::new(403, "Forbidden")));
    let outcome = block_on(submitter.submit(ResourceAction::NoteCreate)).unwrap();

    assert_eq!(outcome, SubmissionOutcome::Unhandled { status: 403 });
    assert!(submitter.view().navigations.borrow().is_empty());
    assert!(submitter.view().rendered.borrow().is_empty());
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
}

#[test]
fn missing_page_id_fails_before_going_busy() {
    let submitter = submitter(&[("course_id", "2")], Ok(HttpReply::new(201, r#"{"id": 1}"#)));
    let result = block_on(submitter.submit(ResourceAction::NoteEdit));

    assert_eq!(result, Err(AppError::Route(RouteError::MissingValue("note_id".into()))));
    assert_eq!(submitter.view().busy_entries.get(), 0);
    assert!(submitter.transport().requests.borrow().is_empty());
}

#[test]
fn blank_page_id_counts_as_missing() {
    let submitter = submitter(&[("course_id", "  ")], Ok(HttpReply::new(201, "{}")));
    let result = block_on(submitter.submit(ResourceAction::FileCreate));
    assert_eq!(result, Err(AppError::Route(RouteError::MissingValue("course_id".into()))));
}

#[test]
fn malformed_created_body_is_a_decode_error() {
    let submitter = submitter(&[], Ok(HttpReply::new(201, "<html>")));
    let result = block_on(submitter.submit(ResourceAction::CourseCreate));

    assert!(matches!(result, Err(AppError::Decode(_))));
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
    assert!(submitter.view().navigations.borrow().is_empty());
}

#[test]
fn created_body_without_redirect_field_is_a_route_error() {
    let submitter = submitter(&[("course_id", "4")], Ok(HttpReply::new(201, r#"{"id": 8}"#)));
    let result = block_on(submitter.submit(ResourceAction::NoteCreate));

    assert_eq!(result, Err(AppError::Route(RouteError::MissingValue("course".into()))));
    assert!(submitter.view().navigations.borrow().is_empty());
}

#[test]
fn repeated_submissions_do_not_leak_busy_state() {
    let submitter = submitter(&[], Ok(HttpReply::new(400, r#"{"name": ["Required."]}"#)));
    for _ in 0..3 {
        block_on(submitter.submit(ResourceAction::ReminderCreate)).unwrap();
    }
    assert_eq!(submitter.view().busy_entries.get(), 3);
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
    assert_eq!(submitter.view().rendered.borrow().len(), 3);
}

/// Never answers, like a request the user navigates away from.
struct StalledTransport;

impl FormTransport for StalledTransport {
    type Payload = String;

    fn post<'a>(&'a self, _path: &'a str, _payload: String) -> LocalBoxFuture<'a, AppResult<HttpReply>> {
        future::pending().boxed_local()
    }
}

#[test]
fn dropping_in_flight_submission_restores_trigger() {
    let submitter = FormSubmitter::new(FakePage::new(&[]), StalledTransport);
    let mut cx = Context::from_waker(noop_waker_ref());

    let mut submission = Box::pin(submitter.submit(ResourceAction::CourseCreate));
    assert!(matches!(submission.as_mut().poll(&mut cx), Poll::Pending));
    assert_eq!(*submitter.view().trigger.borrow(), BUSY);

    drop(submission);
    assert_eq!(*submitter.view().trigger.borrow(), IDLE);
    assert!(submitter.view().navigations.borrow().is_empty());
}
