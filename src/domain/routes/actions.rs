use crate::domain::errors::RouteError;

use super::template::UrlTemplate;

/// Page wiring for one submission action.
///
/// Endpoint placeholders are ids of page elements holding identifiers
/// (`<input type="hidden" id="course_id">`). Redirect placeholders are
/// fields of the 201 response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionConfig {
    pub form_name: &'static str,
    pub trigger_id: &'static str,
    pub endpoint: &'static str,
    pub redirect: &'static str,
}

impl ActionConfig {
    pub fn endpoint_template(&self) -> Result<UrlTemplate, RouteError> {
        UrlTemplate::parse(self.endpoint)
    }

    pub fn redirect_template(&self) -> Result<UrlTemplate, RouteError> {
        UrlTemplate::parse(self.redirect)
    }
}

crate::form_actions! {
    CourseCreate => {
        form: "newCourseForm",
        trigger: "addCourseButton",
        endpoint: "/courses/new",
        redirect: "/courses/{id}",
    },
    CourseEdit => {
        form: "editCourseForm",
        trigger: "editCourseButton",
        endpoint: "/courses/{course_id}/edit",
        redirect: "/courses/{id}",
    },
    FileCreate => {
        form: "newFileForm",
        trigger: "addFileButton",
        endpoint: "/courses/{course_id}/files/new",
        redirect: "/courses/{course}/files/{id}",
    },
    FileEdit => {
        form: "editFileForm",
        trigger: "editFileButton",
        endpoint: "/courses/{course_id}/files/{file_id}/edit",
        redirect: "/courses/{course}/files/{id}",
    },
    /// Instructors have no page of their own; land back on the course.
    InstructorCreate => {
        form: "newInstructorForm",
        trigger: "addInstructorButton",
        endpoint: "/courses/{course_id}/instructors/new",
        redirect: "/courses/{course}",
    },
    LinkCreate => {
        form: "newLinkForm",
        trigger: "addLinkButton",
        endpoint: "/courses/{course_id}/links/new",
        redirect: "/courses/{course}",
    },
    NoteCreate => {
        form: "newNoteForm",
        trigger: "addNoteButton",
        endpoint: "/courses/{course_id}/notes/new",
        redirect: "/courses/{course}/notes/{id}",
    },
    NoteEdit => {
        form: "editNoteForm",
        trigger: "editNoteButton",
        endpoint: "/courses/{course_id}/notes/{note_id}/edit",
        redirect: "/courses/{course}/notes/{id}",
    },
    ReminderCreate => {
        form: "newReminderForm",
        trigger: "addReminderButton",
        endpoint: "/reminders/new",
        redirect: "/reminders/{id}",
    },
    ReminderEdit => {
        form: "editReminderForm",
        trigger: "editReminderButton",
        endpoint: "/reminders/{reminder_id}/edit",
        redirect: "/reminders/{id}",
    },
}
