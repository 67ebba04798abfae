/// Declare the submission actions and their page wiring in one table.
///
/// Usage:
/// `form_actions! {
///     /// docs
///     CourseCreate => {
///         form: "newCourseForm",
///         trigger: "addCourseButton",
///         endpoint: "/courses/new",
///         redirect: "/courses/{id}",
///     },
/// }`
///
/// Generates the `ResourceAction` enum (kebab-case names via strum) and
/// `ResourceAction::config`.
#[macro_export]
macro_rules! form_actions {
    ( $(
        $(#[$meta:meta])*
        $variant:ident => {
            form: $form:literal,
            trigger: $trigger:literal,
            endpoint: $endpoint:literal,
            redirect: $redirect:literal $(,)?
        }
    ),+ $(,)? ) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            ::strum::Display, ::strum::EnumIter, ::strum::EnumString, ::strum::AsRefStr,
        )]
        #[strum(serialize_all = "kebab-case")]
        pub enum ResourceAction {
            $( $(#[$meta])* $variant, )+
        }

        impl ResourceAction {
            pub fn config(self) -> $crate::domain::routes::ActionConfig {
                match self {
                    $(
                        ResourceAction::$variant => $crate::domain::routes::ActionConfig {
                            form_name: $form,
                            trigger_id: $trigger,
                            endpoint: $endpoint,
                            redirect: $redirect,
                        },
                    )+
                }
            }
        }
    };
}
