//! Framework-free state of the article form.
//!
//! The Yew component in the frontend owns one `ArticleFormState` and forwards
//! prop changes and DOM events to it. Everything the form decides (which mode
//! it is in, whether it may be submitted, what a submission sends) is decided
//! here so it can be tested without a browser.

use crate::model::article::{Article, FormValues};
use crate::model::topic::Topic;
use crate::requests::UpdateArticle;

/// Maximum number of characters accepted in the title field.
pub const TITLE_MAX_LENGTH: usize = 50;

/// Maximum number of characters accepted in the text field.
pub const TEXT_MAX_LENGTH: usize = 200;

/// Identifies one of the form's fields. The DOM element of each field carries
/// the matching id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Title,
    Text,
    Topic,
}

impl FieldId {
    pub fn from_element_id(id: &str) -> Option<Self> {
        match id {
            "title" => Some(FieldId::Title),
            "text" => Some(FieldId::Text),
            "topic" => Some(FieldId::Topic),
            _ => None,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            FieldId::Title => "title",
            FieldId::Text => "text",
            FieldId::Topic => "topic",
        }
    }

    pub fn max_length(self) -> Option<usize> {
        match self {
            FieldId::Title => Some(TITLE_MAX_LENGTH),
            FieldId::Text => Some(TEXT_MAX_LENGTH),
            FieldId::Topic => None,
        }
    }
}

/// What a submit should do with the persistence callbacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(FormValues),
    Update(UpdateArticle),
}

/// Tells the owner of the form to clear the parent's editing pointer.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearEditing;

/// Local state of the article form.
///
/// `editing` mirrors the id of the current article last synced from the
/// parent; `None` means create mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFormState {
    values: FormValues,
    editing: Option<i64>,
}

impl ArticleFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn is_edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn heading(&self) -> &'static str {
        if self.is_edit_mode() {
            "Edit Article"
        } else {
            "Create Article"
        }
    }

    /// Aligns the form with the parent's current article: copies its fields
    /// when one is given, otherwise goes back to empty values.
    pub fn sync(&mut self, current: Option<&Article>) {
        match current {
            Some(article) => {
                self.values = FormValues::from(article);
                self.editing = Some(article.article_id);
            }
            None => {
                self.values = FormValues::default();
                self.editing = None;
            }
        }
    }

    /// Stores `value` into `field`, cut down to the field's character limit.
    pub fn set_field(&mut self, field: FieldId, value: String) {
        let value = match field.max_length() {
            Some(max) if value.chars().count() > max => value.chars().take(max).collect(),
            _ => value,
        };

        match field {
            FieldId::Title => self.values.title = value,
            FieldId::Text => self.values.text = value,
            FieldId::Topic => self.values.topic = value,
        }
    }

    pub fn is_submit_disabled(&self) -> bool {
        !self.values.is_complete()
    }

    /// The call a submit should make right now, or `None` while the submit
    /// control is disabled.
    pub fn submission(&self) -> Option<Submission> {
        if self.is_submit_disabled() {
            return None;
        }

        let values = self.values.clone();
        Some(match self.editing {
            Some(article_id) => Submission::Update(UpdateArticle {
                article_id,
                article: values,
            }),
            None => Submission::Create(values),
        })
    }

    /// Value the topic selector must show. A topic outside [`Topic::ALL`]
    /// has no option of its own and shows as the empty choice.
    pub fn topic_option(&self) -> &str {
        match Topic::from_name(&self.values.topic) {
            Some(topic) => topic.as_str(),
            None => "",
        }
    }

    /// Clears the entered values. The mode only changes through [`sync`](Self::sync).
    pub fn reset(&mut self) {
        self.values = FormValues::default();
    }

    /// Abandons whatever was typed, dirty or not. No submission is made.
    pub fn cancel(&mut self) -> ClearEditing {
        self.reset();
        ClearEditing
    }

    /// Finishes a submit once its create or update call has completed.
    ///
    /// The form resets and the editing pointer is cleared whatever the
    /// outcome; a failure is handed back only so it can be logged.
    pub fn settle<E>(&mut self, outcome: Result<(), E>) -> (ClearEditing, Option<E>) {
        self.reset();
        (ClearEditing, outcome.err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            article_id: 42,
            title: "Promises".into(),
            text: "then, catch, finally".into(),
            topic: "JavaScript".into(),
        }
    }

    fn filled() -> ArticleFormState {
        let mut state = ArticleFormState::new();
        state.set_field(FieldId::Title, "Ownership".into());
        state.set_field(FieldId::Text, "Every value has one owner".into());
        state.set_field(FieldId::Topic, "Node".into());
        state
    }

    #[test]
    fn starts_empty_in_create_mode() {
        let state = ArticleFormState::new();
        assert_eq!(state.values(), &FormValues::default());
        assert!(!state.is_edit_mode());
        assert_eq!(state.heading(), "Create Article");
        assert!(state.is_submit_disabled());
    }

    #[test]
    fn sync_with_article_copies_fields() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));

        assert_eq!(state.values().title, "Promises");
        assert_eq!(state.values().text, "then, catch, finally");
        assert_eq!(state.values().topic, "JavaScript");
        assert_eq!(state.heading(), "Edit Article");
    }

    #[test]
    fn sync_without_article_resets() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));
        state.set_field(FieldId::Title, "Edited".into());

        state.sync(None);

        assert_eq!(state.values(), &FormValues::default());
        assert_eq!(state.heading(), "Create Article");
    }

    #[test]
    fn field_ids_round_trip_through_element_ids() {
        for field in [FieldId::Title, FieldId::Text, FieldId::Topic] {
            assert_eq!(FieldId::from_element_id(field.element_id()), Some(field));
        }
        assert_eq!(FieldId::from_element_id("submitArticle"), None);
    }

    #[test]
    fn set_field_truncates_to_limit() {
        let mut state = ArticleFormState::new();
        state.set_field(FieldId::Title, "x".repeat(TITLE_MAX_LENGTH + 10));
        state.set_field(FieldId::Text, "é".repeat(TEXT_MAX_LENGTH + 1));

        assert_eq!(state.values().title.chars().count(), TITLE_MAX_LENGTH);
        assert_eq!(state.values().text.chars().count(), TEXT_MAX_LENGTH);
    }

    #[test]
    fn submit_disabled_until_all_fields_have_content() {
        let mut state = ArticleFormState::new();
        state.set_field(FieldId::Title, "Title".into());
        assert!(state.is_submit_disabled());
        state.set_field(FieldId::Text, "   ".into());
        assert!(state.is_submit_disabled());
        state.set_field(FieldId::Text, "Body".into());
        assert!(state.is_submit_disabled());
        state.set_field(FieldId::Topic, "React".into());
        assert!(!state.is_submit_disabled());
        assert!(filled().submission().is_some());
    }

    #[test]
    fn disabled_form_has_no_submission() {
        let mut state = filled();
        state.set_field(FieldId::Topic, String::new());
        assert_eq!(state.submission(), None);
    }

    #[test]
    fn create_mode_submits_current_values() {
        let state = filled();
        assert_eq!(
            state.submission(),
            Some(Submission::Create(state.values().clone()))
        );
    }

    #[test]
    fn edit_mode_submits_id_with_values() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));
        state.set_field(FieldId::Topic, "React".into());

        let Some(Submission::Update(request)) = state.submission() else {
            panic!("expected an update submission");
        };
        assert_eq!(request.article_id, 42);
        assert_eq!(request.article.title, "Promises");
        assert_eq!(request.article.topic, "React");
    }

    #[test]
    fn topic_option_follows_known_topics() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));
        assert_eq!(state.topic_option(), "JavaScript");

        state.set_field(FieldId::Topic, "Rust".into());
        assert_eq!(state.topic_option(), "");

        state.reset();
        assert_eq!(state.topic_option(), "");
    }

    #[test]
    fn topic_option_after_cancel_then_edit() {
        let mut state = ArticleFormState::new();
        state.set_field(FieldId::Topic, "Node".into());
        let _ = state.cancel();
        assert_eq!(state.topic_option(), "");

        let mut node = article();
        node.topic = "Node".into();
        state.sync(Some(&node));
        assert_eq!(state.topic_option(), "Node");
        assert_eq!(state.values().topic, "Node");
    }

    #[test]
    fn cancel_resets_without_submitting() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));
        state.set_field(FieldId::Title, "Half edited".into());

        assert_eq!(state.cancel(), ClearEditing);
        assert_eq!(state.values(), &FormValues::default());
        assert_eq!(state.submission(), None);
    }

    #[test]
    fn values_kept_until_submit_settles() {
        let mut state = filled();
        let submitted = state.submission();
        assert!(submitted.is_some());
        assert_eq!(state.values().title, "Ownership");

        let (clear, failure) = state.settle::<String>(Ok(()));
        assert_eq!(clear, ClearEditing);
        assert_eq!(failure, None);
        assert_eq!(state.values(), &FormValues::default());
    }

    #[test]
    fn failed_save_still_resets_and_clears_pointer() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));
        assert!(matches!(state.submission(), Some(Submission::Update(_))));

        let (clear, failure) = state.settle(Err("server responded 500"));

        assert_eq!(clear, ClearEditing);
        assert_eq!(failure, Some("server responded 500"));
        assert_eq!(state.values(), &FormValues::default());
        assert_eq!(state.submission(), None);
    }

    #[test]
    fn reset_clears_values_and_keeps_mode() {
        let mut state = ArticleFormState::new();
        state.sync(Some(&article()));

        state.reset();

        assert_eq!(state.values(), &FormValues::default());
        assert!(state.is_edit_mode());
        assert_eq!(state.submission(), None);
    }
}
