//! State container for the article form component.
//!
//! Besides the framework-free `ArticleFormState`, the component keeps a ref to
//! the topic `<select>`: option `selected` attributes stop steering a select
//! once the user has picked an option by hand, so the chosen value is pushed
//! to the element's `value` property after every render instead.

use common::form::ArticleFormState;
use common::model::article::Article;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

pub struct ArticleForm {
    /// Values typed so far and the mode derived from the current article.
    pub form: ArticleFormState,

    /// Reference to the topic `<select>` DOM node.
    pub topic_ref: NodeRef,
}

impl ArticleForm {
    /// Creates the form already synchronized with the article passed at mount.
    pub fn new(current_article: Option<&Article>) -> Self {
        let mut form = ArticleFormState::new();
        form.sync(current_article);
        Self {
            form,
            topic_ref: NodeRef::default(),
        }
    }

    /// Makes the topic selector show the topic held in the form state.
    pub fn sync_topic_select(&self) {
        if let Some(select) = self.topic_ref.cast::<HtmlSelectElement>() {
            let wanted = self.form.topic_option();
            if select.value() != wanted {
                select.set_value(wanted);
            }
        }
    }
}
