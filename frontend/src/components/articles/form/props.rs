//! Properties of the `ArticleForm` component.
//!
//! The form owns no persistence of its own: creating and updating articles,
//! as well as the pointer to the article being edited, belong to the parent
//! and are handed in here as callbacks.

use std::future::Future;
use std::pin::Pin;

use common::model::article::{Article, FormValues};
use common::requests::UpdateArticle;
use yew::prelude::*;

use crate::api::ApiError;

/// Pending result of a create or update call. The form awaits it before
/// resetting itself.
pub type SaveFuture = Pin<Box<dyn Future<Output = Result<(), ApiError>>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct ArticleFormProps {
    /// Persists a new article. Called on submit in create mode.
    pub post_article: Callback<FormValues, SaveFuture>,

    /// Persists changes to an existing article. Called on submit in edit mode.
    pub update_article: Callback<UpdateArticle, SaveFuture>,

    /// Moves the parent's editing pointer. The form only ever clears it.
    pub set_current_article_id: Callback<Option<i64>>,

    /// The article being edited. `None` puts the form in create mode.
    ///
    /// Whenever this changes the form discards what was typed and reloads its
    /// fields from the new value.
    #[prop_or_default]
    pub current_article: Option<Article>,
}
