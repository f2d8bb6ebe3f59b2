use serde::{Deserialize, Serialize};

use crate::model::article::FormValues;

/// Argument of the article form's update callback: the id of the article
/// being edited together with the values entered in the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateArticle {
    pub article_id: i64,
    pub article: FormValues,
}
