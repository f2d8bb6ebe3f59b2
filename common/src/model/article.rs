use serde::{Deserialize, Serialize};

/// An article as stored by the articles API.
///
/// When the parent passes one of these to the article form, the form is in
/// edit mode and submitting it updates the record identified by `article_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub text: String,
    pub topic: String,
}

/// The editable fields of an article, as held by the article form.
///
/// `topic` is one of the [`Topic`](super::topic::Topic) names, or empty while
/// nothing is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub title: String,
    pub text: String,
    pub topic: String,
}

impl FormValues {
    /// True when every field has content once surrounding whitespace is ignored.
    pub fn is_complete(&self) -> bool {
        [&self.title, &self.text, &self.topic]
            .iter()
            .all(|value| !value.trim().is_empty())
    }
}

impl From<&Article> for FormValues {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            text: article.text.clone(),
            topic: article.topic.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str, text: &str, topic: &str) -> FormValues {
        FormValues {
            title: title.to_string(),
            text: text.to_string(),
            topic: topic.to_string(),
        }
    }

    #[test]
    fn complete_requires_all_fields() {
        assert!(values("Title", "Body", "React").is_complete());
        assert!(!values("", "Body", "React").is_complete());
        assert!(!values("Title", "", "React").is_complete());
        assert!(!values("Title", "Body", "").is_complete());
        assert!(!FormValues::default().is_complete());
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(!values("   ", "Body", "React").is_complete());
        assert!(!values("Title", "\n\t", "React").is_complete());
        assert!(values("  padded  ", " body ", "Node").is_complete());
    }

    #[test]
    fn values_copied_from_article() {
        let article = Article {
            article_id: 7,
            title: "Hooks".into(),
            text: "useEffect runs after render".into(),
            topic: "React".into(),
        };
        assert_eq!(
            FormValues::from(&article),
            values("Hooks", "useEffect runs after render", "React")
        );
    }

    #[test]
    fn article_json_shape() {
        let article: Article = serde_json::from_str(
            r#"{"article_id":3,"title":"Streams","text":"Readable and writable","topic":"Node"}"#,
        )
        .unwrap();
        assert_eq!(article.article_id, 3);
        assert_eq!(article.topic, "Node");
    }
}
