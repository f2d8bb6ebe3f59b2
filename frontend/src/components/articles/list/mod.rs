//! List of saved articles shown next to the form.
//!
//! Pressing "Edit" on an entry hands its id to the parent, which points the
//! article form at it. The entry already being edited has its button disabled.

use common::model::article::Article;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ArticleListProps {
    pub articles: Vec<Article>,
    #[prop_or_default]
    pub current_article_id: Option<i64>,
    /// Emitted with the id of the article whose "Edit" button was pressed.
    pub on_edit: Callback<i64>,
}

/// Read-only list of articles with an "Edit" button per entry.
pub struct ArticleList;

impl Component for ArticleList {
    type Message = ();
    type Properties = ArticleListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ArticleList
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        if props.articles.is_empty() {
            return html! {
                <div class="articles">
                    <h2>{"Articles"}</h2>
                    <p>{"No articles yet"}</p>
                </div>
            };
        }

        html! {
            <div class="articles">
                <h2>{"Articles"}</h2>
                { for props.articles.iter().map(|article| {
                    let article_id = article.article_id;
                    let on_edit = props.on_edit.clone();
                    html! {
                        <div class="article" key={article_id}>
                            <h3>{ article.title.clone() }</h3>
                            <p>{ article.text.clone() }</p>
                            <p class="topic">{ format!("Topic: {}", article.topic) }</p>
                            <button
                                disabled={props.current_article_id == Some(article_id)}
                                onclick={Callback::from(move |_: MouseEvent| on_edit.emit(article_id))}
                            >
                                {"Edit"}
                            </button>
                        </div>
                    }
                }) }
            </div>
        }
    }
}
