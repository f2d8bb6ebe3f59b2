//! Application root.
//!
//! Owns the list of articles and the pointer to the article being edited,
//! and builds the persistence callbacks the article form calls into.

use common::model::article::{Article, FormValues};
use common::requests::UpdateArticle;
use gloo_console::error;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api::{self, ApiError};
use crate::components::articles::form::{ArticleForm, SaveFuture};
use crate::components::articles::list::ArticleList;
use crate::helpers::show_toast;

pub enum Msg {
    ArticlesLoaded(Vec<Article>),
    ArticleSaved(Article),
    SetCurrentArticleId(Option<i64>),
}

pub struct App {
    articles: Vec<Article>,
    current_article_id: Option<i64>,
    post_article: Callback<FormValues, SaveFuture>,
    update_article: Callback<UpdateArticle, SaveFuture>,
}

impl App {
    fn current_article(&self) -> Option<Article> {
        let current = self.current_article_id?;
        self.articles
            .iter()
            .find(|article| article.article_id == current)
            .cloned()
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let post_article = Callback::from(move |values: FormValues| -> SaveFuture {
            Box::pin(create_article(link.clone(), values))
        });

        let link = ctx.link().clone();
        let update_article = Callback::from(move |request: UpdateArticle| -> SaveFuture {
            Box::pin(save_article(link.clone(), request))
        });

        Self {
            articles: Vec::new(),
            current_article_id: None,
            post_article,
            update_article,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ArticlesLoaded(articles) => {
                self.articles = articles;
                true
            }
            Msg::ArticleSaved(article) => {
                upsert_article(&mut self.articles, article);
                true
            }
            Msg::SetCurrentArticleId(article_id) => {
                if self.current_article_id == article_id {
                    return false;
                }
                self.current_article_id = article_id;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let set_current_article_id = ctx.link().callback(Msg::SetCurrentArticleId);
        let on_edit = ctx
            .link()
            .callback(|article_id: i64| Msg::SetCurrentArticleId(Some(article_id)));

        html! {
            <div class="app">
                <h1>{"Articles"}</h1>
                <ArticleForm
                    post_article={self.post_article.clone()}
                    update_article={self.update_article.clone()}
                    set_current_article_id={set_current_article_id}
                    current_article={self.current_article()}
                />
                <ArticleList
                    articles={self.articles.clone()}
                    current_article_id={self.current_article_id}
                    on_edit={on_edit}
                />
            </div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if !first_render {
            return;
        }

        let link = ctx.link().clone();
        spawn_local(async move {
            match api::fetch_articles().await {
                Ok(articles) => link.send_message(Msg::ArticlesLoaded(articles)),
                Err(err) => {
                    error!("Error loading articles:", err.to_string());
                    show_toast("Could not load articles");
                }
            }
        });
    }
}

async fn create_article(link: Scope<App>, values: FormValues) -> Result<(), ApiError> {
    let article = api::post_article(&values).await?;
    link.send_message(Msg::ArticleSaved(article));
    show_toast("Article created");
    Ok(())
}

async fn save_article(link: Scope<App>, request: UpdateArticle) -> Result<(), ApiError> {
    let article = api::update_article(&request).await?;
    link.send_message(Msg::ArticleSaved(article));
    show_toast("Article updated");
    Ok(())
}

/// Replaces the article with the same id, or appends it when it is new.
fn upsert_article(articles: &mut Vec<Article>, article: Article) {
    match articles
        .iter_mut()
        .find(|existing| existing.article_id == article.article_id)
    {
        Some(existing) => *existing = article,
        None => articles.push(article),
    }
}
