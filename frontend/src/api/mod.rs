//! HTTP access to the articles API.
//!
//! Every call goes through `gloo_net` and speaks JSON. Non-success statuses
//! are turned into [`ApiError::Status`] so callers only ever match on one
//! error type.

mod error;

use common::model::article::{Article, FormValues};
use common::requests::UpdateArticle;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::config::api_base;

pub use error::ApiError;

fn articles_url() -> String {
    format!("{}/articles", api_base())
}

fn article_url(article_id: i64) -> String {
    format!("{}/articles/{}", api_base(), article_id)
}

pub async fn fetch_articles() -> Result<Vec<Article>, ApiError> {
    let response = Request::get(&articles_url()).send().await?;
    read_json(response).await
}

pub async fn post_article(values: &FormValues) -> Result<Article, ApiError> {
    let response = Request::post(&articles_url())
        .json(values)?
        .send()
        .await?;
    read_json(response).await
}

pub async fn update_article(request: &UpdateArticle) -> Result<Article, ApiError> {
    let response = Request::put(&article_url(request.article_id))
        .json(&request.article)?
        .send()
        .await?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(response.status(), &body));
    }
    Ok(response.json::<T>().await?)
}
