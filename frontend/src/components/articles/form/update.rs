//! Update function for the article form.
//!
//! Submitting hands the form values to the parent's create or update callback,
//! awaits it on the local executor and only then resets the form and clears
//! the editing pointer. A failed save is logged to the console and otherwise
//! treated like a successful one.

use common::form::Submission;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ArticleForm;

/// Central update function for the component.
///
/// Returns `true` when the view should re-render.
pub fn update(component: &mut ArticleForm, ctx: &Context<ArticleForm>, msg: Msg) -> bool {
    match msg {
        Msg::FieldChanged(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::Submit => {
            let Some(submission) = component.form.submission() else {
                return false;
            };

            let props = ctx.props();
            let (pending, failure) = match submission {
                Submission::Create(values) => {
                    log!(format!("posting article: {:?}", values));
                    (props.post_article.emit(values), "Error posting article:")
                }
                Submission::Update(request) => {
                    (props.update_article.emit(request), "Error updating article:")
                }
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = pending.await;
                link.send_message(Msg::SubmitSettled { outcome, failure });
            });
            false
        }
        Msg::SubmitSettled { outcome, failure } => {
            let (_clear, failed) = component.form.settle(outcome);
            if let Some(err) = failed {
                error!(failure, err.to_string());
            }
            ctx.props().set_current_article_id.emit(None);
            true
        }
        Msg::Cancel => {
            let _clear = component.form.cancel();
            ctx.props().set_current_article_id.emit(None);
            true
        }
    }
}
