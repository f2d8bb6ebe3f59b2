//! View rendering for the article form.
//!
//! All three fields share one change handler that reads the element id and
//! value of the event target and maps the id to a [`FieldId`].

use common::form::{FieldId, TEXT_MAX_LENGTH, TITLE_MAX_LENGTH};
use common::model::topic::Topic;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ArticleForm;

pub fn view(component: &ArticleForm, ctx: &Context<ArticleForm>) -> Html {
    let link = ctx.link();
    let values = component.form.values();

    html! {
        <form id="form" onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        })}>
            <h2>{ component.form.heading() }</h2>
            <input
                id={FieldId::Title.element_id()}
                maxlength={TITLE_MAX_LENGTH.to_string()}
                placeholder="Enter title"
                value={values.title.clone()}
                oninput={link.batch_callback(|e: InputEvent| field_change(&e))}
            />
            <textarea
                id={FieldId::Text.element_id()}
                maxlength={TEXT_MAX_LENGTH.to_string()}
                placeholder="Enter text"
                value={values.text.clone()}
                oninput={link.batch_callback(|e: InputEvent| field_change(&e))}
            />
            { build_topic_select(component, link) }
            <div class="button-group">
                <button
                    id="submitArticle"
                    type="submit"
                    disabled={component.form.is_submit_disabled()}
                >
                    {"Submit"}
                </button>
                <button type="button" onclick={link.callback(|_| Msg::Cancel)}>
                    {"Cancel edit"}
                </button>
            </div>
        </form>
    }
}

/// Builds the topic selector. The `selected` attributes only set the initial
/// choice; `ArticleForm::sync_topic_select` keeps it right afterwards.
fn build_topic_select(component: &ArticleForm, link: &Scope<ArticleForm>) -> Html {
    let selected = component.form.topic_option();
    let options = Topic::ALL
        .iter()
        .map(|topic| {
            let name = topic.as_str();
            html! { <option value={name} selected={selected == name}>{ name }</option> }
        })
        .collect::<Html>();

    html! {
        <select
            id={FieldId::Topic.element_id()}
            ref={component.topic_ref.clone()}
            onchange={link.batch_callback(|e: Event| field_change(&e))}
        >
            <option value="" selected={selected.is_empty()}>{"-- Select topic --"}</option>
            { options }
        </select>
    }
}

/// Turns a change on one of the form's controls into a `FieldChanged`
/// message. Events from elements without a known field id yield nothing.
fn field_change(e: &Event) -> Option<Msg> {
    let target = e.target()?;
    let (id, value) = if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        (input.id(), input.value())
    } else if let Some(textarea) = target.dyn_ref::<HtmlTextAreaElement>() {
        (textarea.id(), textarea.value())
    } else if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        (select.id(), select.value())
    } else {
        return None;
    };

    FieldId::from_element_id(&id).map(|field| Msg::FieldChanged(field, value))
}
