//! Article form: creates a new article or edits the one the parent points at.
//!
//! The `Component` implementation only routes lifecycle hooks; behavior lives
//! in `update::update` and markup in `view::view`. Prop changes to the current
//! article resynchronize the fields in `changed`, and `rendered` pushes the
//! topic back into the `<select>` element.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::{ArticleFormProps, SaveFuture};
pub use state::ArticleForm;

impl Component for ArticleForm {
    type Message = Msg;
    type Properties = ArticleFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ArticleForm::new(ctx.props().current_article.as_ref())
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().current_article != old_props.current_article {
            self.form.sync(ctx.props().current_article.as_ref());
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        self.sync_topic_select();
    }
}
