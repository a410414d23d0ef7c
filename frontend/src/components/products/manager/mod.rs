//! Product manager: a form that creates or edits products and the list of
//! products below it, with a supplier dropdown fed from the backend.
//!
//! Same layout as the other components: `state` holds the data, `update`
//! applies messages, `view` renders, `helpers` wraps the spawned requests and
//! the user feedback.

use common::manager::Collection;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use helpers::{fetch_products, fetch_suppliers};
pub use messages::Msg;
pub use props::ProductManagerProps;
pub use state::ProductManagerComponent;

impl Component for ProductManagerComponent {
    type Message = Msg;
    type Properties = ProductManagerProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductManagerComponent::new(ctx.props())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let products = self.state.begin_load(Collection::Products);
            let suppliers = self.state.begin_load(Collection::Suppliers);
            fetch_products(&self.api, ctx.link(), products);
            fetch_suppliers(&self.api, ctx.link(), suppliers);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.cancel_pending();
        if let Some(controller) = &self.abort {
            controller.abort();
        }
    }
}
