//! Species card: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and the dialogs.
//!
//! The parent passes the record, the viewer's `SpeciesCapabilities` and an
//! `on_refresh` callback; the card never fetches the record itself.

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

use yew::prelude::*;

pub use messages::Msg;
pub use props::SpeciesCardProps;
pub use state::SpeciesCardComponent;

impl Component for SpeciesCardComponent {
    type Message = Msg;
    type Properties = SpeciesCardProps;

    fn create(ctx: &Context<Self>) -> Self {
        SpeciesCardComponent::new(&ctx.props().species)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().species != old_props.species {
            self.sync_with(&ctx.props().species);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
