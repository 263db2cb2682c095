//! View rendering for the species card.
//!
//! The card itself is always rendered; the three sheets are rendered next to
//! it and only show up when `DialogState` selects them.

use common::model::species::DESCRIPTION_PREVIEW_LIMIT;
use yew::prelude::*;

use super::dialogs::{delete::delete_dialog, detail::detail_dialog, edit::edit_dialog};
use super::messages::Msg;
use super::state::SpeciesCardComponent;

pub fn view(component: &SpeciesCardComponent, ctx: &Context<SpeciesCardComponent>) -> Html {
    html! {
        <>
            { build_card(ctx) }
            { detail_dialog(component, ctx) }
            { edit_dialog(component, ctx) }
            { delete_dialog(component, ctx) }
        </>
    }
}

/// Thumbnail, names, truncated description and the details trigger.
fn build_card(ctx: &Context<SpeciesCardComponent>) -> Html {
    let species = &ctx.props().species;
    let link = ctx.link();

    html! {
        <article class="species-card" style="display:flex;flex-direction:column;border:1px solid #e0e0e0;border-radius:8px;overflow:hidden;background:#fff;">
            if let Some(image) = &species.image {
                <div class="species-img-wrap">
                    <img
                        src={image.clone()}
                        alt={species.display_name().to_string()}
                        class="species-img"
                        loading="lazy"
                        style="width:100%;height:180px;object-fit:cover;"
                    />
                </div>
            }
            <div class="species-card-body" style="padding:16px;display:flex;flex-direction:column;gap:8px;flex:1;">
                <h3 class="species-sci" style="margin:0;font-style:italic;">{ species.scientific_name.clone() }</h3>
                if let Some(common_name) = &species.common_name {
                    <p class="species-common" style="margin:0;color:#555;">{ common_name.clone() }</p>
                }
                <p class="species-summary" style="margin:0;flex:1;">
                    { species.description_preview(DESCRIPTION_PREVIEW_LIMIT) }
                </p>
                <button class="btn" onclick={link.callback(|_| Msg::OpenDetails)}>
                    { "View details" }
                </button>
            </div>
        </article>
    }
}
