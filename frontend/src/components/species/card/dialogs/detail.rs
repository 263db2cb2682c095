use common::model::species::{Species, SpeciesCapabilities};
use yew::prelude::*;

use crate::components::species::card::helpers::{format_population, or_unknown};
use crate::components::species::card::state::DialogState;
use crate::components::species::card::{Msg, SpeciesCardComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

/// Full record, plus Edit/Delete when the capabilities allow them.
pub fn detail_dialog(component: &SpeciesCardComponent, ctx: &Context<SpeciesCardComponent>) -> Html {
    let props = ctx.props();
    let link = ctx.link();

    html! {
        <YwMaterialTopSheet
            open={component.dialog == DialogState::Viewing}
            title={AttrValue::from(props.species.scientific_name.clone())}
            on_close={link.callback(|_| Msg::CloseDetails)}
        >
            { detail_body(
                &props.species,
                props.capabilities,
                link.callback(|_| Msg::OpenEdit),
                link.callback(|_| Msg::OpenDelete),
            ) }
        </YwMaterialTopSheet>
    }
}

fn detail_body(
    species: &Species,
    capabilities: SpeciesCapabilities,
    on_edit: Callback<MouseEvent>,
    on_delete: Callback<MouseEvent>,
) -> Html {
    html! {
        <>
            if let Some(image) = &species.image {
                <img
                    src={image.clone()}
                    alt={species.display_name().to_string()}
                    style="width:100%;max-height:320px;object-fit:cover;border-radius:4px;margin-bottom:16px;"
                />
            }
            if let Some(common_name) = &species.common_name {
                <h3 class="species-common">{ common_name.clone() }</h3>
            }
            <p class="species-description" style="white-space:pre-wrap;">
                { species.description.clone().unwrap_or_default() }
            </p>
            <dl class="species-facts">
                <dt>{ "Total population" }</dt>
                <dd>{ format_population(species.total_population) }</dd>
                <dt>{ "Kingdom" }</dt>
                <dd>{ or_unknown(species.kingdom.as_deref()) }</dd>
                <dt>{ "Endangered" }</dt>
                <dd>{ species.endangered_label() }</dd>
            </dl>
            if capabilities.any() {
                <div class="species-actions" style="display:flex;gap:8px;justify-content:flex-end;">
                    if capabilities.can_edit {
                        <button class="btn" onclick={on_edit}>{ "Edit" }</button>
                    }
                    if capabilities.can_delete {
                        <button
                            class="btn btn-danger"
                            style="background:#d32f2f;color:#fff;"
                            onclick={on_delete}
                        >
                            { "Delete" }
                        </button>
                    }
                </div>
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use yew::ServerRenderer;

    use super::*;

    #[derive(Properties, PartialEq)]
    struct BodyProps {
        species: Species,
        session_id: Option<String>,
    }

    #[function_component]
    fn Body(props: &BodyProps) -> Html {
        let capabilities = SpeciesCapabilities::for_session(&props.species, props.session_id.as_deref());
        detail_body(&props.species, capabilities, Callback::noop(), Callback::noop())
    }

    fn toucan(description: &str) -> Species {
        Species {
            id: 5,
            scientific_name: "Ramphastos sulfuratus".to_string(),
            common_name: Some("Keel-billed toucan".to_string()),
            description: Some(description.to_string()),
            kingdom: Some("Animalia".to_string()),
            total_population: Some(1_500_000),
            image: None,
            endangered: false,
            author: "owner".to_string(),
        }
    }

    async fn render(species: Species, session_id: Option<&str>) -> String {
        let session_id = session_id.map(str::to_string);
        ServerRenderer::<Body>::with_props(move || BodyProps { species, session_id })
            .hydratable(false)
            .render()
            .await
    }

    #[tokio::test]
    async fn owner_sees_edit_and_delete() {
        let html = render(toucan("Lives in the canopy."), Some("owner")).await;
        assert!(html.contains("Edit</button>"));
        assert!(html.contains("Delete</button>"));
        assert!(html.contains("1,500,000"));
        assert!(html.contains("No</dd>"));
    }

    #[tokio::test]
    async fn others_see_no_actions() {
        let html = render(toucan("Lives in the canopy."), Some("visitor")).await;
        assert!(!html.contains("Edit</button>"));
        assert!(!html.contains("Delete</button>"));

        let html = render(toucan("Lives in the canopy."), None).await;
        assert!(!html.contains("species-actions"));
    }

    #[tokio::test]
    async fn short_description_is_shown_whole() {
        let description = &"Bright bill, loud call. ".repeat(7)[..150];
        let html = render(toucan(description), None).await;
        assert!(html.contains(description));
        assert!(!html.contains("..."));
    }
}
