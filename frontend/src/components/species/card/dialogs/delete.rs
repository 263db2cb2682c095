use yew::prelude::*;

use crate::components::species::card::state::DialogState;
use crate::components::species::card::{Msg, SpeciesCardComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn delete_dialog(component: &SpeciesCardComponent, ctx: &Context<SpeciesCardComponent>) -> Html {
    let species = &ctx.props().species;
    let link = ctx.link();
    let open = matches!(component.dialog, DialogState::ConfirmingDelete { .. });
    let deleting = component.dialog.in_flight();

    html! {
        <YwMaterialTopSheet
            open={open}
            title="Delete species"
            on_close={link.callback(|_| Msg::CancelDelete)}
            dismissable={!deleting}
        >
            <p>
                { "Are you sure you want to delete " }
                <strong>{ species.display_name().to_string() }</strong>
                { " (" }<em>{ species.scientific_name.clone() }</em>{ ")? This cannot be undone." }
            </p>
            <div style="display:flex;gap:8px;justify-content:flex-end;">
                <button
                    class="btn"
                    disabled={deleting}
                    onclick={link.callback(|_| Msg::CancelDelete)}
                >
                    { "Cancel" }
                </button>
                <button
                    class="btn btn-danger"
                    style="background:#d32f2f;color:#fff;"
                    disabled={deleting}
                    onclick={link.callback(|_| Msg::ConfirmDelete)}
                >
                    { if deleting { "Deleting..." } else { "Delete" } }
                </button>
            </div>
        </YwMaterialTopSheet>
    }
}
