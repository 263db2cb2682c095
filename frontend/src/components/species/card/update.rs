//! Update function for the species card.
//!
//! Runs the pure transition from `state.rs` and then carries out the effects
//! it asks for: one request per `Update`/`Delete`, whose outcome comes back as
//! a `*Succeeded`/`*Failed` message, a toast per `Notify`, and the parent's
//! `on_refresh` callback for `Refresh`.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::toast::notify;

use super::messages::Msg;
use super::state::{Effect, SpeciesCardComponent};

pub fn update(
    component: &mut SpeciesCardComponent,
    ctx: &Context<SpeciesCardComponent>,
    msg: Msg,
) -> bool {
    let props = ctx.props();
    let before = component.dialog;
    let effects = component.transition(msg, &props.species, props.capabilities);

    for effect in effects {
        run(effect, ctx);
    }

    if before != component.dialog {
        gloo_console::debug!(format!(
            "species {}: {:?} -> {:?}",
            props.species.id, before, component.dialog
        ));
    }
    true
}

fn run(effect: Effect, ctx: &Context<SpeciesCardComponent>) {
    let session_id = ctx
        .props()
        .session_id
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_default();

    match effect {
        Effect::Update { id, update } => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::update_species(id, &session_id, &update).await {
                    Ok(_) => link.send_message(Msg::UpdateSucceeded(update)),
                    Err(err) => {
                        gloo_console::error!(format!("update of species {} failed: {}", id, err));
                        link.send_message(Msg::UpdateFailed(err.to_string()));
                    }
                }
            });
        }
        Effect::Delete { id } => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_species(id, &session_id).await {
                    Ok(()) => link.send_message(Msg::DeleteSucceeded),
                    Err(err) => {
                        gloo_console::error!(format!("delete of species {} failed: {}", id, err));
                        link.send_message(Msg::DeleteFailed(err.to_string()));
                    }
                }
            });
        }
        Effect::Notify(notification) => notify(&notification),
        Effect::Refresh => ctx.props().on_refresh.emit(()),
    }
}
