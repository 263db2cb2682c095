//! Edit sheet: one input per `SpeciesField`, validated on every keystroke.
//!
//! Errors are rendered under their field. The submit button stays disabled
//! while any error is present or while the update request is in flight.

use common::validation::SpeciesField;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::species::card::state::DialogState;
use crate::components::species::card::{Msg, SpeciesCardComponent};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

pub fn edit_dialog(component: &SpeciesCardComponent, ctx: &Context<SpeciesCardComponent>) -> Html {
    let link = ctx.link();
    let open = matches!(component.dialog, DialogState::Editing { .. });
    let submitting = component.dialog.in_flight();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <YwMaterialTopSheet
            open={open}
            title="Edit species"
            on_close={link.callback(|_| Msg::CancelEdit)}
            dismissable={!submitting}
        >
            <form class="species-form" onsubmit={onsubmit}>
                <fieldset disabled={submitting} style="border:none;padding:0;margin:0;">
                    { for SpeciesField::ALL.iter().map(|field| field_row(component, link, *field)) }
                </fieldset>
                <div style="display:flex;gap:8px;justify-content:flex-end;margin-top:16px;">
                    <button
                        type="button"
                        class="btn"
                        disabled={submitting}
                        onclick={link.callback(|_| Msg::CancelEdit)}
                    >
                        { "Cancel" }
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled={submitting || !component.errors.is_empty()}
                    >
                        { if submitting { "Saving..." } else { "Save changes" } }
                    </button>
                </div>
            </form>
        </YwMaterialTopSheet>
    }
}

fn field_row(
    component: &SpeciesCardComponent,
    link: &Scope<SpeciesCardComponent>,
    field: SpeciesField,
) -> Html {
    let input_id = format!("species-{}", field.key());
    let error = component.errors.get(field).map(|e| e.to_string());
    let label = if field == SpeciesField::ScientificName {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    let input = match field {
        SpeciesField::Endangered => html! {
            <input
                id={input_id.clone()}
                type="checkbox"
                checked={component.form.endangered}
                onchange={link.callback(|e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::SetEndangered(input.checked())
                })}
            />
        },
        SpeciesField::Description => html! {
            <textarea
                id={input_id.clone()}
                rows="5"
                value={component.form.description.clone()}
                aria-invalid={error.is_some().to_string()}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    Msg::SetField(field, input.value())
                })}
                style="width:100%;"
            />
        },
        _ => {
            // always type="text"; SpeciesForm does the checking
            let mode = match field {
                SpeciesField::TotalPopulation => "numeric",
                SpeciesField::Image => "url",
                _ => "text",
            };
            html! {
                <input
                    id={input_id.clone()}
                    type="text"
                    inputmode={mode}
                    value={component.form.text(field).unwrap_or_default().to_string()}
                    aria-invalid={error.is_some().to_string()}
                    oninput={link.callback(move |e: InputEvent| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        Msg::SetField(field, input.value())
                    })}
                    style="width:100%;"
                />
            }
        }
    };

    html! {
        <div class="form-row" style="display:flex;flex-direction:column;gap:4px;margin-bottom:12px;">
            <label for={input_id}>{ label }</label>
            { input }
            if let Some(message) = error {
                <span class="field-error" role="alert" style="color:#d32f2f;font-size:0.85rem;">
                    { message }
                </span>
            }
        </div>
    }
}
