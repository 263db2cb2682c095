//! Catalog page: loads the viewer session and the species list, and renders
//! one `SpeciesCardComponent` per record.
//!
//! Cards ask for a refresh through `on_refresh` after a successful update or
//! delete; the list is then fetched again and handed back down as props.

use common::model::species::{Species, SpeciesCapabilities};
use common::requests::SessionInfo;
use yew::platform::spawn_local;
use yew::{html, AttrValue, Component, Context, Html};

use crate::api::{self, RequestError};
use crate::components::species::card::SpeciesCardComponent;
use crate::species_grid::SpeciesGrid;
use crate::toast::{notify, Notification};

pub enum Msg {
    SessionLoaded(SessionInfo),
    Refresh,
    SpeciesLoaded(Result<Vec<Species>, RequestError>),
}

pub struct App {
    session: SessionInfo,
    species: Vec<Species>,
    loading: bool,
    /// Message of the last failed load while nothing has been shown yet.
    load_error: Option<String>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: SessionInfo::default(),
            species: Vec::new(),
            loading: true,
            load_error: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionLoaded(session) => {
                self.session = session;
                true
            }
            Msg::Refresh => {
                self.loading = true;
                let link = ctx.link().clone();
                spawn_local(async move {
                    link.send_message(Msg::SpeciesLoaded(api::list_species().await));
                });
                false
            }
            Msg::SpeciesLoaded(Ok(species)) => {
                self.species = species;
                self.loading = false;
                self.load_error = None;
                true
            }
            Msg::SpeciesLoaded(Err(err)) => {
                gloo_console::error!(format!("loading species failed: {}", err));
                self.loading = false;
                if self.species.is_empty() {
                    self.load_error = Some(err.to_string());
                }
                notify(&Notification::error("Could not load species", err.to_string()));
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_session().await {
                    Ok(session) => link.send_message(Msg::SessionLoaded(session)),
                    // anonymous viewers can still browse
                    Err(err) => gloo_console::warn!(format!("no session: {}", err)),
                }
            });
            ctx.link().send_message(Msg::Refresh);
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session_id = self.session.user_id.as_deref();
        let on_refresh = ctx.link().callback(|_| Msg::Refresh);

        let body = if let Some(error) = &self.load_error {
            html! { <p class="error">{ format!("Error: {}", error) }</p> }
        } else if self.species.is_empty() && self.loading {
            html! { <p class="loading">{ "Loading species..." }</p> }
        } else if self.species.is_empty() {
            html! { <p class="empty">{ "No species in the catalog yet." }</p> }
        } else {
            html! {
                <SpeciesGrid>
                    { for self.species.iter().map(|species| html! {
                        <SpeciesCardComponent
                            key={species.id}
                            species={species.clone()}
                            capabilities={SpeciesCapabilities::for_session(species, session_id)}
                            session_id={session_id.map(|id| AttrValue::from(id.to_string()))}
                            on_refresh={on_refresh.clone()}
                        />
                    }) }
                </SpeciesGrid>
            }
        };

        html! {
            <div class="species-catalog">
                <h1 style="text-align:center;">{ "Species Catalog" }</h1>
                { body }
            </div>
        }
    }
}
