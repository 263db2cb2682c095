//! Properties of the `SpeciesCard` component.

use common::model::species::{Species, SpeciesCapabilities};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SpeciesCardProps {
    /// Record to display, as last fetched by the parent.
    pub species: Species,

    /// What the viewer may do with `species`. The card never compares
    /// identities itself; it only shows the controls these allow.
    #[prop_or_default]
    pub capabilities: SpeciesCapabilities,

    /// Viewer identity forwarded on update and delete requests.
    #[prop_or_default]
    pub session_id: Option<AttrValue>,

    /// Asked to re-fetch the catalog after a successful update or delete.
    pub on_refresh: Callback<()>,
}
