//! State of the species card and its pure transition function.
//!
//! The card is always in exactly one [`DialogState`]. A message moves it to the
//! next state and yields the [`Effect`]s the component must run (network calls,
//! toasts, the refresh signal). Nothing in here touches the DOM or the
//! network, so every transition can be checked in plain unit tests.

use common::model::species::{Species, SpeciesCapabilities};
use common::requests::SpeciesUpdate;
use common::validation::{FieldErrors, SpeciesForm};

use super::messages::Msg;
use crate::toast::Notification;

/// Which dialog is open. The flags mark a request in flight; while set, the
/// submit control is disabled and the dialog cannot be dismissed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogState {
    #[default]
    Closed,
    Viewing,
    Editing { submitting: bool },
    ConfirmingDelete { deleting: bool },
}

impl DialogState {
    pub fn in_flight(&self) -> bool {
        matches!(
            self,
            DialogState::Editing { submitting: true } | DialogState::ConfirmingDelete { deleting: true }
        )
    }
}

/// Side effect requested by a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Update { id: i64, update: SpeciesUpdate },
    Delete { id: i64 },
    Notify(Notification),
    Refresh,
}

pub struct SpeciesCardComponent {
    pub dialog: DialogState,

    /// Edit form contents, seeded from the record.
    pub form: SpeciesForm,

    /// Result of validating `form` after its last change.
    pub errors: FieldErrors,
}

impl SpeciesCardComponent {
    pub fn new(species: &Species) -> Self {
        Self {
            dialog: DialogState::Closed,
            form: SpeciesForm::from_species(species),
            errors: FieldErrors::default(),
        }
    }

    /// Re-seeds the form from a freshly fetched record unless the user is
    /// in the middle of editing.
    pub fn sync_with(&mut self, species: &Species) {
        if !matches!(self.dialog, DialogState::Editing { .. }) {
            self.form = SpeciesForm::from_species(species);
            self.errors = FieldErrors::default();
        }
    }

    pub fn transition(
        &mut self,
        msg: Msg,
        species: &Species,
        capabilities: SpeciesCapabilities,
    ) -> Vec<Effect> {
        match (self.dialog, msg) {
            (DialogState::Closed, Msg::OpenDetails) => {
                self.dialog = DialogState::Viewing;
                vec![]
            }
            (DialogState::Viewing, Msg::CloseDetails) => {
                self.dialog = DialogState::Closed;
                vec![]
            }

            // ── edit ────────────────────────────────────────────────────
            (DialogState::Viewing, Msg::OpenEdit) if capabilities.can_edit => {
                self.form = SpeciesForm::from_species(species);
                self.errors = FieldErrors::default();
                self.dialog = DialogState::Editing { submitting: false };
                vec![]
            }
            (DialogState::Editing { submitting: false }, Msg::CancelEdit) => {
                self.form = SpeciesForm::from_species(species);
                self.errors = FieldErrors::default();
                self.dialog = DialogState::Viewing;
                vec![]
            }
            (DialogState::Editing { submitting: false }, Msg::SetField(field, value)) => {
                self.form.set_text(field, value);
                self.revalidate();
                vec![]
            }
            (DialogState::Editing { submitting: false }, Msg::SetEndangered(endangered)) => {
                self.form.endangered = endangered;
                self.revalidate();
                vec![]
            }
            (DialogState::Editing { submitting: false }, Msg::Submit) => match self.form.validate() {
                Ok(update) => {
                    self.errors = FieldErrors::default();
                    self.dialog = DialogState::Editing { submitting: true };
                    vec![Effect::Update {
                        id: species.id,
                        update,
                    }]
                }
                Err(errors) => {
                    self.errors = errors;
                    vec![]
                }
            },
            (DialogState::Editing { submitting: true }, Msg::UpdateSucceeded(update)) => {
                self.form = SpeciesForm::from_update(&update);
                self.dialog = DialogState::Viewing;
                vec![
                    Effect::Notify(Notification::success(
                        "Species updated",
                        format!("{} has been saved.", update.scientific_name),
                    )),
                    Effect::Refresh,
                ]
            }
            (DialogState::Editing { submitting: true }, Msg::UpdateFailed(message)) => {
                self.dialog = DialogState::Editing { submitting: false };
                vec![Effect::Notify(Notification::error(
                    "Could not update species",
                    message,
                ))]
            }

            // ── delete ──────────────────────────────────────────────────
            (DialogState::Viewing, Msg::OpenDelete) if capabilities.can_delete => {
                self.dialog = DialogState::ConfirmingDelete { deleting: false };
                vec![]
            }
            (DialogState::ConfirmingDelete { deleting: false }, Msg::CancelDelete) => {
                self.dialog = DialogState::Viewing;
                vec![]
            }
            (DialogState::ConfirmingDelete { deleting: false }, Msg::ConfirmDelete) => {
                self.dialog = DialogState::ConfirmingDelete { deleting: true };
                vec![Effect::Delete { id: species.id }]
            }
            (DialogState::ConfirmingDelete { deleting: true }, Msg::DeleteSucceeded) => {
                self.dialog = DialogState::Closed;
                vec![
                    Effect::Notify(Notification::success(
                        "Species deleted",
                        format!("{} has been removed.", species.scientific_name),
                    )),
                    Effect::Refresh,
                ]
            }
            (DialogState::ConfirmingDelete { deleting: true }, Msg::DeleteFailed(message)) => {
                self.dialog = DialogState::ConfirmingDelete { deleting: false };
                vec![Effect::Notify(Notification::error(
                    "Could not delete species",
                    message,
                ))]
            }

            // Anything else is stale or not allowed from the current state.
            _ => vec![],
        }
    }

    fn revalidate(&mut self) {
        self.errors = self.form.validate().err().unwrap_or_default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::NotificationVariant;
    use common::validation::{SpeciesField, ValidationError};

    const OWNER: SpeciesCapabilities = SpeciesCapabilities {
        can_edit: true,
        can_delete: true,
    };

    fn species() -> Species {
        Species {
            id: 31,
            scientific_name: "Bradypus variegatus".to_string(),
            common_name: Some("Brown-throated sloth".to_string()),
            description: Some("Three-toed sloth.".to_string()),
            kingdom: Some("Animalia".to_string()),
            total_population: None,
            image: None,
            endangered: false,
            author: "owner".to_string(),
        }
    }

    fn editing() -> SpeciesCardComponent {
        let sp = species();
        let mut card = SpeciesCardComponent::new(&sp);
        card.transition(Msg::OpenDetails, &sp, OWNER);
        card.transition(Msg::OpenEdit, &sp, OWNER);
        assert_eq!(card.dialog, DialogState::Editing { submitting: false });
        card
    }

    fn confirming_delete() -> SpeciesCardComponent {
        let sp = species();
        let mut card = SpeciesCardComponent::new(&sp);
        card.transition(Msg::OpenDetails, &sp, OWNER);
        card.transition(Msg::OpenDelete, &sp, OWNER);
        card
    }

    #[test]
    fn viewers_without_capabilities_cannot_open_edit_or_delete() {
        let sp = species();
        let mut card = SpeciesCardComponent::new(&sp);
        card.transition(Msg::OpenDetails, &sp, SpeciesCapabilities::default());
        card.transition(Msg::OpenEdit, &sp, SpeciesCapabilities::default());
        assert_eq!(card.dialog, DialogState::Viewing);
        card.transition(Msg::OpenDelete, &sp, SpeciesCapabilities::default());
        assert_eq!(card.dialog, DialogState::Viewing);
    }

    #[test]
    fn empty_scientific_name_blocks_submit() {
        let sp = species();
        let mut card = editing();
        card.transition(Msg::SetField(SpeciesField::ScientificName, String::new()), &sp, OWNER);
        assert_eq!(
            card.errors.get(SpeciesField::ScientificName),
            Some(&ValidationError::Required)
        );

        let effects = card.transition(Msg::Submit, &sp, OWNER);
        assert!(effects.is_empty());
        assert_eq!(card.dialog, DialogState::Editing { submitting: false });
    }

    #[test]
    fn malformed_image_url_blocks_submit() {
        let sp = species();
        let mut card = editing();
        card.transition(Msg::SetField(SpeciesField::Image, "sloth.png".to_string()), &sp, OWNER);
        assert!(card.transition(Msg::Submit, &sp, OWNER).is_empty());
        assert_eq!(card.errors.get(SpeciesField::Image), Some(&ValidationError::InvalidUrl));
    }

    #[test]
    fn valid_submit_issues_one_update_and_locks_the_form() {
        let sp = species();
        let mut card = editing();
        card.transition(Msg::SetEndangered(true), &sp, OWNER);

        let effects = card.transition(Msg::Submit, &sp, OWNER);
        assert_eq!(effects.len(), 1);
        match &effects[0] {
            Effect::Update { id, update } => {
                assert_eq!(*id, 31);
                assert!(update.endangered);
                assert_eq!(update.scientific_name, "Bradypus variegatus");
            }
            other => panic!("unexpected effect {:?}", other),
        }
        assert!(card.dialog.in_flight());

        assert!(card.transition(Msg::Submit, &sp, OWNER).is_empty());
        card.transition(Msg::SetField(SpeciesField::Kingdom, "Plantae".to_string()), &sp, OWNER);
        assert_eq!(card.form.kingdom, "Animalia");
        card.transition(Msg::CancelEdit, &sp, OWNER);
        assert!(card.dialog.in_flight());
    }

    #[test]
    fn successful_update_closes_editor_and_refreshes() {
        let sp = species();
        let mut card = editing();
        card.transition(
            Msg::SetField(SpeciesField::CommonName, "Sloth".to_string()),
            &sp,
            OWNER,
        );
        let update = match card.transition(Msg::Submit, &sp, OWNER).remove(0) {
            Effect::Update { update, .. } => update,
            other => panic!("unexpected effect {:?}", other),
        };

        let effects = card.transition(Msg::UpdateSucceeded(update), &sp, OWNER);
        assert_eq!(card.dialog, DialogState::Viewing);
        assert_eq!(card.form.common_name, "Sloth");
        assert!(matches!(
            &effects[0],
            Effect::Notify(n) if n.variant == NotificationVariant::Default
        ));
        assert_eq!(effects[1], Effect::Refresh);
    }

    #[test]
    fn failed_update_keeps_editor_open_with_entered_values() {
        let sp = species();
        let mut card = editing();
        card.transition(
            Msg::SetField(SpeciesField::Description, "Slow.".to_string()),
            &sp,
            OWNER,
        );
        card.transition(Msg::Submit, &sp, OWNER);

        let effects = card.transition(Msg::UpdateFailed("Database error: locked".to_string()), &sp, OWNER);
        assert_eq!(card.dialog, DialogState::Editing { submitting: false });
        assert_eq!(card.form.description, "Slow.");
        assert_eq!(
            effects,
            vec![Effect::Notify(Notification::error(
                "Could not update species",
                "Database error: locked"
            ))]
        );
    }

    #[test]
    fn cancel_edit_restores_record_values() {
        let sp = species();
        let mut card = editing();
        card.transition(Msg::SetField(SpeciesField::ScientificName, "x".to_string()), &sp, OWNER);
        card.transition(Msg::CancelEdit, &sp, OWNER);
        assert_eq!(card.dialog, DialogState::Viewing);
        assert_eq!(card.form.scientific_name, "Bradypus variegatus");
    }

    #[test]
    fn confirming_delete_issues_exactly_one_delete() {
        let sp = species();
        let mut card = confirming_delete();

        let first = card.transition(Msg::ConfirmDelete, &sp, OWNER);
        let second = card.transition(Msg::ConfirmDelete, &sp, OWNER);
        assert_eq!(first, vec![Effect::Delete { id: 31 }]);
        assert!(second.is_empty());

        let effects = card.transition(Msg::DeleteSucceeded, &sp, OWNER);
        assert_eq!(card.dialog, DialogState::Closed);
        assert_eq!(effects.last(), Some(&Effect::Refresh));
    }

    #[test]
    fn cancelling_delete_issues_nothing() {
        let sp = species();
        let mut card = confirming_delete();
        let effects = card.transition(Msg::CancelDelete, &sp, OWNER);
        assert!(effects.is_empty());
        assert_eq!(card.dialog, DialogState::Viewing);
    }

    #[test]
    fn failed_delete_keeps_confirmation_open() {
        let sp = species();
        let mut card = confirming_delete();
        card.transition(Msg::ConfirmDelete, &sp, OWNER);
        let effects = card.transition(Msg::DeleteFailed("Species 31 not found".to_string()), &sp, OWNER);
        assert_eq!(card.dialog, DialogState::ConfirmingDelete { deleting: false });
        assert!(matches!(
            &effects[..],
            [Effect::Notify(n)] if n.description.as_deref() == Some("Species 31 not found")
                && n.variant == NotificationVariant::Destructive
        ));
    }

    #[test]
    fn sync_keeps_unsaved_edits() {
        let sp = species();
        let mut card = editing();
        card.transition(Msg::SetField(SpeciesField::Kingdom, "Fungi".to_string()), &sp, OWNER);
        let refreshed = Species {
            kingdom: Some("Plantae".to_string()),
            ..sp.clone()
        };
        card.sync_with(&refreshed);
        assert_eq!(card.form.kingdom, "Fungi");

        card.transition(Msg::CancelEdit, &refreshed, OWNER);
        card.sync_with(&refreshed);
        assert_eq!(card.form.kingdom, "Plantae");
    }
}
