use common::requests::SpeciesUpdate;
use common::validation::SpeciesField;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    OpenDetails,
    CloseDetails,
    OpenEdit,
    CancelEdit,
    SetField(SpeciesField, String),
    SetEndangered(bool),
    Submit,
    UpdateSucceeded(SpeciesUpdate),
    UpdateFailed(String),
    OpenDelete,
    CancelDelete,
    ConfirmDelete,
    DeleteSucceeded,
    DeleteFailed(String),
}
