use serde::{Deserialize, Serialize};

/// Number of characters of the description shown on the catalog card.
pub const DESCRIPTION_PREVIEW_LIMIT: usize = 150;

/// A row of the `species` table.
///
/// The frontend receives it as JSON from `GET /api/species` and only reads it;
/// every change goes back to the service as a `SpeciesUpdate` keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    /// Primary key.
    pub id: i64,
    /// Binomial name. Never empty in a stored row.
    pub scientific_name: String,
    pub common_name: Option<String>,
    pub description: Option<String>,
    pub kingdom: Option<String>,
    pub total_population: Option<i64>,
    /// Absolute URL of a picture of the species.
    pub image: Option<String>,
    #[serde(default)]
    pub endangered: bool,
    /// Identifier of the user that created the row.
    pub author: String,
}

impl Species {
    /// Name used in headings: the common name when there is one, otherwise
    /// the scientific name.
    pub fn display_name(&self) -> &str {
        self.common_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.scientific_name)
    }

    /// Description cut down for the card.
    ///
    /// Descriptions longer than `limit` characters keep their first `limit`
    /// characters, trimmed, followed by `"..."`. Shorter ones are returned
    /// untouched, and a missing description becomes an empty string.
    pub fn description_preview(&self, limit: usize) -> String {
        let description = self.description.as_deref().unwrap_or_default();
        if description.chars().count() > limit {
            let head: String = description.chars().take(limit).collect();
            format!("{}...", head.trim())
        } else {
            description.to_string()
        }
    }

    /// `"Yes"` or `"No"`, as shown in the detail dialog.
    pub fn endangered_label(&self) -> &'static str {
        if self.endangered { "Yes" } else { "No" }
    }
}

/// What the current viewer may do with one record.
///
/// Computed by the caller and handed to the card, which only hides or shows
/// controls. The table service enforces the same rule on its side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpeciesCapabilities {
    pub can_edit: bool,
    pub can_delete: bool,
}

impl SpeciesCapabilities {
    /// Owners may edit and delete their own records; everyone else, including
    /// an anonymous viewer, may only look.
    pub fn for_session(species: &Species, session_id: Option<&str>) -> Self {
        let owner = session_id.is_some_and(|id| id == species.author);
        Self {
            can_edit: owner,
            can_delete: owner,
        }
    }

    pub fn any(&self) -> bool {
        self.can_edit || self.can_delete
    }
}
