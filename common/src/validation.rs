//! Schema for the species edit form.
//!
//! The frontend keeps the raw input strings in a [`SpeciesForm`] and runs
//! [`SpeciesForm::validate`] after every change, showing [`FieldErrors`] inline.
//! A valid form becomes a [`SpeciesUpdate`]; the table service re-checks the
//! same rules with [`SpeciesUpdate::check`] before writing.

use std::fmt;

use thiserror::Error;
use url::Url;

use crate::model::species::Species;
use crate::requests::SpeciesUpdate;

/// The editable fields, in the order the form renders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpeciesField {
    ScientificName,
    CommonName,
    Kingdom,
    TotalPopulation,
    Endangered,
    Image,
    Description,
}

impl SpeciesField {
    pub const ALL: [SpeciesField; 7] = [
        SpeciesField::ScientificName,
        SpeciesField::CommonName,
        SpeciesField::Kingdom,
        SpeciesField::TotalPopulation,
        SpeciesField::Endangered,
        SpeciesField::Image,
        SpeciesField::Description,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpeciesField::ScientificName => "Scientific name",
            SpeciesField::CommonName => "Common name",
            SpeciesField::Kingdom => "Kingdom",
            SpeciesField::TotalPopulation => "Total population",
            SpeciesField::Endangered => "Endangered",
            SpeciesField::Image => "Image URL",
            SpeciesField::Description => "Description",
        }
    }

    /// Stable identifier used for DOM ids and JSON keys.
    pub fn key(&self) -> &'static str {
        match self {
            SpeciesField::ScientificName => "scientific_name",
            SpeciesField::CommonName => "common_name",
            SpeciesField::Kingdom => "kingdom",
            SpeciesField::TotalPopulation => "total_population",
            SpeciesField::Endangered => "endangered",
            SpeciesField::Image => "image",
            SpeciesField::Description => "description",
        }
    }
}

impl fmt::Display for SpeciesField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required")]
    Required,
    #[error("Must be a valid URL")]
    InvalidUrl,
    #[error("Must be a whole number")]
    NotANumber,
    #[error("Cannot be negative")]
    Negative,
}

/// Per-field validation failures, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<(SpeciesField, ValidationError)>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: SpeciesField) -> Option<&ValidationError> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, error)| error)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(SpeciesField, ValidationError)> {
        self.errors.iter()
    }

    fn push(&mut self, field: SpeciesField, error: ValidationError) {
        if self.get(field).is_none() {
            self.errors.push((field, error));
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .errors
            .iter()
            .map(|(field, error)| format!("{}: {}", field, error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw state of the edit form, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpeciesForm {
    pub scientific_name: String,
    pub common_name: String,
    pub kingdom: String,
    pub total_population: String,
    pub endangered: bool,
    pub image: String,
    pub description: String,
}

impl SpeciesForm {
    pub fn from_species(species: &Species) -> Self {
        Self {
            scientific_name: species.scientific_name.clone(),
            common_name: species.common_name.clone().unwrap_or_default(),
            kingdom: species.kingdom.clone().unwrap_or_default(),
            total_population: species
                .total_population
                .map(|n| n.to_string())
                .unwrap_or_default(),
            endangered: species.endangered,
            image: species.image.clone().unwrap_or_default(),
            description: species.description.clone().unwrap_or_default(),
        }
    }

    /// Form values after a successful save of `update`.
    pub fn from_update(update: &SpeciesUpdate) -> Self {
        Self {
            scientific_name: update.scientific_name.clone(),
            common_name: update.common_name.clone().unwrap_or_default(),
            kingdom: update.kingdom.clone().unwrap_or_default(),
            total_population: update
                .total_population
                .map(|n| n.to_string())
                .unwrap_or_default(),
            endangered: update.endangered,
            image: update.image.clone().unwrap_or_default(),
            description: update.description.clone().unwrap_or_default(),
        }
    }

    /// Text value of a field; the checkbox has none.
    pub fn text(&self, field: SpeciesField) -> Option<&str> {
        match field {
            SpeciesField::ScientificName => Some(&self.scientific_name),
            SpeciesField::CommonName => Some(&self.common_name),
            SpeciesField::Kingdom => Some(&self.kingdom),
            SpeciesField::TotalPopulation => Some(&self.total_population),
            SpeciesField::Endangered => None,
            SpeciesField::Image => Some(&self.image),
            SpeciesField::Description => Some(&self.description),
        }
    }

    /// Stores a text value. Setting `Endangered` through here is ignored.
    pub fn set_text(&mut self, field: SpeciesField, value: String) {
        match field {
            SpeciesField::ScientificName => self.scientific_name = value,
            SpeciesField::CommonName => self.common_name = value,
            SpeciesField::Kingdom => self.kingdom = value,
            SpeciesField::TotalPopulation => self.total_population = value,
            SpeciesField::Endangered => {}
            SpeciesField::Image => self.image = value,
            SpeciesField::Description => self.description = value,
        }
    }

    pub fn validate(&self) -> Result<SpeciesUpdate, FieldErrors> {
        let mut errors = FieldErrors::default();

        let scientific_name = self.scientific_name.trim();
        if scientific_name.is_empty() {
            errors.push(SpeciesField::ScientificName, ValidationError::Required);
        }

        let total_population = match optional(&self.total_population) {
            None => None,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n < 0 => {
                    errors.push(SpeciesField::TotalPopulation, ValidationError::Negative);
                    None
                }
                Ok(n) => Some(n),
                Err(_) => {
                    errors.push(SpeciesField::TotalPopulation, ValidationError::NotANumber);
                    None
                }
            },
        };

        let image = optional(&self.image);
        if let Some(raw) = image.as_deref() {
            if let Err(error) = check_url(raw) {
                errors.push(SpeciesField::Image, error);
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SpeciesUpdate {
            scientific_name: scientific_name.to_string(),
            common_name: optional(&self.common_name),
            kingdom: optional(&self.kingdom),
            total_population,
            endangered: self.endangered,
            image,
            description: optional(&self.description),
        })
    }
}

impl SpeciesUpdate {
    /// Trims every text field and turns blank optional ones into `None`, the
    /// same shape [`SpeciesForm::validate`] produces.
    pub fn normalized(self) -> Self {
        let text = |value: Option<String>| value.as_deref().and_then(optional);
        Self {
            scientific_name: self.scientific_name.trim().to_string(),
            common_name: text(self.common_name),
            kingdom: text(self.kingdom),
            total_population: self.total_population,
            endangered: self.endangered,
            image: text(self.image),
            description: text(self.description),
        }
    }

    /// Server-side counterpart of [`SpeciesForm::validate`] for an already
    /// decoded body.
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        if self.scientific_name.trim().is_empty() {
            errors.push(SpeciesField::ScientificName, ValidationError::Required);
        }
        if self.total_population.is_some_and(|n| n < 0) {
            errors.push(SpeciesField::TotalPopulation, ValidationError::Negative);
        }
        if let Some(raw) = self.image.as_deref().filter(|s| !s.trim().is_empty()) {
            if let Err(error) = check_url(raw.trim()) {
                errors.push(SpeciesField::Image, error);
            }
        }
        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_url(raw: &str) -> Result<(), ValidationError> {
    Url::parse(raw)
        .map(|_| ())
        .map_err(|_| ValidationError::InvalidUrl)
}
