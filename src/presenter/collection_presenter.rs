use crate::entity::{CollectionField, CollectionInputs};
use crate::interactor::collection_interactor::{normalize_royalties, validate_input};

/// Form state for the "Set up Collection" mint step
#[derive(Debug, Clone, Default)]
pub struct CollectionFormPresenter {
    inputs: CollectionInputs,
    errors: CollectionInputs,
    existing_collections: Vec<String>,
}

impl CollectionFormPresenter {
    pub fn new(existing_collections: Vec<String>) -> Self {
        Self {
            existing_collections,
            ..Default::default()
        }
    }

    /// Store a new value and refresh that field's error text
    pub fn update_input(&mut self, field: CollectionField, value: &str) {
        self.inputs.set(field, value.to_string());

        let error = if value.is_empty() {
            String::new()
        } else {
            validate_input(field, value)
                .err()
                .map(|e| e.to_string())
                .unwrap_or_default()
        };
        self.errors.set(field, error);
    }

    pub fn end_edit_royalties(&mut self) {
        if let Some(normalized) = normalize_royalties(self.inputs.get(CollectionField::Royalties)) {
            self.inputs.set(CollectionField::Royalties, normalized);
        }
    }

    pub fn select_existing_collection(&mut self, collection: &str) {
        self.inputs
            .set(CollectionField::CollectionName, collection.to_string());
    }

    pub fn can_select_existing(&self) -> bool {
        !self.existing_collections.is_empty()
    }

    pub fn existing_collections(&self) -> &[String] {
        &self.existing_collections
    }

    pub fn inputs(&self) -> &CollectionInputs {
        &self.inputs
    }

    pub fn errors(&self) -> &CollectionInputs {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_clear()
    }
}
