use serde::{Deserialize, Serialize};

/// Editable fields of the "Set up Collection" mint step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionField {
    CollectionName,
    Description,
    Royalties,
    WebsiteUrl,
    DiscordUrl,
    TwitterHandle,
    InstagramHandle,
    TelegramUrl,
}

impl CollectionField {
    pub const ALL: [CollectionField; 8] = [
        CollectionField::CollectionName,
        CollectionField::Description,
        CollectionField::Royalties,
        CollectionField::WebsiteUrl,
        CollectionField::DiscordUrl,
        CollectionField::TwitterHandle,
        CollectionField::InstagramHandle,
        CollectionField::TelegramUrl,
    ];
}

/// Form values, also used for the per-field error text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionInputs {
    pub collection_name: String,
    pub description: String,
    pub royalties: String,
    pub website_url: String,
    pub discord_url: String,
    pub twitter_handle: String,
    pub instagram_handle: String,
    pub telegram_url: String,
}

impl CollectionInputs {
    pub fn get(&self, field: CollectionField) -> &str {
        match field {
            CollectionField::CollectionName => &self.collection_name,
            CollectionField::Description => &self.description,
            CollectionField::Royalties => &self.royalties,
            CollectionField::WebsiteUrl => &self.website_url,
            CollectionField::DiscordUrl => &self.discord_url,
            CollectionField::TwitterHandle => &self.twitter_handle,
            CollectionField::InstagramHandle => &self.instagram_handle,
            CollectionField::TelegramUrl => &self.telegram_url,
        }
    }

    pub fn set(&mut self, field: CollectionField, value: String) {
        let slot = match field {
            CollectionField::CollectionName => &mut self.collection_name,
            CollectionField::Description => &mut self.description,
            CollectionField::Royalties => &mut self.royalties,
            CollectionField::WebsiteUrl => &mut self.website_url,
            CollectionField::DiscordUrl => &mut self.discord_url,
            CollectionField::TwitterHandle => &mut self.twitter_handle,
            CollectionField::InstagramHandle => &mut self.instagram_handle,
            CollectionField::TelegramUrl => &mut self.telegram_url,
        };
        *slot = value;
    }

    /// True when no field holds text
    pub fn is_clear(&self) -> bool {
        CollectionField::ALL.iter().all(|f| self.get(*f).is_empty())
    }
}

/// Validation failure shown under a form field
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Minimum of {0} characters")]
    TooShort(usize),

    #[error("Maximum of {0} characters")]
    TooLong(usize),

    #[error("Invalid URL, it should begin with {0}")]
    InvalidUrlPrefix(&'static str),

    #[error("Must only contain alphanumeric or underscore characters")]
    InvalidHandle,

    #[error("Invalid amount")]
    InvalidAmount,
}
