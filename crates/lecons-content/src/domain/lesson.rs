//! Typed view over a lesson document.
//!
//! The raw JSON document is what the API serves. These types are a lenient
//! read-only projection of it used for rendering: absent, `null` or
//! mistyped fields default, and a card that cannot be decoded (unrecognised,
//! missing or non-string `type` tag) becomes [`Card::Unknown`]. Only a
//! document that is not a JSON object is rejected.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::Value;

/// A complete lesson: a title and its ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Page title.
    #[serde(default, deserialize_with = "lenient")]
    pub app_title: String,
    /// Sections in display order.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub sections: Vec<Section>,
}

/// A titled group of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Section {
    /// Section heading.
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    /// Short description shown under the heading.
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    /// Cards in display order.
    #[serde(default, deserialize_with = "lenient_cards")]
    pub cards: Vec<Card>,
}

/// A study card, distinguished by its `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    /// A short exchange between speakers.
    Dialogue {
        /// What the exchange is about.
        #[serde(default, deserialize_with = "lenient")]
        theme: String,
        /// Lines in speaking order.
        #[serde(default, deserialize_with = "lenient_seq")]
        exchange: Vec<DialogueLine>,
    },
    /// A grammar or conjugation rule with examples.
    LanguageCard {
        /// Name of the lesson point.
        #[serde(default, deserialize_with = "lenient")]
        lesson: String,
        /// The rule itself.
        #[serde(default, deserialize_with = "lenient")]
        rule: String,
        /// Example sentences.
        #[serde(default, deserialize_with = "lenient_seq")]
        examples: Vec<String>,
    },
    /// Any card this server does not render.
    #[serde(other)]
    Unknown,
}

/// One line of a dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DialogueLine {
    /// Who speaks, e.g. `A`.
    #[serde(default, deserialize_with = "lenient")]
    pub speaker: String,
    /// What they say.
    #[serde(default, deserialize_with = "lenient")]
    pub line: String,
}

impl Lesson {
    /// Decode the typed view from a raw document.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error when the document is not a JSON object.
    pub fn from_document(document: &Value) -> Result<Self, serde_json::Error> {
        if !document.is_object() {
            return Err(de::Error::custom("lesson document must be a JSON object"));
        }
        Self::deserialize(document)
    }
}

/// `null` or a value of the wrong type reads as the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Keeps the elements that decode; anything but an array reads as empty.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}

/// Decodes cards one at a time; a card that fails to decode is `Unknown`.
fn lenient_cards<'de, D>(deserializer: D) -> Result<Vec<Card>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| Card::deserialize(item).unwrap_or(Card::Unknown))
        .collect())
}
