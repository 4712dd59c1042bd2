//! Wire decoding
//!
//! Turns the JSON action records produced by the network layer into typed
//! [`Action`]s. A record looks like
//!
//! ```json
//! {"type": "products", "isFetching": false, "error": null, "items": [...]}
//! ```
//!
//! - `error` set to `null` clears the previous error, a string or
//!   `{"message", "status"}` object sets it. When absent, a success carrying
//!   records clears it like [`Fetch::received`] does; anything else keeps it.
//!   A request start never sets an error, only clears it.
//! - `items` (or `entities`) carries a full list.
//! - The singular field (`product`, `post`, ...) carries a single entity.
//! - The key field (`id`, `slug`, `code`) names a single entity without a record.
//! - `requestId` and `receivedAt` are optional.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::actions::{
    action_type, Action, ErrorUpdate, Fetch, Payload, RequestId, TermsLoaded, VariationsLoaded,
};
use crate::domain_models::{EntityKey, FetchError, KeyField};

#[derive(Debug, Error)]
pub enum WireError {
    #[error("malformed action record: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{action_type}: missing field `{field}`")]
    MissingField {
        action_type: String,
        field: &'static str,
    },

    #[error("{action_type}: invalid `{field}`: {source}")]
    InvalidField {
        action_type: String,
        field: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{action_type}: `{field}` must be {expected}")]
    InvalidKey {
        action_type: String,
        field: &'static str,
        expected: &'static str,
    },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<WireError>,
    },
}

/// Wire layout of one entity kind
#[derive(Debug, Clone, Copy)]
struct Layout {
    key: KeyField,
    /// Name of the key field on the wire
    key_name: &'static str,
    /// Name of the single-entity field on the wire
    singular: &'static str,
}

impl Layout {
    fn by_id(singular: &'static str) -> Self {
        Self {
            key: KeyField::Id,
            key_name: KeyField::Id.name(),
            singular,
        }
    }

    fn by_slug(singular: &'static str) -> Self {
        Self {
            key: KeyField::Slug,
            key_name: KeyField::Slug.name(),
            singular,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireFetchError {
    Message(String),
    Detailed(FetchError),
}

impl From<WireFetchError> for FetchError {
    fn from(error: WireFetchError) -> Self {
        match error {
            WireFetchError::Message(message) => FetchError::new(message),
            WireFetchError::Detailed(error) => error,
        }
    }
}

/// Present-but-null clears, a value sets; absence is handled by `default`
fn error_update<'de, D>(deserializer: D) -> Result<ErrorUpdate, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<WireFetchError>::deserialize(deserializer)? {
        None => ErrorUpdate::Clear,
        Some(error) => ErrorUpdate::Set(error.into()),
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireRecord {
    #[serde(rename = "type")]
    action_type: String,
    #[serde(default)]
    is_fetching: bool,
    #[serde(default, deserialize_with = "error_update")]
    error: ErrorUpdate,
    #[serde(default, alias = "entities")]
    items: Option<Vec<Value>>,
    #[serde(default)]
    request_id: Option<u64>,
    #[serde(default)]
    received_at: Option<DateTime<Utc>>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl WireRecord {
    fn into_fetch<T: DeserializeOwned>(
        mut self,
        action_type: &'static str,
        layout: Layout,
    ) -> Result<Fetch<T>, WireError> {
        let payload = if let Some(items) = self.items.take() {
            let items = items
                .into_iter()
                .map(|item| parse(action_type, "items", item))
                .collect::<Result<Vec<T>, _>>()?;
            Payload::Items(items)
        } else if let Some(entity) = self.fields.remove(layout.singular) {
            Payload::Entity(parse(action_type, layout.singular, entity)?)
        } else if let Some(key) = self.take_key(action_type, layout)? {
            Payload::Key(key)
        } else {
            Payload::None
        };

        let completed_at = if self.is_fetching {
            None
        } else {
            Some(self.received_at.unwrap_or_else(Utc::now))
        };

        let error = match self.error {
            ErrorUpdate::Keep if !self.is_fetching && payload.has_records() => ErrorUpdate::Clear,
            error => error,
        };

        Ok(Fetch {
            action_type,
            is_fetching: self.is_fetching,
            error,
            payload,
            completed_at,
            request: self.request_id.map(RequestId),
        })
    }

    fn take_key(
        &mut self,
        action_type: &str,
        layout: Layout,
    ) -> Result<Option<EntityKey>, WireError> {
        let Some(value) = self.fields.remove(layout.key_name) else {
            return Ok(None);
        };
        let key = match layout.key {
            KeyField::Id => value.as_u64().map(EntityKey::Id),
            KeyField::Slug => value.as_str().map(EntityKey::slug),
        };
        key.map(Some).ok_or_else(|| WireError::InvalidKey {
            action_type: action_type.to_string(),
            field: layout.key_name,
            expected: match layout.key {
                KeyField::Id => "a non-negative integer",
                KeyField::Slug => "a string",
            },
        })
    }

    fn require_key(&mut self, action_type: &str, layout: Layout) -> Result<EntityKey, WireError> {
        self.take_key(action_type, layout)?
            .ok_or_else(|| WireError::MissingField {
                action_type: action_type.to_string(),
                field: layout.key_name,
            })
    }

    fn require<T: DeserializeOwned>(
        &mut self,
        action_type: &str,
        field: &'static str,
    ) -> Result<T, WireError> {
        let value = self
            .fields
            .remove(field)
            .ok_or_else(|| WireError::MissingField {
                action_type: action_type.to_string(),
                field,
            })?;
        parse(action_type, field, value)
    }
}

fn parse<T: DeserializeOwned>(action_type: &str, field: &str, value: Value) -> Result<T, WireError> {
    serde_json::from_value(value).map_err(|source| WireError::InvalidField {
        action_type: action_type.to_string(),
        field: field.to_string(),
        source,
    })
}

/// Decode one JSON action record
pub fn decode_action(input: &str) -> Result<Action, WireError> {
    decode_value(serde_json::from_str(input)?)
}

/// Decode an already parsed JSON action record
pub fn decode_value(value: Value) -> Result<Action, WireError> {
    let mut record: WireRecord = serde_json::from_value(value)?;

    let kind = std::mem::take(&mut record.action_type);

    let action = match kind.as_str() {
        action_type::PRODUCTS => {
            Action::Product(record.into_fetch(action_type::PRODUCTS, Layout::by_id("product"))?)
        }
        action_type::PRODUCT_CATEGORIES => Action::Category(
            record.into_fetch(action_type::PRODUCT_CATEGORIES, Layout::by_id("category"))?,
        ),
        action_type::PRODUCT_ATTRIBUTES => Action::Attribute(
            record.into_fetch(action_type::PRODUCT_ATTRIBUTES, Layout::by_id("attribute"))?,
        ),
        action_type::CATEGORIES => {
            Action::Category(record.into_fetch(action_type::CATEGORIES, Layout::by_id("category"))?)
        }
        action_type::ATTRIBUTES => Action::Attribute(
            record.into_fetch(action_type::ATTRIBUTES, Layout::by_id("attribute"))?,
        ),
        action_type::POSTS => {
            Action::Post(record.into_fetch(action_type::POSTS, Layout::by_slug("post"))?)
        }
        action_type::PAGES => {
            Action::Page(record.into_fetch(action_type::PAGES, Layout::by_slug("page"))?)
        }
        action_type::ACCOUNTS => {
            Action::Account(record.into_fetch(action_type::ACCOUNTS, Layout::by_id("account"))?)
        }
        action_type::ORDERS => {
            Action::Order(record.into_fetch(action_type::ORDERS, Layout::by_id("order"))?)
        }
        action_type::SALES => {
            Action::Sale(record.into_fetch(action_type::SALES, Layout::by_id("sale"))?)
        }
        action_type::COUNTRIES => Action::Country(record.into_fetch(
            action_type::COUNTRIES,
            Layout {
                key: KeyField::Slug,
                key_name: "code",
                singular: "country",
            },
        )?),
        action_type::PRODUCT_VARIATIONS => {
            let product = record.require_key(action_type::PRODUCT_VARIATIONS, Layout::by_id("product"))?;
            let variations = record.require(action_type::PRODUCT_VARIATIONS, "variations")?;
            Action::ProductVariations(VariationsLoaded {
                product,
                variations,
            })
        }
        action_type::ATTRIBUTE_TERMS => {
            let attribute = record.require_key(action_type::ATTRIBUTE_TERMS, Layout::by_id("attribute"))?;
            let terms = record.require(action_type::ATTRIBUTE_TERMS, "terms")?;
            Action::AttributeTerms(TermsLoaded { attribute, terms })
        }
        other => {
            log::debug!("Unhandled action type {}", other);
            Action::Unknown(other.to_string())
        }
    };

    Ok(action)
}

/// Decode newline separated action records, skipping blank lines
pub fn decode_lines(input: &str) -> Result<Vec<Action>, WireError> {
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            decode_action(line).map_err(|source| WireError::Line {
                line: index + 1,
                source: Box::new(source),
            })
        })
        .collect()
}
