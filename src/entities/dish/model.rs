//! Dish record and its write-side draft

use crate::core::validation::validators::deserialize_integer;
use crate::core::{Entity, RecordId};
use serde::{Deserialize, Serialize};

/// A dish in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    /// Always strictly positive for stored records
    #[serde(deserialize_with = "deserialize_integer")]
    pub price: i64,
    pub image_url: String,
}

impl Entity for Dish {
    fn resource_name() -> &'static str {
        "dishes"
    }

    fn resource_name_singular() -> &'static str {
        "dish"
    }

    fn display_name() -> &'static str {
        "Dish"
    }

    fn id(&self) -> &RecordId {
        &self.id
    }
}

/// Mutable dish fields decoded from an already validated payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DishDraft {
    pub name: String,
    pub description: String,
    #[serde(deserialize_with = "deserialize_integer")]
    pub price: i64,
    pub image_url: String,
}

impl DishDraft {
    pub fn into_dish(self, id: RecordId) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}
