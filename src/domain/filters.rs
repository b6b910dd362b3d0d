use crate::domain::Category;
use serde::Serialize;

/// Query-side filter set for the housing table. Every field is optional and
/// the filters compose with AND semantics. Serialized back to the client as
/// `filters_applied`, omitting anything unset.
#[derive(Debug, Default, Clone, Serialize)]
pub struct HousingFilters {
    #[serde(rename = "housing_type", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub international_friendly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amenities: Vec<String>,
}

impl HousingFilters {
    pub fn by_id(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }
}
