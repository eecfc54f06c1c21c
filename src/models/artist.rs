//! Artist model

use serde::Serialize;

use super::{Category, PriceRange};

/// A bookable performer shown on the listing page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: u32,
    pub name: String,
    pub category: Category,
    /// "City, ST"
    pub location: String,
    #[serde(rename = "priceRange")]
    pub price: PriceRange,
    /// 0.0 to 5.0
    pub rating: f32,
    pub reviews: u32,
    pub image: String,
    pub specialties: Vec<String>,
}

impl Artist {
    /// Lowercased haystacks used by free-text search
    pub fn search_terms(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.name.to_lowercase())
            .chain(std::iter::once(self.category.as_str().to_lowercase()))
            .chain(self.specialties.iter().map(|s| s.to_lowercase()))
    }

    /// City part of the location, used for filter options
    pub fn city(&self) -> &str {
        self.location
            .split_once(',')
            .map_or(self.location.as_str(), |(city, _)| city.trim())
    }
}
