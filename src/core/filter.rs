//! Listing and dashboard filters

use serde::{Deserialize, Serialize};

use crate::models::{Artist, Category, Submission};

/// Raw filter values as they arrive on the query string. Missing means "all".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub price: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    #[error("unknown price range: {0}")]
    UnknownPriceBucket(String),
}

/// Price buckets offered on the listing page, applied to the lower bound of an artist's price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceBucket {
    #[serde(rename = "0-500")]
    UpTo500,
    #[serde(rename = "500-1000")]
    From500To1000,
    #[serde(rename = "1000+")]
    From1000,
}

impl PriceBucket {
    pub const ALL: [PriceBucket; 3] = [
        PriceBucket::UpTo500,
        PriceBucket::From500To1000,
        PriceBucket::From1000,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            PriceBucket::UpTo500 => "0-500",
            PriceBucket::From500To1000 => "500-1000",
            PriceBucket::From1000 => "1000+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceBucket::UpTo500 => "$0 - $500",
            PriceBucket::From500To1000 => "$500 - $1,000",
            PriceBucket::From1000 => "$1,000+",
        }
    }

    pub fn from_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.key() == s)
    }

    /// Bounds are inclusive, so 500 and 1000 each land in two buckets
    pub fn contains(&self, lower_bound: u32) -> bool {
        match self {
            PriceBucket::UpTo500 => lower_bound <= 500,
            PriceBucket::From500To1000 => (500..=1000).contains(&lower_bound),
            PriceBucket::From1000 => lower_bound >= 1000,
        }
    }
}

/// Parsed listing filter. `None` criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArtistFilter {
    /// Lowercased; empty matches all
    pub search: String,
    pub category: Option<Category>,
    /// Case-sensitive substring of the artist location
    pub location: Option<String>,
    pub price: Option<PriceBucket>,
}

fn selected(value: Option<&str>) -> Option<&str> {
    match value {
        None | Some("") | Some("all") => None,
        Some(v) => Some(v),
    }
}

impl ArtistFilter {
    pub fn from_query(query: &ListingQuery) -> Result<Self, FilterError> {
        let category = selected(query.category.as_deref())
            .map(|c| Category::from_str(c).ok_or_else(|| FilterError::UnknownCategory(c.to_string())))
            .transpose()?;

        let price = selected(query.price.as_deref())
            .map(|p| {
                PriceBucket::from_key(p).ok_or_else(|| FilterError::UnknownPriceBucket(p.to_string()))
            })
            .transpose()?;

        Ok(Self {
            search: query.search.as_deref().unwrap_or("").to_lowercase(),
            category,
            location: selected(query.location.as_deref()).map(str::to_string),
            price,
        })
    }

    pub fn matches_search(&self, artist: &Artist) -> bool {
        self.search.is_empty() || artist.search_terms().any(|t| t.contains(&self.search))
    }

    pub fn matches_category(&self, artist: &Artist) -> bool {
        self.category.map_or(true, |c| artist.category == c)
    }

    pub fn matches_location(&self, artist: &Artist) -> bool {
        self.location
            .as_deref()
            .map_or(true, |loc| artist.location.contains(loc))
    }

    pub fn matches_price(&self, artist: &Artist) -> bool {
        self.price.map_or(true, |bucket| bucket.contains(artist.price.min))
    }

    pub fn matches(&self, artist: &Artist) -> bool {
        self.matches_search(artist)
            && self.matches_category(artist)
            && self.matches_location(artist)
            && self.matches_price(artist)
    }

    /// Matching artists in catalogue order
    pub fn apply<'a>(&self, artists: &'a [Artist]) -> Vec<&'a Artist> {
        artists.iter().filter(|a| self.matches(a)).collect()
    }
}

/// Dashboard table search over name, category and city
#[derive(Debug, Clone, Default)]
pub struct SubmissionSearch {
    needle: String,
}

impl SubmissionSearch {
    pub fn new(search: Option<&str>) -> Self {
        Self {
            needle: search.unwrap_or("").to_lowercase(),
        }
    }

    pub fn matches(&self, submission: &Submission) -> bool {
        self.needle.is_empty()
            || submission.name.to_lowercase().contains(&self.needle)
            || submission.category.as_str().to_lowercase().contains(&self.needle)
            || submission.city.to_lowercase().contains(&self.needle)
    }
}
