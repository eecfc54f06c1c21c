//! Enums for Artistly

use serde::{Deserialize, Serialize};

use super::PriceRange;

/// Performer categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    Singer,
    Dancer,
    Speaker,
    #[serde(rename = "DJ")]
    Dj,
    Musician,
    Comedian,
    Magician,
    Band,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Singer,
        Category::Dancer,
        Category::Speaker,
        Category::Dj,
        Category::Musician,
        Category::Comedian,
        Category::Magician,
        Category::Band,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Singer => "Singer",
            Category::Dancer => "Dancer",
            Category::Speaker => "Speaker",
            Category::Dj => "DJ",
            Category::Musician => "Musician",
            Category::Comedian => "Comedian",
            Category::Magician => "Magician",
            Category::Band => "Band",
        }
    }

    /// Exact, case-sensitive lookup by display name
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Languages an artist can perform in
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Portuguese,
    Mandarin,
    Japanese,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Portuguese,
        Language::Mandarin,
        Language::Japanese,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Portuguese => "Portuguese",
            Language::Mandarin => "Mandarin",
            Language::Japanese => "Japanese",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.as_str() == s)
    }
}

/// Fee bands offered on the onboarding form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeBand {
    #[serde(rename = "$100-300")]
    Band100To300,
    #[serde(rename = "$300-500")]
    Band300To500,
    #[serde(rename = "$500-1000")]
    Band500To1000,
    #[serde(rename = "$1000-2500")]
    Band1000To2500,
    #[serde(rename = "$2500-5000")]
    Band2500To5000,
    #[serde(rename = "$5000+")]
    Band5000Plus,
}

impl FeeBand {
    pub const ALL: [FeeBand; 6] = [
        FeeBand::Band100To300,
        FeeBand::Band300To500,
        FeeBand::Band500To1000,
        FeeBand::Band1000To2500,
        FeeBand::Band2500To5000,
        FeeBand::Band5000Plus,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FeeBand::Band100To300 => "$100-300",
            FeeBand::Band300To500 => "$300-500",
            FeeBand::Band500To1000 => "$500-1000",
            FeeBand::Band1000To2500 => "$1000-2500",
            FeeBand::Band2500To5000 => "$2500-5000",
            FeeBand::Band5000Plus => "$5000+",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == s)
    }

    pub fn range(&self) -> PriceRange {
        match self {
            FeeBand::Band100To300 => PriceRange::between(100, 300),
            FeeBand::Band300To500 => PriceRange::between(300, 500),
            FeeBand::Band500To1000 => PriceRange::between(500, 1000),
            FeeBand::Band1000To2500 => PriceRange::between(1000, 2500),
            FeeBand::Band2500To5000 => PriceRange::between(2500, 5000),
            FeeBand::Band5000Plus => PriceRange::at_least(5000),
        }
    }
}

/// Review state of an artist submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Pending => "pending",
            SubmissionStatus::Approved => "approved",
            SubmissionStatus::Rejected => "rejected",
        }
    }
}

impl Default for SubmissionStatus {
    fn default() -> Self {
        SubmissionStatus::Pending
    }
}

/// Account kinds chosen at sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserType {
    EventPlanner,
    ArtistManager,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::EventPlanner => "event-planner",
            UserType::ArtistManager => "artist-manager",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "event-planner" => Some(UserType::EventPlanner),
            "artist-manager" => Some(UserType::ArtistManager),
            _ => None,
        }
    }
}
