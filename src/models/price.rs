//! Structured price intervals

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// A fee interval in whole dollars. `max = None` means open-ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PriceRange {
    pub min: u32,
    pub max: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PriceParseError {
    #[error("empty price range")]
    Empty,
    #[error("invalid amount in price range: {0:?}")]
    InvalidAmount(String),
    #[error("price range upper bound {max} is below lower bound {min}")]
    Inverted { min: u32, max: u32 },
}

impl PriceRange {
    pub const fn between(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Parse `"$500-1000"`, `"500-1000"` or `"$5000+"`
    pub fn parse(input: &str) -> Result<Self, PriceParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(PriceParseError::Empty);
        }

        if let Some(open) = trimmed.strip_suffix('+') {
            return Ok(Self::at_least(parse_amount(open)?));
        }

        let (low, high) = trimmed
            .split_once('-')
            .ok_or_else(|| PriceParseError::InvalidAmount(trimmed.to_string()))?;
        let min = parse_amount(low)?;
        let max = parse_amount(high)?;
        if max < min {
            return Err(PriceParseError::Inverted { min, max });
        }

        Ok(Self::between(min, max))
    }

    pub fn contains(&self, amount: u32) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount <= max)
    }
}

fn parse_amount(raw: &str) -> Result<u32, PriceParseError> {
    let digits = raw.trim().trim_start_matches('$').replace(',', "");
    digits
        .parse::<u32>()
        .map_err(|_| PriceParseError::InvalidAmount(raw.trim().to_string()))
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.max {
            Some(max) => write!(f, "${}-{}", self.min, max),
            None => write!(f, "${}+", self.min),
        }
    }
}

impl std::str::FromStr for PriceRange {
    type Err = PriceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// clients get the numbers for sorting and the label for display
impl Serialize for PriceRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("PriceRange", 3)?;
        state.serialize_field("min", &self.min)?;
        state.serialize_field("max", &self.max)?;
        state.serialize_field("label", &self.to_string())?;
        state.end()
    }
}
