//! Artist store - the read-only listing catalogue

use std::collections::HashMap;

use crate::models::Artist;

/// In-memory store for artists. Filled once at startup, never mutated.
pub struct ArtistStore {
    /// Artists in listing order
    artists: Vec<Artist>,
    /// Position in `artists` by id
    by_id: HashMap<u32, usize>,
}

impl ArtistStore {
    pub fn new(artists: Vec<Artist>) -> Self {
        let by_id = artists
            .iter()
            .enumerate()
            .map(|(idx, artist)| (artist.id, idx))
            .collect();
        Self { artists, by_id }
    }

    /// Get total artist count
    pub fn count(&self) -> usize {
        self.artists.len()
    }

    /// Get all artists in listing order
    pub fn all(&self) -> &[Artist] {
        &self.artists
    }

    /// Get artist by id
    pub fn get(&self, id: u32) -> Option<&Artist> {
        self.by_id.get(&id).map(|&idx| &self.artists[idx])
    }

    /// Distinct cities, in first-seen order
    pub fn cities(&self) -> Vec<String> {
        let mut cities: Vec<String> = Vec::new();
        for artist in &self.artists {
            let city = artist.city();
            if !cities.iter().any(|c| c == city) {
                cities.push(city.to_string());
            }
        }
        cities
    }
}
