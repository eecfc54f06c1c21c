//! Mock catalogue loaded at startup

use chrono::NaiveDate;

use crate::models::{Artist, Category, PriceParseError, PriceRange, Submission, SubmissionStatus};

struct ArtistSeed {
    name: &'static str,
    category: Category,
    location: &'static str,
    price: &'static str,
    rating: f32,
    reviews: u32,
    image: &'static str,
    specialties: &'static [&'static str],
}

const ARTISTS: &[ArtistSeed] = &[
    ArtistSeed {
        name: "Sarah Johnson",
        category: Category::Singer,
        location: "New York, NY",
        price: "$500-1000",
        rating: 4.9,
        reviews: 127,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
        specialties: &["Jazz", "Pop", "Soul"],
    },
    ArtistSeed {
        name: "Mike Chen",
        category: Category::Dj,
        location: "Los Angeles, CA",
        price: "$300-800",
        rating: 4.8,
        reviews: 89,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400&h=400&fit=crop&crop=face",
        specialties: &["Electronic", "Hip-Hop", "House"],
    },
    ArtistSeed {
        name: "Elena Rodriguez",
        category: Category::Dancer,
        location: "Miami, FL",
        price: "$400-900",
        rating: 4.9,
        reviews: 156,
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400&h=400&fit=crop&crop=face",
        specialties: &["Latin", "Contemporary", "Ballroom"],
    },
    ArtistSeed {
        name: "David Thompson",
        category: Category::Speaker,
        location: "Chicago, IL",
        price: "$1000-2500",
        rating: 5.0,
        reviews: 203,
        image: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400&h=400&fit=crop&crop=face",
        specialties: &["Business", "Motivation", "Leadership"],
    },
    ArtistSeed {
        name: "Aisha Patel",
        category: Category::Singer,
        location: "San Francisco, CA",
        price: "$600-1200",
        rating: 4.7,
        reviews: 92,
        image: "https://images.unsplash.com/photo-1489424731084-a5d8b219a5bb?w=400&h=400&fit=crop&crop=face",
        specialties: &["Classical", "Opera", "World Music"],
    },
    ArtistSeed {
        name: "Marcus Williams",
        category: Category::Dancer,
        location: "Atlanta, GA",
        price: "$350-750",
        rating: 4.6,
        reviews: 74,
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400&h=400&fit=crop&crop=face",
        specialties: &["Hip-Hop", "Street", "Breaking"],
    },
];

struct SubmissionSeed {
    name: &'static str,
    category: Category,
    city: &'static str,
    fee: &'static str,
    status: SubmissionStatus,
    submitted: (i32, u32, u32),
    languages: &'static [&'static str],
}

const SUBMISSIONS: &[SubmissionSeed] = &[
    SubmissionSeed {
        name: "Sarah Johnson",
        category: Category::Singer,
        city: "New York, NY",
        fee: "$500-1000",
        status: SubmissionStatus::Pending,
        submitted: (2024, 1, 15),
        languages: &["English", "Spanish"],
    },
    SubmissionSeed {
        name: "Mike Chen",
        category: Category::Dj,
        city: "Los Angeles, CA",
        fee: "$300-800",
        status: SubmissionStatus::Approved,
        submitted: (2024, 1, 14),
        languages: &["English", "Mandarin"],
    },
    SubmissionSeed {
        name: "Elena Rodriguez",
        category: Category::Dancer,
        city: "Miami, FL",
        fee: "$400-900",
        status: SubmissionStatus::Pending,
        submitted: (2024, 1, 13),
        languages: &["English", "Spanish"],
    },
    SubmissionSeed {
        name: "David Thompson",
        category: Category::Speaker,
        city: "Chicago, IL",
        fee: "$1000-2500",
        status: SubmissionStatus::Approved,
        submitted: (2024, 1, 12),
        languages: &["English"],
    },
    SubmissionSeed {
        name: "Aisha Patel",
        category: Category::Singer,
        city: "San Francisco, CA",
        fee: "$600-1200",
        status: SubmissionStatus::Rejected,
        submitted: (2024, 1, 11),
        languages: &["English", "Hindi"],
    },
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Build the artist catalogue. Ids are 1-based in listing order.
pub fn artists() -> Result<Vec<Artist>, PriceParseError> {
    ARTISTS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| {
            Ok(Artist {
                id,
                name: seed.name.to_string(),
                category: seed.category,
                location: seed.location.to_string(),
                price: PriceRange::parse(seed.price)?,
                rating: seed.rating,
                reviews: seed.reviews,
                image: seed.image.to_string(),
                specialties: strings(seed.specialties),
            })
        })
        .collect()
}

/// Build the dashboard submissions
pub fn submissions() -> Result<Vec<Submission>, PriceParseError> {
    SUBMISSIONS
        .iter()
        .zip(1u32..)
        .map(|(seed, id)| {
            let (y, m, d) = seed.submitted;
            Ok(Submission {
                id,
                name: seed.name.to_string(),
                category: seed.category,
                city: seed.city.to_string(),
                fee: PriceRange::parse(seed.fee)?,
                status: seed.status,
                submitted_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
                languages: strings(seed.languages),
            })
        })
        .collect()
}
