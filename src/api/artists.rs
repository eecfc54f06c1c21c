//! Artist listing routes

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::core::{ArtistFilter, ListingQuery, PriceBucket};
use crate::error::{ApiError, ApiResult};
use crate::models::{Artist, Category};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ListingResponse<'a> {
    pub total: usize,
    pub artists: Vec<&'a Artist>,
}

#[derive(Debug, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub locations: Vec<FilterOption>,
    pub prices: Vec<FilterOption>,
}

/// filtered listing; every criterion defaults to "all"
#[get("")]
pub async fn list_artists(
    state: web::Data<AppState>,
    query: web::Query<ListingQuery>,
) -> ApiResult<HttpResponse> {
    let filter = ArtistFilter::from_query(&query)?;
    let artists = filter.apply(state.artists.all());
    tracing::debug!("Listing filter {:?} matched {}", filter, artists.len());

    Ok(HttpResponse::Ok().json(ListingResponse {
        total: artists.len(),
        artists,
    }))
}

/// options for the listing filter dropdowns
#[get("/filters")]
pub async fn filter_options(state: web::Data<AppState>) -> HttpResponse {
    let all = |label: &str| FilterOption::new("all", label);

    let categories = std::iter::once(all("All Categories"))
        .chain(
            Category::ALL
                .iter()
                .map(|c| FilterOption::new(c.as_str(), c.as_str())),
        )
        .collect();

    let locations = std::iter::once(all("All Locations"))
        .chain(
            state
                .artists
                .cities()
                .into_iter()
                .map(|city| FilterOption::new(city.clone(), city)),
        )
        .collect();

    let prices = std::iter::once(all("All Prices"))
        .chain(
            PriceBucket::ALL
                .iter()
                .map(|b| FilterOption::new(b.key(), b.label())),
        )
        .collect();

    HttpResponse::Ok().json(FilterOptions {
        categories,
        locations,
        prices,
    })
}

#[get("/{id}")]
pub async fn get_artist(
    state: web::Data<AppState>,
    path: web::Path<u32>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let artist = state
        .artists
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Artist {} not found", id)))?;

    Ok(HttpResponse::Ok().json(artist))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_artists)
        .service(filter_options)
        .service(get_artist);
}
