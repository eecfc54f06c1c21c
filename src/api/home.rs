//! Home page view

use actix_web::{get, web, HttpResponse};
use serde::Serialize;

use crate::models::Category;
use crate::state::AppState;

const CATEGORY_TILES: [(Category, &str, &str, &str); 4] = [
    (Category::Singer, "Singers", "Professional vocalists for any event", "500+"),
    (Category::Dancer, "Dancers", "Choreographers and dance performers", "300+"),
    (Category::Speaker, "Speakers", "Motivational and keynote speakers", "200+"),
    (Category::Dj, "DJs", "Professional DJs and music producers", "400+"),
];

const FEATURES: [&str; 4] = [
    "Verified Professional Artists",
    "Instant Booking Requests",
    "Secure Payment Processing",
    "24/7 Customer Support",
];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTile {
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
    /// Marketing headline count
    pub count: &'static str,
    /// Artists of this category in the listing right now
    pub listed: usize,
    pub href: String,
}

#[derive(Debug, Serialize)]
pub struct HomeView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub categories: Vec<CategoryTile>,
    pub features: &'static [&'static str],
}

#[get("/home")]
pub async fn home(state: web::Data<AppState>) -> HttpResponse {
    let artists = state.artists.all();

    let categories = CATEGORY_TILES
        .into_iter()
        .map(|(category, title, description, count)| CategoryTile {
            category,
            title,
            description,
            count,
            listed: artists.iter().filter(|a| a.category == category).count(),
            href: format!("/artists?category={}", category.as_str()),
        })
        .collect();

    HttpResponse::Ok().json(HomeView {
        title: "Connect with Amazing Artists",
        tagline: "The premier platform for event planners to discover and book talented performing artists. From singers to speakers, find the perfect artist for your next event.",
        categories,
        features: &FEATURES,
    })
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home);
}

#[cfg(test)]
mod tests {
    use crate::api;
    use crate::state::tests::test_state;
    use actix_web::{test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_home_tiles() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(api::configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/home").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["categories"][0]["title"], "Singers");
        assert_eq!(body["categories"][0]["listed"], 2);
        assert_eq!(body["categories"][3]["category"], "DJ");
        assert_eq!(body["categories"][3]["href"], "/artists?category=DJ");
        assert_eq!(body["features"].as_array().unwrap().len(), 4);
    }
}
