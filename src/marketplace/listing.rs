use serde::{Deserialize, Serialize};

use crate::marketplace::user::UserProfile;

/// A city a listing can be posted in. Part of the fixed taxonomy,
/// fetched once per application lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// A listing category. Part of the fixed taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A classified advertisement as served by the backend.
///
/// Server-owned: the client holds read-only copies. `price` is `None` for
/// give-away or price-on-request listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub is_featured: bool,
    pub image_url: String,
    pub images: Vec<String>,
    pub created_at: String,
    pub user: UserProfile,
    pub city: City,
    pub category: Category,
}

impl Listing {
    /// Price formatted with two decimals for display, or `None` when the
    /// listing has no price.
    pub fn price_display(&self) -> Option<String> {
        self.price.map(|p| format!("{p:.2}"))
    }
}

/// Payload for creating a new listing. Serialized in camel case, matching
/// what the backend expects on `POST /ads`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub title: String,
    pub description: String,
    pub price: Option<f64>,
    pub category_id: i64,
    pub city_id: i64,
    pub image_urls: Vec<String>,
}

/// Server-side filter parameters for the listings query.
///
/// Filtering itself happens on the server; this type only decides which
/// query parameters get sent. The sentinel value `"all"` for city or
/// category means "no filter", matching the UI's dropdown defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub city: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured_only: bool,
}

impl ListingFilters {
    /// Query parameters to append to the listings request, in a fixed order.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(city) = self.city.as_deref().filter(|c| *c != "all") {
            pairs.push(("city", city.to_string()));
        }
        if let Some(category) = self.category.as_deref().filter(|c| *c != "all") {
            pairs.push(("category", category.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        if self.featured_only {
            pairs.push(("featured", "true".to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::normalize_keys;
    use serde_json::json;

    fn sample_listing_wire() -> serde_json::Value {
        json!({
            "id": 7,
            "title": "Sofa",
            "description": "Three seats, good shape",
            "price": 50,
            "is_featured": false,
            "image_url": "https://img.example/sofa.jpg",
            "images": ["https://img.example/sofa.jpg"],
            "created_at": "2024-05-01T12:00:00Z",
            "user": {
                "id": "uid-1",
                "full_name": "Ada Lovelace",
                "avatar_url": "https://img.example/ada.png"
            },
            "city": { "id": 1, "name": "Berlin" },
            "category": { "id": 2, "name": "Housing", "slug": "housing" }
        })
    }

    #[test]
    fn test_listing_deserializes_from_normalized_wire() {
        let value = normalize_keys(sample_listing_wire());
        let listing: Listing = serde_json::from_value(value).unwrap();

        assert_eq!(listing.id, 7);
        assert_eq!(listing.title, "Sofa");
        assert_eq!(listing.price, Some(50.0));
        assert!(!listing.is_featured);
        assert_eq!(listing.user.full_name, "Ada Lovelace");
        assert_eq!(listing.city.name, "Berlin");
        assert_eq!(listing.category.slug, "housing");
    }

    #[test]
    fn test_price_display_two_decimals() {
        let value = normalize_keys(sample_listing_wire());
        let listing: Listing = serde_json::from_value(value).unwrap();
        assert_eq!(listing.price_display().as_deref(), Some("50.00"));
    }

    #[test]
    fn test_price_display_absent_for_free_listings() {
        let mut wire = sample_listing_wire();
        wire["price"] = serde_json::Value::Null;
        let listing: Listing = serde_json::from_value(normalize_keys(wire)).unwrap();
        assert_eq!(listing.price_display(), None);
    }

    #[test]
    fn test_new_listing_serializes_camel_case() {
        let ad = NewListing {
            title: "Bike".to_string(),
            description: "Red, 26 inch".to_string(),
            price: None,
            category_id: 3,
            city_id: 1,
            image_urls: vec!["https://img.example/bike.jpg".to_string()],
        };
        let value = serde_json::to_value(&ad).unwrap();
        assert!(value.get("categoryId").is_some());
        assert!(value.get("cityId").is_some());
        assert!(value.get("imageUrls").is_some());
        assert!(value.get("category_id").is_none());
    }

    #[test]
    fn test_filters_skip_all_sentinel_and_empty_search() {
        let filters = ListingFilters {
            city: Some("all".to_string()),
            category: Some("all".to_string()),
            search: Some(String::new()),
            featured_only: false,
        };
        assert!(filters.query_pairs().is_empty());
    }

    #[test]
    fn test_filters_emit_set_values_in_order() {
        let filters = ListingFilters {
            city: Some("Berlin".to_string()),
            category: Some("housing".to_string()),
            search: Some("sofa".to_string()),
            featured_only: true,
        };
        assert_eq!(
            filters.query_pairs(),
            vec![
                ("city", "Berlin".to_string()),
                ("category", "housing".to_string()),
                ("search", "sofa".to_string()),
                ("featured", "true".to_string()),
            ]
        );
    }
}
