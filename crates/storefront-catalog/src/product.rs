//! Product types.

use serde::{Deserialize, Deserializer, Serialize};

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average rating, 0 to 5.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u64,
}

/// A product in the catalog.
///
/// Sourced entirely from the external catalog API and never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier. The upstream API serializes this as a JSON
    /// number, so deserialization accepts either a number or a string.
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: String,
    /// Product title.
    pub title: String,
    /// Price, non-negative decimal.
    pub price: f64,
    /// Full description.
    pub description: String,
    /// Category name. An open set fetched from the server, not an enum.
    pub category: String,
    /// Image URI.
    pub image: String,
    /// Aggregate rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Case-insensitive substring match against title or description.
    ///
    /// An empty query matches every product.
    pub fn matches_search(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }

    /// Check category membership. `None` means "all categories".
    pub fn in_category(&self, category: Option<&str>) -> bool {
        match category {
            Some(c) => self.category == c,
            None => true,
        }
    }
}

fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(u64),
        String(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n.to_string()),
        NumberOrString::String(s) => Ok(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product {
            id: "1".to_string(),
            title: "Red Shirt".to_string(),
            price: 19.99,
            description: "A bright red cotton shirt".to_string(),
            category: "clothing".to_string(),
            image: "https://example.com/shirt.png".to_string(),
            rating: Rating { rate: 4.5, count: 120 },
        }
    }

    #[test]
    fn test_decode_numeric_id() {
        let json = r#"{
            "id": 7,
            "title": "Blue Mug",
            "price": 8.5,
            "description": "Ceramic mug",
            "category": "home",
            "image": "https://example.com/mug.png",
            "rating": {"rate": 3.9, "count": 42}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "7");
        assert_eq!(product.rating.count, 42);
    }

    #[test]
    fn test_decode_string_id() {
        let json = r#"{
            "id": "abc-1",
            "title": "Blue Mug",
            "price": 8.5,
            "description": "Ceramic mug",
            "category": "home",
            "image": "https://example.com/mug.png"
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, "abc-1");
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_search_matches_title_case_insensitive() {
        let product = sample();
        assert!(product.matches_search("SHIRT"));
        assert!(product.matches_search("red sh"));
        assert!(!product.matches_search("mug"));
    }

    #[test]
    fn test_search_matches_description() {
        let product = sample();
        assert!(product.matches_search("COTTON"));
    }

    #[test]
    fn test_empty_search_matches_all() {
        assert!(sample().matches_search(""));
    }

    #[test]
    fn test_category_membership() {
        let product = sample();
        assert!(product.in_category(None));
        assert!(product.in_category(Some("clothing")));
        assert!(!product.in_category(Some("home")));
    }
}
