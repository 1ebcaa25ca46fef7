use serde::{Deserialize, Serialize};

/// A product record as returned by the catalog API's `/products` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier, unique within the catalog.
    pub id: i64,
    pub name: String,
    pub category: String,
    /// Non-negative unit price, in the API's currency.
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_api_record() {
        let raw = r#"{"id": 7, "name": "Trail Runner", "category": "Shoes", "price": 59.99}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.id, 7);
        assert_eq!(product.name, "Trail Runner");
        assert_eq!(product.category, "Shoes");
        assert!((product.price - 59.99).abs() < f64::EPSILON);
    }

    #[test]
    fn accepts_integer_price() {
        let raw = r#"{"id": 1, "name": "Tee", "category": "Shirts", "price": 20}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert!((product.price - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_record_without_price() {
        let raw = r#"{"id": 1, "name": "Tee", "category": "Shirts"}"#;
        assert!(serde_json::from_str::<Product>(raw).is_err());
    }
}
