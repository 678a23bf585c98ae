use serde::{Deserialize, Serialize};

/// A product as returned by the Makeup API
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i64,
    #[serde(default)]
    pub brand: Option<String>,
    pub name: String,
    /// Decimal price as text, e.g. "14.99"
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub price_sign: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    /// Brand's own page for the product
    #[serde(default)]
    pub product_link: Option<String>,
    /// Free text searched for recommendation tags; often null
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub tag_list: Vec<String>,
    #[serde(default)]
    pub product_api_url: Option<String>,
    #[serde(default)]
    pub product_colors: Vec<ProductColor>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProductColor {
    pub hex_value: String,
    #[serde(default)]
    pub colour_name: Option<String>,
}
