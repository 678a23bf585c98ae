use rand::Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::AppError,
    http::HttpFetcher,
    recommend::{Category, TagSet},
};

mod response;

pub use response::{Product, ProductColor};

/// Full product lists, one per category, in [`Category::ALL`] order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: [Vec<Product>; 5],
}

impl Catalog {
    pub fn new(products: [Vec<Product>; 5]) -> Self {
        Self { products }
    }

    pub fn products(&self, category: Category) -> &[Product] {
        &self.products[category.index()]
    }
}

/// The product chosen for one category, if any matched.
#[derive(Serialize, Debug, Clone)]
pub struct Pick {
    pub category: Category,
    pub tag: String,
    pub product: Option<Product>,
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    fetcher: HttpFetcher,
    endpoint: String,
}

impl CatalogClient {
    pub fn new(fetcher: HttpFetcher, config: &Config) -> Self {
        Self {
            fetcher,
            endpoint: config.catalog_url.clone(),
        }
    }

    pub async fn fetch_category(&self, category: Category) -> Result<Vec<Product>, AppError> {
        let url = format!("{}?product_type={}", self.endpoint, category);
        let products: Vec<Product> = self.fetcher.fetch_json(&url, category.as_str()).await?;
        debug!("Fetched {} {} products", products.len(), category);
        Ok(products)
    }

    /// Fetches all five categories concurrently. The first failure aborts the rest.
    pub async fn fetch_all(&self) -> Result<Catalog, AppError> {
        info!("Fetching product catalog");
        let (blush, eyeliner, foundation, lipstick, mascara) = futures::try_join!(
            self.fetch_category(Category::Blush),
            self.fetch_category(Category::Eyeliner),
            self.fetch_category(Category::Foundation),
            self.fetch_category(Category::Lipstick),
            self.fetch_category(Category::Mascara)
        )?;

        Ok(Catalog::new([blush, eyeliner, foundation, lipstick, mascara]))
    }
}

/// Products whose description contains `tag` (case-sensitive). Products
/// without a description never match.
pub fn filter_by_tag<'a>(products: &'a [Product], tag: &str) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| {
            product
                .description
                .as_deref()
                .is_some_and(|description| description.contains(tag))
        })
        .collect()
}

fn choose<'a, R: Rng + ?Sized>(candidates: &[&'a Product], rng: &mut R) -> Option<&'a Product> {
    match candidates.len() {
        0 => None,
        1 => Some(candidates[0]),
        n => Some(candidates[rng.random_range(0..n)]),
    }
}

/// Picks at most one product per category.
///
/// An empty tag picks uniformly from the whole category; otherwise the pick
/// is uniform over products matching the tag. Categories with nothing to
/// pick from yield a `Pick` without a product.
pub fn recommend<R: Rng + ?Sized>(catalog: &Catalog, tags: &TagSet, rng: &mut R) -> Vec<Pick> {
    Category::ALL
        .iter()
        .map(|&category| {
            let tag = tags.get(category);
            let products = catalog.products(category);
            let candidates: Vec<&Product> = if tag.is_empty() {
                products.iter().collect()
            } else {
                filter_by_tag(products, tag)
            };
            debug!(
                "{}: {} candidates for tag {:?}",
                category,
                candidates.len(),
                tag
            );

            Pick {
                category,
                tag: tag.to_string(),
                product: choose(&candidates, rng).cloned(),
            }
        })
        .collect()
}
