//! # Product Routes

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use minimart_core::Product;

use crate::state::AppState;

/// A product as presented to clients: the catalog fields plus the
/// image path derived from the product identity at response time.
#[derive(Debug, Clone, Serialize)]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    pub image: String,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        ProductView {
            image: product.image_path(),
            product: product.clone(),
        }
    }
}

/// `GET /api/products` — the fixed catalog, in catalog order.
///
/// Always succeeds; the catalog has no failure modes.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<ProductView>> {
    debug!("list_products");
    Json(state.catalog.list().iter().map(ProductView::from).collect())
}
