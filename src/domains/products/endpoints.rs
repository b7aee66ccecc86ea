//! REST routes for the product resource.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{error, instrument};

use super::{Product, ProductCreate, ProductError, ProductService, UpdateReply};

/// Greeting served at `/`.
pub const GREETING: &str = "Hello Guys, Me here!!";

/// Build the product routes over the given service.
pub fn router(service: ProductService) -> Router {
    Router::new()
        .route("/", get(greet))
        .route("/products", get(display_products).post(create_product))
        .route(
            "/products/{product_id}",
            get(get_product_by_id)
                .put(update_product)
                .delete(delete_product),
        )
        .with_state(service)
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        error!("Product request failed: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}

async fn greet() -> Json<&'static str> {
    Json(GREETING)
}

#[instrument(skip_all)]
async fn display_products(
    State(service): State<ProductService>,
) -> Result<Json<Vec<Product>>, ProductError> {
    Ok(Json(service.display_products().await?))
}

#[instrument(skip(service))]
async fn get_product_by_id(
    State(service): State<ProductService>,
    Path(product_id): Path<i64>,
) -> Result<Json<Product>, ProductError> {
    Ok(Json(service.get_product_by_id(product_id).await?))
}

#[instrument(skip_all)]
async fn create_product(
    State(service): State<ProductService>,
    Json(product): Json<ProductCreate>,
) -> Result<Json<Product>, ProductError> {
    Ok(Json(service.create_product(product).await?))
}

#[instrument(skip(service, product))]
async fn update_product(
    State(service): State<ProductService>,
    Path(product_id): Path<i64>,
    Json(product): Json<ProductCreate>,
) -> Result<Json<UpdateReply>, ProductError> {
    Ok(Json(service.update_product(product_id, product).await?))
}

#[instrument(skip(service))]
async fn delete_product(
    State(service): State<ProductService>,
    Path(product_id): Path<i64>,
) -> Result<Json<String>, ProductError> {
    Ok(Json(service.delete_product(product_id).await?))
}
