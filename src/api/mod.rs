//! HTTP surface over the store.

pub mod forms;

use std::sync::Arc;

use axum::{extract::{Path, Query, State}, http::StatusCode, response::{IntoResponse, Response}, routing::{get, post, put}, Json, Router};
use chrono::Utc;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use validator::Validate;

use crate::domain::aggregates::{Cart, CheckoutPolicy, Order, OrderStatus, Product, QuoteRequest, QuoteStatus};
use crate::store::{Action, CartTotals, ProductFilter, Store, StoreState};
use crate::StorefrontError;
use forms::{new_product_id, CheckoutForm, ProductForm, QuoteForm, StatusForm};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Store>,
    pub checkout: Arc<CheckoutPolicy>,
}

impl AppState {
    pub fn new(store: Arc<Store>, checkout: CheckoutPolicy) -> Self { Self { store, checkout: Arc::new(checkout) } }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { Json(serde_json::json!({"status": "healthy", "service": "modestwear-storefront"})) }))
        .route("/api/v1/state", get(get_state))
        .route("/api/v1/dispatch", post(dispatch))
        .route("/api/v1/cart", get(get_cart))
        .route("/api/v1/wishlist", get(get_wishlist))
        .route("/api/v1/products", get(list_products).post(create_product))
        .route("/api/v1/products/:id", put(update_product).delete(delete_product))
        .route("/api/v1/checkout", post(checkout))
        .route("/api/v1/quotes", post(create_quote))
        .route("/api/v1/quotes/:id/status", put(update_quote_status))
        .route("/api/v1/orders/:id/status", put(update_order_status))
        .layer(TraceLayer::new_for_http()).layer(CorsLayer::permissive()).with_state(state)
}

type ApiResult<T> = Result<T, (StatusCode, String)>;

fn reject(err: StorefrontError) -> (StatusCode, String) {
    let status = match &err {
        StorefrontError::Validation(_) | StorefrontError::Order(_) => StatusCode::UNPROCESSABLE_ENTITY,
        StorefrontError::ProductNotFound | StorefrontError::OrderNotFound | StorefrontError::QuoteNotFound => StatusCode::NOT_FOUND,
    };
    (status, err.to_string())
}

fn validated<T: Validate>(form: T) -> ApiResult<T> {
    form.validate().map_err(|e| reject(e.into()))?;
    Ok(form)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StateView<'a> {
    #[serde(flatten)]
    state: &'a StoreState,
    #[serde(flatten)]
    totals: CartTotals,
}

fn snapshot(store: &Store) -> Response {
    let state = store.state();
    Json(StateView { state: &state, totals: CartTotals::of(state.cart.items()) }).into_response()
}

async fn get_state(State(s): State<AppState>) -> Response { snapshot(&s.store) }

async fn dispatch(State(s): State<AppState>, Json(action): Json<Action>) -> Response {
    s.store.dispatch(action);
    snapshot(&s.store)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CartView<'a> {
    items: &'a Cart,
    #[serde(flatten)]
    totals: CartTotals,
    is_open: bool,
}

async fn get_cart(State(s): State<AppState>) -> Response {
    let state = s.store.state();
    Json(CartView { items: &state.cart, totals: CartTotals::of(state.cart.items()), is_open: state.is_cart_open }).into_response()
}

async fn list_products(State(s): State<AppState>, Query(filter): Query<ProductFilter>) -> Json<Vec<Product>> {
    Json(s.store.state().products_matching(&filter).cloned().collect())
}

/// Wishlisted products that are still in the catalog.
async fn get_wishlist(State(s): State<AppState>) -> Json<Vec<Product>> {
    Json(s.store.state().wishlist_products().into_iter().cloned().collect())
}

async fn create_product(State(s): State<AppState>, Json(form): Json<ProductForm>) -> ApiResult<(StatusCode, Json<Product>)> {
    let product = validated(form)?.into_product(new_product_id(), Utc::now());
    s.store.dispatch(Action::AddProduct(product.clone()));
    tracing::info!(product_id = %product.id, "product added");
    Ok((StatusCode::CREATED, Json(product)))
}

async fn update_product(State(s): State<AppState>, Path(id): Path<String>, Json(form): Json<ProductForm>) -> ApiResult<Json<Product>> {
    let form = validated(form)?;
    let (updated, _) = s.store.transact(|state| match state.product(&id) {
        Some(existing) => {
            let product = form.into_product(id.clone(), existing.created_at);
            (vec![Action::UpdateProduct(product.clone())], Some(product))
        }
        None => (vec![], None),
    });
    updated.map(Json).ok_or_else(|| reject(StorefrontError::ProductNotFound))
}

async fn delete_product(State(s): State<AppState>, Path(id): Path<String>) -> StatusCode {
    s.store.dispatch(Action::DeleteProduct { id });
    StatusCode::NO_CONTENT
}

async fn checkout(State(s): State<AppState>, Json(form): Json<CheckoutForm>) -> ApiResult<(StatusCode, Json<Order>)> {
    let (customer, payment_method) = validated(form)?.into_parts();
    let policy = Arc::clone(&s.checkout);
    let (placed, _) = s.store.transact(|state| match Order::place(&state.cart, customer, payment_method, &policy) {
        Ok(order) => (vec![Action::AddOrder(order.clone()), Action::ClearCart, Action::ToggleCart { open: Some(false) }], Ok(order)),
        Err(e) => (vec![], Err(e)),
    });
    let order = placed.map_err(|e| reject(e.into()))?;
    tracing::info!(order_id = %order.id, total = %order.total, payment = %order.payment_method, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}

async fn create_quote(State(s): State<AppState>, Json(form): Json<QuoteForm>) -> ApiResult<(StatusCode, Json<QuoteRequest>)> {
    let quote = validated(form)?.into_quote();
    s.store.dispatch(Action::AddQuote(quote.clone()));
    tracing::info!(quote_id = %quote.id, units = quote.total_units(), "quote requested");
    Ok((StatusCode::CREATED, Json(quote)))
}

async fn update_quote_status(State(s): State<AppState>, Path(id): Path<String>, Json(form): Json<StatusForm<QuoteStatus>>) -> ApiResult<StatusCode> {
    let (found, _) = s.store.transact(|state| {
        if state.quotes.iter().any(|q| q.id == id) {
            (vec![Action::UpdateQuoteStatus { id: id.clone(), status: form.status }], true)
        } else {
            (vec![], false)
        }
    });
    if found { Ok(StatusCode::NO_CONTENT) } else { Err(reject(StorefrontError::QuoteNotFound)) }
}

async fn update_order_status(State(s): State<AppState>, Path(id): Path<String>, Json(form): Json<StatusForm<OrderStatus>>) -> ApiResult<StatusCode> {
    let (found, _) = s.store.transact(|state| {
        if state.orders.iter().any(|o| o.id == id) {
            (vec![Action::UpdateOrderStatus { id: id.clone(), status: form.status }], true)
        } else {
            (vec![], false)
        }
    });
    if found { Ok(StatusCode::NO_CONTENT) } else { Err(reject(StorefrontError::OrderNotFound)) }
}
