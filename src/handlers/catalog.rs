//! Catalog handlers: bakery listing and lookup, baked goods by price.
//! Each handler runs one lookup against the store and shapes the rows into a response body.

use crate::error::AppError;
use crate::extractors::PathId;
use crate::models::{BakedGood, Bakery, PricedGood};
use crate::response::ok;
use crate::service::CatalogService;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{Html, Response},
};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

pub const INDEX_HTML: &str = "<h1>Bakery GET API</h1>";

/// ISO-8601 without offset; fractional seconds only when present, as microseconds.
pub fn iso8601(ts: &NaiveDateTime) -> String {
    if ts.nanosecond() == 0 {
        ts.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

#[derive(Debug, Serialize)]
pub struct BakeryBody {
    pub id: i64,
    pub name: String,
    pub created_at: String,
}

impl From<&Bakery> for BakeryBody {
    fn from(b: &Bakery) -> Self {
        Self {
            id: b.id,
            name: b.name.clone(),
            created_at: iso8601(&b.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BakedGoodBody {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

impl From<&BakedGood> for BakedGoodBody {
    fn from(g: &BakedGood) -> Self {
        Self {
            id: g.id,
            name: g.name.clone(),
            price: g.price,
            created_at: iso8601(&g.created_at),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BakeryDetailBody {
    #[serde(flatten)]
    pub bakery: BakeryBody,
    pub baked_goods: Vec<BakedGoodBody>,
}

/// Nested bakery summary; both fields are `null` when the good has no bakery.
#[derive(Debug, Default, Serialize)]
pub struct BakerySummary {
    pub id: Option<i64>,
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PricedGoodBody {
    #[serde(flatten)]
    pub good: BakedGoodBody,
    pub bakery: BakerySummary,
}

impl From<&PricedGood> for PricedGoodBody {
    fn from(p: &PricedGood) -> Self {
        let bakery = p
            .bakery
            .as_ref()
            .map(|b| BakerySummary {
                id: Some(b.id),
                name: Some(b.name.clone()),
            })
            .unwrap_or_default();
        Self {
            good: BakedGoodBody::from(&p.good),
            bakery,
        }
    }
}

/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// GET /bakeries
pub async fn list_bakeries(State(state): State<AppState>) -> Result<Response, AppError> {
    let bakeries = CatalogService::list_bakeries(&state.pool).await?;
    let body: Vec<BakeryBody> = bakeries.iter().map(BakeryBody::from).collect();
    Ok(ok(&body))
}

/// GET /bakeries/:id
pub async fn bakery_by_id(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<Response, AppError> {
    let (bakery, goods) = CatalogService::get_bakery_with_goods(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound("Bakery not found"))?;
    let body = BakeryDetailBody {
        bakery: BakeryBody::from(&bakery),
        baked_goods: goods.iter().map(BakedGoodBody::from).collect(),
    };
    Ok(ok(&body))
}

/// GET /baked_goods/by_price
pub async fn baked_goods_by_price(State(state): State<AppState>) -> Result<Response, AppError> {
    let goods = CatalogService::list_baked_goods_by_price_desc(&state.pool).await?;
    let body: Vec<PricedGoodBody> = goods.iter().map(PricedGoodBody::from).collect();
    Ok(ok(&body))
}

/// GET /baked_goods/most_expensive
pub async fn most_expensive_baked_good(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let top = CatalogService::get_most_expensive_baked_good(&state.pool)
        .await?
        .ok_or(AppError::NotFound("No baked goods found"))?;
    Ok(ok(&PricedGoodBody::from(&top)))
}
