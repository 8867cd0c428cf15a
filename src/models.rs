//! Row types for the two tables.

use chrono::NaiveDateTime;
use sqlx::FromRow;

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct Bakery {
    pub id: i64,
    pub name: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, FromRow)]
pub struct BakedGood {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub created_at: NaiveDateTime,
    pub bakery_id: Option<i64>,
}

/// The owning bakery as seen from a baked good. Identity and name only.
#[derive(Clone, Debug, PartialEq)]
pub struct BakeryRef {
    pub id: i64,
    pub name: String,
}

/// A baked good with its back-reference resolved. `bakery` is `None` when the
/// good has no `bakery_id` or the referenced row does not exist.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedGood {
    pub good: BakedGood,
    pub bakery: Option<BakeryRef>,
}
