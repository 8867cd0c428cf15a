//! Read queries for bakeries and baked goods against SQLite.

use crate::error::AppError;
use crate::models::{BakedGood, Bakery, BakeryRef, PricedGood};
use chrono::NaiveDateTime;
use sqlx::{FromRow, SqlitePool};

/// Baked good joined with its (optional) bakery. Columns from the LEFT JOIN are all nullable.
#[derive(FromRow)]
struct PricedGoodRow {
    id: i64,
    name: String,
    price: f64,
    created_at: NaiveDateTime,
    bakery_id: Option<i64>,
    ref_id: Option<i64>,
    ref_name: Option<String>,
}

impl From<PricedGoodRow> for PricedGood {
    fn from(row: PricedGoodRow) -> Self {
        let bakery = match (row.ref_id, row.ref_name) {
            (Some(id), Some(name)) => Some(BakeryRef { id, name }),
            _ => None,
        };
        PricedGood {
            good: BakedGood {
                id: row.id,
                name: row.name,
                price: row.price,
                created_at: row.created_at,
                bakery_id: row.bakery_id,
            },
            bakery,
        }
    }
}

// `id` is the rowid, so it doubles as storage order for equal prices.
// Price is cast because a table created elsewhere may store whole numbers as INTEGER.
const PRICED_GOODS_SQL: &str = r#"
    SELECT g.id, g.name, CAST(g.price AS REAL) AS price, g.created_at, g.bakery_id,
           b.id AS ref_id, b.name AS ref_name
    FROM baked_goods g
    LEFT JOIN bakeries b ON b.id = g.bakery_id
    ORDER BY g.price DESC, g.id ASC
"#;

pub struct CatalogService;

impl CatalogService {
    /// All bakeries in storage order.
    pub async fn list_bakeries(pool: &SqlitePool) -> Result<Vec<Bakery>, AppError> {
        let rows =
            sqlx::query_as::<_, Bakery>("SELECT id, name, created_at FROM bakeries ORDER BY id")
                .fetch_all(pool)
                .await?;
        Ok(rows)
    }

    /// Lookup by primary key. `None` is the normal "no such bakery" outcome.
    pub async fn get_bakery(pool: &SqlitePool, id: i64) -> Result<Option<Bakery>, AppError> {
        let row =
            sqlx::query_as::<_, Bakery>("SELECT id, name, created_at FROM bakeries WHERE id = ?")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row)
    }

    /// Goods owned by `bakery_id`, in storage order.
    pub async fn baked_goods_for_bakery(
        pool: &SqlitePool,
        bakery_id: i64,
    ) -> Result<Vec<BakedGood>, AppError> {
        let rows = sqlx::query_as::<_, BakedGood>(
            r#"
            SELECT id, name, CAST(price AS REAL) AS price, created_at, bakery_id
            FROM baked_goods
            WHERE bakery_id = ?
            ORDER BY id
            "#,
        )
        .bind(bakery_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    /// Bakery plus its goods, or `None` when the bakery does not exist.
    pub async fn get_bakery_with_goods(
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<(Bakery, Vec<BakedGood>)>, AppError> {
        let Some(bakery) = Self::get_bakery(pool, id).await? else {
            return Ok(None);
        };
        let goods = Self::baked_goods_for_bakery(pool, bakery.id).await?;
        Ok(Some((bakery, goods)))
    }

    /// Every baked good, most expensive first, with its bakery resolved.
    pub async fn list_baked_goods_by_price_desc(
        pool: &SqlitePool,
    ) -> Result<Vec<PricedGood>, AppError> {
        let rows = sqlx::query_as::<_, PricedGoodRow>(PRICED_GOODS_SQL)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(PricedGood::from).collect())
    }

    /// First row of [`Self::list_baked_goods_by_price_desc`]; `None` when the table is empty.
    pub async fn get_most_expensive_baked_good(
        pool: &SqlitePool,
    ) -> Result<Option<PricedGood>, AppError> {
        let sql = format!("{} LIMIT 1", PRICED_GOODS_SQL.trim_end());
        let row = sqlx::query_as::<_, PricedGoodRow>(&sql)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(PricedGood::from))
    }
}
