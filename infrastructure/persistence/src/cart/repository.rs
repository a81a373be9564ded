use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::{Cart, LineIncrement, MAX_LINE_QUANTITY};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartEntity, CartLineEntity};
use crate::database_error;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_or_create(&self, user_id: &UserId) -> Result<Cart, RepositoryError> {
        // One cart per user; concurrent first requests converge on the same row.
        sqlx::query(
            "INSERT INTO carts (id, user_id, created_at) VALUES ($1, $2, $3) ON CONFLICT (user_id) DO NOTHING",
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_str())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        let cart = sqlx::query_as::<_, CartEntity>(
            "SELECT id, user_id, created_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        let lines = sqlx::query_as::<_, CartLineEntity>(
            r#"SELECT ci.product_id, p.name, p.price, p.has_discount, p.discount_percentage, ci.quantity
            FROM cart_items ci
            JOIN products p ON p.id = ci.product_id
            WHERE ci.cart_id = $1
            ORDER BY ci.added_at, ci.id"#,
        )
        .bind(cart.id)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(cart.into_domain(lines))
    }

    async fn merge_lines(
        &self,
        cart_id: Uuid,
        increments: &[LineIncrement],
    ) -> Result<Vec<u32>, RepositoryError> {
        // Dropping the transaction on an early return rolls it back.
        let mut tx = self.pool.begin().await.map_err(database_error)?;
        let mut line_quantities = Vec::with_capacity(increments.len());

        for increment in increments {
            let quantity = i32::try_from(increment.quantity.min(MAX_LINE_QUANTITY))
                .map_err(|_| RepositoryError::Persistence)?;

            let line_quantity: i32 = sqlx::query_scalar(
                r#"INSERT INTO cart_items (id, cart_id, product_id, quantity, added_at)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (cart_id, product_id) DO UPDATE SET
                    quantity = LEAST(cart_items.quantity::BIGINT + EXCLUDED.quantity, $6)::INTEGER
                RETURNING quantity"#,
            )
            .bind(Uuid::new_v4())
            .bind(cart_id)
            .bind(increment.product_id)
            .bind(quantity)
            .bind(Utc::now())
            .bind(i64::from(MAX_LINE_QUANTITY))
            .fetch_one(&mut *tx)
            .await
            .map_err(database_error)?;

            line_quantities.push(
                u32::try_from(line_quantity).map_err(|_| RepositoryError::Persistence)?,
            );
        }

        tx.commit().await.map_err(database_error)?;
        Ok(line_quantities)
    }

    async fn remove_line(&self, cart_id: Uuid, product_id: Uuid) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM cart_items WHERE cart_id = $1 AND product_id = $2")
            .bind(cart_id)
            .bind(product_id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(result.rows_affected())
    }
}
