use async_trait::async_trait;
use bigdecimal::BigDecimal;
use chrono::Utc;
use num_traits::Zero;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;

use super::entity::{PRODUCT_COLUMNS, ProductEntity};
use crate::database_error;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        let stock = i32::try_from(product.stock).map_err(|_| RepositoryError::Persistence)?;

        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, stock, is_active, is_available, has_discount, discount_percentage, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                stock = EXCLUDED.stock,
                is_active = EXCLUDED.is_active,
                is_available = EXCLUDED.is_available,
                has_discount = EXCLUDED.has_discount,
                discount_percentage = EXCLUDED.discount_percentage,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(&product.price)
        .bind(stock)
        .bind(product.is_active)
        .bind(product.is_available)
        .bind(product.has_discount)
        .bind(&product.discount_percentage)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        Ok(())
    }

    async fn get_purchasable(&self) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active AND is_available ORDER BY name, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn apply_discount_to_many(
        &self,
        ids: &[Uuid],
        percentage: &BigDecimal,
    ) -> Result<u64, RepositoryError> {
        let result = sqlx::query(
            r#"UPDATE products
            SET discount_percentage = $2, has_discount = $3, updated_at = $4
            WHERE id = ANY($1)"#,
        )
        .bind(ids)
        .bind(percentage)
        .bind(*percentage > BigDecimal::zero())
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(result.rows_affected())
    }

    async fn set_related(&self, id: Uuid, related_ids: &[Uuid]) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        sqlx::query("DELETE FROM product_relations WHERE product_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;

        sqlx::query(
            r#"INSERT INTO product_relations (product_id, related_id)
            SELECT $1, p.id FROM products p WHERE p.id = ANY($2) AND p.id <> $1
            ON CONFLICT DO NOTHING"#,
        )
        .bind(id)
        .bind(related_ids)
        .execute(&mut *tx)
        .await
        .map_err(database_error)?;

        tx.commit().await.map_err(database_error)?;
        Ok(())
    }

    async fn get_related_to(
        &self,
        ids: &[Uuid],
        limit: u32,
    ) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            r#"SELECT {PRODUCT_COLUMNS} FROM products
            WHERE is_active AND is_available
                AND id IN (SELECT related_id FROM product_relations WHERE product_id = ANY($1))
                AND NOT (id = ANY($1))
            ORDER BY name, id
            LIMIT $2"#
        ))
        .bind(ids)
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_newest_purchasable(&self, limit: u32) -> Result<Vec<Product>, RepositoryError> {
        let entities = sqlx::query_as::<_, ProductEntity>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE is_active AND is_available ORDER BY created_at DESC, id DESC LIMIT $1"
        ))
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
