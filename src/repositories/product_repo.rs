//! Product repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::error::AppError;
use crate::models::{NewProduct, Product};
use crate::repositories::UnitOfWork;

/// Repository view borrowing the request's unit of work.
pub struct ProductRepository<'uow> {
    uow: &'uow mut UnitOfWork,
}

impl<'uow> ProductRepository<'uow> {
    pub(super) fn new(uow: &'uow mut UnitOfWork) -> Self {
        Self { uow }
    }

    /// Single-row lookup by primary key; absence is a valid outcome.
    pub async fn get_by_id(&mut self, product_id: i32) -> Result<Option<Product>, AppError> {
        use crate::schema::products::dsl::*;

        products
            .filter(id.eq(product_id))
            .select(Product::as_select())
            .first(self.uow.conn())
            .await
            .optional()
            .map_err(AppError::from)
    }

    /// Returns every product, in no guaranteed order.
    pub async fn get_all(&mut self) -> Result<Vec<Product>, AppError> {
        use crate::schema::products::dsl::*;

        products
            .select(Product::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Case-insensitive name search, evaluated by the store.
    pub async fn find_by_name(&mut self, term: &str) -> Result<Vec<Product>, AppError> {
        use crate::schema::products::dsl::*;

        products
            .filter(name.ilike(format!("%{term}%")))
            .select(Product::as_select())
            .load(self.uow.conn())
            .await
            .map_err(AppError::from)
    }

    /// Stages an insert inside the open transaction and returns the created
    /// row with its store-assigned id.
    pub async fn add(&mut self, new_product: NewProduct) -> Result<Product, AppError> {
        use crate::schema::products::dsl::*;

        let created = diesel::insert_into(products)
            .values(&new_product)
            .returning(Product::as_returning())
            .get_result(self.uow.conn())
            .await?;
        self.uow.record_rows(1);
        Ok(created)
    }

    /// Stages a full-row replace keyed by the entity's id. A missing id
    /// affects zero rows and surfaces as not-found.
    pub async fn update(&mut self, product: Product) -> Result<(), AppError> {
        use crate::schema::products::dsl::*;

        let affected = diesel::update(products.find(product.id))
            .set(&product)
            .execute(self.uow.conn())
            .await?;
        if affected == 0 {
            return Err(AppError::not_found("product", product.id));
        }
        self.uow.record_rows(affected);
        Ok(())
    }

    /// Stages a delete of the given instance.
    pub async fn remove(&mut self, product: Product) -> Result<(), AppError> {
        use crate::schema::products::dsl::*;

        let affected = diesel::delete(products.find(product.id))
            .execute(self.uow.conn())
            .await?;
        self.uow.record_rows(affected);
        Ok(())
    }
}
