//! Catalog operations: categories, brands and products.
//!
//! All three collections follow the same pattern. Lists load with a
//! loading-flag bracket and swallow failures (empty list + error
//! notification). Mutations notify, re-throw on failure, and reload the full
//! list afterwards instead of patching locally - the backend computes derived
//! fields (stock totals, denormalized names) that a local patch would skip.

use shopsync_core::{
    Brand, BrandId, BrandInput, Category, CategoryId, CategoryInput, Product, ProductId,
    ProductInput,
};

use crate::error::StoreError;
use crate::Store;

impl Store {
    // ------------------------------------------------------------------
    // Categories
    // ------------------------------------------------------------------

    /// Replace the category list from the backend. Safe to call
    /// concurrently with itself; the last response to arrive wins.
    pub async fn load_categories(&self) {
        self.inner().categories.write().await.loading = true;
        let result = self.inner().api.fetch_categories().await;

        let mut slice = self.inner().categories.write().await;
        slice.loading = false;
        match result {
            Ok(items) => slice.items = items,
            Err(err) => {
                slice.items = Vec::new();
                drop(slice);
                tracing::warn!(error = %err, "failed to load categories");
                self.inner().notifier.error("Could not load categories.");
            }
        }
    }

    /// Fetch one category into `selected`. No-ops on an empty id.
    pub async fn load_category_detail(&self, id: &CategoryId) -> Option<Category> {
        if id.is_empty() {
            return None;
        }
        self.inner().categories.write().await.detail_loading = true;
        let result = self.inner().api.fetch_category(id).await;

        let mut slice = self.inner().categories.write().await;
        slice.detail_loading = false;
        match result {
            Ok(category) => {
                slice.selected = Some(category.clone());
                Some(category)
            }
            Err(err) => {
                slice.selected = None;
                drop(slice);
                tracing::warn!(category = %id, error = %err, "failed to load category detail");
                self.inner().notifier.error("Could not load the category details.");
                None
            }
        }
    }

    /// Create a category, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, StoreError> {
        match self.inner().api.create_category(input).await {
            Ok(category) => {
                self.inner().notifier.success("Category created.");
                self.load_categories().await;
                Ok(category)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create category");
                self.inner().notifier.error("Could not create the category.");
                Err(err.into())
            }
        }
    }

    /// Update a category, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_category(
        &self,
        id: &CategoryId,
        input: &CategoryInput,
    ) -> Result<Category, StoreError> {
        match self.inner().api.update_category(id, input).await {
            Ok(category) => {
                self.inner().notifier.info("Category updated.");
                self.load_categories().await;
                Ok(category)
            }
            Err(err) => {
                tracing::error!(category = %id, error = %err, "failed to update category");
                self.inner().notifier.error("Could not update the category.");
                Err(err.into())
            }
        }
    }

    /// Delete a category, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn delete_category(&self, id: &CategoryId) -> Result<(), StoreError> {
        match self.inner().api.delete_category(id).await {
            Ok(()) => {
                self.inner().notifier.info("Category removed.");
                self.load_categories().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(category = %id, error = %err, "failed to delete category");
                self.inner().notifier.error("Could not remove the category.");
                Err(err.into())
            }
        }
    }

    // ------------------------------------------------------------------
    // Brands
    // ------------------------------------------------------------------

    /// Replace the brand list from the backend.
    pub async fn load_brands(&self) {
        self.inner().brands.write().await.loading = true;
        let result = self.inner().api.fetch_brands().await;

        let mut slice = self.inner().brands.write().await;
        slice.loading = false;
        match result {
            Ok(items) => slice.items = items,
            Err(err) => {
                slice.items = Vec::new();
                drop(slice);
                tracing::warn!(error = %err, "failed to load brands");
                self.inner().notifier.error("Could not load brands.");
            }
        }
    }

    /// Fetch one brand into `selected`. No-ops on an empty id.
    pub async fn load_brand_detail(&self, id: &BrandId) -> Option<Brand> {
        if id.is_empty() {
            return None;
        }
        self.inner().brands.write().await.detail_loading = true;
        let result = self.inner().api.fetch_brand(id).await;

        let mut slice = self.inner().brands.write().await;
        slice.detail_loading = false;
        match result {
            Ok(brand) => {
                slice.selected = Some(brand.clone());
                Some(brand)
            }
            Err(err) => {
                slice.selected = None;
                drop(slice);
                tracing::warn!(brand = %id, error = %err, "failed to load brand detail");
                self.inner().notifier.error("Could not load the brand details.");
                None
            }
        }
    }

    /// Create a brand, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn create_brand(&self, input: &BrandInput) -> Result<Brand, StoreError> {
        match self.inner().api.create_brand(input).await {
            Ok(brand) => {
                self.inner().notifier.success("Brand created.");
                self.load_brands().await;
                Ok(brand)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create brand");
                self.inner().notifier.error("Could not create the brand.");
                Err(err.into())
            }
        }
    }

    /// Update a brand, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_brand(&self, id: &BrandId, input: &BrandInput) -> Result<Brand, StoreError> {
        match self.inner().api.update_brand(id, input).await {
            Ok(brand) => {
                self.inner().notifier.info("Brand updated.");
                self.load_brands().await;
                Ok(brand)
            }
            Err(err) => {
                tracing::error!(brand = %id, error = %err, "failed to update brand");
                self.inner().notifier.error("Could not update the brand.");
                Err(err.into())
            }
        }
    }

    /// Delete a brand, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn delete_brand(&self, id: &BrandId) -> Result<(), StoreError> {
        match self.inner().api.delete_brand(id).await {
            Ok(()) => {
                self.inner().notifier.info("Brand removed.");
                self.load_brands().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(brand = %id, error = %err, "failed to delete brand");
                self.inner().notifier.error("Could not remove the brand.");
                Err(err.into())
            }
        }
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// Replace the product list from the backend.
    pub async fn load_products(&self) {
        self.inner().products.write().await.loading = true;
        let result = self.inner().api.fetch_products().await;

        let mut slice = self.inner().products.write().await;
        slice.loading = false;
        match result {
            Ok(items) => slice.items = items,
            Err(err) => {
                slice.items = Vec::new();
                drop(slice);
                tracing::warn!(error = %err, "failed to load products");
                self.inner().notifier.error("Could not load products.");
            }
        }
    }

    /// Fetch one product (with variants) into `selected`. No-ops on an
    /// empty id.
    pub async fn load_product_detail(&self, id: &ProductId) -> Option<Product> {
        if id.is_empty() {
            return None;
        }
        self.inner().products.write().await.detail_loading = true;
        let result = self.inner().api.fetch_product(id).await;

        let mut slice = self.inner().products.write().await;
        slice.detail_loading = false;
        match result {
            Ok(product) => {
                slice.selected = Some(product.clone());
                Some(product)
            }
            Err(err) => {
                slice.selected = None;
                drop(slice);
                tracing::warn!(product = %id, error = %err, "failed to load product detail");
                self.inner().notifier.error("Could not load the product details.");
                None
            }
        }
    }

    /// Create a product, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, StoreError> {
        match self.inner().api.create_product(input).await {
            Ok(product) => {
                self.inner().notifier.success("Product created.");
                self.load_products().await;
                Ok(product)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to create product");
                self.inner().notifier.error("Could not create the product.");
                Err(err.into())
            }
        }
    }

    /// Update a product, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn update_product(
        &self,
        id: &ProductId,
        input: &ProductInput,
    ) -> Result<Product, StoreError> {
        match self.inner().api.update_product(id, input).await {
            Ok(product) => {
                self.inner().notifier.info("Product updated.");
                self.load_products().await;
                Ok(product)
            }
            Err(err) => {
                tracing::error!(product = %id, error = %err, "failed to update product");
                self.inner().notifier.error("Could not update the product.");
                Err(err.into())
            }
        }
    }

    /// Delete a product, then reload the list.
    ///
    /// # Errors
    ///
    /// Re-throws the underlying [`shopsync_client::ApiError`].
    pub async fn delete_product(&self, id: &ProductId) -> Result<(), StoreError> {
        match self.inner().api.delete_product(id).await {
            Ok(()) => {
                self.inner().notifier.info("Product removed.");
                self.load_products().await;
                Ok(())
            }
            Err(err) => {
                tracing::error!(product = %id, error = %err, "failed to delete product");
                self.inner().notifier.error("Could not remove the product.");
                Err(err.into())
            }
        }
    }
}
