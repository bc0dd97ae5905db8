use std::fmt;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    models::line_item::{CartSnapshot, LineItem, StoredCart},
    services::{
        clock::{Clock, SystemClock},
        storage,
    },
};

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Price cannot be negative: {price}")]
    InvalidPrice { price: f64 },

    #[error("Discount must be between 0 and 100 percent: {percentage}")]
    InvalidDiscount { percentage: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Ordered list of line items with totals, discounts and JSON persistence.
pub struct Cart {
    items: Vec<LineItem>,
    archive_on_save: bool,
    clock: Arc<dyn Clock>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cart")
            .field("items", &self.items)
            .field("archive_on_save", &self.archive_on_save)
            .finish_non_exhaustive()
    }
}

impl Cart {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            archive_on_save: true,
            clock: Arc::new(SystemClock),
        }
    }

    pub fn with_archive_on_save(mut self, archive_on_save: bool) -> Self {
        self.archive_on_save = archive_on_save;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all current prices, unrounded. `0.0` for an empty cart.
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Appends a new item. Duplicate names are kept as separate items.
    pub fn add_product(&mut self, name: impl Into<String>, price: f64) -> Result<(), CartError> {
        let name = name.into();
        if !price.is_finite() || price < 0.0 {
            warn!("Rejected product '{}' with price {}", name, price);
            return Err(CartError::InvalidPrice { price });
        }

        debug!("Adding product '{}' at {}", name, price);
        self.items.push(LineItem::new(name, price));
        Ok(())
    }

    /// Removes every item whose name matches exactly. Nothing matching is not an error.
    pub fn remove_product(&mut self, name: &str) {
        let before = self.items.len();
        self.items.retain(|item| item.name != name);
        debug!(
            "Removed {} item(s) named '{}'",
            before - self.items.len(),
            name
        );
    }

    /// Discounts every item by `percentage` (0 to 100 inclusive), rounding each
    /// new price to cents.
    pub fn apply_discount(&mut self, percentage: f64) -> Result<(), CartError> {
        if !(0.0..=100.0).contains(&percentage) {
            warn!("Rejected discount of {}%", percentage);
            return Err(CartError::InvalidDiscount { percentage });
        }

        for item in &mut self.items {
            item.discount(percentage);
        }
        info!(
            "Applied {}% discount to {} item(s)",
            percentage,
            self.items.len()
        );
        Ok(())
    }

    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::new(self.items.clone(), self.clock.now())
    }

    /// Writes the cart to `path`, then (when archiving is on) a copy to
    /// `<dirname(path)>/archives/cart_YYYYMMDD_HHMMSS.json`.
    ///
    /// The timestamp is taken once and used for both the document and the
    /// archive name. If the archive write fails the primary file has already
    /// been written and stays in place; the archive error is returned.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), CartError> {
        let path = path.as_ref();
        let snapshot = self.snapshot();

        storage::write_json(path, &snapshot)?;
        info!(
            "Saved cart with {} item(s) to {}",
            snapshot.products.len(),
            path.display()
        );

        if self.archive_on_save {
            let archive_path = storage::archive_dir(path).join(snapshot.archive_file_name());
            storage::write_json(&archive_path, &snapshot)?;
            info!("Archived cart to {}", archive_path.display());
        }

        Ok(())
    }

    /// Replaces the items with the `products` of the document at `path`.
    /// On any error the cart is left as it was.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), CartError> {
        let path = path.as_ref();
        let stored: StoredCart = storage::read_json(path)?;

        self.items = stored.products;
        info!(
            "Loaded cart with {} item(s) from {}",
            self.items.len(),
            path.display()
        );
        Ok(())
    }
}
