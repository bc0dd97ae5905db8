use chrono::{DateTime, Local, SecondsFormat};
use serde::{Deserialize, Serialize, Serializer};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub price: f64,
}

impl LineItem {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    /// Rewrites the price to `price * (100 - percentage) / 100`, rounded to
    /// two decimals (half away from zero).
    pub fn discount(&mut self, percentage: f64) {
        let factor = (100.0 - percentage) / 100.0;
        self.price = round_cents(self.price * factor);
    }
}

pub fn round_cents(value: f64) -> f64 {
    let cents = value * 100.0;
    // too large to carry fractional cents
    if !cents.is_finite() {
        return value;
    }
    cents.round() / 100.0
}

fn serialize_micros<S>(timestamp: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Micros, false))
}

/// Document written by a save: the items plus the instant they were captured.
#[derive(Debug, Serialize, Clone)]
pub struct CartSnapshot {
    pub products: Vec<LineItem>,
    #[serde(serialize_with = "serialize_micros")]
    pub timestamp: DateTime<Local>,
}

impl CartSnapshot {
    pub fn new(products: Vec<LineItem>, timestamp: DateTime<Local>) -> Self {
        Self {
            products,
            timestamp,
        }
    }

    /// `cart_YYYYMMDD_HHMMSS.json`, derived from the capture timestamp.
    pub fn archive_file_name(&self) -> String {
        format!("cart_{}.json", self.timestamp.format("%Y%m%d_%H%M%S"))
    }
}

// Read side: only `products` matters, anything else in the document is ignored
#[derive(Debug, Deserialize, Default)]
pub struct StoredCart {
    #[serde(default)]
    pub products: Vec<LineItem>,
}
