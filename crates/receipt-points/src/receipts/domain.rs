use serde::{Deserialize, Serialize};

/// Opaque identifier assigned when a receipt is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A purchased line on a receipt. Prices stay in their submitted string form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// Stored receipt snapshot. Never mutated once the repository accepts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub id: ReceiptId,
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

/// Request body accepted by the intake endpoint. A caller-supplied `id` is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptSubmission {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub total: String,
    pub items: Vec<Item>,
}

impl ReceiptSubmission {
    /// Checks presence and shape only. Range checks belong to the scoring rules.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("retailer", &self.retailer)?;
        require("total", &self.total)?;
        require("purchaseDate", &self.purchase_date)?;
        require("purchaseTime", &self.purchase_time)?;

        if !is_date_shaped(self.purchase_date.trim()) {
            return Err(ValidationError::DateShape(self.purchase_date.clone()));
        }
        if !is_time_shaped(self.purchase_time.trim()) {
            return Err(ValidationError::TimeShape(self.purchase_time.clone()));
        }

        for (index, item) in self.items.iter().enumerate() {
            if item.short_description.trim().is_empty() {
                return Err(ValidationError::ItemField {
                    index,
                    field: "shortDescription",
                });
            }
            if item.price.trim().is_empty() {
                return Err(ValidationError::ItemField {
                    index,
                    field: "price",
                });
            }
        }

        Ok(())
    }

    pub fn into_receipt(self, id: ReceiptId) -> Receipt {
        Receipt {
            id,
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            total: self.total,
            items: self.items,
        }
    }
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

// DDDD-DD-DD
fn is_date_shaped(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

// H:MM or HH:MM
fn is_time_shaped(value: &str) -> bool {
    match value.split_once(':') {
        Some((hour, minute)) => {
            (1..=2).contains(&hour.len())
                && minute.len() == 2
                && hour.bytes().all(|byte| byte.is_ascii_digit())
                && minute.bytes().all(|byte| byte.is_ascii_digit())
        }
        None => false,
    }
}

/// Input binding failures reported before a receipt reaches storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("field '{0}' is required")]
    MissingField(&'static str),
    #[error("item {index} is missing '{field}'")]
    ItemField { index: usize, field: &'static str },
    #[error("purchaseDate '{0}' must be formatted YYYY-MM-DD")]
    DateShape(String),
    #[error("purchaseTime '{0}' must be formatted HH:MM")]
    TimeShape(String),
}
