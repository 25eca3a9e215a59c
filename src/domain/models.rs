use serde::Serialize;
use serde_json::Value;
use std::fmt;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

/// Failure envelope for `--json` output. `products_tested` is only present on
/// check-run failures, where the report contract promises a zero count.
#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products_tested: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefectKind {
    InvalidTitle,
    InvalidPrice,
    InvalidRating,
}

impl fmt::Display for DefectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DefectKind::InvalidTitle => "Invalid Title",
            DefectKind::InvalidPrice => "Invalid Price",
            DefectKind::InvalidRating => "Invalid Rating",
        };
        f.write_str(label)
    }
}

/// One reported violation of a field-level rule against a product record.
/// Created transiently during validation, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct Defect {
    pub product_id: Option<i64>,
    pub kind: DefectKind,
    pub details: String,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.product_id {
            Some(id) => write!(f, "Product ID {}: {} - {}", id, self.kind, self.details),
            None => write!(f, "Product ID unknown: {} - {}", self.kind, self.details),
        }
    }
}

#[derive(Serialize)]
pub struct CheckReport {
    pub source: String,
    pub products_tested: usize,
    pub defects_found: usize,
    pub defects: Vec<Defect>,
}

#[derive(Serialize, Clone, Copy)]
pub struct RuleInfo {
    pub name: &'static str,
    pub field: &'static str,
    pub summary: &'static str,
}

/// Display projection of one catalog record plus the defects it triggers.
/// Fields stay optional because the record is externally supplied and may be
/// missing or mistyped anywhere.
#[derive(Serialize)]
pub struct ProductView {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub rate: Option<f64>,
    pub review_count: Option<i64>,
    pub defects: Vec<Defect>,
}

impl ProductView {
    pub fn from_record(record: &Value, defects: Vec<Defect>) -> Self {
        let rating = record.get("rating");
        Self {
            id: record.get("id").and_then(Value::as_i64),
            title: record
                .get("title")
                .and_then(Value::as_str)
                .map(str::to_string),
            price: record.get("price").and_then(Value::as_f64),
            rate: rating.and_then(|r| r.get("rate")).and_then(Value::as_f64),
            review_count: rating.and_then(|r| r.get("count")).and_then(Value::as_i64),
            defects,
        }
    }
}
