use serde_json::Value;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("API request failed with status code: {0}")]
    BadStatus(u16),
    #[error("Expected a list of products, got something else")]
    NotAnArray,
    #[error("Failed to parse API response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Network error occurred: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("product not found: {0}")]
    ProductNotFound(i64),
}

impl CatalogError {
    /// Stable code used in the `--json` error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::BadStatus(_) => "BAD_STATUS",
            CatalogError::NotAnArray => "NOT_AN_ARRAY",
            CatalogError::Decode(_) => "DECODE",
            CatalogError::Transport(_) => "TRANSPORT",
            CatalogError::Io(_) => "IO",
            CatalogError::ProductNotFound(_) => "NOT_FOUND",
        }
    }
}

/// Products plus the HTTP status the fetch observed. `status` is `None` for
/// local sources, which have no status line to report.
pub struct LoadedCatalog {
    pub products: Vec<Value>,
    pub status: Option<u16>,
}

pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

pub fn resolve_catalog_file(source: &str) -> PathBuf {
    let p = Path::new(source);
    if p.is_dir() {
        p.join("products.json")
    } else {
        p.to_path_buf()
    }
}

fn fetch_catalog_text(url: &str, timeout: Duration) -> Result<(String, u16), CatalogError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()?;
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(CatalogError::BadStatus(status.as_u16()));
    }
    let body = resp.text()?;
    debug!(url, status = status.as_u16(), bytes = body.len(), "fetched catalog");
    Ok((body, status.as_u16()))
}

/// One synchronous load of the whole catalog: fetch or read, then decode.
/// The body must be a JSON array; each element stays a raw `Value` so that
/// malformed fields surface as validation defects, not decode errors.
pub fn load_products(source: &str, timeout: Duration) -> Result<LoadedCatalog, CatalogError> {
    let (raw, status) = if is_remote(source) {
        let (body, status) = fetch_catalog_text(source, timeout)?;
        (body, Some(status))
    } else {
        let file = resolve_catalog_file(source);
        debug!(file = %file.display(), "reading local catalog");
        (std::fs::read_to_string(file)?, None)
    };

    let decoded: Value = serde_json::from_str(&raw)?;
    match decoded {
        Value::Array(products) => Ok(LoadedCatalog { products, status }),
        _ => Err(CatalogError::NotAnArray),
    }
}

pub fn product_id(record: &Value) -> Option<i64> {
    record.get("id").and_then(Value::as_i64)
}

pub fn find_product(products: &[Value], id: i64) -> Result<&Value, CatalogError> {
    products
        .iter()
        .find(|p| product_id(p) == Some(id))
        .ok_or(CatalogError::ProductNotFound(id))
}
