//! Response Mapping
//!
//! Status and body of an API response turned into records or a `BossError`.
//! Kept free of I/O so every branch is unit-tested.

use serde_json::Value;

use crate::error::{BossError, BossResult};
use crate::models::{BossDetail, BossPage, BossSummary, Envelope};

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

fn envelope(body: &str) -> BossResult<Envelope> {
    serde_json::from_str(body).map_err(|e| BossError::malformed(e.to_string()))
}

/// Items that are not objects still get a row, with every fallback applied
fn summary(item: Value) -> BossSummary {
    serde_json::from_value(item).unwrap_or_default()
}

/// `GET /bosses?page=..`: non-2xx is `Fetch`, `data` must be an array
pub fn page_from_response(status: u16, body: &str) -> BossResult<BossPage> {
    if !is_success(status) {
        return Err(BossError::Fetch { status });
    }
    let envelope = envelope(body)?;
    match envelope.data {
        Some(Value::Array(items)) => Ok(BossPage {
            bosses: items.into_iter().map(summary).collect(),
            total: envelope.total,
        }),
        _ => Err(BossError::malformed("`data` is not an array")),
    }
}

/// `GET /bosses/<id>`: non-2xx is `NotFound`, `data` must be a record
pub fn boss_from_response(status: u16, body: &str) -> BossResult<BossDetail> {
    if !is_success(status) {
        return Err(BossError::NotFound { status });
    }
    match envelope(body)?.data {
        None | Some(Value::Null) => Err(BossError::malformed("missing `data` field")),
        Some(data) => serde_json::from_value(data).map_err(|e| BossError::malformed(e.to_string())),
    }
}
