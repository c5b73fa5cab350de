use crate::error::{PerxError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Statuses at or above this are transport-level failures, not API errors
const TRANSPORT_ERROR_FLOOR: u16 = 450;

/// Pagination metadata attached to collection responses
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerxListMeta {
    /// Total number of entities across all pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,

    /// Page size used for this response
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,

    /// Page number of this response (1-based)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Total number of pages at the current size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    /// Voucher listings echo the requested `type` filter back
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<String>,
}

/// Collection payload plus pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerxList<T> {
    /// Entities on this page
    pub data: Vec<T>,

    /// Pagination metadata
    #[serde(default)]
    pub meta: PerxListMeta,
}

/// Single-entity `data` envelope used by most endpoints
#[derive(Debug, Deserialize)]
pub(crate) struct ObjectEnvelope<T> {
    pub data: T,
}

/// Error fields a payload may carry even on a success status
#[derive(Debug, Default, Deserialize)]
struct ErrorEnvelope {
    error: Option<String>,
    error_description: Option<String>,
    message: Option<String>,
}

/// Deserialize a response body into `T` after translating the HTTP status.
///
/// Statuses below 450 pass through the transport untouched, so all
/// interpretation happens here: a failure status becomes [`PerxError::Api`],
/// 450 and above become [`PerxError::Http`], and a success payload that
/// reports a service-level error becomes [`PerxError::Rejected`].
pub(crate) fn parse_checked<T>(status: StatusCode, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    if status.as_u16() >= TRANSPORT_ERROR_FLOOR {
        return Err(PerxError::Http {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    if !status.is_success() {
        return Err(PerxError::Api {
            status: status.as_u16(),
            body: body.to_string(),
        });
    }

    if let Ok(probe) = serde_json::from_str::<ErrorEnvelope>(body) {
        if let Some(code) = probe.error {
            let description = probe
                .error_description
                .or(probe.message)
                .unwrap_or_default();
            return Err(PerxError::Rejected { code, description });
        }
    }

    serde_json::from_str(body).map_err(PerxError::from)
}

/// Parse a single-entity response and unwrap its `data` envelope
pub(crate) fn parse_object<T>(status: StatusCode, body: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: ObjectEnvelope<T> = parse_checked(status, body)?;
    Ok(envelope.data)
}

/// Parse a collection response into a [`PerxList`]
pub(crate) fn parse_list<T>(status: StatusCode, body: &str) -> Result<PerxList<T>>
where
    T: DeserializeOwned,
{
    parse_checked(status, body)
}
