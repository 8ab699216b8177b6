use axum::body::Bytes;

use fulfilment_core::{DomainError, is_blank};
use fulfilment_warehouses::WarehousePayload;

use crate::app::errors;

/// Decode a warehouse request body.
///
/// An empty body or a JSON `null` is "no body" (`None`) and left for the use
/// case to reject. Anything that is not a JSON object of the payload shape is
/// an invalid request.
pub fn parse_payload(body: &Bytes) -> Result<Option<WarehousePayload>, axum::response::Response> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice::<Option<WarehousePayload>>(body).map_err(|e| {
        tracing::debug!(error = %e, "malformed request body");
        errors::domain_error_to_response(DomainError::invalid_request(format!(
            "Malformed JSON body: {e}"
        )))
    })
}

/// The replace route names the unit in its path; a body that omits
/// `businessUnitCode` inherits it.
pub fn with_path_code(payload: Option<WarehousePayload>, path_code: &str) -> Option<WarehousePayload> {
    payload.map(|mut p| {
        if p.business_unit_code.is_none() && !is_blank(path_code) {
            p.business_unit_code = Some(path_code.to_string());
        }
        p
    })
}
