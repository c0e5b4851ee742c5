//! HTTP request handlers, one module per resource.

pub mod customers;
pub mod health;
pub mod order_items;
pub mod orders;
pub mod products;

use crate::error::AppError;

/// Update requests must address the same entity in the path and the
/// payload; anything else is a bad request, checked before any store
/// access.
pub(crate) fn ensure_matching_id(path_id: i32, payload_id: i32) -> Result<(), AppError> {
    if path_id != payload_id {
        return Err(AppError::bad_request(format!(
            "Path id {path_id} does not match payload id {payload_id}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_ids_pass() {
        assert!(ensure_matching_id(1, 1).is_ok());
    }

    #[test]
    fn mismatched_ids_are_bad_requests() {
        let error = ensure_matching_id(1, 2).unwrap_err();
        assert!(matches!(error, AppError::BadRequest { .. }));
    }
}
