//! Parsing helpers for id-list query parameters.

use typeahead_core::RecordId;

use crate::error::{ApiError, ApiResult};

/// Parse a comma-separated id list.
///
/// Every token must parse as an id; one bad token fails the whole list.
/// Surrounding whitespace is tolerated, empty tokens are not.
pub fn parse_id_csv(raw: &str) -> ApiResult<Vec<RecordId>> {
    raw.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<RecordId>().map_err(|_| {
                ApiError::invalid_input(format!("Invalid id in list: '{}'", token))
            })
        })
        .collect()
}
