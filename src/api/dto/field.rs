//! DTOs for the field update endpoint.

use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::application::services::Toast;
use crate::domain::entities::{Collection, EditableField, FieldUpdate};
use crate::error::AppError;

/// Request body for `PATCH /api/fields`.
///
/// ```json
/// {
///   "collection": "stats",
///   "id": "00000000-0000-0000-0000-000000000065",
///   "field": "value",
///   "value": "$130,000"
/// }
/// ```
///
/// Only the field name is checked; the value is passed through untouched.
#[derive(Debug, Deserialize)]
pub struct FieldUpdateRequest {
    pub collection: Collection,
    pub id: Uuid,
    pub field: String,
    pub value: String,
}

impl FieldUpdateRequest {
    /// Resolves the request into a single-field update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `field` is not an editable column
    /// of `collection`.
    pub fn into_update(self) -> Result<FieldUpdate, AppError> {
        let field = EditableField::parse(self.collection, &self.field).ok_or_else(|| {
            AppError::bad_request(
                "Field is not editable",
                json!({ "collection": self.collection, "field": self.field }),
            )
        })?;

        Ok(FieldUpdate::new(field, self.id, self.value))
    }
}

/// Response body for an update that reached the store.
#[derive(Debug, Serialize)]
pub struct FieldUpdateResponse {
    /// `"applied"` or `"failed"`.
    pub outcome: &'static str,
    pub toast: Toast,
}
