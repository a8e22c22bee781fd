use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response when one or more submitted form fields fail validation
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorDto {
    /// Failure messages keyed by field name
    pub errors: BTreeMap<String, Vec<String>>,
}
