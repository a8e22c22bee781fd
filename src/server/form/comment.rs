use serde::Deserialize;
use utoipa::ToSchema;

use crate::server::form::{validate, Constraint, FieldSpec, FormErrors};

/// Comment submission.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CommentForm {
    #[serde(default)]
    pub content: String,
}

impl CommentForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        validate(&[FieldSpec {
            field: "content",
            value: &self.content,
            constraints: &[Constraint::Required, Constraint::Length { min: 1, max: 500 }],
        }])
    }
}
