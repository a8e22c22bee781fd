use serde::Deserialize;
use utoipa::ToSchema;

use crate::server::form::{validate, Constraint, FieldSpec, FormErrors};

/// Login submission. Whether the credentials are any good is the auth
/// service's concern.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        validate(&[
            FieldSpec {
                field: "username",
                value: &self.username,
                constraints: &[Constraint::Required],
            },
            FieldSpec {
                field: "password",
                value: &self.password,
                constraints: &[Constraint::Required],
            },
        ])
    }
}
