use serde::Deserialize;
use utoipa::ToSchema;

use crate::server::form::{validate, Constraint, FieldSpec, FormErrors};

/// Signup submission.
///
/// Shape rules only; the duplicate username/email lookups run in the auth
/// service and report in the same per-field form.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignupForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormErrors> {
        validate(&[
            FieldSpec {
                field: "username",
                value: &self.username,
                constraints: &[Constraint::Required, Constraint::Length { min: 2, max: 20 }],
            },
            FieldSpec {
                field: "email",
                value: &self.email,
                constraints: &[Constraint::Required, Constraint::Email],
            },
            FieldSpec {
                field: "password",
                value: &self.password,
                constraints: &[Constraint::Required],
            },
            FieldSpec {
                field: "confirm_password",
                value: &self.confirm_password,
                constraints: &[
                    Constraint::Required,
                    Constraint::Matches {
                        other: "password",
                        value: &self.password,
                    },
                ],
            },
        ])
    }
}
