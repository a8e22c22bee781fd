use serde::Deserialize;
use utoipa::ToSchema;

/// Profile edit submission. Every field is optional and carries no rules.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct ProfileEditForm {
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub summoner_name: Option<String>,
}

impl ProfileEditForm {
    /// Convert into per-field updates, treating blank input as absent so a
    /// cleared form control keeps the stored value.
    pub fn into_updates(self) -> (Option<String>, Option<String>, Option<String>) {
        (
            none_if_empty(self.avatar_url),
            none_if_empty(self.bio),
            none_if_empty(self.summoner_name),
        )
    }
}

fn none_if_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
