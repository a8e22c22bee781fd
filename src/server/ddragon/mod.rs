//! Minimal client for the DDragon CDN.
//!
//! DDragon serves static, versioned JSON documents describing the champion
//! catalog. The site pins one data version; ingestion fetches the roster
//! and each champion's detail document through this client, and all image
//! URLs stored in the database are derived from the same base URL.

pub mod model;

use crate::server::error::ingest::IngestError;

use model::{ChampionDetail, ChampionDetailResponse, ChampionListResponse};

/// Production CDN base URL.
pub const DEFAULT_URL: &str = "https://ddragon.leagueoflegends.com/cdn";

/// Data version the site is pinned to.
pub const DEFAULT_VERSION: &str = "13.14.1";

#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    version: String,
}

impl Client {
    pub fn new(base_url: &str, version: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            version: version.to_string(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Fetch the champion roster and return its keys in sorted order.
    pub async fn champion_names(&self) -> Result<Vec<String>, IngestError> {
        let url = format!(
            "{}/{}/data/en_US/champion.json",
            self.base_url, self.version
        );

        let response: ChampionListResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.data.into_keys().collect())
    }

    /// Fetch the full detail document for one champion key.
    pub async fn champion_detail(&self, key: &str) -> Result<ChampionDetail, IngestError> {
        let url = format!(
            "{}/{}/data/en_US/champion/{}.json",
            self.base_url, self.version, key
        );

        let mut response: ChampionDetailResponse = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .data
            .remove(key)
            .ok_or_else(|| IngestError::MissingDetail(key.to_string()))
    }

    /// URL for an ability or passive icon (`img/{group}/{file}`).
    pub fn image_url(&self, group: &str, file: &str) -> String {
        format!("{}/{}/img/{}/{}", self.base_url, self.version, group, file)
    }

    /// URL for a champion skin splash. Splash art is unversioned on the
    /// CDN.
    pub fn splash_url(&self, champion_id: &str, skin_num: i64) -> String {
        format!(
            "{}/img/champion/splash/{}_{}.jpg",
            self.base_url, champion_id, skin_num
        )
    }
}
