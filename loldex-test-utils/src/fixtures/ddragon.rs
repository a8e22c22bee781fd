//! DDragon HTTP mock endpoint creation utilities.
//!
//! Provides methods for creating mock HTTP endpoints that simulate the
//! DDragon CDN. Payload factories return the full response documents the
//! real CDN serves, so tests can tamper with individual fields before
//! registering an endpoint.

use mockito::Mock;
use serde_json::{json, Map, Value};

use crate::{constant::TEST_DDRAGON_VERSION, TestSetup};

impl TestSetup {
    pub fn ddragon(&mut self) -> DdragonFixtures<'_> {
        DdragonFixtures { setup: self }
    }
}

pub struct DdragonFixtures<'a> {
    pub setup: &'a mut TestSetup,
}

impl DdragonFixtures<'_> {
    /// Build a champion list response (`champion.json`) naming the given
    /// champions.
    pub fn mock_champion_list(&self, names: &[&str]) -> Value {
        let mut data = Map::new();
        for name in names {
            data.insert(
                name.to_string(),
                json!({ "version": TEST_DDRAGON_VERSION, "id": name, "key": "266", "name": name }),
            );
        }

        json!({
            "type": "champion",
            "format": "standAloneComplex",
            "version": TEST_DDRAGON_VERSION,
            "data": data,
        })
    }

    /// Build a full champion detail response (`champion/{name}.json`) with
    /// standard test values and the given difficulty.
    pub fn mock_champion_detail(&self, name: &str, difficulty: i64) -> Value {
        json!({
            "type": "champion",
            "format": "standAloneComplex",
            "version": TEST_DDRAGON_VERSION,
            "data": {
                name: {
                    "id": name,
                    "key": "266",
                    "name": name,
                    "title": "the Unyielding",
                    "lore": format!("{name} is a champion of the rift."),
                    "blurb": format!("{name}, briefly."),
                    "tags": ["Fighter", "Tank"],
                    "partype": "Mana",
                    "info": { "attack": 8, "defense": 4, "magic": 3, "difficulty": difficulty },
                    "image": {
                        "full": format!("{name}.png"),
                        "sprite": "champion0.png",
                        "group": "champion",
                    },
                    "spells": [
                        {
                            "id": format!("{name}Q"),
                            "name": "First Strike",
                            "description": "Strikes first.",
                            "maxrank": 5,
                            "image": {
                                "full": format!("{name}Q.png"),
                                "sprite": "spell0.png",
                                "group": "spell",
                            },
                        },
                    ],
                    "passive": {
                        "name": "Perseverance",
                        "description": "Perseveres.",
                        "image": {
                            "full": format!("{name}_P.png"),
                            "sprite": "passive0.png",
                            "group": "passive",
                        },
                    },
                    "allytips": ["Hold the line."],
                    "enemytips": ["Keep your distance."],
                    "skins": [
                        { "id": "266000", "num": 0, "name": "default", "chromas": false },
                        { "id": "266001", "num": 1, "name": "Justicar", "chromas": false },
                    ],
                }
            },
        })
    }

    /// Create a mock endpoint for the champion list.
    ///
    /// Sets up a mock GET endpoint at the versioned `champion.json` path
    /// returning the given payload. The mock verifies it was called exactly
    /// `expected_requests` times.
    pub fn create_champion_list_endpoint(
        &mut self,
        payload: &Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{TEST_DDRAGON_VERSION}/data/en_US/champion.json");

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for a single champion's detail document.
    ///
    /// Sets up a mock GET endpoint at the versioned `champion/{name}.json`
    /// path returning the given payload. The mock verifies it was called
    /// exactly `expected_requests` times.
    pub fn create_champion_detail_endpoint(
        &mut self,
        name: &str,
        payload: &Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{TEST_DDRAGON_VERSION}/data/en_US/champion/{name}.json");

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(payload.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint that fails with the given HTTP status for a
    /// champion's detail document.
    pub fn create_champion_detail_error_endpoint(
        &mut self,
        name: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/{TEST_DDRAGON_VERSION}/data/en_US/champion/{name}.json");

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .expect(expected_requests)
            .create()
    }
}
