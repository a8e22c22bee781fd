use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;
use serde_json::Value;

/// Top-level document for the champion roster (`champion.json`).
///
/// Only the keys of `data` are consumed; the per-champion entries in the
/// roster are stubs compared to the detail documents. A `BTreeMap` keeps
/// iteration order deterministic.
#[derive(Debug, Deserialize)]
pub struct ChampionListResponse {
    pub data: BTreeMap<String, Value>,
}

/// Top-level document for a single champion (`champion/{key}.json`).
#[derive(Debug, Deserialize)]
pub struct ChampionDetailResponse {
    pub data: HashMap<String, ChampionDetail>,
}

/// The champion fields ingestion consumes.
///
/// Sub-documents stored as-is (spells, passive, skins) stay raw JSON so
/// unknown upstream keys survive into the database.
#[derive(Debug, Clone, Deserialize)]
pub struct ChampionDetail {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub lore: Option<String>,
    #[serde(default)]
    pub blurb: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub info: ChampionInfo,
    #[serde(default)]
    pub spells: Vec<Value>,
    #[serde(default)]
    pub passive: Value,
    #[serde(default, rename = "allytips")]
    pub ally_tips: Vec<String>,
    #[serde(default, rename = "enemytips")]
    pub enemy_tips: Vec<String>,
    #[serde(default)]
    pub skins: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChampionInfo {
    #[serde(default)]
    pub difficulty: Option<i32>,
}
