//! View Models
//!
//! Display-ready rows built from API records: fallbacks, de-duplication and
//! label/value pairs, decided here so components only lay them out.

use std::collections::HashSet;

use crate::api::encode_component;
use crate::models::{BossDetail, BossSummary};

pub const UNKNOWN_BOSS: &str = "Unknown boss";
pub const UNKNOWN_REGION: &str = "Unknown region";
pub const IMAGE_PLACEHOLDER: &str = "Image unavailable";
pub const MISSING_LINK: &str = "-";
pub const LOADING_TEXT: &str = "Loading...";

/// Image to show, with its alt text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossImage {
    pub src: String,
    pub alt: String,
}

/// One row of the list table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossRow {
    pub image: Option<BossImage>,
    pub name: String,
    pub region: String,
    /// `boss.html?boss=<id>`, or `None` when the record has no id
    pub detail_href: Option<String>,
}

/// Link to the detail page of a boss
pub fn detail_href(id: &str) -> String {
    format!("boss.html?boss={}", encode_component(id))
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Rows for one page, de-duplicated by displayed name (first one wins)
pub fn build_rows(bosses: &[BossSummary]) -> Vec<BossRow> {
    let mut seen = HashSet::new();
    bosses
        .iter()
        .filter_map(|boss| {
            let name = non_empty(boss.name.as_deref()).unwrap_or(UNKNOWN_BOSS);
            if !seen.insert(name.to_string()) {
                return None;
            }
            Some(BossRow {
                image: non_empty(boss.image.as_deref()).map(|src| BossImage {
                    src: src.to_string(),
                    alt: name.to_string(),
                }),
                name: name.to_string(),
                region: non_empty(boss.region.as_deref())
                    .unwrap_or(UNKNOWN_REGION)
                    .to_string(),
                detail_href: non_empty(boss.id.as_deref()).map(detail_href),
            })
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Everything the detail page shows for one boss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub image: Option<BossImage>,
    pub rows: Vec<DetailRow>,
}

impl DetailView {
    pub fn from_detail(boss: &BossDetail) -> Self {
        let name = non_empty(boss.name.as_deref());
        let entries = [
            ("Region", boss.region.clone()),
            ("Location", boss.location.clone()),
            ("Description", boss.description.clone()),
            ("Drops", boss.drops.as_ref().map(|d| d.joined())),
            ("Health points", boss.health_points.as_ref().map(|hp| hp.display())),
        ];

        Self {
            title: name.unwrap_or(UNKNOWN_BOSS).to_string(),
            image: non_empty(boss.image.as_deref()).map(|src| BossImage {
                src: src.to_string(),
                alt: name.unwrap_or("Boss").to_string(),
            }),
            rows: entries
                .into_iter()
                .filter_map(|(label, value)| {
                    value
                        .filter(|v| !v.is_empty())
                        .map(|value| DetailRow { label, value })
                })
                .collect(),
        }
    }
}
