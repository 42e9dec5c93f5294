use anyhow::Context;
use serde::Deserialize;

use crate::calc;
use crate::catalog::{Catalog, TrickDefinition};
use crate::roster::{RosterStore, Student, TrickRecord};

const SEED_JSON: &str = include_str!("../data/seed.json");

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedStudent {
    id: String,
    name: String,
    #[serde(default)]
    nickname: Option<String>,
    photo_url: String,
    #[serde(default)]
    bio: Option<String>,
    #[serde(default)]
    tricks: Vec<TrickRecord>,
}

#[derive(Debug, Deserialize)]
struct SeedData {
    tricks: Vec<TrickDefinition>,
    students: Vec<SeedStudent>,
}

/// Build the catalog and roster from the embedded seed dataset.
///
/// The seed carries only identity and trick records per student; points and
/// level are derived fields and are computed here so the consistency
/// invariant holds from the first request onward.
pub fn load() -> anyhow::Result<(Catalog, RosterStore)> {
    let seed: SeedData =
        serde_json::from_str(SEED_JSON).context("embedded seed dataset is not valid JSON")?;

    let catalog = Catalog::new(seed.tricks);
    let students = seed
        .students
        .into_iter()
        .map(|raw| {
            let score = calc::score(&raw.tricks, &catalog);
            Student {
                id: raw.id,
                name: raw.name,
                nickname: raw.nickname,
                photo_url: raw.photo_url,
                bio: raw.bio,
                points: score.points,
                level: score.level,
                tricks: raw.tricks,
            }
        })
        .collect();

    Ok((catalog, RosterStore::new(students)))
}
