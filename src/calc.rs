use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::roster::TrickRecord;

/// Progress stage of a student on one trick. Ordered: a toggle advances
/// Learning -> Learned -> Mastered (and a fourth toggle removes the record).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrickStatus {
    Learning,
    Learned,
    Mastered,
}

impl TrickStatus {
    pub fn multiplier(self) -> f64 {
        match self {
            TrickStatus::Learning => 0.5,
            TrickStatus::Learned => 1.5,
            TrickStatus::Mastered => 2.0,
        }
    }

    /// A trick counts toward the completion ratio once it is past Learning.
    pub fn counts_as_done(self) -> bool {
        !matches!(self, TrickStatus::Learning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Pro,
}

impl SkillLevel {
    /// Display label in the dataset's single hardcoded locale.
    pub fn label(self) -> &'static str {
        match self {
            SkillLevel::Beginner => "Iniciante",
            SkillLevel::Intermediate => "Intermediário",
            SkillLevel::Advanced => "Avançado",
            SkillLevel::Pro => "Profissional",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub level: SkillLevel,
}

/// Threshold mapping from points to level. Thresholds are strict: exactly
/// 800/1500/2000 points stays in the lower tier.
pub fn level_for_points(points: u32) -> SkillLevel {
    if points > 2000 {
        SkillLevel::Pro
    } else if points > 1500 {
        SkillLevel::Advanced
    } else if points > 800 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::Beginner
    }
}

/// Derive a student's score from their trick records and the catalog.
///
/// Each record resolving to a catalog trick contributes
/// `difficulty * 100 * status multiplier`; a record whose trick id is not in
/// the catalog contributes nothing. The sum is rounded to the nearest
/// integer. Pure: same inputs always give the same score.
pub fn score(records: &[TrickRecord], catalog: &Catalog) -> Score {
    let raw: f64 = records
        .iter()
        .filter_map(|rec| {
            catalog
                .find(&rec.trick_id)
                .map(|t| f64::from(t.difficulty) * 100.0 * rec.status.multiplier())
        })
        .sum();
    let points = raw.round().max(0.0) as u32;
    Score {
        points,
        level: level_for_points(points),
    }
}

/// Share of the catalog the student has at least learned, as a percentage.
pub fn completion_percent(records: &[TrickRecord], catalog_len: usize) -> f64 {
    if catalog_len == 0 {
        return 0.0;
    }
    let done = records.iter().filter(|r| r.status.counts_as_done()).count();
    100.0 * (done as f64) / (catalog_len as f64)
}

pub fn learned_count(records: &[TrickRecord]) -> usize {
    records.iter().filter(|r| r.status.counts_as_done()).count()
}
