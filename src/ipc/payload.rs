use serde_json::{json, Value};

use crate::calc;
use crate::catalog::TrickDefinition;
use crate::roster::Student;

pub fn trick_definition(def: &TrickDefinition) -> Value {
    serde_json::to_value(def).unwrap_or_else(|_| json!({}))
}

/// Full student payload as the roster grid and toggle responses need it:
/// the serialized entity plus the derived fields clients render directly.
pub fn student(s: &Student) -> Value {
    let mut v = serde_json::to_value(s).unwrap_or_else(|_| json!({}));
    v["levelLabel"] = json!(s.level.label());
    v["learnedCount"] = json!(calc::learned_count(&s.tricks));
    v
}

/// Slim row for ranking tables: no bio, no per-trick detail.
pub fn ranking_entry(rank: usize, s: &Student) -> Value {
    json!({
        "rank": rank,
        "id": s.id,
        "name": s.name,
        "nickname": s.nickname,
        "photoUrl": s.photo_url,
        "points": s.points,
        "level": s.level,
        "levelLabel": s.level.label(),
        "learnedCount": calc::learned_count(&s.tricks),
    })
}
