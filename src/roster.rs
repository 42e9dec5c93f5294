use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::calc::{self, SkillLevel, TrickStatus};
use crate::catalog::Catalog;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickRecord {
    pub trick_id: String,
    pub status: TrickStatus,
    /// ISO-8601, stamped when the status first moves past Learning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_learned: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    pub photo_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Derived from `tricks`; kept in sync by the store on every mutation.
    pub points: u32,
    pub level: SkillLevel,
    pub tricks: Vec<TrickRecord>,
}

impl Student {
    fn recompute(&mut self, catalog: &Catalog) {
        let score = calc::score(&self.tricks, catalog);
        self.points = score.points;
        self.level = score.level;
    }

    fn matches(&self, needle: &str) -> bool {
        if self.name.to_lowercase().contains(needle) {
            return true;
        }
        self.nickname
            .as_deref()
            .is_some_and(|n| n.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ToggleOutcome {
    Started,
    Learned,
    Mastered,
    Removed,
}

/// Owns the mutable student collection, in insertion order. `toggle_trick`
/// is the only mutator in the system; every other read is derived on demand
/// so it can never drift from the underlying records.
#[derive(Debug, Default)]
pub struct RosterStore {
    students: Vec<Student>,
}

impl RosterStore {
    pub fn new(students: Vec<Student>) -> Self {
        Self { students }
    }

    pub fn list(&self) -> &[Student] {
        &self.students
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// Advance one student's relationship to one trick through the 4-state
    /// cycle: absent -> learning -> learned -> mastered -> absent. The
    /// student's derived points/level are recomputed before returning.
    /// Returns `None` (store untouched) when the student id is unknown.
    pub fn toggle_trick(
        &mut self,
        student_id: &str,
        trick_id: &str,
        catalog: &Catalog,
    ) -> Option<(ToggleOutcome, &Student)> {
        let student = self.students.iter_mut().find(|s| s.id == student_id)?;

        let outcome = match student.tricks.iter().position(|t| t.trick_id == trick_id) {
            None => {
                student.tricks.push(TrickRecord {
                    trick_id: trick_id.to_string(),
                    status: TrickStatus::Learning,
                    date_learned: None,
                });
                ToggleOutcome::Started
            }
            Some(idx) => match student.tricks[idx].status {
                TrickStatus::Learning => {
                    let rec = &mut student.tricks[idx];
                    rec.status = TrickStatus::Learned;
                    rec.date_learned = Some(Utc::now().to_rfc3339());
                    ToggleOutcome::Learned
                }
                TrickStatus::Learned => {
                    student.tricks[idx].status = TrickStatus::Mastered;
                    ToggleOutcome::Mastered
                }
                TrickStatus::Mastered => {
                    student.tricks.remove(idx);
                    ToggleOutcome::Removed
                }
            },
        };

        student.recompute(catalog);
        Some((outcome, &*student))
    }

    /// Students whose name or nickname contains `query`, case-insensitive.
    /// Empty query returns the full roster in insertion order.
    pub fn filter(&self, query: &str) -> Vec<&Student> {
        let needle = query.to_lowercase();
        self.students.iter().filter(|s| s.matches(&needle)).collect()
    }

    /// All students by points descending. The sort is stable, so students on
    /// equal points keep their insertion order.
    pub fn ranking(&self) -> Vec<&Student> {
        let mut ranked: Vec<&Student> = self.students.iter().collect();
        ranked.sort_by(|a, b| b.points.cmp(&a.points));
        ranked
    }

    /// 1-based position in the ranking.
    pub fn rank_of(&self, student_id: &str) -> Option<usize> {
        self.ranking()
            .iter()
            .position(|s| s.id == student_id)
            .map(|i| i + 1)
    }
}
