use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrickCategory {
    Flat,
    Grind,
    Flip,
    Grab,
    Transition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrickDefinition {
    pub id: String,
    pub name: String,
    pub category: TrickCategory,
    /// 1..=10.
    pub difficulty: u8,
}

/// The fixed trick catalog. Loaded once from the seed at startup and never
/// mutated afterwards; students reference entries by id.
#[derive(Debug, Clone)]
pub struct Catalog {
    tricks: Vec<TrickDefinition>,
}

impl Catalog {
    pub fn new(tricks: Vec<TrickDefinition>) -> Self {
        Self { tricks }
    }

    pub fn find(&self, trick_id: &str) -> Option<&TrickDefinition> {
        self.tricks.iter().find(|t| t.id == trick_id)
    }

    pub fn list(&self) -> &[TrickDefinition] {
        &self.tricks
    }

    pub fn len(&self) -> usize {
        self.tricks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tricks.is_empty()
    }
}
