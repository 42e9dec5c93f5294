use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Screen {
    Dashboard,
    Roster,
    Ranking,
}

impl Screen {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "dashboard" => Some(Self::Dashboard),
            "roster" => Some(Self::Roster),
            "ranking" => Some(Self::Ranking),
            _ => None,
        }
    }
}

/// UI-side state: which screen is active, which student (if any) is open in
/// the detail overlay, and the current roster search text. Holds no business
/// logic; every derived payload is recomputed from the store on read.
#[derive(Debug)]
pub struct ViewState {
    pub screen: Screen,
    pub selected_student_id: Option<String>,
    pub search_text: String,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            selected_student_id: None,
            search_text: String::new(),
        }
    }
}

impl ViewState {
    /// Explicit navigation always drops the detail overlay.
    pub fn navigate(&mut self, screen: Screen) {
        self.screen = screen;
        self.selected_student_id = None;
    }

    /// The overlay is orthogonal to the active screen: clearing the
    /// selection falls back to whatever screen is current.
    pub fn select_student(&mut self, student_id: Option<String>) {
        self.selected_student_id = student_id;
    }

    pub fn set_search(&mut self, text: String) {
        self.search_text = text;
    }
}
