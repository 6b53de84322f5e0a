use crate::ui::mvi::UiState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailTab {
    #[default]
    Overview,
    Features,
    Inspection,
    History,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        DetailTab::Overview,
        DetailTab::Features,
        DetailTab::Inspection,
        DetailTab::History,
    ];

    pub fn title(self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Features => "Features",
            DetailTab::Inspection => "Inspection",
            DetailTab::History => "Service History",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DetailState {
    pub image_index: usize,
    pub tab: DetailTab,
    /// Local to the view; the catalog itself is never written.
    pub favorite: bool,
}

impl UiState for DetailState {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_cycle_both_ways() {
        assert_eq!(DetailTab::History.next(), DetailTab::Overview);
        assert_eq!(DetailTab::Overview.prev(), DetailTab::History);
        assert_eq!(DetailTab::Features.next(), DetailTab::Inspection);
    }
}
