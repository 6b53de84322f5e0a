use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailIntent {
    /// A vehicle was opened; start at the first image and the overview tab.
    Open { favorite: bool },
    NextImage { count: usize },
    PrevImage { count: usize },
    NextTab,
    PrevTab,
    ToggleFavorite,
}

impl Intent for DetailIntent {}
