use crate::catalog::{parse_amount, text_value, SearchCriteria};
use crate::ui::mvi::UiState;

pub const FIELD_COUNT: usize = 12;

/// Home search form fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchField {
    Make,
    Model,
    PriceMin,
    PriceMax,
    YearMin,
    YearMax,
    MileageMax,
    FuelType,
    Transmission,
    Location,
    BodyType,
    Color,
}

impl SearchField {
    pub const ALL: [SearchField; FIELD_COUNT] = [
        SearchField::Make,
        SearchField::Model,
        SearchField::PriceMin,
        SearchField::PriceMax,
        SearchField::YearMin,
        SearchField::YearMax,
        SearchField::MileageMax,
        SearchField::FuelType,
        SearchField::Transmission,
        SearchField::Location,
        SearchField::BodyType,
        SearchField::Color,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SearchField::Make => "Make",
            SearchField::Model => "Model",
            SearchField::PriceMin => "Price min (¥)",
            SearchField::PriceMax => "Price max (¥)",
            SearchField::YearMin => "Year min",
            SearchField::YearMax => "Year max",
            SearchField::MileageMax => "Max mileage (km)",
            SearchField::FuelType => "Fuel",
            SearchField::Transmission => "Transmission",
            SearchField::Location => "Location",
            SearchField::BodyType => "Body type",
            SearchField::Color => "Color",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            SearchField::PriceMin
                | SearchField::PriceMax
                | SearchField::YearMin
                | SearchField::YearMax
                | SearchField::MileageMax
        )
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchFocus {
    #[default]
    Form,
    Results,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub values: [String; FIELD_COUNT],
    /// Index into [`SearchField::ALL`] of the focused field.
    pub field: usize,
    pub focus: SearchFocus,
    /// Highlighted row in the results list.
    pub selected: usize,
}

impl UiState for SearchState {}

impl SearchState {
    pub fn value(&self, field: SearchField) -> &str {
        &self.values[field.index()]
    }

    pub fn focused_field(&self) -> SearchField {
        SearchField::ALL[self.field.min(FIELD_COUNT - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.focus == SearchFocus::Form
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            make: text_value(self.value(SearchField::Make)),
            model: text_value(self.value(SearchField::Model)),
            price_min: parse_amount(self.value(SearchField::PriceMin)),
            price_max: parse_amount(self.value(SearchField::PriceMax)),
            year_min: parse_amount(self.value(SearchField::YearMin)),
            year_max: parse_amount(self.value(SearchField::YearMax)),
            mileage_max: parse_amount(self.value(SearchField::MileageMax)),
            fuel_type: text_value(self.value(SearchField::FuelType)),
            transmission: text_value(self.value(SearchField::Transmission)),
            location: text_value(self.value(SearchField::Location)),
            body_type: text_value(self.value(SearchField::BodyType)),
            color: text_value(self.value(SearchField::Color)),
        }
    }
}
