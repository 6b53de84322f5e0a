use serde::{Deserialize, Serialize};

/// A single vehicle listing.
///
/// Field names serialize in camelCase so catalog files keep the storefront's
/// JSON shape (`priceUSD`, `bodyType`, `isFavorite`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRecord {
    pub id: String,
    pub make: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
    pub year: u16,
    /// Asking price in yen.
    pub price: u64,
    /// Secondary-currency equivalent, when the dealer quotes one.
    #[serde(rename = "priceUSD", default, skip_serializing_if = "Option::is_none")]
    pub price_usd: Option<u64>,
    /// Odometer reading in km.
    pub mileage: u32,
    pub fuel: String,
    pub transmission: String,
    pub drivetrain: String,
    pub engine: String,
    pub doors: u8,
    pub seats: u8,
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interior_color: Option<String>,
    pub location: String,
    pub dealer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chassis_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_valid: Option<String>,
    pub condition: String,
    /// Nominal range 0-5.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition_score: Option<f32>,
    pub views: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inquiries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
    pub image: String,
    pub rating: f32,
    pub is_favorite: bool,
    pub body_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inspection_report: Option<InspectionReport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub service_history: Vec<ServiceEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

impl VehicleRecord {
    /// "2024 Toyota Land Cruiser 250"
    pub fn title(&self) -> String {
        format!("{} {} {}", self.year, self.make, self.model)
    }

    /// Image references for the gallery, falling back to the primary image.
    pub fn gallery(&self) -> Vec<&str> {
        if self.images.is_empty() {
            vec![self.image.as_str()]
        } else {
            self.images.iter().map(String::as_str).collect()
        }
    }
}

/// Dealer inspection sub-scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    pub exterior: InspectionItem,
    pub interior: InspectionItem,
    pub engine: InspectionItem,
    pub transmission: InspectionItem,
    pub tires: InspectionItem,
    pub brakes: InspectionItem,
}

impl InspectionReport {
    pub fn items(&self) -> [(&'static str, &InspectionItem); 6] {
        [
            ("Exterior", &self.exterior),
            ("Interior", &self.interior),
            ("Engine", &self.engine),
            ("Transmission", &self.transmission),
            ("Tires", &self.tires),
            ("Brakes", &self.brakes),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionItem {
    pub score: f32,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceEntry {
    pub date: String,
    pub service: String,
    /// Odometer reading at the time of service, in km.
    pub mileage: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json() -> &'static str {
        r#"{
            "id": "9",
            "make": "Honda",
            "model": "Fit",
            "year": 2018,
            "price": 900000,
            "mileage": 41000,
            "fuel": "Hybrid",
            "transmission": "CVT",
            "drivetrain": "2WD",
            "engine": "1.5L",
            "doors": 5,
            "seats": 5,
            "color": "Blue",
            "location": "Nagoya",
            "dealer": "Chubu Motors",
            "condition": "Good",
            "views": 12,
            "image": "/images/fit.jpg",
            "rating": 3.9,
            "isFavorite": false,
            "bodyType": "Hatchback"
        }"#
    }

    #[test]
    fn optional_members_default_when_absent() {
        let record: VehicleRecord = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(record.grade, None);
        assert_eq!(record.price_usd, None);
        assert!(record.features.is_empty());
        assert!(record.service_history.is_empty());
        assert!(record.inspection_report.is_none());
    }

    #[test]
    fn gallery_falls_back_to_primary_image() {
        let record: VehicleRecord = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(record.gallery(), vec!["/images/fit.jpg"]);
    }

    #[test]
    fn title_joins_year_make_model() {
        let record: VehicleRecord = serde_json::from_str(minimal_json()).unwrap();
        assert_eq!(record.title(), "2018 Honda Fit");
    }

    #[test]
    fn price_usd_uses_storefront_field_name() {
        let mut record: VehicleRecord = serde_json::from_str(minimal_json()).unwrap();
        record.price_usd = Some(6000);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["priceUSD"], 6000);
        assert_eq!(value["bodyType"], "Hatchback");
    }
}
