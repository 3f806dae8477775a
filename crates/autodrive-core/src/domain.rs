use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sedan,
    Crossover,
    Hatchback,
}

impl Category {
    pub const ALL: [Self; 3] = [Self::Sedan, Self::Crossover, Self::Hatchback];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sedan => "sedan",
            Self::Crossover => "crossover",
            Self::Hatchback => "hatchback",
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Sedan),
            1 => Some(Self::Crossover),
            2 => Some(Self::Hatchback),
            _ => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "sedan" => Some(Self::Sedan),
            "crossover" => Some(Self::Crossover),
            "hatchback" => Some(Self::Hatchback),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Sedan => "Седан",
            Self::Crossover => "Кроссовер",
            Self::Hatchback => "Хэтчбек",
        }
    }
}

/// One catalogue entry as shipped in the site dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub brand: String,
    pub model: String,
    pub title: String,
    pub short: String,
    pub description: String,
    #[serde(rename = "type")]
    pub category: Category,
    pub year: u16,
    pub engine: String,
    pub transmission: String,
    pub drive: String,
    pub fuel: String,
    pub color: String,
    pub mileage: u32,
    pub power: u16,
    pub price: u64,
    pub rating: f64,
    #[serde(default)]
    pub features: Vec<String>,
    /// Styling hook for covers, e.g. `gradient-3`.
    pub gradient: String,
    pub emoji: String,
}

impl Vehicle {
    /// Whether `needle` (already lowercased) occurs in any searchable field.
    pub fn mentions(&self, needle: &str) -> bool {
        [&self.title, &self.brand, &self.model, &self.short]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parse_is_case_insensitive() {
        assert_eq!(Category::parse(" Crossover "), Some(Category::Crossover));
        assert_eq!(Category::parse("coupe"), None);
    }

    #[test]
    fn vehicle_reads_type_field_as_category() {
        let raw = r#"{
            "id": "x", "brand": "Lada", "model": "Vesta", "title": "Lada Vesta",
            "short": "s", "description": "d", "type": "sedan", "year": 2021,
            "engine": "1.6", "transmission": "Механика", "drive": "Передний",
            "fuel": "Бензин", "color": "Белый", "mileage": 1000, "power": 106,
            "price": 990000, "rating": 4.1, "gradient": "gradient-1", "emoji": "🚗"
        }"#;
        let vehicle: Vehicle = serde_json::from_str(raw).unwrap();
        assert_eq!(vehicle.category, Category::Sedan);
        assert!(vehicle.features.is_empty());
    }

    #[test]
    fn mentions_checks_title_brand_model_and_short() {
        let raw = include_str!("../data/cars.json");
        let vehicles: Vec<Vehicle> = serde_json::from_str(raw).unwrap();
        let polo = vehicles.iter().find(|v| v.id == "vw-polo-2020").unwrap();
        assert!(polo.mentions("volks"));
        assert!(polo.mentions("polo"));
        assert!(polo.mentions("хэтчбек"));
        assert!(!polo.mentions("механика"));
    }
}
