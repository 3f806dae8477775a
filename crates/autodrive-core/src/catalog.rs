use crate::domain::{Category, Vehicle};

/// Catalogue ordering. One mode is active at a time; `Natural` keeps the
/// dataset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    PriceAsc,
    PriceDesc,
    YearDesc,
    YearAsc,
    #[default]
    Popular,
    Natural,
}

impl SortMode {
    pub const ALL: [Self; 6] = [
        Self::Popular,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::YearDesc,
        Self::YearAsc,
        Self::Natural,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::YearDesc => "year-desc",
            Self::YearAsc => "year-asc",
            Self::Popular => "popular",
            Self::Natural => "",
        }
    }

    /// Unrecognised values fall back to dataset order.
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "year-desc" => Self::YearDesc,
            "year-asc" => Self::YearAsc,
            "popular" => Self::Popular,
            _ => Self::Natural,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PriceAsc => "Сначала дешевле",
            Self::PriceDesc => "Сначала дороже",
            Self::YearDesc => "Сначала новые",
            Self::YearAsc => "Сначала старые",
            Self::Popular => "По популярности",
            Self::Natural => "Без сортировки",
        }
    }

    /// Stable sort, so equal keys keep their relative order.
    pub fn sort(self, items: &mut [&Vehicle]) {
        match self {
            Self::PriceAsc => items.sort_by_key(|v| v.price),
            Self::PriceDesc => items.sort_by(|a, b| b.price.cmp(&a.price)),
            Self::YearDesc => items.sort_by(|a, b| b.year.cmp(&a.year)),
            Self::YearAsc => items.sort_by_key(|v| v.year),
            Self::Popular => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
            Self::Natural => {}
        }
    }
}

/// Current values of the catalogue filter controls. `None` / empty / `false`
/// means the corresponding filter is inactive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub query: String,
    pub brand: Option<String>,
    pub category: Option<Category>,
    pub drive: Option<String>,
    pub sort: SortMode,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub favorites_only: bool,
}

impl Selection {
    /// Initial state for a catalogue opened through a deep link
    /// (`?search=…&type=…`).
    pub fn from_entry(search: Option<&str>, category: Option<&str>) -> Self {
        let mut selection = Self::default();
        if let Some(search) = search {
            selection.query = search.to_owned();
        }
        if let Some(category) = category {
            selection.set_category(category);
        }
        selection
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn set_brand(&mut self, value: &str) {
        self.brand = choice(value);
    }

    pub fn set_drive(&mut self, value: &str) {
        self.drive = choice(value);
    }

    /// `all` and unknown categories both switch the filter off.
    pub fn set_category(&mut self, value: &str) {
        self.category = choice(value).and_then(|value| Category::parse(&value));
    }

    pub fn set_min_price(&mut self, raw: &str) {
        self.min_price = parse_price_bound(raw);
    }

    pub fn set_max_price(&mut self, raw: &str) {
        self.max_price = parse_price_bound(raw);
    }

    pub fn matches(&self, vehicle: &Vehicle, favorites: &[String]) -> bool {
        let needle = self.query.trim().to_lowercase();

        let by_search = needle.is_empty() || vehicle.mentions(&needle);
        let by_brand = self.brand.as_ref().map_or(true, |brand| vehicle.brand == *brand);
        let by_category = self
            .category
            .map_or(true, |category| vehicle.category == category);
        let by_drive = self.drive.as_ref().map_or(true, |drive| vehicle.drive == *drive);
        let by_min = self.min_price.map_or(true, |min| vehicle.price >= min);
        let by_max = self.max_price.map_or(true, |max| vehicle.price <= max);
        let by_favorite = !self.favorites_only || favorites.iter().any(|id| *id == vehicle.id);

        by_search && by_brand && by_category && by_drive && by_min && by_max && by_favorite
    }
}

fn choice(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == "all" {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Empty, zero and unparsable bounds all mean "unbounded".
pub fn parse_price_bound(raw: &str) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|value| *value > 0)
}

/// Filtered and sorted slice of the dataset for one selection.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    pub items: Vec<&'a Vehicle>,
}

impl<'a> CatalogView<'a> {
    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|vehicle| vehicle.id.as_str()).collect()
    }
}

/// Filters `vehicles` with every active sub-filter, then applies the sort mode.
/// `favorites` must be read fresh by the caller.
pub fn apply<'a>(
    vehicles: &'a [Vehicle],
    selection: &Selection,
    favorites: &[String],
) -> CatalogView<'a> {
    let mut items: Vec<&Vehicle> = vehicles
        .iter()
        .filter(|vehicle| selection.matches(vehicle, favorites))
        .collect();
    selection.sort.sort(&mut items);

    CatalogView { items }
}
