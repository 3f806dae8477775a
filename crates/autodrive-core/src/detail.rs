//! Detail page resolution and its thumbnail gallery.

use crate::dataset::Dataset;
use crate::domain::Vehicle;

/// Maximum number of entries in the "similar vehicles" strip.
pub const SIMILAR_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView<'a> {
    NotFound,
    Found {
        vehicle: &'a Vehicle,
        similar: Vec<&'a Vehicle>,
    },
}

/// Looks up the `id` page parameter. Similar vehicles are only computed for
/// a hit.
pub fn resolve<'a>(dataset: &'a Dataset, id: Option<&str>) -> DetailView<'a> {
    let Some(vehicle) = id.and_then(|id| dataset.find(id)) else {
        return DetailView::NotFound;
    };

    DetailView::Found {
        vehicle,
        similar: dataset.similar_to(vehicle, SIMILAR_LIMIT),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumb {
    pub gradient: String,
    pub emoji: String,
}

impl Thumb {
    fn new(gradient: &str, emoji: &str) -> Self {
        Self {
            gradient: gradient.to_owned(),
            emoji: emoji.to_owned(),
        }
    }
}

/// The vehicle's own cover followed by two stock alternates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gallery {
    thumbs: Vec<Thumb>,
    active: usize,
}

impl Gallery {
    pub fn for_vehicle(vehicle: &Vehicle) -> Self {
        Self {
            thumbs: vec![
                Thumb::new(&vehicle.gradient, &vehicle.emoji),
                Thumb::new("gradient-2", "🚘"),
                Thumb::new("gradient-5", "🚗"),
            ],
            active: 0,
        }
    }

    pub fn thumbs(&self) -> &[Thumb] {
        &self.thumbs
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> &Thumb {
        &self.thumbs[self.active]
    }

    /// Out-of-range indices leave the selection unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.thumbs.len() {
            self.active = index;
            true
        } else {
            false
        }
    }
}
