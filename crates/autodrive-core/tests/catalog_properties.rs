use autodrive_core::catalog::{self, Selection, SortMode};
use autodrive_core::detail::{self, DetailView};
use autodrive_core::domain::Category;
use autodrive_core::storage::{MemoryStore, FAVORITES_KEY};
use autodrive_core::{Dataset, FavoritesStore, Vehicle};
use std::cell::Cell;
use std::rc::Rc;

fn vehicle(id: &str, price: u64, year: u16, rating: f64) -> Vehicle {
    serde_json::from_value(serde_json::json!({
        "id": id, "brand": "Brand", "model": "Model", "title": id, "short": "",
        "description": "", "type": "sedan", "year": year, "engine": "",
        "transmission": "", "drive": "Передний", "fuel": "", "color": "",
        "mileage": 0, "power": 0, "price": price, "rating": rating,
        "gradient": "gradient-1", "emoji": ""
    }))
    .unwrap()
}

fn selections() -> Vec<Selection> {
    let mut out = Vec::new();
    for query in ["", "kia", "кроссовер", "x"] {
        for brand in [None, Some("Kia"), Some("Toyota")] {
            for category in [None, Some(Category::Crossover), Some(Category::Hatchback)] {
                for (min_price, max_price) in [(None, None), (Some(1_500_000), Some(3_000_000))] {
                    for favorites_only in [false, true] {
                        out.push(Selection {
                            query: query.to_string(),
                            brand: brand.map(str::to_string),
                            category,
                            drive: None,
                            sort: SortMode::Natural,
                            min_price,
                            max_price,
                            favorites_only,
                        });
                    }
                }
            }
        }
    }
    out
}

#[test]
fn filtered_result_is_a_subset_satisfying_every_filter() {
    let dataset = Dataset::bundled();
    let favorites = vec!["kia-rio-2021".to_string(), "toyota-rav4-2019".to_string()];

    for selection in selections() {
        let view = catalog::apply(dataset.vehicles(), &selection, &favorites);
        for vehicle in &view.items {
            assert!(dataset.find(&vehicle.id).is_some());
            assert!(selection.matches(vehicle, &favorites));
            if let Some(brand) = &selection.brand {
                assert_eq!(&vehicle.brand, brand);
            }
            if let Some(category) = selection.category {
                assert_eq!(vehicle.category, category);
            }
            if let Some(min) = selection.min_price {
                assert!(vehicle.price >= min);
            }
            if selection.favorites_only {
                assert!(favorites.contains(&vehicle.id));
            }
        }
        let expected = dataset
            .vehicles()
            .iter()
            .filter(|v| selection.matches(v, &favorites))
            .count();
        assert_eq!(view.count(), expected);
    }
}

#[test]
fn sorting_twice_is_idempotent() {
    let dataset = Dataset::bundled();
    for mode in SortMode::ALL {
        let mut once: Vec<&Vehicle> = dataset.vehicles().iter().collect();
        mode.sort(&mut once);
        let mut twice = once.clone();
        mode.sort(&mut twice);
        assert_eq!(once, twice, "mode {}", mode.as_str());
    }
}

#[test]
fn sorting_is_stable_for_equal_keys() {
    let vehicles = vec![
        vehicle("first", 100, 2020, 4.0),
        vehicle("second", 100, 2020, 4.0),
        vehicle("third", 50, 2020, 4.0),
    ];
    for mode in [SortMode::PriceDesc, SortMode::YearAsc, SortMode::Popular] {
        let selection = Selection {
            sort: mode,
            ..Selection::default()
        };
        let ids = catalog::apply(&vehicles, &selection, &[]).ids();
        let first = ids.iter().position(|id| *id == "first");
        let second = ids.iter().position(|id| *id == "second");
        assert!(first < second, "mode {}", mode.as_str());
    }
}

#[test]
fn two_vehicle_example_orders() {
    let vehicles = vec![
        vehicle("a", 1_000_000, 2020, 4.5),
        vehicle("b", 500_000, 2022, 4.9),
    ];
    for (value, expected) in [
        ("price-asc", vec!["b", "a"]),
        ("year-desc", vec!["b", "a"]),
        ("popular", vec!["b", "a"]),
        ("price-desc", vec!["a", "b"]),
        ("", vec!["a", "b"]),
    ] {
        let selection = Selection {
            sort: SortMode::parse(value),
            ..Selection::default()
        };
        assert_eq!(catalog::apply(&vehicles, &selection, &[]).ids(), expected);
    }
}

#[test]
fn favorites_only_with_empty_set_is_always_empty() {
    let dataset = Dataset::bundled();
    for mut selection in selections() {
        selection.favorites_only = true;
        assert!(catalog::apply(dataset.vehicles(), &selection, &[]).is_empty());
    }
}

#[test]
fn toggle_is_an_involution_on_persisted_bytes() {
    let backing = Rc::new(MemoryStore::new());
    let favorites = FavoritesStore::new(Rc::clone(&backing));
    favorites.toggle("vw-polo-2020").unwrap();
    let before = backing.raw(FAVORITES_KEY);
    let members = favorites.list();

    favorites.toggle("bmw-x5-2020").unwrap();
    favorites.toggle("bmw-x5-2020").unwrap();

    assert_eq!(backing.raw(FAVORITES_KEY), before);
    assert_eq!(favorites.list(), members);
}

#[test]
fn badge_count_tracks_persisted_size() {
    let backing = Rc::new(MemoryStore::new());
    let favorites = Rc::new(FavoritesStore::new(Rc::clone(&backing)));
    let badge = Rc::new(Cell::new(0));
    let _badge = {
        let badge = Rc::clone(&badge);
        favorites.subscribe(move |change| badge.set(change.count))
    };

    for id in ["a", "b", "c", "b", "a"] {
        favorites.toggle(id).unwrap();
        let persisted: Vec<String> =
            serde_json::from_str(&backing.raw(FAVORITES_KEY).unwrap()).unwrap();
        assert_eq!(badge.get(), persisted.len());
    }
    favorites.clear().unwrap();
    assert_eq!(badge.get(), 0);
}

#[test]
fn unknown_detail_id_is_not_found() {
    let dataset = Dataset::bundled();
    assert_eq!(
        detail::resolve(&dataset, Some("does-not-exist")),
        DetailView::NotFound
    );
}
