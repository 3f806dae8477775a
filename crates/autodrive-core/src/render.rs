//! Markup fragments for cards, the quick-view modal, the detail page and the
//! home slider.
//!
//! Every function is pure over its inputs; favorite state is passed in (or,
//! for [`car_cards`], read from the store at call time) and never cached.
//! Interactive elements carry a serialized [`Command`] instead of ad-hoc
//! class hooks.

use crate::command::{Command, FavoriteStyle};
use crate::detail::Gallery;
use crate::domain::Vehicle;
use crate::favorites::FavoritesStore;
use crate::format;
use crate::pages::Page;
use crate::storage::KeyValueStore;
use std::fmt::Write;

pub const ADD_FAVORITE_LABEL: &str = "В избранное";
pub const REMOVE_FAVORITE_LABEL: &str = "Убрать из избранного";

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

pub const fn favorite_icon(active: bool) -> &'static str {
    if active {
        "❤️"
    } else {
        "🤍"
    }
}

pub const fn favorite_label(active: bool) -> &'static str {
    if active {
        REMOVE_FAVORITE_LABEL
    } else {
        ADD_FAVORITE_LABEL
    }
}

/// `car.html?id=…`
pub fn detail_href(id: &str) -> String {
    format!("{}?id={}", Page::Car.file_name(), escape(id))
}

fn feature_list(vehicle: &Vehicle) -> String {
    let mut out = String::from(r#"<ul class="feature-list">"#);
    for feature in &vehicle.features {
        let _ = write!(out, "<li>{}</li>", escape(feature));
    }
    out.push_str("</ul>");
    out
}

fn spec_cell(out: &mut String, label: &str, value: &str) {
    let _ = write!(out, "<div><b>{label}</b>{}</div>", escape(value));
}

/// Compact grid card.
pub fn car_card(vehicle: &Vehicle, favorite: bool) -> String {
    let id = &vehicle.id;
    let details = Command::OpenDetail(id.clone());
    let toggle = Command::ToggleFavorite {
        id: id.clone(),
        style: FavoriteStyle::Icon,
    };
    let active = if favorite { " active" } else { "" };

    format!(
        concat!(
            r#"<article class="car-card" data-id="{id}">"#,
            r#"<div class="car-cover {gradient}">{emoji}<span class="car-rating">★ {rating}</span></div>"#,
            r#"<div class="car-body">"#,
            "<h3>{title}</h3><p>{short}</p>",
            r#"<div class="car-info"><span>{category}</span><span>{engine}</span><span>{year}</span><span>{drive}</span></div>"#,
            r#"<span class="car-price">{price}</span>"#,
            r#"<div class="card-actions">"#,
            r#"<button class="small-btn" type="button"{details}>Подробнее</button>"#,
            r#"<button class="small-btn fav-btn{active}" type="button"{toggle}>{icon}</button>"#,
            r#"<a class="small-btn" href="{href}">Открыть</a>"#,
            "</div></div></article>"
        ),
        id = escape(id),
        gradient = escape(&vehicle.gradient),
        emoji = escape(&vehicle.emoji),
        rating = vehicle.rating,
        title = escape(&vehicle.title),
        short = escape(&vehicle.short),
        category = vehicle.category.label(),
        engine = escape(&vehicle.engine),
        year = vehicle.year,
        drive = escape(&vehicle.drive),
        price = format::price(vehicle.price),
        details = details.attributes(),
        active = active,
        toggle = toggle.attributes(),
        icon = favorite_icon(favorite),
        href = detail_href(id),
    )
}

/// Cards for `vehicles`, with favorite state read from the store now.
pub fn car_cards<'a, S, I>(vehicles: I, favorites: &FavoritesStore<S>) -> String
where
    S: KeyValueStore,
    I: IntoIterator<Item = &'a Vehicle>,
{
    let ids = favorites.list();
    vehicles
        .into_iter()
        .map(|vehicle| car_card(vehicle, ids.contains(&vehicle.id)))
        .collect()
}

/// Body of the quick-view modal.
pub fn modal_body(vehicle: &Vehicle, favorite: bool) -> String {
    let toggle = Command::ToggleFavorite {
        id: vehicle.id.clone(),
        style: FavoriteStyle::Label,
    };

    let mut meta = String::new();
    spec_cell(&mut meta, "Год", &vehicle.year.to_string());
    spec_cell(&mut meta, "Кузов", vehicle.category.label());
    spec_cell(&mut meta, "Двигатель", &vehicle.engine);
    spec_cell(&mut meta, "КПП", &vehicle.transmission);
    spec_cell(&mut meta, "Привод", &vehicle.drive);
    spec_cell(&mut meta, "Пробег", &format::mileage(vehicle.mileage));

    format!(
        concat!(
            r#"<div class="modal-car">"#,
            r#"<div class="modal-cover {gradient}">{emoji}</div>"#,
            r#"<div class="modal-body">"#,
            "<h3>{title}</h3><p>{description}</p>",
            r#"<div class="modal-meta">{meta}</div>"#,
            r#"<div class="modal-price">{price}</div>"#,
            "{features}",
            r#"<div class="modal-actions">"#,
            r#"<button class="btn btn-primary" type="button"{toggle}>{label}</button>"#,
            r#"<a href="{href}" class="btn btn-outline">Страница авто</a>"#,
            "</div></div></div>"
        ),
        gradient = escape(&vehicle.gradient),
        emoji = escape(&vehicle.emoji),
        title = escape(&vehicle.title),
        description = escape(&vehicle.description),
        meta = meta,
        price = format::price(vehicle.price),
        features = feature_list(vehicle),
        toggle = toggle.attributes(),
        label = favorite_label(favorite),
        href = detail_href(&vehicle.id),
    )
}

/// Main body of the standalone detail page. The similar strip is rendered
/// separately with [`car_cards`].
pub fn detail_page(vehicle: &Vehicle, favorite: bool, gallery: &Gallery) -> String {
    let quick_view = Command::OpenDetail(vehicle.id.clone());
    let toggle = Command::ToggleFavorite {
        id: vehicle.id.clone(),
        style: FavoriteStyle::Label,
    };
    let main = gallery.active();

    let mut thumbs = String::new();
    for (index, thumb) in gallery.thumbs().iter().enumerate() {
        let active = if index == gallery.active_index() {
            " active"
        } else {
            ""
        };
        let _ = write!(
            thumbs,
            r#"<button class="thumb{active} {gradient}" data-thumb="{index}" type="button">{emoji}</button>"#,
            gradient = escape(&thumb.gradient),
            emoji = escape(&thumb.emoji),
        );
    }

    let mut specs = String::new();
    spec_cell(&mut specs, "Год", &vehicle.year.to_string());
    spec_cell(&mut specs, "Пробег", &format::mileage(vehicle.mileage));
    spec_cell(&mut specs, "Двигатель", &vehicle.engine);
    spec_cell(&mut specs, "Мощность", &format::power(vehicle.power));
    spec_cell(&mut specs, "КПП", &vehicle.transmission);
    spec_cell(&mut specs, "Привод", &vehicle.drive);
    spec_cell(&mut specs, "Топливо", &vehicle.fuel);
    spec_cell(&mut specs, "Цвет", &vehicle.color);

    format!(
        concat!(
            r#"<div class="car-page">"#,
            r#"<div class="detail-gallery">"#,
            r#"<div id="detailMain" class="detail-main {main_gradient}">{main_emoji}</div>"#,
            r#"<div class="detail-thumbs">{thumbs}</div>"#,
            "</div>",
            r#"<div class="detail-info">"#,
            "<h2>{title}</h2><p>{description}</p>",
            r#"<div class="detail-price">{price}</div>"#,
            r#"<div class="detail-grid">{specs}</div>"#,
            r#"<div class="detail-actions">"#,
            r#"<button class="btn btn-primary" type="button"{quick_view}>Быстрое окно</button>"#,
            r#"<button class="btn btn-outline" type="button"{toggle}>{label}</button>"#,
            r#"<a href="{contacts}" class="btn btn-outline">Оставить заявку</a>"#,
            "</div>",
            "{features}",
            "</div></div>"
        ),
        main_gradient = escape(&main.gradient),
        main_emoji = escape(&main.emoji),
        thumbs = thumbs,
        title = escape(&vehicle.title),
        description = escape(&vehicle.description),
        price = format::price(vehicle.price),
        specs = specs,
        quick_view = quick_view.attributes(),
        toggle = toggle.attributes(),
        label = favorite_label(favorite),
        contacts = Page::Contacts.file_name(),
        features = feature_list(vehicle),
    )
}

pub fn not_found() -> String {
    format!(
        concat!(
            r#"<div class="empty-state">"#,
            "<p>Автомобиль не найден.</p>",
            r#"<a href="{catalog}" class="btn btn-primary">В каталог</a>"#,
            "</div>"
        ),
        catalog = Page::Catalog.file_name(),
    )
}

/// One hero slide.
pub fn slide(vehicle: &Vehicle) -> String {
    format!(
        concat!(
            r#"<div class="slide">"#,
            r#"<div class="slide-cover {gradient}">{emoji}</div>"#,
            r#"<div class="slide-body">"#,
            "<h4>{title}</h4><p>{short}</p>",
            r#"<div class="slide-meta"><span>{category}</span><span>{engine}</span><span>{year}</span></div>"#,
            r#"<div class="slide-bottom">"#,
            r#"<span class="slide-price">{price}</span>"#,
            r#"<a class="btn btn-primary" href="{href}">Открыть</a>"#,
            "</div></div></div>"
        ),
        gradient = escape(&vehicle.gradient),
        emoji = escape(&vehicle.emoji),
        title = escape(&vehicle.title),
        short = escape(&vehicle.short),
        category = vehicle.category.label(),
        engine = escape(&vehicle.engine),
        year = vehicle.year,
        price = format::price(vehicle.price),
        href = detail_href(&vehicle.id),
    )
}

pub fn slide_dots(len: usize, current: usize) -> String {
    (0..len)
        .map(|i| {
            let active = if i == current { " active" } else { "" };
            format!(r#"<button class="dot{active}" data-slide="{i}" type="button"></button>"#)
        })
        .collect()
}

/// Brand select options, led by the "all brands" entry.
pub fn brand_options(brands: &[&str]) -> String {
    let mut out = String::from(r#"<option value="all">Все бренды</option>"#);
    for brand in brands {
        let brand = escape(brand);
        let _ = write!(out, r#"<option value="{brand}">{brand}</option>"#);
    }
    out
}
