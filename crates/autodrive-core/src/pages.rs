use crate::domain::Category;

/// The site's pages, one HTML document each.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Catalog,
    Favorites,
    Services,
    Contacts,
    Car,
}

impl Page {
    pub const ALL: [Self; 6] = [
        Self::Home,
        Self::Catalog,
        Self::Favorites,
        Self::Services,
        Self::Contacts,
        Self::Car,
    ];

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Home => "index.html",
            Self::Catalog => "catalog.html",
            Self::Favorites => "favorites.html",
            Self::Services => "services.html",
            Self::Contacts => "contacts.html",
            Self::Car => "car.html",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Главная",
            Self::Catalog => "Каталог",
            Self::Favorites => "Избранное",
            Self::Services => "Услуги",
            Self::Contacts => "Контакты",
            Self::Car => "Автомобиль",
        }
    }

    /// Last segment of a location path; an empty segment is the home page.
    pub fn current_file(path: &str) -> &str {
        match path.rsplit('/').next() {
            Some("") | None => Self::Home.file_name(),
            Some(file) => file,
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let file = Self::current_file(path);
        Self::ALL.into_iter().find(|page| page.file_name() == file)
    }
}

/// Query pairs for a catalogue deep link from the hero search form. Empty
/// text and the `all` category are left out.
pub fn catalog_query(text: &str, category: &str) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    let text = text.trim();
    if !text.is_empty() {
        pairs.push(("search", text.to_owned()));
    }
    let category = category.trim();
    if !category.is_empty() && category != "all" {
        pairs.push(("type", category.to_owned()));
    }
    pairs
}

/// Category choices offered by the hero search and catalogue type selects.
pub fn category_choices() -> impl Iterator<Item = (&'static str, &'static str)> {
    std::iter::once(("all", "Все типы")).chain(
        Category::ALL
            .into_iter()
            .map(|category| (category.as_str(), category.label())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_maps_to_page() {
        assert_eq!(Page::from_path("/site/catalog.html"), Some(Page::Catalog));
        assert_eq!(Page::from_path("/"), Some(Page::Home));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/about.html"), None);
        assert_eq!(Page::current_file("/a/b/"), "index.html");
    }

    #[test]
    fn catalog_query_skips_empty_and_all() {
        assert!(catalog_query("  ", "all").is_empty());
        assert_eq!(
            catalog_query(" kia ", "sedan"),
            vec![("search", "kia".to_string()), ("type", "sedan".to_string())]
        );
        assert_eq!(
            catalog_query("", "crossover"),
            vec![("type", "crossover".to_string())]
        );
    }

    #[test]
    fn category_choices_lead_with_all() {
        let choices: Vec<_> = category_choices().collect();
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[0].0, "all");
        assert_eq!(choices[2], ("crossover", "Кроссовер"));
    }
}
