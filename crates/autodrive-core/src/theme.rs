use crate::storage::{KeyValueStore, StorageError, THEME_KEY};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than a stored `"dark"` is the light theme.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        match store.get(THEME_KEY) {
            Ok(Some(value)) if value == "dark" => Self::Dark,
            Ok(_) => Self::Light,
            Err(e) => {
                warn!(error = %e, "theme read failed");
                Self::Light
            }
        }
    }

    pub fn save<S: KeyValueStore + ?Sized>(self, store: &S) -> Result<(), StorageError> {
        store.set(THEME_KEY, self.as_str())
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Flips and persists the theme, returning the new one.
    pub fn toggle<S: KeyValueStore + ?Sized>(self, store: &S) -> Result<Self, StorageError> {
        let next = self.toggled();
        next.save(store)?;
        Ok(next)
    }

    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Glyph for the theme button: the icon of the theme it switches to.
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Dark => "☀️",
            Self::Light => "🌙",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn missing_or_unknown_value_is_light() {
        assert_eq!(Theme::load(&MemoryStore::new()), Theme::Light);
        let store = MemoryStore::new().with_entry(THEME_KEY, "sepia");
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn toggle_persists() {
        let store = MemoryStore::new();
        let theme = Theme::load(&store).toggle(&store).unwrap();
        assert_eq!(theme, Theme::Dark);
        assert_eq!(store.raw(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(theme.icon(), "☀️");

        let theme = theme.toggle(&store).unwrap();
        assert_eq!(store.raw(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(theme.icon(), "🌙");
    }
}
