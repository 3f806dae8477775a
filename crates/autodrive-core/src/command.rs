//! Typed commands carried by rendered controls and the interpreter that runs
//! them.

use crate::dataset::Dataset;
use crate::favorites::FavoritesStore;
use crate::render;
use crate::storage::{KeyValueStore, StorageError};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;

/// Which favorite control variant issued a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteStyle {
    /// Heart icon on grid cards.
    Icon,
    /// Text button in the modal and on the detail page.
    Label,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    OpenDetail(String),
    ToggleFavorite { id: String, style: FavoriteStyle },
    CloseModal,
}

impl Command {
    pub const OPEN_DETAIL: &'static str = "open-detail";
    pub const TOGGLE_FAVORITE: &'static str = "toggle-favorite";
    pub const TOGGLE_FAVORITE_LABEL: &'static str = "toggle-favorite-label";
    pub const CLOSE_MODAL: &'static str = "close-modal";

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::OpenDetail(_) => Self::OPEN_DETAIL,
            Self::ToggleFavorite {
                style: FavoriteStyle::Icon,
                ..
            } => Self::TOGGLE_FAVORITE,
            Self::ToggleFavorite {
                style: FavoriteStyle::Label,
                ..
            } => Self::TOGGLE_FAVORITE_LABEL,
            Self::CloseModal => Self::CLOSE_MODAL,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::OpenDetail(id) | Self::ToggleFavorite { id, .. } => Some(id),
            Self::CloseModal => None,
        }
    }

    /// Rebuilds a command from the `data-command` / `data-id` pair of a
    /// clicked element. Commands that need a target and have none are `None`.
    pub fn parse(kind: &str, id: Option<&str>) -> Option<Self> {
        let id = id.map(str::trim).filter(|id| !id.is_empty());
        match (kind, id) {
            (Self::OPEN_DETAIL, Some(id)) => Some(Self::OpenDetail(id.to_owned())),
            (Self::TOGGLE_FAVORITE, Some(id)) => Some(Self::ToggleFavorite {
                id: id.to_owned(),
                style: FavoriteStyle::Icon,
            }),
            (Self::TOGGLE_FAVORITE_LABEL, Some(id)) => Some(Self::ToggleFavorite {
                id: id.to_owned(),
                style: FavoriteStyle::Label,
            }),
            (Self::CLOSE_MODAL, _) => Some(Self::CloseModal),
            _ => None,
        }
    }

    /// Attribute string (with a leading space) to splice into an element tag.
    pub fn attributes(&self) -> String {
        match self.id() {
            Some(id) => format!(
                r#" data-command="{}" data-id="{}""#,
                self.kind(),
                render::escape(id)
            ),
            None => format!(r#" data-command="{}""#, self.kind()),
        }
    }
}

/// What the front-end has to do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ShowModal { id: String, body: String },
    HideModal,
    FavoriteToggled { id: String, active: bool },
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    open: Option<String>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn vehicle_id(&self) -> Option<&str> {
        self.open.as_deref()
    }
}

pub struct Interpreter<S> {
    dataset: Rc<Dataset>,
    favorites: Rc<FavoritesStore<S>>,
    modal: RefCell<ModalState>,
}

impl<S: KeyValueStore> Interpreter<S> {
    pub fn new(dataset: Rc<Dataset>, favorites: Rc<FavoritesStore<S>>) -> Self {
        Self {
            dataset,
            favorites,
            modal: RefCell::new(ModalState::default()),
        }
    }

    pub fn modal(&self) -> ModalState {
        self.modal.borrow().clone()
    }

    pub fn dispatch(&self, command: &Command) -> Result<Effect, StorageError> {
        debug!(command = command.kind(), id = command.id(), "dispatch");

        match command {
            Command::OpenDetail(id) => {
                let Some(vehicle) = self.dataset.find(id) else {
                    return Ok(Effect::Ignored);
                };
                let body = render::modal_body(vehicle, self.favorites.contains(id));
                self.modal.borrow_mut().open = Some(id.clone());
                Ok(Effect::ShowModal {
                    id: id.clone(),
                    body,
                })
            }
            Command::ToggleFavorite { id, .. } => {
                if self.dataset.find(id).is_none() {
                    return Ok(Effect::Ignored);
                }
                let active = self.favorites.toggle(id)?;
                Ok(Effect::FavoriteToggled {
                    id: id.clone(),
                    active,
                })
            }
            Command::CloseModal => {
                if self.modal.borrow_mut().open.take().is_some() {
                    Ok(Effect::HideModal)
                } else {
                    Ok(Effect::Ignored)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn interpreter() -> Interpreter<MemoryStore> {
        Interpreter::new(
            Rc::new(Dataset::bundled()),
            Rc::new(FavoritesStore::new(MemoryStore::new())),
        )
    }

    #[test]
    fn parse_reads_rendered_attributes() {
        let command = Command::ToggleFavorite {
            id: "kia-rio-2021".to_string(),
            style: FavoriteStyle::Label,
        };
        assert_eq!(
            command.attributes(),
            r#" data-command="toggle-favorite-label" data-id="kia-rio-2021""#
        );
        assert_eq!(
            Command::parse("toggle-favorite-label", Some("kia-rio-2021")),
            Some(command)
        );
        assert_eq!(
            Command::parse("close-modal", None),
            Some(Command::CloseModal)
        );
    }

    #[test]
    fn parse_rejects_missing_targets_and_unknown_kinds() {
        assert_eq!(Command::parse("open-detail", None), None);
        assert_eq!(Command::parse("open-detail", Some("  ")), None);
        assert_eq!(Command::parse("launch", Some("x")), None);
    }

    #[test]
    fn open_then_close_modal() {
        let interpreter = interpreter();
        let effect = interpreter
            .dispatch(&Command::OpenDetail("bmw-x5-2020".to_string()))
            .unwrap();
        match effect {
            Effect::ShowModal { id, body } => {
                assert_eq!(id, "bmw-x5-2020");
                assert!(body.contains("BMW X5"));
            }
            other => panic!("unexpected effect {other:?}"),
        }
        assert_eq!(interpreter.modal().vehicle_id(), Some("bmw-x5-2020"));

        assert_eq!(
            interpreter.dispatch(&Command::CloseModal).unwrap(),
            Effect::HideModal
        );
        assert!(!interpreter.modal().is_open());
        assert_eq!(
            interpreter.dispatch(&Command::CloseModal).unwrap(),
            Effect::Ignored
        );
    }

    #[test]
    fn toggle_reports_new_state() {
        let interpreter = interpreter();
        let toggle = Command::ToggleFavorite {
            id: "audi-a3-2020".to_string(),
            style: FavoriteStyle::Icon,
        };
        assert_eq!(
            interpreter.dispatch(&toggle).unwrap(),
            Effect::FavoriteToggled {
                id: "audi-a3-2020".to_string(),
                active: true
            }
        );
        assert_eq!(
            interpreter.dispatch(&toggle).unwrap(),
            Effect::FavoriteToggled {
                id: "audi-a3-2020".to_string(),
                active: false
            }
        );
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let interpreter = interpreter();
        assert_eq!(
            interpreter
                .dispatch(&Command::OpenDetail("nope".to_string()))
                .unwrap(),
            Effect::Ignored
        );
        assert_eq!(
            interpreter
                .dispatch(&Command::ToggleFavorite {
                    id: "nope".to_string(),
                    style: FavoriteStyle::Icon
                })
                .unwrap(),
            Effect::Ignored
        );
        assert!(!interpreter.modal().is_open());
    }
}
