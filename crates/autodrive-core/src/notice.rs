use std::time::Duration;

/// How long a toast stays on screen before it dismisses itself.
pub const TOAST_DURATION: Duration = Duration::from_millis(1800);

/// Short-lived user-facing messages shown through the shared toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    FavoriteAdded,
    FavoriteRemoved,
    FavoritesCleared,
    CostCalculated,
    FormSent,
}

impl Notice {
    pub const fn text(self) -> &'static str {
        match self {
            Self::FavoriteAdded => "Добавлено в избранное",
            Self::FavoriteRemoved => "Удалено из избранного",
            Self::FavoritesCleared => "Избранное очищено",
            Self::CostCalculated => "Стоимость рассчитана",
            Self::FormSent => "Форма отправлена",
        }
    }
}
