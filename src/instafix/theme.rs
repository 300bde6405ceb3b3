use crate::error::Result;
use crate::model::Theme;
use crate::store::{Storage, THEME_KEY};

/// The stored preference, if any. Unknown values are ignored.
pub fn stored_theme<S: Storage>(storage: &S) -> Option<Theme> {
    match storage.get(THEME_KEY) {
        Ok(Some(raw)) => match raw.parse() {
            Ok(theme) => Some(theme),
            Err(e) => {
                log::warn!("Ignoring stored theme: {}", e);
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::warn!("Failed to read theme preference: {}", e);
            None
        }
    }
}

pub fn system_theme() -> Theme {
    match dark_light::detect() {
        dark_light::Mode::Light => Theme::Light,
        dark_light::Mode::Dark => Theme::Dark,
    }
}

/// Stored preference, falling back to the system's light/dark mode.
pub fn load_theme<S: Storage>(storage: &S) -> Theme {
    stored_theme(storage).unwrap_or_else(system_theme)
}

pub fn save_theme<S: Storage>(storage: &mut S, theme: Theme) -> Result<()> {
    storage.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStorage;

    #[test]
    fn stored_value_wins() {
        let storage = InMemoryStorage::new().with_entry(THEME_KEY, "dark");
        assert_eq!(load_theme(&storage), Theme::Dark);
    }

    #[test]
    fn invalid_value_is_ignored() {
        let storage = InMemoryStorage::new().with_entry(THEME_KEY, "\"purple\"");
        assert_eq!(stored_theme(&storage), None);
    }

    #[test]
    fn save_then_load() {
        let mut storage = InMemoryStorage::new();
        save_theme(&mut storage, Theme::Light).unwrap();
        assert_eq!(storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert_eq!(stored_theme(&storage), Some(Theme::Light));
    }
}
