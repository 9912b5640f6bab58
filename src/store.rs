use crate::{
    export::{ExportArtifact, export_artifact},
    theme::{Base, Theme, ThemePatch},
};

/// Owns the single mutable "current record" slot on behalf of a UI
/// binding layer.
///
/// Every operation delegates to the pure record transformations and
/// replaces the slot wholesale; the previous record is discarded,
/// never mutated in place.
#[derive(Debug, Clone)]
pub struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    pub fn new(base: Base) -> Self {
        Self {
            current: Theme::for_base(base),
        }
    }

    /// The current record.
    pub fn current(&self) -> &Theme {
        &self.current
    }

    /// Merges `patch` over the current record.
    pub fn update(&mut self, patch: &ThemePatch) -> &Theme {
        tracing::trace!(?patch, "applying theme patch");
        self.current = self.current.merged(patch);
        &self.current
    }

    /// Substitutes the full preset matching the current base.
    pub fn reset(&mut self) -> &Theme {
        tracing::debug!(base = self.current.base.as_str(), "resetting theme");
        self.current = self.current.reset();
        &self.current
    }

    /// Discards the record entirely and substitutes the target
    /// family's preset; no fields carry over.
    pub fn switch_base(&mut self, base: Base) -> &Theme {
        tracing::debug!(base = base.as_str(), "switching theme base");
        self.current = Theme::for_base(base);
        &self.current
    }

    /// Renders the current record as the downloadable artifact.
    pub fn export(&self) -> ExportArtifact {
        export_artifact(&self.current)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Base::Light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_holds_preset() {
        let store = ThemeStore::new(Base::Dark);

        assert_eq!(store.current(), &Theme::for_base(Base::Dark));
    }

    #[test]
    fn test_default_store_is_light() {
        assert_eq!(ThemeStore::default().current().base, Base::Light);
    }

    #[test]
    fn test_update_replaces_record() {
        let mut store = ThemeStore::new(Base::Light);
        let before = store.current().clone();

        store.update(&ThemePatch::new().color_primary("#112233"));

        assert_eq!(store.current().color_primary, "#112233");
        assert_eq!(store.current().app_bg, before.app_bg);
    }

    #[test]
    fn test_reset_discards_edits() {
        let mut store = ThemeStore::new(Base::Dark);
        store.update(&ThemePatch::new().bar_bg("#123456").brand_title("Acme"));

        store.reset();

        assert_eq!(store.current(), &Theme::for_base(Base::Dark));
    }

    #[test]
    fn test_switch_base_discards_all_customization() {
        let mut store = ThemeStore::new(Base::Dark);
        store.update(&ThemePatch::new().color_primary("#112233"));

        store.switch_base(Base::Light);

        // Deep-equals the light preset; nothing carries over.
        assert_eq!(store.current(), &Theme::for_base(Base::Light));
        assert_eq!(store.current().brand_title.as_deref(), Some("Storybook"));
    }

    #[test]
    fn test_switch_base_always_lands_on_target() {
        for base in [Base::Light, Base::Dark] {
            let mut store = ThemeStore::new(Base::Light);
            store.switch_base(base);
            assert_eq!(store.current().base, base);
        }
    }

    #[test]
    fn test_export_names_the_artifact() {
        let store = ThemeStore::new(Base::Light);

        assert_eq!(store.export().file_name, "YourTheme.js");
    }
}
