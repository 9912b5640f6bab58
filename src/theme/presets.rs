use smallvec::SmallVec;
use thiserror::Error;

use super::schema::{Base, Theme};

/// A named, fully-populated theme record shipped as a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemePreset {
    pub name: String,
    pub theme: Theme,
}

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("A preset with this name doesn't exist.")]
    UnknownName,
}

/// The built-in presets, in selector order.
pub fn builtin_presets() -> SmallVec<[ThemePreset; 2]> {
    SmallVec::from_buf([
        ThemePreset {
            name: "Light".into(),
            theme: Theme::for_base(Base::Light),
        },
        ThemePreset {
            name: "Dark".into(),
            theme: Theme::for_base(Base::Dark),
        },
    ])
}

/// Looks a built-in preset up by name, case-insensitively.
pub fn find_preset(name: &str) -> Result<ThemePreset, PresetError> {
    builtin_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
        .ok_or(PresetError::UnknownName)
}
