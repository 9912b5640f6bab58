use std::{
    ops::{Deref, DerefMut},
    sync::LazyLock,
};

use serde::{Deserialize, Serialize};

use super::deserializers::{de_px, de_px_opt};

/// The light/dark family a theme record is categorized under.
///
/// Purely informational once individual fields are overridden; edits
/// never resynchronize it.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Base {
    Light,
    Dark,
}

impl Base {
    pub fn as_str(&self) -> &'static str {
        match self {
            Base::Light => "light",
            Base::Dark => "dark",
        }
    }
}

/// One complete theme record: colors, typography, and dimensions.
///
/// Every non-optional field is always populated; a record is never
/// partially constructed. Color and font fields hold free-form CSS
/// text and are not validated beyond being strings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub base: Base,
    pub color_primary: String,
    pub color_secondary: String,
    pub app_bg: String,
    pub app_content_bg: String,
    pub app_preview_bg: String,
    pub app_border_color: String,
    #[serde(deserialize_with = "de_px")]
    pub app_border_radius: u32,
    pub font_base: String,
    pub font_code: String,
    pub text_color: String,
    pub text_inverse_color: String,
    pub text_muted_color: String,
    pub bar_text_color: String,
    pub bar_hover_color: String,
    pub bar_selected_color: String,
    pub bar_bg: String,
    pub button_bg: String,
    pub button_border: String,
    pub boolean_bg: String,
    pub boolean_selected_bg: String,
    pub input_bg: String,
    pub input_border: String,
    pub input_text_color: String,
    #[serde(deserialize_with = "de_px")]
    pub input_border_radius: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_url: Option<String>,
    // Part of the record shape; the export format never emits it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand_target: Option<String>,
    #[serde(
        default,
        deserialize_with = "de_px_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub grid_cell_size: Option<u32>,
}

macro_rules! generate_builtin_themes {
    ( $( [$path:literal, $name:ident] ),+ $(,)? ) => {
        $(
            pub const $name: LazyLockTheme = LazyLockTheme::new(|| Theme::from_string(include_str!($path)).unwrap());
        )+
    };
}

pub struct LazyLockTheme(LazyLock<Theme>);

impl LazyLockTheme {
    #[inline(always)]
    const fn new(f: fn() -> Theme) -> Self {
        Self(LazyLock::new(f))
    }
}

impl Deref for LazyLockTheme {
    type Target = Theme;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LazyLockTheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl AsRef<Theme> for LazyLockTheme {
    fn as_ref(&self) -> &Theme {
        &self.0
    }
}

impl Theme {
    generate_builtin_themes!(
        ["../../themes/light.json", LIGHT],
        ["../../themes/dark.json", DARK],
    );

    /// Parses a theme record from its JSON representation.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<Theme, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    /// Returns the built-in default record for `base`.
    pub fn for_base(base: Base) -> Theme {
        match base {
            Base::Light => Theme::LIGHT.as_ref().clone(),
            Base::Dark => Theme::DARK.as_ref().clone(),
        }
    }

    /// Discards every customization and returns the full preset
    /// matching the record's current `base`.
    pub fn reset(&self) -> Theme {
        Theme::for_base(self.base)
    }
}
