use serde::Deserialize;

use super::deserializers::de_px_opt;
use super::schema::{Base, Theme};

/// A partial field set applied over an existing record.
///
/// Unset fields leave the current record untouched. JSON patches
/// carrying a key outside the schema are rejected at parse time.
#[derive(Debug, Deserialize, Default, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields, default)]
pub struct ThemePatch {
    pub base: Option<Base>,
    pub color_primary: Option<String>,
    pub color_secondary: Option<String>,
    pub app_bg: Option<String>,
    pub app_content_bg: Option<String>,
    pub app_preview_bg: Option<String>,
    pub app_border_color: Option<String>,
    #[serde(deserialize_with = "de_px_opt")]
    pub app_border_radius: Option<u32>,
    pub font_base: Option<String>,
    pub font_code: Option<String>,
    pub text_color: Option<String>,
    pub text_inverse_color: Option<String>,
    pub text_muted_color: Option<String>,
    pub bar_text_color: Option<String>,
    pub bar_hover_color: Option<String>,
    pub bar_selected_color: Option<String>,
    pub bar_bg: Option<String>,
    pub button_bg: Option<String>,
    pub button_border: Option<String>,
    pub boolean_bg: Option<String>,
    pub boolean_selected_bg: Option<String>,
    pub input_bg: Option<String>,
    pub input_border: Option<String>,
    pub input_text_color: Option<String>,
    #[serde(deserialize_with = "de_px_opt")]
    pub input_border_radius: Option<u32>,
    pub brand_title: Option<String>,
    pub brand_url: Option<String>,
    pub brand_image: Option<String>,
    pub brand_target: Option<String>,
    #[serde(deserialize_with = "de_px_opt")]
    pub grid_cell_size: Option<u32>,
}

macro_rules! string_setters {
    ( $( $field:ident ),+ $(,)? ) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

impl ThemePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a patch from its JSON representation.
    pub fn from_string<S: AsRef<str>>(str: S) -> Result<ThemePatch, serde_json::Error> {
        serde_json::from_str(str.as_ref())
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn base(mut self, base: Base) -> Self {
        self.base = Some(base);
        self
    }

    string_setters!(
        color_primary,
        color_secondary,
        app_bg,
        app_content_bg,
        app_preview_bg,
        app_border_color,
        font_base,
        font_code,
        text_color,
        text_inverse_color,
        text_muted_color,
        bar_text_color,
        bar_hover_color,
        bar_selected_color,
        bar_bg,
        button_bg,
        button_border,
        boolean_bg,
        boolean_selected_bg,
        input_bg,
        input_border,
        input_text_color,
        brand_title,
        brand_url,
        brand_image,
        brand_target,
    );

    pub fn app_border_radius(mut self, value: u32) -> Self {
        self.app_border_radius = Some(value);
        self
    }

    pub fn input_border_radius(mut self, value: u32) -> Self {
        self.input_border_radius = Some(value);
        self
    }

    pub fn grid_cell_size(mut self, value: u32) -> Self {
        self.grid_cell_size = Some(value);
        self
    }
}

macro_rules! merge_fields {
    (
        $theme:ident, $patch:ident,
        required: [ $( $required:ident ),+ $(,)? ],
        optional: [ $( $optional:ident ),+ $(,)? ]
    ) => {
        $(
            if let Some(value) = &$patch.$required {
                $theme.$required = value.clone();
            }
        )+
        $(
            if let Some(value) = &$patch.$optional {
                $theme.$optional = Some(value.clone());
            }
        )+
    };
}

impl Theme {
    /// Returns a new record with every field present in `patch`
    /// overwritten by the patch's value and all other fields unchanged.
    pub fn merged(&self, patch: &ThemePatch) -> Theme {
        let mut theme = self.clone();

        merge_fields!(
            theme, patch,
            required: [
                base,
                color_primary,
                color_secondary,
                app_bg,
                app_content_bg,
                app_preview_bg,
                app_border_color,
                app_border_radius,
                font_base,
                font_code,
                text_color,
                text_inverse_color,
                text_muted_color,
                bar_text_color,
                bar_hover_color,
                bar_selected_color,
                bar_bg,
                button_bg,
                button_border,
                boolean_bg,
                boolean_selected_bg,
                input_bg,
                input_border,
                input_text_color,
                input_border_radius,
            ],
            optional: [
                brand_title,
                brand_url,
                brand_image,
                brand_target,
                grid_cell_size,
            ]
        );

        theme
    }
}
