#![allow(missing_docs)] // Derive macros generate undocumented methods.

use enum_assoc::Assoc;

use crate::theme::{Theme, ThemePatch};

/// Color fields editable through the controls drawer.
///
/// Use `resolve()` to read the current value from a record and
/// `patch()` to build the single-field edit for it. `key()` is the
/// field's serialized name, `label()`/`section()` the control text.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> String)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn section(&self) -> &'static str)]
pub enum ThemeColorKind {
    /// Main accent color.
    #[assoc(resolve = theme.color_primary.clone())]
    #[assoc(key = "colorPrimary")]
    #[assoc(label = "Primary Color")]
    #[assoc(section = "Primary Colors")]
    ColorPrimary,
    /// Secondary accent color.
    #[assoc(resolve = theme.color_secondary.clone())]
    #[assoc(key = "colorSecondary")]
    #[assoc(label = "Secondary Color")]
    #[assoc(section = "Primary Colors")]
    ColorSecondary,
    #[assoc(resolve = theme.app_bg.clone())]
    #[assoc(key = "appBg")]
    #[assoc(label = "App Background")]
    #[assoc(section = "App Colors")]
    AppBg,
    #[assoc(resolve = theme.app_content_bg.clone())]
    #[assoc(key = "appContentBg")]
    #[assoc(label = "Content Background")]
    #[assoc(section = "App Colors")]
    AppContentBg,
    #[assoc(resolve = theme.app_preview_bg.clone())]
    #[assoc(key = "appPreviewBg")]
    #[assoc(label = "Preview Background")]
    #[assoc(section = "App Colors")]
    AppPreviewBg,
    #[assoc(resolve = theme.app_border_color.clone())]
    #[assoc(key = "appBorderColor")]
    #[assoc(label = "Border Color")]
    #[assoc(section = "App Colors")]
    AppBorderColor,
    #[assoc(resolve = theme.text_color.clone())]
    #[assoc(key = "textColor")]
    #[assoc(label = "Text Color")]
    #[assoc(section = "Text Colors")]
    TextColor,
    #[assoc(resolve = theme.text_inverse_color.clone())]
    #[assoc(key = "textInverseColor")]
    #[assoc(label = "Inverse Text")]
    #[assoc(section = "Text Colors")]
    TextInverseColor,
    #[assoc(resolve = theme.text_muted_color.clone())]
    #[assoc(key = "textMutedColor")]
    #[assoc(label = "Muted Text")]
    #[assoc(section = "Text Colors")]
    TextMutedColor,
    #[assoc(resolve = theme.bar_text_color.clone())]
    #[assoc(key = "barTextColor")]
    #[assoc(label = "Bar Text")]
    #[assoc(section = "Navigation Bar")]
    BarTextColor,
    #[assoc(resolve = theme.bar_hover_color.clone())]
    #[assoc(key = "barHoverColor")]
    #[assoc(label = "Bar Hover")]
    #[assoc(section = "Navigation Bar")]
    BarHoverColor,
    #[assoc(resolve = theme.bar_selected_color.clone())]
    #[assoc(key = "barSelectedColor")]
    #[assoc(label = "Bar Selected")]
    #[assoc(section = "Navigation Bar")]
    BarSelectedColor,
    #[assoc(resolve = theme.bar_bg.clone())]
    #[assoc(key = "barBg")]
    #[assoc(label = "Bar Background")]
    #[assoc(section = "Navigation Bar")]
    BarBg,
    #[assoc(resolve = theme.button_bg.clone())]
    #[assoc(key = "buttonBg")]
    #[assoc(label = "Button Background")]
    #[assoc(section = "Buttons")]
    ButtonBg,
    #[assoc(resolve = theme.button_border.clone())]
    #[assoc(key = "buttonBorder")]
    #[assoc(label = "Button Border")]
    #[assoc(section = "Buttons")]
    ButtonBorder,
    #[assoc(resolve = theme.boolean_bg.clone())]
    #[assoc(key = "booleanBg")]
    #[assoc(label = "Boolean Background")]
    #[assoc(section = "Boolean Controls")]
    BooleanBg,
    #[assoc(resolve = theme.boolean_selected_bg.clone())]
    #[assoc(key = "booleanSelectedBg")]
    #[assoc(label = "Boolean Selected")]
    #[assoc(section = "Boolean Controls")]
    BooleanSelectedBg,
    #[assoc(resolve = theme.input_bg.clone())]
    #[assoc(key = "inputBg")]
    #[assoc(label = "Input Background")]
    #[assoc(section = "Inputs")]
    InputBg,
    #[assoc(resolve = theme.input_border.clone())]
    #[assoc(key = "inputBorder")]
    #[assoc(label = "Input Border")]
    #[assoc(section = "Inputs")]
    InputBorder,
    #[assoc(resolve = theme.input_text_color.clone())]
    #[assoc(key = "inputTextColor")]
    #[assoc(label = "Input Text")]
    #[assoc(section = "Inputs")]
    InputTextColor,
}

impl ThemeColorKind {
    pub const ALL: [ThemeColorKind; 20] = [
        Self::ColorPrimary,
        Self::ColorSecondary,
        Self::AppBg,
        Self::AppContentBg,
        Self::AppPreviewBg,
        Self::AppBorderColor,
        Self::TextColor,
        Self::TextInverseColor,
        Self::TextMutedColor,
        Self::BarTextColor,
        Self::BarHoverColor,
        Self::BarSelectedColor,
        Self::BarBg,
        Self::ButtonBg,
        Self::ButtonBorder,
        Self::BooleanBg,
        Self::BooleanSelectedBg,
        Self::InputBg,
        Self::InputBorder,
        Self::InputTextColor,
    ];

    /// Builds the single-field patch editing this color.
    pub fn patch(&self, value: impl Into<String>) -> ThemePatch {
        let value = value.into();

        match self {
            Self::ColorPrimary => ThemePatch::new().color_primary(value),
            Self::ColorSecondary => ThemePatch::new().color_secondary(value),
            Self::AppBg => ThemePatch::new().app_bg(value),
            Self::AppContentBg => ThemePatch::new().app_content_bg(value),
            Self::AppPreviewBg => ThemePatch::new().app_preview_bg(value),
            Self::AppBorderColor => ThemePatch::new().app_border_color(value),
            Self::TextColor => ThemePatch::new().text_color(value),
            Self::TextInverseColor => ThemePatch::new().text_inverse_color(value),
            Self::TextMutedColor => ThemePatch::new().text_muted_color(value),
            Self::BarTextColor => ThemePatch::new().bar_text_color(value),
            Self::BarHoverColor => ThemePatch::new().bar_hover_color(value),
            Self::BarSelectedColor => ThemePatch::new().bar_selected_color(value),
            Self::BarBg => ThemePatch::new().bar_bg(value),
            Self::ButtonBg => ThemePatch::new().button_bg(value),
            Self::ButtonBorder => ThemePatch::new().button_border(value),
            Self::BooleanBg => ThemePatch::new().boolean_bg(value),
            Self::BooleanSelectedBg => ThemePatch::new().boolean_selected_bg(value),
            Self::InputBg => ThemePatch::new().input_bg(value),
            Self::InputBorder => ThemePatch::new().input_border(value),
            Self::InputTextColor => ThemePatch::new().input_text_color(value),
        }
    }
}

/// Pixel radius fields, `appBorderRadius` and `inputBorderRadius`.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> u32)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn section(&self) -> &'static str)]
pub enum ThemeRadiusKind {
    #[assoc(resolve = theme.app_border_radius)]
    #[assoc(key = "appBorderRadius")]
    #[assoc(label = "App Border Radius")]
    #[assoc(section = "Border Radius")]
    App,
    #[assoc(resolve = theme.input_border_radius)]
    #[assoc(key = "inputBorderRadius")]
    #[assoc(label = "Input Border Radius")]
    #[assoc(section = "Border Radius")]
    Input,
}

impl ThemeRadiusKind {
    pub const ALL: [ThemeRadiusKind; 2] = [Self::App, Self::Input];

    pub fn patch(&self, value: u32) -> ThemePatch {
        match self {
            Self::App => ThemePatch::new().app_border_radius(value),
            Self::Input => ThemePatch::new().input_border_radius(value),
        }
    }
}

/// Font family fields, `fontBase` and `fontCode`.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> String)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn section(&self) -> &'static str)]
pub enum ThemeFontKind {
    /// Main font family.
    #[assoc(resolve = theme.font_base.clone())]
    #[assoc(key = "fontBase")]
    #[assoc(label = "Base Font")]
    #[assoc(section = "Typography")]
    Base,
    /// Monospace font for code.
    #[assoc(resolve = theme.font_code.clone())]
    #[assoc(key = "fontCode")]
    #[assoc(label = "Code Font")]
    #[assoc(section = "Typography")]
    Code,
}

impl ThemeFontKind {
    pub const ALL: [ThemeFontKind; 2] = [Self::Base, Self::Code];

    pub fn patch(&self, value: impl Into<String>) -> ThemePatch {
        let value = value.into();

        match self {
            Self::Base => ThemePatch::new().font_base(value),
            Self::Code => ThemePatch::new().font_code(value),
        }
    }
}

/// Optional brand fields. `brandImage` has no kind: the editor exposes
/// no control for it.
#[derive(Assoc)]
#[func(pub fn resolve(&self, theme: &Theme) -> Option<String>)]
#[func(pub fn key(&self) -> &'static str)]
#[func(pub fn label(&self) -> &'static str)]
#[func(pub fn section(&self) -> &'static str)]
pub enum ThemeBrandKind {
    #[assoc(resolve = theme.brand_title.clone()?)]
    #[assoc(key = "brandTitle")]
    #[assoc(label = "Brand Title")]
    #[assoc(section = "Brand")]
    Title,
    #[assoc(resolve = theme.brand_url.clone()?)]
    #[assoc(key = "brandUrl")]
    #[assoc(label = "Brand URL")]
    #[assoc(section = "Brand")]
    Url,
    #[assoc(resolve = theme.brand_target.clone()?)]
    #[assoc(key = "brandTarget")]
    #[assoc(label = "Brand Target")]
    #[assoc(section = "Brand")]
    Target,
}

impl ThemeBrandKind {
    pub const ALL: [ThemeBrandKind; 3] = [Self::Title, Self::Url, Self::Target];

    pub fn patch(&self, value: impl Into<String>) -> ThemePatch {
        let value = value.into();

        match self {
            Self::Title => ThemePatch::new().brand_title(value),
            Self::Url => ThemePatch::new().brand_url(value),
            Self::Target => ThemePatch::new().brand_target(value),
        }
    }
}
