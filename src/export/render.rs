use indexmap::IndexMap;

use crate::theme::Theme;

/// File name of the downloadable artifact.
pub const EXPORT_FILE_NAME: &str = "YourTheme.js";

/// The rendered module text plus the file name it ships under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: &'static str,
    pub contents: String,
}

enum FieldValue<'a> {
    Text(&'a str),
    Number(u32),
}

// Insertion order is the export order; optional fields join the map
// only when truthy (an empty string or a zero cell size reads as
// unset).
fn entries(theme: &Theme) -> IndexMap<&'static str, FieldValue<'_>> {
    let mut fields = IndexMap::new();

    fields.insert("base", FieldValue::Text(theme.base.as_str()));
    fields.insert("colorPrimary", FieldValue::Text(&theme.color_primary));
    fields.insert("colorSecondary", FieldValue::Text(&theme.color_secondary));
    fields.insert("appBg", FieldValue::Text(&theme.app_bg));
    fields.insert("appContentBg", FieldValue::Text(&theme.app_content_bg));
    fields.insert("appPreviewBg", FieldValue::Text(&theme.app_preview_bg));
    fields.insert("appBorderColor", FieldValue::Text(&theme.app_border_color));
    fields.insert(
        "appBorderRadius",
        FieldValue::Number(theme.app_border_radius),
    );
    fields.insert("fontBase", FieldValue::Text(&theme.font_base));
    fields.insert("fontCode", FieldValue::Text(&theme.font_code));
    fields.insert("textColor", FieldValue::Text(&theme.text_color));
    fields.insert(
        "textInverseColor",
        FieldValue::Text(&theme.text_inverse_color),
    );
    fields.insert("textMutedColor", FieldValue::Text(&theme.text_muted_color));
    fields.insert("barTextColor", FieldValue::Text(&theme.bar_text_color));
    fields.insert("barHoverColor", FieldValue::Text(&theme.bar_hover_color));
    fields.insert(
        "barSelectedColor",
        FieldValue::Text(&theme.bar_selected_color),
    );
    fields.insert("barBg", FieldValue::Text(&theme.bar_bg));
    fields.insert("buttonBg", FieldValue::Text(&theme.button_bg));
    fields.insert("buttonBorder", FieldValue::Text(&theme.button_border));
    fields.insert("booleanBg", FieldValue::Text(&theme.boolean_bg));
    fields.insert(
        "booleanSelectedBg",
        FieldValue::Text(&theme.boolean_selected_bg),
    );
    fields.insert("inputBg", FieldValue::Text(&theme.input_bg));
    fields.insert("inputBorder", FieldValue::Text(&theme.input_border));
    fields.insert("inputTextColor", FieldValue::Text(&theme.input_text_color));
    fields.insert(
        "inputBorderRadius",
        FieldValue::Number(theme.input_border_radius),
    );

    if let Some(title) = theme.brand_title.as_deref()
        && !title.is_empty()
    {
        fields.insert("brandTitle", FieldValue::Text(title));
    }

    if let Some(url) = theme.brand_url.as_deref()
        && !url.is_empty()
    {
        fields.insert("brandUrl", FieldValue::Text(url));
    }

    if let Some(target) = theme.brand_target.as_deref()
        && !target.is_empty()
    {
        fields.insert("brandTarget", FieldValue::Text(target));
    }

    if let Some(size) = theme.grid_cell_size
        && size > 0
    {
        fields.insert("gridCellSize", FieldValue::Number(size));
    }

    fields
}

// Keeps the emitted literal parseable for any field content.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Renders the record as a key-ordered JS object literal.
///
/// Identical input always yields byte-identical output; the exported
/// file and the generated-code preview both build on this.
pub fn serialize(theme: &Theme) -> String {
    let mut out = String::from("{\n");

    for (key, value) in entries(theme) {
        match value {
            FieldValue::Text(text) => out.push_str(&format!("  {key}: {},\n", quote(text))),
            FieldValue::Number(number) => out.push_str(&format!("  {key}: {number},\n")),
        }
    }

    out.push('}');
    out
}

/// Wraps the serialized record as an importable module.
pub fn export_module(theme: &Theme) -> String {
    format!("export const YourTheme = {};", serialize(theme))
}

/// Bundles the module text with the artifact file name.
pub fn export_artifact(theme: &Theme) -> ExportArtifact {
    ExportArtifact {
        file_name: EXPORT_FILE_NAME,
        contents: export_module(theme),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{Base, ThemePatch};

    const LIGHT_EXPORT: &str = r#"{
  base: 'light',
  colorPrimary: '#ff4785',
  colorSecondary: '#1ea7fd',
  appBg: '#ffffff',
  appContentBg: '#ffffff',
  appPreviewBg: '#f6f9fc',
  appBorderColor: '#e1e5e9',
  appBorderRadius: 4,
  fontBase: '"Nunito Sans", "Helvetica Neue", Helvetica, "Segoe UI", Arial, sans-serif',
  fontCode: '"Operator Mono", "Fira Code Retina", "Fira Code", "FiraMono-Regular", "SF Mono", Monaco, Inconsolata, "Roboto Mono", "Source Code Pro", monospace',
  textColor: '#333333',
  textInverseColor: '#ffffff',
  textMutedColor: '#666666',
  barTextColor: '#999999',
  barHoverColor: '#1ea7fd',
  barSelectedColor: '#1ea7fd',
  barBg: '#f6f9fc',
  buttonBg: '#ffffff',
  buttonBorder: '#e1e5e9',
  booleanBg: '#ffffff',
  booleanSelectedBg: '#1ea7fd',
  inputBg: '#ffffff',
  inputBorder: '#e1e5e9',
  inputTextColor: '#333333',
  inputBorderRadius: 4,
  brandTitle: 'Storybook',
  brandUrl: 'https://storybook.js.org/',
  brandTarget: '_self',
  gridCellSize: 10,
}"#;

    #[test]
    fn test_light_preset_golden_output() {
        assert_eq!(serialize(&Theme::for_base(Base::Light)), LIGHT_EXPORT);
    }

    #[test]
    fn test_dark_preset_spot_checks() {
        let out = serialize(&Theme::for_base(Base::Dark));

        assert!(out.starts_with("{\n  base: 'dark',\n"));
        assert!(out.contains("\n  appBg: '#2f2f2f',\n"));
        assert!(out.contains("\n  textColor: '#ffffff',\n"));
        assert!(out.ends_with("\n  gridCellSize: 10,\n}"));
    }

    #[test]
    fn test_serialize_is_deterministic() {
        let theme = Theme::for_base(Base::Dark);

        assert_eq!(serialize(&theme), serialize(&theme));
    }

    #[test]
    fn test_one_field_edit_changes_exactly_one_line() {
        let theme = Theme::for_base(Base::Light);
        let edited = theme.merged(&ThemePatch::new().color_primary("#112233"));

        let before: Vec<_> = serialize(&theme).lines().map(str::to_owned).collect();
        let after: Vec<_> = serialize(&edited).lines().map(str::to_owned).collect();

        assert_eq!(before.len(), after.len());
        let changed: Vec<_> = before
            .iter()
            .zip(&after)
            .filter(|(a, b)| a != b)
            .collect();
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].1, "  colorPrimary: '#112233',");
    }

    #[test]
    fn test_updated_color_lands_on_second_field_line() {
        let theme = Theme::for_base(Base::Light).merged(&ThemePatch::new().color_primary("#112233"));
        let out = serialize(&theme);

        // Line 0 is the opening brace, line 1 is `base`.
        assert_eq!(out.lines().nth(2), Some("  colorPrimary: '#112233',"));
    }

    #[test]
    fn test_empty_brand_title_is_omitted() {
        let theme = Theme::for_base(Base::Light).merged(&ThemePatch::new().brand_title(""));

        assert!(!serialize(&theme).contains("brandTitle"));
    }

    #[test]
    fn test_brand_title_line_sits_after_input_border_radius() {
        let mut theme = Theme::for_base(Base::Light);
        theme.brand_url = None;
        theme.brand_target = None;
        theme.grid_cell_size = None;
        let theme = theme.merged(&ThemePatch::new().brand_title("Acme"));

        assert!(serialize(&theme).ends_with(
            "  inputBorderRadius: 4,\n  brandTitle: 'Acme',\n}"
        ));
    }

    #[test]
    fn test_zero_grid_cell_size_is_omitted() {
        let theme = Theme::for_base(Base::Light).merged(&ThemePatch::new().grid_cell_size(0));

        assert!(!serialize(&theme).contains("gridCellSize"));
    }

    #[test]
    fn test_all_optionals_unset() {
        let mut theme = Theme::for_base(Base::Light);
        theme.brand_title = None;
        theme.brand_url = None;
        theme.brand_target = None;
        theme.grid_cell_size = None;

        let out = serialize(&theme);

        assert!(out.ends_with("  inputBorderRadius: 4,\n}"));
        assert!(!out.contains("brand"));
        assert!(!out.contains("gridCellSize"));
    }

    #[test]
    fn test_brand_image_is_never_emitted() {
        let theme = Theme::for_base(Base::Light)
            .merged(&ThemePatch::new().brand_image("https://example.com/logo.svg"));

        assert!(!serialize(&theme).contains("brandImage"));
    }

    #[test]
    fn test_single_quotes_are_escaped() {
        let theme = Theme::for_base(Base::Light).merged(&ThemePatch::new().brand_title("Bob's"));

        assert!(serialize(&theme).contains(r"  brandTitle: 'Bob\'s',"));
    }

    #[test]
    fn test_export_module_wraps_the_literal() {
        let theme = Theme::for_base(Base::Light);
        let module = export_module(&theme);

        assert!(module.starts_with("export const YourTheme = {\n"));
        assert!(module.ends_with("\n};"));
        assert_eq!(module, format!("export const YourTheme = {};", LIGHT_EXPORT));
    }

    #[test]
    fn test_export_artifact() {
        let artifact = export_artifact(&Theme::for_base(Base::Dark));

        assert_eq!(artifact.file_name, "YourTheme.js");
        assert_eq!(artifact.contents, export_module(&Theme::for_base(Base::Dark)));
    }
}
