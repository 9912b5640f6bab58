use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

use super::{EXPORT_FILE_NAME, export_module};
use crate::theme::Theme;

/// Writes the export artifact into `dir` and returns the file path.
pub fn write_export(theme: &Theme, dir: impl AsRef<Path>) -> anyhow::Result<PathBuf> {
    let path = dir.as_ref().join(EXPORT_FILE_NAME);

    fs::write(&path, export_module(theme))
        .with_context(|| format!("could not write theme export to \"{}\"", path.display()))?;

    tracing::debug!(path = %path.display(), "wrote theme export");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Base;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join("theme_studio_tests")
            .join(format!("{name}-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_write_export_creates_the_artifact() {
        let dir = scratch_dir("write_export");

        let path = write_export(&Theme::for_base(Base::Light), &dir).unwrap();

        assert!(path.ends_with(EXPORT_FILE_NAME));
        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, export_module(&Theme::for_base(Base::Light)));
    }

    #[test]
    fn test_write_export_fails_on_missing_directory() {
        let dir = scratch_dir("missing").join("does-not-exist");

        assert!(write_export(&Theme::for_base(Base::Light), dir).is_err());
    }
}
