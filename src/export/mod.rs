//! Deterministic export of theme records as JavaScript modules.

mod render;
pub use render::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "export-file")] {
        mod file;
        pub use file::*;
    }
);
