//! Theme system providing colors, typography, and dimension fields.
//!
//! Records are immutable per revision: every edit merges a partial
//! field set over the previous record and hands back a new one. Two
//! built-in presets (light and dark) seed, reset, and re-base the
//! editor.

mod schema;
pub use schema::*;

mod deserializers;

mod kinds;
pub use kinds::*;

mod patch;
pub use patch::*;

mod presets;
pub use presets::*;
