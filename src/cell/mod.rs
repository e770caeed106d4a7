//! Header cells and their collaborators (icon configuration, label formatting).

mod col_cell;
pub mod format;
pub mod icons;

pub use col_cell::{CellKind, ColCell, HeaderContext, TextLayout};
pub use format::{truncate_text, FieldFormatter, FormatResult, IdentityFormatter};
pub use icons::{ActionIconConfig, ActionIconResolver};
