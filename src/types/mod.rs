//! Data types shared by the header layout, interaction and render modules.

mod geometry;
mod header;
mod interaction;
mod shape;
mod theme;

pub use geometry::*;
pub use header::*;
pub use interaction::*;
pub use shape::*;
pub use theme::*;
