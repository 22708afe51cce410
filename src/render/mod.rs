//! Dashboard rendering.
//!
//! Turns the source table plus the current filters into a
//! serializable render model, one request at a time.

pub mod dashboard;
pub mod model;
pub mod view;

pub use dashboard::{render, Dashboard, RenderOptions};
pub use model::{Panel, RenderBody, RenderModel};
pub use view::View;
