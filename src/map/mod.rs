//! Cultural heritage map core.
//!
//! This module owns the region/province model behind the interactive map:
//! the static region catalog, the derived province-to-region index, transient
//! hover state, the visual attribute resolver, and selection dispatch.
//!
//! The core is deliberately renderer-agnostic. It consumes province shapes as
//! opaque pass-through geometry and produces plain attribute records; the
//! terminal UI (and any other surface) converts those into its own styling.
//! Every operation here is synchronous, total, and free of I/O.

pub mod catalog;
pub mod dispatch;
pub mod index;
pub mod interaction;
pub mod resolve;
pub mod shapes;

pub use catalog::{MarkerPosition, Region, REGIONS};
pub use dispatch::{activate_province, activate_region};
pub use index::{default_index, ProvinceIndex};
pub use interaction::{HoverState, InteractionSnapshot};
pub use resolve::{
    marker_state, resolve_attributes, Elevation, MarkerState, ProvinceAttributes, Rgba, Tier,
};
pub use shapes::{MapDefinition, ProvinceShape};
