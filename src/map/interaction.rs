//! Transient interaction state for the map.
//!
//! The store owns only the hover slot. The active (durable) selection belongs
//! to the hosting page and is passed in on every resolve call, so this module
//! can never drift from externally held selection state.

/// Hover slot for the map: at most one region hovered at a time.
///
/// Per-slot state machine: `none` or `hovering(region_id)`. Entering replaces
/// any previous hover; leaving while not hovering is a no-op.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoverState {
    hovered: Option<&'static str>,
}

impl HoverState {
    /// Create a state with nothing hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter a region. Total replace; idempotent for the same id.
    pub fn enter(&mut self, region_id: &'static str) {
        self.hovered = Some(region_id);
    }

    /// Leave whatever region is hovered, if any.
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    /// The currently hovered region id, if any.
    pub fn hovered(&self) -> Option<&'static str> {
        self.hovered
    }

    /// Combine the hover slot with the caller-owned active selection into a
    /// snapshot for the resolver.
    pub fn snapshot(&self, active: Option<&'static str>) -> InteractionSnapshot {
        InteractionSnapshot {
            hovered: self.hovered,
            active,
        }
    }
}

/// The interaction inputs to one resolve pass.
///
/// `hovered` and `active` are independent; both may name the same region.
/// A stale id that matches no catalog region is harmless: no province will
/// resolve to it, so everything renders at its default tier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InteractionSnapshot {
    /// Region currently under the pointer, if any
    pub hovered: Option<&'static str>,
    /// Durable selection owned by the hosting page, if any
    pub active: Option<&'static str>,
}

impl InteractionSnapshot {
    /// A snapshot with neither hover nor active selection.
    pub fn idle() -> Self {
        Self::default()
    }

    /// A snapshot with the given hover and active ids.
    pub fn new(hovered: Option<&'static str>, active: Option<&'static str>) -> Self {
        Self { hovered, active }
    }
}
