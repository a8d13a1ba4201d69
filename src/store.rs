//! Shared scroll and interaction state.
//!
//! [`ScrollStore`] is the single source of truth the host page and the
//! scene read from. The scroll bridge is the only writer of `progress`;
//! the orchestrator owns the derived fields (active indices, projected
//! anchor); pointer handlers own the hover fields. Consumers poll
//! [`ScrollStore::is_dirty`] each frame and call
//! [`ScrollStore::mark_seen`] after reading, instead of subscribing to
//! callbacks.

use crate::projection::PixelPosition;
use crate::sections::{active_section_index, active_tile_index};

/// Copyable view of the full store state for per-frame consumers.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Snapshot {
    /// Normalized scroll position in `[0, 1]`.
    pub progress: f32,
    /// Whether the user has entered the scroll-driven explore mode.
    pub is_exploring: bool,
    /// Whether the intro loading phase is still running.
    pub is_loading: bool,
    /// Section active at the current progress.
    pub active_section_index: usize,
    /// Overlay tile active at the current progress, if any.
    pub active_tile_index: Option<usize>,
    /// Window position of the tracked anchor atom while exploring.
    pub atom_position: Option<PixelPosition>,
    /// Section under the pointer, if a hotspot is hovered or locked.
    pub hovered_section_index: Option<usize>,
    /// Pointer position captured when the hover was set.
    pub hovered_atom_position: Option<PixelPosition>,
    /// Whether the pointer currently rests on the hover card itself.
    pub is_hovering_card: bool,
    /// Whether the hover is locked against pointer-driven clears.
    pub is_locked: bool,
}

/// Scroll progress plus every interaction flag the scene reacts to.
///
/// `set_progress` clamps and recomputes the derived indices in the same
/// call, so `active_section_index` can never disagree with the resolver
/// output for the stored progress.
#[derive(Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct ScrollStore {
    progress: f32,
    is_exploring: bool,
    is_loading: bool,
    active_section_index: usize,
    active_tile_index: Option<usize>,
    atom_position: Option<PixelPosition>,
    hovered_section_index: Option<usize>,
    hovered_atom_position: Option<PixelPosition>,
    is_hovering_card: bool,
    is_locked: bool,
    /// Section markers in ascending order, fixed at construction.
    section_markers: Vec<f32>,
    /// Flattened overlay tile count, fixed at construction.
    tile_count: usize,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation last acknowledged by `mark_seen()`.
    seen_generation: u64,
}

impl ScrollStore {
    /// Build a store resolving against the given section markers and
    /// flattened tile count.
    #[must_use]
    pub fn new(section_markers: Vec<f32>, tile_count: usize) -> Self {
        Self {
            progress: 0.0,
            is_exploring: false,
            is_loading: true,
            active_section_index: 0,
            active_tile_index: None,
            atom_position: None,
            hovered_section_index: None,
            hovered_atom_position: None,
            is_hovering_card: false,
            is_locked: false,
            section_markers,
            tile_count,
            generation: 0,
            seen_generation: 0,
        }
    }

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether state changed since the last `mark_seen()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.seen_generation
    }

    /// Force consumers to re-read even without a state change.
    pub fn force_dirty(&mut self) {
        self.invalidate();
    }

    /// Mark the current generation as consumed.
    pub fn mark_seen(&mut self) {
        self.seen_generation = self.generation;
    }

    /// Current mutation generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Clamp and store a scroll sample, then recompute the derived
    /// section and tile indices. Non-finite samples are dropped.
    pub fn set_progress(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let value = value.clamp(0.0, 1.0);
        if value == self.progress {
            return;
        }
        self.progress = value;
        self.active_section_index =
            active_section_index(value, &self.section_markers);
        self.active_tile_index = active_tile_index(value, self.tile_count);
        self.invalidate();
    }

    /// Normalized scroll position in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Section active at the current progress.
    #[must_use]
    pub fn active_section_index(&self) -> usize {
        self.active_section_index
    }

    /// Overlay tile active at the current progress, if any.
    #[must_use]
    pub fn active_tile_index(&self) -> Option<usize> {
        self.active_tile_index
    }

    /// Enter or leave the scroll-driven explore mode.
    pub fn set_exploring(&mut self, exploring: bool) {
        if self.is_exploring != exploring {
            self.is_exploring = exploring;
            self.invalidate();
        }
    }

    /// Whether the user has entered the explore mode.
    #[must_use]
    pub fn is_exploring(&self) -> bool {
        self.is_exploring
    }

    /// Mark the intro loading phase as running or finished.
    pub fn set_loading(&mut self, loading: bool) {
        if self.is_loading != loading {
            self.is_loading = loading;
            self.invalidate();
        }
    }

    /// Whether the intro loading phase is still running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Write the projected window position of the tracked anchor atom.
    pub fn set_atom_position(&mut self, position: Option<PixelPosition>) {
        if self.atom_position != position {
            self.atom_position = position;
            self.invalidate();
        }
    }

    /// Window position of the tracked anchor atom while exploring.
    #[must_use]
    pub fn atom_position(&self) -> Option<PixelPosition> {
        self.atom_position
    }

    /// Write the hovered section index.
    pub fn set_hovered_section_index(&mut self, section: Option<usize>) {
        if self.hovered_section_index != section {
            self.hovered_section_index = section;
            self.invalidate();
        }
    }

    /// Section under the pointer, if a hotspot is hovered or locked.
    #[must_use]
    pub fn hovered_section_index(&self) -> Option<usize> {
        self.hovered_section_index
    }

    /// Write the pointer position captured with the hover.
    pub fn set_hovered_atom_position(
        &mut self,
        position: Option<PixelPosition>,
    ) {
        if self.hovered_atom_position != position {
            self.hovered_atom_position = position;
            self.invalidate();
        }
    }

    /// Pointer position captured when the hover was set.
    #[must_use]
    pub fn hovered_atom_position(&self) -> Option<PixelPosition> {
        self.hovered_atom_position
    }

    /// Flag the pointer as resting on the hover card itself.
    pub fn set_hovering_card(&mut self, hovering: bool) {
        if self.is_hovering_card != hovering {
            self.is_hovering_card = hovering;
            self.invalidate();
        }
    }

    /// Whether the pointer currently rests on the hover card.
    #[must_use]
    pub fn is_hovering_card(&self) -> bool {
        self.is_hovering_card
    }

    /// Lock or unlock the hover against pointer-driven clears.
    pub fn set_locked(&mut self, locked: bool) {
        if self.is_locked != locked {
            self.is_locked = locked;
            self.invalidate();
        }
    }

    /// Whether the hover is locked against pointer-driven clears.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.is_locked
    }

    /// Clear the hover fields unless a navigation lock holds them.
    pub fn clear_hover_unless_locked(&mut self) {
        if self.is_locked {
            return;
        }
        if self.hovered_section_index.is_some()
            || self.hovered_atom_position.is_some()
        {
            self.hovered_section_index = None;
            self.hovered_atom_position = None;
            self.invalidate();
        }
    }

    /// Copy the full state for a consumer.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            progress: self.progress,
            is_exploring: self.is_exploring,
            is_loading: self.is_loading,
            active_section_index: self.active_section_index,
            active_tile_index: self.active_tile_index,
            atom_position: self.atom_position,
            hovered_section_index: self.hovered_section_index,
            hovered_atom_position: self.hovered_atom_position,
            is_hovering_card: self.is_hovering_card,
            is_locked: self.is_locked,
        }
    }
}
