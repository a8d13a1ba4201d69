//! Per-frame driver tying the store, pose, camera rig, and projections
//! together.

use crate::camera::{Camera, CameraPhase, CameraRig};
use crate::config::Options;
use crate::error::HelikaError;
use crate::helix::anchor::{resolve_anchor, tracked_unit};
use crate::helix::hotspot::HotspotTable;
use crate::helix::lattice::HelixLattice;
use crate::helix::pose::{HelixPose, PoseDriver};
use crate::picking::{pick_atom, pick_ray, resolve_section};
use crate::projection::{project_precise, PixelPosition, Viewport};
use crate::sections::{Sections, Tile};
use crate::store::ScrollStore;

/// Scroll fraction past which the scene reports itself hidden so the host
/// can fade the canvas out before the page footer.
const SCENE_FADE_THRESHOLD: f32 = 0.99;

/// Drives one scroll scene: owns the store, the immutable lattice and
/// hotspot tables, the pose driver, and the camera rig.
///
/// # Frame loop
///
/// 1. The host's scroll bridge forwards normalized samples through
///    [`Self::set_scroll_progress`].
/// 2. Pointer events go through [`Self::pointer_move`] and
///    [`Self::pointer_leave`].
/// 3. Once per rendered frame the host calls [`Self::advance`] with the
///    elapsed time from its clock.
/// 4. The host reads the store snapshot plus the lattice and hotspot
///    classifications to draw, then calls
///    [`ScrollStore::mark_seen`].
///
/// Everything is synchronous; the host event loop is the only
/// serialization layer.
#[derive(Debug)]
pub struct ScrollOrchestrator {
    options: Options,
    sections: Sections,
    tiles: Vec<Tile>,
    store: ScrollStore,
    lattice: HelixLattice,
    hotspots: HotspotTable,
    pose: PoseDriver,
    rig: CameraRig,
    viewport: Viewport,
    attached: bool,
}

impl ScrollOrchestrator {
    /// Validate the options, build the lattice and derived tables, and
    /// start at the loading phase with zero progress.
    ///
    /// The viewport starts empty; frames are skipped until the host
    /// reports a real size through [`Self::resize`].
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::InvalidConfig`] if the options fail
    /// validation or the hotspot windows do not fit the lattice.
    pub fn new(
        options: Options,
        sections: Sections,
    ) -> Result<Self, HelikaError> {
        options.validate()?;
        let lattice = HelixLattice::build(&options.helix);
        let hotspots =
            HotspotTable::derive(lattice.unit_count(), sections.len())?;
        let tiles = sections.tiles();
        let store = ScrollStore::new(sections.markers(), tiles.len());
        let rig = CameraRig::new(&options.camera, 1.0);
        log::debug!(
            "scroll orchestrator ready: {} sections, {} tiles, {} base pairs",
            sections.len(),
            tiles.len(),
            lattice.unit_count()
        );
        Ok(Self {
            options,
            sections,
            tiles,
            store,
            lattice,
            hotspots,
            pose: PoseDriver::new(),
            rig,
            viewport: Viewport::default(),
            attached: true,
        })
    }

    /// Compute this frame: pose, camera easing, and the projected anchor
    /// write-back. `elapsed` is seconds since the host clock started.
    ///
    /// Skipped entirely while detached or while the viewport is empty, so
    /// consumers never observe state derived from a dead or unsized
    /// window.
    pub fn advance(&mut self, elapsed: f32) {
        if !self.attached || self.viewport.is_empty() {
            return;
        }
        let pose = self.pose.advance(
            self.store.progress(),
            self.store.is_exploring(),
            elapsed,
            &self.options.helix,
            &self.options.motion,
        );
        let phase = CameraPhase::resolve(
            self.store.is_loading(),
            self.store.is_exploring(),
        );
        self.rig.advance(phase);

        if self.store.is_exploring() {
            let unit = tracked_unit(
                self.store.active_tile_index(),
                self.store.active_section_index(),
                &self.options.helix,
            );
            let anchor =
                resolve_anchor(&self.lattice, &self.hotspots, unit, pose);
            let view_proj = self.rig.camera().build_matrix();
            // A degenerate projection keeps the previous anchor rather
            // than snapping the overlay to a garbage position.
            if let Some(pixel) =
                project_precise(anchor.position, &view_proj, self.viewport)
            {
                self.store.set_atom_position(Some(pixel));
            }
        } else {
            self.store.set_atom_position(None);
        }
    }

    /// Forward a normalized scroll sample into the store.
    pub fn set_scroll_progress(&mut self, value: f32) {
        self.store.set_progress(value);
    }

    /// Resolve a pointer position against the lattice and update the
    /// hover fields. Ignored outside explore mode; a miss clears the
    /// hover unless a navigation lock holds it.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.attached || !self.store.is_exploring() {
            return;
        }
        let pixel = PixelPosition { x, y };
        let view_proj = self.rig.camera().build_matrix();
        let Some(ray) = pick_ray(pixel, &view_proj, self.viewport) else {
            return;
        };
        let pose = self.pose.current();
        let hit = pick_atom(&ray, &self.lattice, pose);
        if let Some(section) = resolve_section(hit.as_ref(), &self.hotspots) {
            self.store.set_hovered_section_index(Some(section));
            self.store.set_hovered_atom_position(Some(pixel));
        } else {
            self.store.clear_hover_unless_locked();
        }
    }

    /// Pointer left the scene. Clears the hover unless locked.
    pub fn pointer_leave(&mut self) {
        self.store.clear_hover_unless_locked();
    }

    /// Navigation jump: lock the hover onto a section and return the
    /// scroll fraction the host should animate the page to.
    pub fn jump_to_section(&mut self, section: usize) -> f32 {
        let last = self.sections.len().saturating_sub(1);
        let section = section.min(last);
        self.store.set_hovered_section_index(Some(section));
        self.store.set_locked(true);
        log::debug!("navigation jump to section {section}");
        self.sections.scroll_target(section)
    }

    /// Release a navigation lock and clear the hover it was holding.
    pub fn unlock_hover(&mut self) {
        self.store.set_locked(false);
        self.store.clear_hover_unless_locked();
    }

    /// Leave the landing page and start the scroll-driven experience at
    /// the top.
    pub fn begin_explore(&mut self) {
        self.store.set_exploring(true);
        self.store.set_progress(0.0);
        log::debug!("explore mode entered");
    }

    /// Return from exploring to the landing view and reset the scroll.
    pub fn return_to_landing(&mut self) {
        self.store.set_exploring(false);
        self.store.set_progress(0.0);
        log::debug!("returned to landing");
    }

    /// Mark the intro loading phase finished; the camera eases out to the
    /// landing framing over the following frames.
    pub fn finish_loading(&mut self) {
        self.store.set_loading(false);
    }

    /// Record the host viewport size and update the camera aspect.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Viewport::new(width, height);
        if !self.viewport.is_empty() {
            self.rig.set_aspect(self.viewport.aspect());
        }
    }

    /// Stop producing frames. Idempotent; a detached orchestrator ignores
    /// `advance` and pointer events.
    pub fn detach(&mut self) {
        if self.attached {
            self.attached = false;
            log::debug!("scroll orchestrator detached");
        }
    }

    /// Whether the orchestrator is still producing frames.
    #[must_use]
    pub const fn is_attached(&self) -> bool {
        self.attached
    }

    /// Whether the host should still show the scene (it fades out just
    /// before the page bottom).
    #[must_use]
    pub fn scene_visible(&self) -> bool {
        self.store.progress() < SCENE_FADE_THRESHOLD
    }

    /// Shared state read access.
    #[must_use]
    pub const fn store(&self) -> &ScrollStore {
        &self.store
    }

    /// Shared state write access, for host-owned flags like the
    /// hover-card entry.
    pub fn store_mut(&mut self) -> &mut ScrollStore {
        &mut self.store
    }

    /// The immutable atom and bond instance tables.
    #[must_use]
    pub const fn lattice(&self) -> &HelixLattice {
        &self.lattice
    }

    /// Derived hotspot ranges.
    #[must_use]
    pub const fn hotspots(&self) -> &HotspotTable {
        &self.hotspots
    }

    /// Flattened overlay tiles in scroll order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// The validated content sections.
    #[must_use]
    pub const fn sections(&self) -> &Sections {
        &self.sections
    }

    /// Active option set.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Camera used for precise projection and picking.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        self.rig.camera()
    }

    /// Pose computed by the most recent frame.
    #[must_use]
    pub fn current_pose(&self) -> HelixPose {
        self.pose.current()
    }

    /// Viewport last reported by the host.
    #[must_use]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }
}
