//! Content sections pinned to scroll markers, and the resolvers that map a
//! scroll fraction back to section and overlay-tile indices.
//!
//! Section content is data, not code: hosts author it as JSON and load it
//! with [`Sections::load`]. Markers are validated once at load time so the
//! per-frame resolvers can stay branch-light and panic-free.

use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::HelikaError;

/// Scroll fraction consumed before the first overlay tile activates.
const TILE_LEAD_IN: f32 = 0.05;
/// Scroll fraction across which the flattened tile sequence is spread.
const TILE_SPAN: f32 = 0.85;
/// Marker spacing between consecutive item tiles within a section.
const ITEM_MARKER_STEP: f32 = 0.05;

/// A nested link under a section item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubItem {
    /// Link label.
    pub title: String,
    /// Link destination.
    pub href: String,
}

/// One entry under a section: a project, a post, an investment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SectionItem {
    /// Item headline.
    pub title: String,
    /// Short tagline shown under the headline.
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Longer body copy.
    #[serde(default)]
    pub description: Option<String>,
    /// External link target.
    #[serde(default)]
    pub href: Option<String>,
    /// Thumbnail image path.
    #[serde(default)]
    pub img: Option<String>,
    /// Nested links listed under the item.
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

/// One content section pinned to a scroll marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    /// Stable identifier used for host-side lookups.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Scroll fraction in `[0, 1]` where this section becomes active.
    pub marker: f32,
    /// Theme color as a CSS hex string.
    pub color: String,
    /// Optional summary shown as the section's lead tile.
    #[serde(default)]
    pub summary: Option<String>,
    /// Entries listed under the section.
    #[serde(default)]
    pub items: Vec<SectionItem>,
}

/// A flattened overlay card with the scroll marker it anchors to.
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    /// Card headline.
    pub title: String,
    /// Card tagline.
    pub subtitle: Option<String>,
    /// External link target.
    pub href: Option<String>,
    /// Thumbnail image path.
    pub img: Option<String>,
    /// Scroll fraction where the card sits.
    pub marker: f32,
    /// Section the card belongs to.
    pub section_index: usize,
}

/// Ordered, validated section list with id lookup.
///
/// Construction validates the invariants the per-frame resolvers rely on:
/// at least one section, markers strictly increasing and inside `[0, 1]`,
/// ids unique.
#[derive(Debug, Clone, Default)]
pub struct Sections {
    sections: Vec<Section>,
    index_by_id: FxHashMap<String, usize>,
}

impl Sections {
    /// Build from an already-deserialized section list. Fails if any marker
    /// or id invariant is violated.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::SectionLoad`] for an empty list, markers
    /// outside `[0, 1]` or out of order, or duplicate ids.
    pub fn new(sections: Vec<Section>) -> Result<Self, HelikaError> {
        if sections.is_empty() {
            return Err(HelikaError::SectionLoad(
                "section list is empty".to_owned(),
            ));
        }
        let mut index_by_id = FxHashMap::default();
        let mut previous: Option<f32> = None;
        for (i, section) in sections.iter().enumerate() {
            if !(0.0..=1.0).contains(&section.marker) {
                return Err(HelikaError::SectionLoad(format!(
                    "section '{}' marker {} is outside [0, 1]",
                    section.id, section.marker
                )));
            }
            if previous.is_some_and(|p| section.marker <= p) {
                return Err(HelikaError::SectionLoad(format!(
                    "section '{}' marker {} does not increase",
                    section.id, section.marker
                )));
            }
            previous = Some(section.marker);
            if index_by_id.insert(section.id.clone(), i).is_some() {
                return Err(HelikaError::SectionLoad(format!(
                    "duplicate section id '{}'",
                    section.id
                )));
            }
        }
        Ok(Self {
            sections,
            index_by_id,
        })
    }

    /// Parse a JSON array of sections and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::SectionLoad`] if the JSON does not parse or
    /// the parsed list violates a marker or id invariant.
    pub fn from_json_str(json: &str) -> Result<Self, HelikaError> {
        let sections: Vec<Section> = serde_json::from_str(json)
            .map_err(|e| HelikaError::SectionLoad(e.to_string()))?;
        Self::new(sections)
    }

    /// Load and validate sections from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError`] if the file cannot be read or its contents
    /// fail validation.
    pub fn load(path: &Path) -> Result<Self, HelikaError> {
        let content = std::fs::read_to_string(path).map_err(HelikaError::Io)?;
        let sections = Self::from_json_str(&content)?;
        log::info!(
            "loaded {} sections from {}",
            sections.len(),
            path.display()
        );
        Ok(sections)
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the list is empty. Only true for `Default`-built values;
    /// validated lists always hold at least one section.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section at `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    /// All sections in marker order.
    #[must_use]
    pub fn as_slice(&self) -> &[Section] {
        &self.sections
    }

    /// Index of the section with the given id.
    #[must_use]
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    /// Markers in section order.
    #[must_use]
    pub fn markers(&self) -> Vec<f32> {
        self.sections.iter().map(|s| s.marker).collect()
    }

    /// Section active at the given scroll fraction.
    #[must_use]
    pub fn active_index(&self, progress: f32) -> usize {
        let markers = self.markers();
        active_section_index(progress, &markers)
    }

    /// Scroll fraction a jump to `index` should target: the section's
    /// marker, except the last section which targets the page bottom.
    #[must_use]
    pub fn scroll_target(&self, index: usize) -> f32 {
        if self.sections.is_empty() {
            return 0.0;
        }
        let last = self.sections.len() - 1;
        let index = index.min(last);
        if index == last {
            1.0
        } else {
            self.sections.get(index).map_or(1.0, |s| s.marker)
        }
    }

    /// Flatten sections into the overlay tile sequence: each section's
    /// summary card (when present) at its marker, followed by one card per
    /// item at fixed marker steps after it.
    #[must_use]
    pub fn tiles(&self) -> Vec<Tile> {
        let mut tiles = Vec::new();
        for (section_index, section) in self.sections.iter().enumerate() {
            if let Some(summary) = &section.summary {
                tiles.push(Tile {
                    title: section.title.clone(),
                    subtitle: Some(summary.clone()),
                    href: None,
                    img: None,
                    marker: section.marker,
                    section_index,
                });
            }
            for (i, item) in section.items.iter().enumerate() {
                tiles.push(Tile {
                    title: item.title.clone(),
                    subtitle: item.subtitle.clone(),
                    href: item.href.clone(),
                    img: item.img.clone(),
                    marker: section.marker
                        + (i + 1) as f32 * ITEM_MARKER_STEP,
                    section_index,
                });
            }
        }
        tiles
    }
}

/// Resolve the active section for a scroll fraction.
///
/// A section is active while `marker[k] <= progress < marker[k + 1]`.
/// Progress below the first marker stays on section 0 so the landing view
/// always has an active theme; progress at or past the last marker stays on
/// the final section.
#[must_use]
pub fn active_section_index(progress: f32, markers: &[f32]) -> usize {
    let mut active = 0;
    for (i, &marker) in markers.iter().enumerate() {
        if progress >= marker {
            active = i;
        } else {
            break;
        }
    }
    active
}

/// Resolve the active overlay tile for a scroll fraction.
///
/// The first small slice of scroll activates no tile; the remainder is
/// divided evenly across the flattened tile sequence, clamped to the last
/// tile so deep scroll never runs off the end.
#[must_use]
pub fn active_tile_index(progress: f32, tile_count: usize) -> Option<usize> {
    if tile_count == 0 || progress <= TILE_LEAD_IN {
        return None;
    }
    let normalized = (progress - TILE_LEAD_IN) / TILE_SPAN;
    let index = (normalized * tile_count as f32).floor() as usize;
    Some(index.min(tile_count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: &str, marker: f32) -> Section {
        Section {
            id: id.to_owned(),
            title: id.to_owned(),
            marker,
            color: "#ECB365".to_owned(),
            summary: None,
            items: Vec::new(),
        }
    }

    fn fixture() -> Sections {
        let list = vec![
            section("research", 0.1),
            section("startups", 0.3),
            section("vc", 0.5),
            section("hobbies", 0.7),
            section("projects", 0.9),
        ];
        Sections::new(list).unwrap()
    }

    #[test]
    fn resolver_picks_bracketing_marker() {
        let sections = fixture();
        assert_eq!(sections.active_index(0.1), 0);
        assert_eq!(sections.active_index(0.29), 0);
        assert_eq!(sections.active_index(0.3), 1);
        assert_eq!(sections.active_index(0.52), 2);
        assert_eq!(sections.active_index(0.7), 3);
    }

    #[test]
    fn resolver_clamps_to_ends() {
        let sections = fixture();
        // Below the first marker the landing view keeps section 0 active.
        assert_eq!(sections.active_index(0.0), 0);
        assert_eq!(sections.active_index(0.05), 0);
        // At or past the last marker the final section stays active.
        assert_eq!(sections.active_index(0.9), 4);
        assert_eq!(sections.active_index(1.0), 4);
    }

    #[test]
    fn markers_must_increase() {
        let list = vec![section("a", 0.3), section("b", 0.3)];
        assert!(Sections::new(list).is_err());

        let list = vec![section("a", 0.5), section("b", 0.2)];
        assert!(Sections::new(list).is_err());
    }

    #[test]
    fn markers_must_stay_in_range() {
        let list = vec![section("a", 0.1), section("b", 1.2)];
        assert!(Sections::new(list).is_err());
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(Sections::new(Vec::new()).is_err());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let list = vec![section("a", 0.1), section("a", 0.4)];
        assert!(Sections::new(list).is_err());
    }

    #[test]
    fn id_lookup_finds_position() {
        let sections = fixture();
        assert_eq!(sections.index_of("vc"), Some(2));
        assert_eq!(sections.index_of("missing"), None);
    }

    #[test]
    fn scroll_target_uses_marker_except_last() {
        let sections = fixture();
        assert_eq!(sections.scroll_target(1), 0.3);
        assert_eq!(sections.scroll_target(4), 1.0);
        // Out-of-range jump clamps to the last section.
        assert_eq!(sections.scroll_target(99), 1.0);
    }

    #[test]
    fn tiles_flatten_summary_then_items() {
        let mut lead = section("research", 0.1);
        lead.summary = Some("What I read".to_owned());
        lead.items = vec![
            SectionItem {
                title: "Paper A".to_owned(),
                subtitle: Some("2024".to_owned()),
                description: None,
                href: Some("https://example.com/a".to_owned()),
                img: None,
                sub_items: Vec::new(),
            },
            SectionItem {
                title: "Paper B".to_owned(),
                subtitle: None,
                description: None,
                href: None,
                img: None,
                sub_items: Vec::new(),
            },
        ];
        let bare = section("startups", 0.5);
        let sections = Sections::new(vec![lead, bare]).unwrap();

        let tiles = sections.tiles();
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].title, "research");
        assert_eq!(tiles[0].marker, 0.1);
        assert_eq!(tiles[1].title, "Paper A");
        assert!((tiles[1].marker - 0.15).abs() < 1e-6);
        assert!((tiles[2].marker - 0.2).abs() < 1e-6);
        assert_eq!(tiles[2].section_index, 0);
    }

    #[test]
    fn active_tile_has_lead_in_and_clamps() {
        assert_eq!(active_tile_index(0.0, 12), None);
        assert_eq!(active_tile_index(0.05, 12), None);
        assert_eq!(active_tile_index(1.0, 12), Some(11));
        // Just past the lead-in lands on the first tile.
        assert_eq!(active_tile_index(0.06, 12), Some(0));
        assert_eq!(active_tile_index(0.3, 0), None);
    }

    #[test]
    fn json_sections_parse_with_defaults() {
        let json = r##"[
            {
                "id": "research",
                "title": "Research",
                "marker": 0.1,
                "color": "#ECB365",
                "summary": "Reading notes",
                "items": [
                    {
                        "title": "Paper A",
                        "href": "https://example.com/a",
                        "sub_items": [
                            { "title": "Slides", "href": "https://example.com/s" }
                        ]
                    }
                ]
            },
            { "id": "startups", "title": "Startups", "marker": 0.3, "color": "#06b6d4" }
        ]"##;
        let sections = Sections::from_json_str(json).unwrap();
        assert_eq!(sections.len(), 2);
        let first = sections.get(0).unwrap();
        assert_eq!(first.items.len(), 1);
        assert_eq!(first.items[0].sub_items.len(), 1);
        assert!(first.items[0].description.is_none());
        let second = sections.get(1).unwrap();
        assert!(second.summary.is_none());
        assert!(second.items.is_empty());
    }
}
