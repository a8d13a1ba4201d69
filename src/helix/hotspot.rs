use crate::config::MotionOptions;
use crate::error::HelikaError;

/// Render scale multiplier for atoms inside a hotspot range.
pub const HOTSPOT_SCALE: f32 = 1.4;

/// Base pairs skipped at the start of each section's stride before its
/// hotspot range begins.
const RANGE_OFFSET: usize = 10;
/// Base pairs in each hotspot range.
const RANGE_SPAN: usize = 4;

/// Contiguous run of base pairs that glows and responds to the pointer,
/// tagged with the content section it opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hotspot {
    /// Section this hotspot opens on hover.
    pub section_index: usize,
    /// First base pair in the range.
    pub start_unit: usize,
    /// Last base pair in the range, inclusive.
    pub end_unit: usize,
}

impl Hotspot {
    /// Whether a base pair falls inside this range.
    #[must_use]
    pub const fn contains(&self, unit: usize) -> bool {
        unit >= self.start_unit && unit <= self.end_unit
    }
}

/// Classification of a base pair for rendering and picking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitClass {
    /// Ordinary lattice pair.
    Base,
    /// Pair inside the hotspot range of the given section.
    Hotspot(usize),
}

impl UnitClass {
    /// Render scale multiplier for this class.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::Base => 1.0,
            Self::Hotspot(_) => HOTSPOT_SCALE,
        }
    }

    /// Section index when the pair is a hotspot.
    #[must_use]
    pub const fn section(self) -> Option<usize> {
        match self {
            Self::Base => None,
            Self::Hotspot(section) => Some(section),
        }
    }
}

/// Derived hotspot ranges, one per content section.
///
/// Sections are spread evenly along the lattice: each gets a stride of
/// `unit_count / section_count` pairs, and its hotspot occupies a small
/// fixed window inside that stride. Derivation fails rather than clamps
/// when the windows would overlap or run past the lattice, since overlap
/// would make pointer resolution ambiguous.
#[derive(Debug, Clone, Default)]
pub struct HotspotTable {
    ranges: Vec<Hotspot>,
}

impl HotspotTable {
    /// Derive one hotspot range per section across the lattice.
    ///
    /// # Errors
    ///
    /// Returns [`HelikaError::InvalidConfig`] for zero sections, or when
    /// the lattice is too short to hold every window without overlap.
    pub fn derive(
        unit_count: usize,
        section_count: usize,
    ) -> Result<Self, HelikaError> {
        if section_count == 0 {
            return Err(HelikaError::InvalidConfig(
                "cannot derive hotspots for zero sections".to_owned(),
            ));
        }
        let gap = unit_count / section_count;
        let mut ranges: Vec<Hotspot> = Vec::with_capacity(section_count);
        for section_index in 0..section_count {
            let start_unit = section_index * gap + RANGE_OFFSET;
            let end_unit = start_unit + RANGE_SPAN - 1;
            if end_unit >= unit_count {
                return Err(HelikaError::InvalidConfig(format!(
                    "hotspot for section {section_index} spans \
                     {start_unit}..={end_unit} but only {unit_count} \
                     base pairs exist"
                )));
            }
            if let Some(previous) = ranges.last() {
                if start_unit <= previous.end_unit {
                    return Err(HelikaError::InvalidConfig(format!(
                        "hotspot for section {section_index} overlaps \
                         section {}",
                        previous.section_index
                    )));
                }
            }
            ranges.push(Hotspot {
                section_index,
                start_unit,
                end_unit,
            });
        }
        Ok(Self { ranges })
    }

    /// All ranges in section order.
    #[must_use]
    pub fn ranges(&self) -> &[Hotspot] {
        &self.ranges
    }

    /// Section whose hotspot contains the given base pair, if any.
    #[must_use]
    pub fn section_for_unit(&self, unit: usize) -> Option<usize> {
        self.ranges
            .iter()
            .find(|h| h.contains(unit))
            .map(|h| h.section_index)
    }

    /// Classify a base pair for rendering.
    #[must_use]
    pub fn classify(&self, unit: usize) -> UnitClass {
        self.section_for_unit(unit)
            .map_or(UnitClass::Base, UnitClass::Hotspot)
    }
}

/// Emissive intensity of hotspot atoms at a point in time. Oscillates
/// around the configured baseline so hotspots read as alive without
/// distracting from scrolling.
#[inline]
#[must_use]
pub fn pulse_intensity(elapsed: f32, motion: &MotionOptions) -> f32 {
    motion.pulse_base
        * (1.0 + (elapsed * motion.pulse_rate).sin() * motion.pulse_depth)
}
