use glam::Vec3;

use crate::config::HelixOptions;

/// Instanced atoms laid down per base pair.
pub const ATOMS_PER_UNIT: usize = 4;
/// Sphere radius of a rendered atom in world units.
pub const ATOM_RADIUS: f32 = 0.32;
/// Scale applied to the two minor in-between atoms.
pub const MINOR_ATOM_SCALE: f32 = 0.6;
/// Cylinder radius of a rung bond.
pub const BOND_RADIUS: f32 = 0.12;
/// Fraction of the strand-to-strand span a bond covers.
pub const BOND_SPAN_FACTOR: f32 = 0.85;
/// Base radius of the enlarged pointer hitbox sphere around an atom.
pub const HITBOX_RADIUS: f32 = 1.6;

/// Interpolation factors for the two minor atoms along the rung.
const MINOR_FACTORS: [f32; 2] = [0.35, 0.65];

/// Which of the four per-pair atoms an instance is.
///
/// Instance indices are `unit * 4 + slot`, in this declaration order. The
/// two strand atoms sit on opposite sides of the axis; the minor pair sits
/// between them on the rung.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomSlot {
    /// First strand backbone atom.
    StrandA,
    /// Second strand backbone atom, half a turn around the axis.
    StrandB,
    /// Minor atom at 35% along the rung.
    MinorA,
    /// Minor atom at 65% along the rung.
    MinorB,
}

impl AtomSlot {
    /// Render scale of atoms in this slot.
    #[must_use]
    pub const fn scale(self) -> f32 {
        match self {
            Self::StrandA | Self::StrandB => 1.0,
            Self::MinorA | Self::MinorB => MINOR_ATOM_SCALE,
        }
    }

    /// Position of the slot within its base pair's instance block.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::StrandA => 0,
            Self::StrandB => 1,
            Self::MinorA => 2,
            Self::MinorB => 3,
        }
    }
}

/// One instanced atom in lattice-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtomInstance {
    /// Base pair this atom belongs to.
    pub unit: usize,
    /// Which of the four per-pair atoms this is.
    pub slot: AtomSlot,
    /// Lattice-local position; apply the current pose for world space.
    pub position: Vec3,
    /// Render scale (minor atoms are smaller).
    pub scale: f32,
}

/// One rung bond spanning the two strands of a base pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BondInstance {
    /// Base pair this bond belongs to.
    pub unit: usize,
    /// Lattice-local midpoint between the two strand atoms.
    pub center: Vec3,
    /// Unit vector along the rung, from strand B toward strand A.
    pub direction: Vec3,
    /// Bond length, slightly short of the full span so it never pokes
    /// through the strand atoms.
    pub length: f32,
}

/// Immutable instance tables for the double helix.
///
/// Built once from the geometry options; scroll and idle motion never
/// touch the tables, they only change the group pose applied on top.
#[derive(Debug, Clone)]
pub struct HelixLattice {
    atoms: Vec<AtomInstance>,
    bonds: Vec<BondInstance>,
    unit_count: usize,
}

impl HelixLattice {
    /// Lay down four atoms and one bond per base pair.
    #[must_use]
    pub fn build(helix: &HelixOptions) -> Self {
        let count = helix.pair_count;
        let mut atoms = Vec::with_capacity(count * ATOMS_PER_UNIT);
        let mut bonds = Vec::with_capacity(count);
        let half_height = helix.total_height() / 2.0;
        let [minor_a_factor, minor_b_factor] = MINOR_FACTORS;

        for unit in 0..count {
            let angle = unit as f32 * helix.twist_per_pair;
            let y = unit as f32 * helix.rise_per_pair - half_height;
            let strand_a = Vec3::new(
                angle.cos() * helix.radius,
                y,
                angle.sin() * helix.radius,
            );
            let opposite = angle + std::f32::consts::PI;
            let strand_b = Vec3::new(
                opposite.cos() * helix.radius,
                y,
                opposite.sin() * helix.radius,
            );

            atoms.push(AtomInstance {
                unit,
                slot: AtomSlot::StrandA,
                position: strand_a,
                scale: AtomSlot::StrandA.scale(),
            });
            atoms.push(AtomInstance {
                unit,
                slot: AtomSlot::StrandB,
                position: strand_b,
                scale: AtomSlot::StrandB.scale(),
            });
            atoms.push(AtomInstance {
                unit,
                slot: AtomSlot::MinorA,
                position: strand_a.lerp(strand_b, minor_a_factor),
                scale: AtomSlot::MinorA.scale(),
            });
            atoms.push(AtomInstance {
                unit,
                slot: AtomSlot::MinorB,
                position: strand_a.lerp(strand_b, minor_b_factor),
                scale: AtomSlot::MinorB.scale(),
            });

            bonds.push(BondInstance {
                unit,
                center: (strand_a + strand_b) / 2.0,
                direction: (strand_a - strand_b).normalize_or_zero(),
                length: strand_a.distance(strand_b) * BOND_SPAN_FACTOR,
            });
        }

        Self {
            atoms,
            bonds,
            unit_count: count,
        }
    }

    /// All atom instances, four per base pair, in instance-index order.
    #[must_use]
    pub fn atoms(&self) -> &[AtomInstance] {
        &self.atoms
    }

    /// All rung bonds, one per base pair.
    #[must_use]
    pub fn bonds(&self) -> &[BondInstance] {
        &self.bonds
    }

    /// Number of base pairs.
    #[must_use]
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Number of atom instances.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.atoms.len()
    }

    /// Atom instance by flat instance index.
    #[must_use]
    pub fn atom(&self, instance: usize) -> Option<&AtomInstance> {
        self.atoms.get(instance)
    }

    /// Base pair owning an instance index.
    #[must_use]
    pub const fn unit_of_instance(instance: usize) -> usize {
        instance / ATOMS_PER_UNIT
    }
}
