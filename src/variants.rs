//! Tagged spawn variants and the weighted tables that select them.
//!
//! The probabilities live in one declared table per variant family instead of
//! inline threshold cascades, so they can be tuned and tested in isolation.

use bevy::prelude::*;
use rand::Rng;

/// A weighted selection table over a copyable variant set.
#[derive(Debug, Clone)]
pub struct WeightedTable<T: Copy> {
    entries: Vec<(f32, T)>,
    total: f32,
}

impl<T: Copy> WeightedTable<T> {
    /// Builds a table from `(weight, variant)` pairs. Non-positive weights
    /// are clamped to zero; an all-zero table always yields the last entry.
    pub fn new(entries: impl IntoIterator<Item = (f32, T)>) -> Self {
        let entries: Vec<(f32, T)> = entries
            .into_iter()
            .map(|(w, v)| (w.max(0.0), v))
            .collect();
        debug_assert!(!entries.is_empty(), "weighted table needs entries");
        let total = entries.iter().map(|(w, _)| w).sum();
        Self { entries, total }
    }

    pub fn pick(&self, rng: &mut impl Rng) -> T {
        let mut draw = if self.total > 0.0 {
            rng.gen_range(0.0..self.total)
        } else {
            0.0
        };
        for (weight, value) in &self.entries {
            if draw < *weight {
                return *value;
            }
            draw -= weight;
        }
        self.entries[self.entries.len() - 1].1
    }
}

/// Composite structures the town populator places, one per grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructureKind {
    House,
    Tower,
    CylinderStack,
}

/// Loose props placed by the scatter populator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterKind {
    Box,
    Tower,
    Sphere,
    Cylinder,
}

/// Poof burst palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoofKind {
    Dust,
    Fire,
    Magic,
    Fairy,
    Star,
}

impl PoofKind {
    pub fn base_color(self) -> Color {
        match self {
            PoofKind::Dust => Color::srgb_u8(0xdc, 0xdc, 0xdc),
            PoofKind::Fire => Color::srgb_u8(0xff, 0xc2, 0xb4),
            PoofKind::Magic => Color::srgb_u8(0xca, 0xaa, 0xff),
            PoofKind::Fairy => Color::srgb_u8(0xa8, 0xff, 0xe9),
            PoofKind::Star => Color::srgb_u8(0xff, 0xf0, 0xa8),
        }
    }

    pub fn table() -> WeightedTable<Self> {
        WeightedTable::new([
            (1.0, PoofKind::Dust),
            (1.0, PoofKind::Fire),
            (1.0, PoofKind::Magic),
            (1.0, PoofKind::Fairy),
            (1.0, PoofKind::Star),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn picks_follow_declared_weights() {
        let table = WeightedTable::new([
            (0.40, StructureKind::House),
            (0.35, StructureKind::Tower),
            (0.25, StructureKind::CylinderStack),
        ]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0usize; 3];
        const N: usize = 20_000;
        for _ in 0..N {
            match table.pick(&mut rng) {
                StructureKind::House => counts[0] += 1,
                StructureKind::Tower => counts[1] += 1,
                StructureKind::CylinderStack => counts[2] += 1,
            }
        }
        let frac = |c: usize| c as f32 / N as f32;
        assert!((frac(counts[0]) - 0.40).abs() < 0.02);
        assert!((frac(counts[1]) - 0.35).abs() < 0.02);
        assert!((frac(counts[2]) - 0.25).abs() < 0.02);
    }

    #[test]
    fn zero_weight_variant_never_picked() {
        let table = WeightedTable::new([(0.0, ScatterKind::Box), (1.0, ScatterKind::Sphere)]);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            assert_eq!(table.pick(&mut rng), ScatterKind::Sphere);
        }
    }

    #[test]
    fn degenerate_table_falls_back_to_last_entry() {
        let table = WeightedTable::new([(0.0, PoofKind::Dust), (-1.0, PoofKind::Star)]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(table.pick(&mut rng), PoofKind::Star);
    }
}
