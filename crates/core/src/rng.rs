//! RNG module - injected piece selection
//!
//! The controller never reaches for an ambient generator: it draws kinds from a
//! [`PieceSource`] handed to it at construction. The default source picks one of
//! the seven kinds uniformly with a seeded LCG, so a seed fully determines the
//! piece sequence. [`SequencePieces`] replays a fixed list, which is what tests
//! use to stage exact scenarios.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

/// Supplies the kind of every newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;

    /// Seed that reproduces this source, when it has one.
    fn seed(&self) -> Option<u32> {
        None
    }
}

/// Uniform choice among the seven kinds.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    seed: u32,
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }
}

impl Default for UniformPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> PieceKind {
        let i = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[i]
    }

    fn seed(&self) -> Option<u32> {
        Some(self.seed)
    }
}

/// Replays a fixed list of kinds, cycling when exhausted.
#[derive(Debug, Clone)]
pub struct SequencePieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl SequencePieces {
    /// An empty list falls back to a single `O`.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        Self { kinds, next: 0 }
    }

    /// Always the same kind.
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(vec![kind])
    }
}

impl PieceSource for SequencePieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }

    fn seed(&self) -> Option<u32> {
        (**self).seed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);
        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_pieces_cover_all_kinds() {
        let mut source = UniformPieces::new(42);
        let mut seen = [0u32; 7];
        for _ in 0..7000 {
            seen[(source.next_kind().tag() - 1) as usize] += 1;
        }
        // Roughly uniform: each kind lands well within [700, 1300].
        for (i, count) in seen.iter().enumerate() {
            assert!(
                (700..=1300).contains(count),
                "kind {:?} drawn {} times",
                PieceKind::ALL[i],
                count
            );
        }
    }

    #[test]
    fn test_uniform_pieces_same_seed_same_sequence() {
        let mut a = UniformPieces::new(99);
        let mut b = UniformPieces::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
        assert_eq!(a.seed(), Some(99));
    }

    #[test]
    fn test_sequence_pieces_cycle() {
        let mut source = SequencePieces::new([PieceKind::I, PieceKind::T]);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::T);
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.seed(), None);
    }

    #[test]
    fn test_sequence_pieces_empty_falls_back() {
        let mut source = SequencePieces::new(Vec::new());
        assert_eq!(source.next_kind(), PieceKind::O);
    }
}
