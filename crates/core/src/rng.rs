//! RNG module - piece sources
//!
//! The engine asks a [`PieceSource`] for each new piece kind, so randomness can
//! be swapped out. Two sources ship with the crate:
//!
//! - [`SimpleRng`]: a seeded LCG picking uniformly among the seven kinds
//! - [`ScriptedSource`]: replays a fixed sequence (tests, demos, replays)

use crate::types::PieceKind;

/// Supplies the kind of every newly generated piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for Box<S> {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Draws from the upper 16 bits; the low bits of an LCG have short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current internal state (feed back into [`SimpleRng::new`] to resume)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Replays a fixed list of kinds, wrapping around at the end.
///
/// An empty list replays all seven kinds in canonical order.
///
/// # Examples
///
/// ```
/// use blockfall_core::{PieceSource, ScriptedSource};
/// use blockfall_core::types::PieceKind;
///
/// let mut source = ScriptedSource::new(&[PieceKind::I, PieceKind::O]);
/// assert_eq!(source.next_kind(), PieceKind::I);
/// assert_eq!(source.next_kind(), PieceKind::O);
/// assert_eq!(source.next_kind(), PieceKind::I);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedSource {
    kinds: Vec<PieceKind>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(kinds: &[PieceKind]) -> Self {
        let kinds = if kinds.is_empty() {
            PieceKind::ALL.to_vec()
        } else {
            kinds.to_vec()
        };
        Self { kinds, cursor: 0 }
    }

    /// A source that only ever yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self::new(&[kind])
    }

    /// How many kinds have been handed out so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl PieceSource for ScriptedSource {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.cursor % self.kinds.len()];
        self.cursor += 1;
        kind
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
        assert_eq!(SimpleRng::new(0), SimpleRng::new(1));
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_simple_rng_yields_every_kind() {
        let mut rng = SimpleRng::new(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = rng.next_kind();
            let idx = PieceKind::ALL.iter().position(|k| *k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s), "missing kinds: {:?}", seen);
    }

    #[test]
    fn test_scripted_source_wraps() {
        let mut source = ScriptedSource::new(&[PieceKind::T, PieceKind::S, PieceKind::Z]);
        let drawn: Vec<_> = (0..5).map(|_| source.next_kind()).collect();
        assert_eq!(
            drawn,
            vec![PieceKind::T, PieceKind::S, PieceKind::Z, PieceKind::T, PieceKind::S]
        );
        assert_eq!(source.drawn(), 5);
    }

    #[test]
    fn test_scripted_source_empty_falls_back_to_all() {
        let mut source = ScriptedSource::new(&[]);
        let drawn: Vec<_> = (0..7).map(|_| source.next_kind()).collect();
        assert_eq!(drawn, PieceKind::ALL.to_vec());
    }

    #[test]
    fn test_boxed_source() {
        let mut source: Box<dyn PieceSource> = Box::new(ScriptedSource::repeat(PieceKind::L));
        assert_eq!(source.next_kind(), PieceKind::L);
    }
}
