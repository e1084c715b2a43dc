//! Population member over a grouped bitstring genotype.

use super::layout::GroupLayout;
use crate::ea::PopulationMember;
use crate::error::LayoutError;
use crate::random::RandomSource;
use rand::Rng;
use std::fmt;
use std::marker::PhantomData;

/// Domain hooks for a [`BitstringMember`].
///
/// An encoding declares the group widths of its genotype and how a genotype
/// is scored. Each group usually encodes one phenotype parameter; crossover
/// never splits a group.
///
/// # Implementing
///
/// ```
/// use u_evolve::bitstring::{BitstringMember, GroupEncoding};
///
/// /// Two 8-bit unsigned parameters; fitness is their sum.
/// struct Pair;
///
/// impl GroupEncoding for Pair {
///     const GROUPS: &'static [usize] = &[8, 8];
///
///     fn evaluate_fitness(member: &BitstringMember<Self>) -> f64 {
///         member.unpack().iter().map(|g| g.to_u64() as f64).sum()
///     }
/// }
/// ```
pub trait GroupEncoding: Sized + Send + Sync + 'static {
    /// Group widths, most-significant group first.
    ///
    /// Must contain at least two groups, none of width 0.
    const GROUPS: &'static [usize];

    /// Decodes the genotype and scores it. Higher is better.
    fn evaluate_fitness(member: &BitstringMember<Self>) -> f64;

    /// Per-bit flip probability used by mutation.
    ///
    /// Defaults to `groups / bits`: on average one flip per group, whatever
    /// the genotype length.
    fn flip_chance() -> f64 {
        let bits: usize = Self::GROUPS.iter().sum();
        Self::GROUPS.len() as f64 / bits as f64
    }

    /// Diagnostic rendering. Defaults to the raw bitstring.
    fn describe(member: &BitstringMember<Self>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", member.as_group(0..member.bit_count()))
    }
}

/// View of one group's bits, most-significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitGroup<'a> {
    bits: &'a [bool],
}

impl<'a> BitGroup<'a> {
    /// The group's bits.
    pub fn bits(&self) -> &'a [bool] {
        self.bits
    }

    /// Width of the group.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Always `false` for groups of a valid layout.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Decodes the group as an unsigned integer, most-significant bit first.
    ///
    /// # Panics
    /// Panics if the group is wider than 64 bits.
    pub fn to_u64(&self) -> u64 {
        assert!(self.bits.len() <= 64, "group of {} bits does not fit in u64", self.bits.len());
        self.bits
            .iter()
            .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit))
    }
}

impl fmt::Display for BitGroup<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// Candidate solution whose genotype is a fixed-width bitstring partitioned
/// into the groups of `E::GROUPS`.
///
/// - **Initialization**: every bit is 0 or 1 with probability 0.5.
/// - **Crossover**: groups alternate between parents, starting with parent
///   A; a group is always inherited whole.
/// - **Mutation**: `Poisson(flip_chance * bits)` flips at uniformly sampled
///   positions, with replacement. A position drawn twice ends up unchanged;
///   this approximates independent per-bit trials at a fraction of the cost.
///
/// # Panics
/// Construction panics if `E::GROUPS` is not a valid [`GroupLayout`].
/// The layout is validated once there; accessors on an existing member
/// walk `E::GROUPS` directly.
pub struct BitstringMember<E: GroupEncoding> {
    bits: Vec<bool>,
    fitness: f64,
    _encoding: PhantomData<fn() -> E>,
}

impl<E: GroupEncoding> BitstringMember<E> {
    /// The validated layout of `E::GROUPS`.
    pub fn layout() -> GroupLayout<'static> {
        GroupLayout::new(E::GROUPS).unwrap_or_else(|e| {
            panic!("invalid group layout for {}: {e}", std::any::type_name::<E>())
        })
    }

    /// Builds a member from an explicit genotype.
    pub fn from_bits(bits: Vec<bool>) -> Result<Self, LayoutError> {
        let layout = GroupLayout::new(E::GROUPS)?;
        if bits.len() != layout.bit_count() {
            return Err(LayoutError::LengthMismatch {
                expected: layout.bit_count(),
                actual: bits.len(),
            });
        }
        Ok(Self::with_bits(bits))
    }

    fn with_bits(bits: Vec<bool>) -> Self {
        Self {
            bits,
            fitness: f64::NEG_INFINITY,
            _encoding: PhantomData,
        }
    }

    /// The whole genotype, most-significant bit first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Genotype length.
    pub fn bit_count(&self) -> usize {
        self.bits.len()
    }

    /// Bits of group `index`.
    ///
    /// # Panics
    /// Panics if `index` is not a group of `E::GROUPS`.
    pub fn group(&self, index: usize) -> BitGroup<'_> {
        self.groups().nth(index).unwrap_or_else(|| {
            panic!("group index {index} out of range for {} groups", E::GROUPS.len())
        })
    }

    /// Splits the genotype into its groups, in declared order.
    pub fn unpack(&self) -> Vec<BitGroup<'_>> {
        self.groups().collect()
    }

    fn groups(&self) -> impl Iterator<Item = BitGroup<'_>> {
        let mut rest = &self.bits[..];
        E::GROUPS.iter().map(move |&width| {
            let (bits, tail) = rest.split_at(width);
            rest = tail;
            BitGroup { bits }
        })
    }

    /// Toggles the bit at `index`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    fn as_group(&self, range: std::ops::Range<usize>) -> BitGroup<'_> {
        BitGroup {
            bits: &self.bits[range],
        }
    }
}

impl<E: GroupEncoding> Clone for BitstringMember<E> {
    fn clone(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            fitness: self.fitness,
            _encoding: PhantomData,
        }
    }
}

impl<E: GroupEncoding> fmt::Debug for BitstringMember<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BitstringMember")
            .field("bits", &self.as_group(0..self.bits.len()).to_string())
            .field("fitness", &self.fitness)
            .finish()
    }
}

impl<E: GroupEncoding> fmt::Display for BitstringMember<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        E::describe(self, f)
    }
}

impl<E: GroupEncoding> PopulationMember for BitstringMember<E> {
    fn random(rng: &mut RandomSource) -> Self {
        let bits = (0..Self::layout().bit_count())
            .map(|_| rng.random::<bool>())
            .collect();
        Self::with_bits(bits)
    }

    fn evaluate_fitness(&self) -> f64 {
        E::evaluate_fitness(self)
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }

    fn crossover(&mut self, parent_a: &Self, parent_b: &Self, _rng: &mut RandomSource) {
        self.bits.resize(parent_a.bits.len(), false);
        let mut start = 0;
        for (i, &width) in E::GROUPS.iter().enumerate() {
            let donor = if i % 2 == 0 { parent_a } else { parent_b };
            let range = start..start + width;
            self.bits[range.clone()].copy_from_slice(&donor.bits[range]);
            start += width;
        }
    }

    fn mutate(&mut self, rng: &mut RandomSource) {
        let n = self.bits.len();
        let flips = rng.poisson(E::flip_chance() * n as f64);
        for _ in 0..flips {
            let index = rng.uniform_int(0, n - 1);
            self.flip(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Four groups of uneven width; fitness = number of set bits.
    struct Uneven;

    impl GroupEncoding for Uneven {
        const GROUPS: &'static [usize] = &[3, 5, 2, 6];

        fn evaluate_fitness(member: &BitstringMember<Self>) -> f64 {
            member.bits().iter().filter(|&&b| b).count() as f64
        }
    }

    struct Frozen;

    impl GroupEncoding for Frozen {
        const GROUPS: &'static [usize] = &[8, 8];

        fn evaluate_fitness(_: &BitstringMember<Self>) -> f64 {
            0.0
        }

        fn flip_chance() -> f64 {
            0.0
        }
    }

    /// Mean of 2 flips over 16 bits.
    struct TwoFlips;

    impl GroupEncoding for TwoFlips {
        const GROUPS: &'static [usize] = &[8, 8];

        fn evaluate_fitness(_: &BitstringMember<Self>) -> f64 {
            0.0
        }
    }

    struct Monolithic;

    impl GroupEncoding for Monolithic {
        const GROUPS: &'static [usize] = &[16];

        fn evaluate_fitness(_: &BitstringMember<Self>) -> f64 {
            0.0
        }
    }

    fn hamming(a: &[bool], b: &[bool]) -> usize {
        a.iter().zip(b).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn test_random_genotype() {
        let mut rng = RandomSource::from_seed(42);
        let members: Vec<BitstringMember<Uneven>> =
            (0..500).map(|_| BitstringMember::random(&mut rng)).collect();

        assert!(members.iter().all(|m| m.bit_count() == 16));
        let ones: usize = members.iter().map(|m| m.evaluate_fitness() as usize).sum();
        let share = ones as f64 / (500.0 * 16.0);
        assert!((share - 0.5).abs() < 0.03, "expected ~half the bits set, got {share}");
    }

    #[test]
    fn test_crossover_alternates_groups() {
        let a = BitstringMember::<Uneven>::from_bits(vec![true; 16]).unwrap();
        let b = BitstringMember::<Uneven>::from_bits(vec![false; 16]).unwrap();
        let mut rng = RandomSource::from_seed(1);

        let mut child = b.clone();
        child.crossover(&a, &b, &mut rng);
        assert_eq!(child.to_string(), "111".to_owned() + "00000" + "11" + "000000");

        let mut child = a.clone();
        child.crossover(&b, &a, &mut rng);
        assert_eq!(child.to_string(), "000".to_owned() + "11111" + "00" + "111111");
    }

    #[test]
    fn test_crossover_discards_prior_genotype() {
        let a = BitstringMember::<Uneven>::from_bits(vec![true; 16]).unwrap();
        let mut rng = RandomSource::from_seed(3);
        let mut child = BitstringMember::<Uneven>::random(&mut rng);

        child.crossover(&a, &a, &mut rng);
        assert_eq!(child.bits(), a.bits());
    }

    #[test]
    fn test_zero_flip_chance_is_noop() {
        let mut rng = RandomSource::from_seed(5);
        for _ in 0..200 {
            let mut member = BitstringMember::<Frozen>::random(&mut rng);
            let before = member.bits().to_vec();
            member.mutate(&mut rng);
            assert_eq!(member.bits(), &before[..]);
        }
    }

    #[test]
    fn test_default_flip_chance() {
        // 2 groups over 16 bits
        assert!((TwoFlips::flip_chance() - 0.125).abs() < 1e-12);
    }

    #[test]
    fn test_mutation_flip_count() {
        let mut rng = RandomSource::from_seed(8);
        let trials = 5000;
        let mut total = 0;
        for _ in 0..trials {
            let mut member = BitstringMember::<TwoFlips>::random(&mut rng);
            let before = member.bits().to_vec();
            member.mutate(&mut rng);
            total += hamming(&before, member.bits());
        }
        // Poisson(2) flips with replacement over 16 bits changes
        // 16 * (1 - e^-0.25) / 2 ≈ 1.77 bits on average.
        let mean = total as f64 / trials as f64;
        assert!((1.6..1.95).contains(&mean), "mean changed bits {mean}");
    }

    #[test]
    fn test_group_decoding() {
        let mut bits = vec![false; 16];
        // group 1 (bits 3..8) = 0b10011
        bits[3] = true;
        bits[6] = true;
        bits[7] = true;
        let member = BitstringMember::<Uneven>::from_bits(bits).unwrap();

        assert_eq!(member.group(0).to_u64(), 0);
        assert_eq!(member.group(1).to_u64(), 0b10011);
        assert_eq!(member.group(1).to_string(), "10011");
        assert_eq!(member.group(3).len(), 6);
    }

    #[test]
    fn test_group_matches_unpack() {
        let mut rng = RandomSource::from_seed(21);
        let member = BitstringMember::<Uneven>::random(&mut rng);
        let layout = BitstringMember::<Uneven>::layout();

        let groups = member.unpack();
        for (i, range) in layout.ranges().enumerate() {
            assert_eq!(member.group(i), groups[i]);
            assert_eq!(member.group(i).bits(), &member.bits()[range]);
        }
    }

    #[test]
    #[should_panic(expected = "group index 4 out of range")]
    fn test_group_out_of_range_panics() {
        let member = BitstringMember::<Uneven>::from_bits(vec![false; 16]).unwrap();
        member.group(4);
    }

    #[test]
    fn test_flip() {
        let mut member = BitstringMember::<Uneven>::from_bits(vec![false; 16]).unwrap();
        member.flip(0);
        member.flip(15);
        member.flip(15);
        assert_eq!(member.evaluate_fitness(), 1.0);
        assert!(member.bits()[0]);
    }

    #[test]
    fn test_from_bits_length_mismatch() {
        let result = BitstringMember::<Uneven>::from_bits(vec![true; 10]);
        assert_eq!(
            result.unwrap_err(),
            LayoutError::LengthMismatch {
                expected: 16,
                actual: 10
            }
        );
    }

    #[test]
    fn test_from_bits_invalid_layout() {
        let result = BitstringMember::<Monolithic>::from_bits(vec![true; 16]);
        assert_eq!(result.unwrap_err(), LayoutError::TooFewGroups(1));
    }

    #[test]
    #[should_panic(expected = "invalid group layout")]
    fn test_random_with_invalid_layout_panics() {
        let mut rng = RandomSource::from_seed(1);
        BitstringMember::<Monolithic>::random(&mut rng);
    }

    #[test]
    fn test_unevaluated_fitness_is_worst() {
        let member = BitstringMember::<Uneven>::from_bits(vec![true; 16]).unwrap();
        assert_eq!(member.fitness(), f64::NEG_INFINITY);
    }

    proptest! {
        #[test]
        fn prop_crossover_inherits_whole_groups(seed in any::<u64>()) {
            let mut rng = RandomSource::from_seed(seed);
            let a = BitstringMember::<Uneven>::random(&mut rng);
            let b = BitstringMember::<Uneven>::random(&mut rng);
            let mut child = BitstringMember::<Uneven>::random(&mut rng);
            child.crossover(&a, &b, &mut rng);

            prop_assert_eq!(child.bit_count(), 16);
            for (i, group) in child.unpack().iter().enumerate() {
                let donor = if i % 2 == 0 { &a } else { &b };
                prop_assert_eq!(*group, donor.group(i));
            }
        }

        #[test]
        fn prop_unpack_round_trips(seed in any::<u64>()) {
            let mut rng = RandomSource::from_seed(seed);
            let member = BitstringMember::<Uneven>::random(&mut rng);

            let groups = member.unpack();
            prop_assert_eq!(groups.len(), Uneven::GROUPS.len());
            let rebuilt: Vec<bool> = groups
                .iter()
                .flat_map(|g| g.bits().iter().copied())
                .collect();
            prop_assert_eq!(&rebuilt[..], member.bits());
        }

        #[test]
        fn prop_mutation_preserves_length(seed in any::<u64>()) {
            let mut rng = RandomSource::from_seed(seed);
            let mut member = BitstringMember::<TwoFlips>::random(&mut rng);
            member.mutate(&mut rng);
            prop_assert_eq!(member.bit_count(), 16);
        }
    }
}
