//! Grouped bitstring genotypes.
//!
//! A [`BitstringMember`] is a ready-made [`PopulationMember`](crate::ea::PopulationMember)
//! whose genotype is a fixed-width bitstring split into groups. Each group
//! usually encodes one numeric parameter of the phenotype. Implement
//! [`GroupEncoding`] to declare the groups and score a genotype.
//!
//! # Operators
//!
//! - Uniform random initialization.
//! - Group crossover: whole groups are inherited, alternating between parents.
//! - Poisson mutation: the number of flipped bits is Poisson-distributed
//!   with mean `flip_chance * bit_count`.

mod layout;
mod member;

pub use layout::GroupLayout;
pub use member::{BitGroup, BitstringMember, GroupEncoding};
