//! [`SuccessorDistribution`]s are the [`Successor`]s seen after a [`Token`](crate::token::Token),
//! and are paired up with that token in a [`Chain`](crate::Chain).

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::token::Successor;

/// All successors of a token, in the order they were seen.
///
/// A successor seen twice is stored twice, so picking uniformly among the entries makes common
/// transitions more likely.
#[derive(Clone, Debug)]
pub struct SuccessorDistribution {
    /// Uniform over the indices of `choices`.
    dist: Uniform<usize>,
    /// The actual choices
    choices: Vec<Successor>,
}

impl SuccessorDistribution {
    pub fn builder() -> SuccessorDistributionBuilder {
        SuccessorDistributionBuilder::new()
    }

    pub fn get_random_successor(&self, rng: &mut impl Rng) -> &Successor {
        &self.choices[self.dist.sample(rng)]
    }

    pub fn successors(&self) -> &[Successor] {
        &self.choices
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    /// Always false for a built distribution, see [`SuccessorDistributionBuilder::build()`].
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

impl PartialEq for SuccessorDistribution {
    fn eq(&self, other: &Self) -> bool {
        self.choices == other.choices
    }
}

impl Eq for SuccessorDistribution {}

/// Builder for [`SuccessorDistribution`]. Used when parsing a text to record every successor of a
/// token, and then to freeze them into a distribution.
#[derive(Clone, Debug)]
pub struct SuccessorDistributionBuilder {
    choices: Vec<Successor>,
}

impl SuccessorDistributionBuilder {
    pub fn new() -> Self {
        Self {
            choices: Vec::new(),
        }
    }

    /// Creates a uniform distribution over the recorded successors.
    ///
    /// # Panics
    ///
    /// Will panic if:
    ///
    /// - There are no recorded successors
    pub fn build(self) -> SuccessorDistribution {
        assert!(
            !self.choices.is_empty(),
            "the builder has not been given any successors"
        );
        SuccessorDistribution {
            dist: Uniform::new(0, self.choices.len()),
            choices: self.choices,
        }
    }

    /// Add an occurance of this successor.
    pub fn add_successor(&mut self, successor: Successor) {
        self.choices.push(successor);
    }
}

impl Default for SuccessorDistributionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
