use crate::{
    comparator::Comparator,
    error::{Error, Result},
    skip_list::SkipList,
};

pub(crate) const DEFAULT_MAX_LEVEL: usize = 12;

/// Construction-time configuration for a [`SkipList`].
#[derive(Debug, Clone)]
pub struct SkipListOptions {
    pub(crate) max_level: usize,
    pub(crate) rng_seed: Option<u64>,
}

impl Default for SkipListOptions {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            rng_seed: None,
        }
    }
}

impl SkipListOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ceiling on tower height, fixed for the lifetime of the list.
    pub fn max_level(&mut self, max_level: usize) -> &mut Self {
        self.max_level = max_level;
        self
    }

    /// Fixed seed for the level generator, for reproducible structure.
    /// Defaults to OS entropy.
    pub fn rng_seed(&mut self, seed: u64) -> &mut Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn build<K, V, C>(&self, comparator: C) -> Result<SkipList<K, V, C>>
    where
        C: Comparator<Item = K>,
    {
        if self.max_level == 0 {
            return Err(Error::InvalidMaxLevel(self.max_level));
        }
        Ok(SkipList::with_options(self, comparator))
    }
}
