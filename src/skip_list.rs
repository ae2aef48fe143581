use std::cmp::Ordering::{Equal, Less};

use parking_lot::RwLock;

use crate::{
    arena::{Entry, EntryArena, EntryIndex},
    comparator::Comparator,
    level_generator::LevelGenerator,
    options::SkipListOptions,
};

pub mod prelude {
    #![allow(unused)]

    pub use super::SkipList;
}

/// Probabilistic ordered map. Every entry is linked into the level-0
/// chain; each higher level links a sparse subsequence of the level
/// below, so operations descend from the top active level and skip
/// runs of entries at a time, for expected `O(log n)` cost.
///
/// Lookups share a read lock, mutations take the write lock, so the
/// list can be used from several threads behind an `Arc`.
pub struct SkipList<K, V, C> {
    inner: RwLock<Inner<K, V>>,
    comparator: C,
}

struct Inner<K, V> {
    // owns every entry; dropping it drops them all
    arena: EntryArena<K, V>,
    // header sentinel: one forward link per configured level, no key/value
    head: Vec<Option<EntryIndex>>,
    // 0-based highest level any live entry occupies
    current_level: usize,
    levels: LevelGenerator,
}

impl<K, V> Inner<K, V> {
    /// Forward link of `pred` at `level`; `None` as predecessor is the
    /// header sentinel.
    fn forward(&self, pred: Option<EntryIndex>, level: usize) -> Option<EntryIndex> {
        match pred {
            Some(index) => self.arena.get(index).tower[level],
            None => self.head[level],
        }
    }

    fn set_forward(&mut self, pred: Option<EntryIndex>, level: usize, next: Option<EntryIndex>) {
        match pred {
            Some(index) => self.arena.get_mut(index).tower[level] = next,
            None => self.head[level] = next,
        }
    }
}

impl<K, V, C> Default for SkipList<K, V, C>
where
    C: Comparator<Item = K> + Default,
{
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<K, V, C> SkipList<K, V, C>
where
    C: Comparator<Item = K>,
{
    pub fn new(comparator: C) -> Self {
        Self::with_options(&SkipListOptions::default(), comparator)
    }

    pub(crate) fn with_options(options: &SkipListOptions, comparator: C) -> Self {
        let max_level = options.max_level;
        tracing::debug!(max_level, "creating skip list");
        Self {
            inner: RwLock::new(Inner {
                arena: EntryArena::new(),
                head: vec![None; max_level],
                current_level: 0,
                levels: LevelGenerator::new(max_level, options.rng_seed),
            }),
            comparator,
        }
    }

    /// Walk from the top active level down, recording at each level the
    /// last position whose key is strictly less than `key` (`None` is
    /// the header). Insert and remove splice through this array;
    /// lookups only need its level-0 slot.
    fn sweep(&self, inner: &Inner<K, V>, key: &K) -> Vec<Option<EntryIndex>> {
        let mut update = vec![None; inner.current_level + 1];
        let mut pred = None;

        for level in (0..=inner.current_level).rev() {
            while let Some(next) = inner.forward(pred, level) {
                if self.comparator.compare(&inner.arena.get(next).key, key) == Less {
                    pred = Some(next);
                } else {
                    break;
                }
            }
            update[level] = pred;
        }
        update
    }

    /// The level-0 successor of `pred`, if it carries exactly `key`.
    fn match_at(
        &self,
        inner: &Inner<K, V>,
        pred: Option<EntryIndex>,
        key: &K,
    ) -> Option<EntryIndex> {
        let next = inner.forward(pred, 0)?;
        (self.comparator.compare(&inner.arena.get(next).key, key) == Equal).then_some(next)
    }

    /// Inserts `key` with `value`. Returns `false` without touching the
    /// list when the key is already present; the first value wins.
    pub fn insert(&self, key: K, value: V) -> bool {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let mut update = self.sweep(inner, &key);
        if self.match_at(inner, update[0], &key).is_some() {
            return false;
        }

        let top = inner.levels.next_level();
        if top > inner.current_level {
            // the header is the predecessor on every newly active level
            update.resize(top + 1, None);
            inner.current_level = top;
            tracing::trace!(top, "raised active level");
        }

        let index = inner.arena.alloc(Entry::new(key, value, top + 1));
        for level in 0..=top {
            let next = inner.forward(update[level], level);
            inner.arena.get_mut(index).tower[level] = next;
            inner.set_forward(update[level], level, Some(index));
        }
        true
    }

    /// Looks up `key` and clones out its value.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        let guard = self.inner.read();
        let update = self.sweep(&guard, key);
        self.match_at(&guard, update[0], key)
            .map(|index| guard.arena.get(index).value.clone())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        let guard = self.inner.read();
        let update = self.sweep(&guard, key);
        self.match_at(&guard, update[0], key).is_some()
    }

    /// Unlinks `key` from every level it occupies and releases its
    /// arena slot. Returns the evicted value, `None` if absent.
    pub fn remove(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let update = self.sweep(inner, key);
        let target = self.match_at(inner, update[0], key)?;

        // at every level the tower spans, the recorded predecessor
        // links directly to the target
        for level in 0..inner.arena.get(target).height() {
            let next = inner.arena.get(target).tower[level];
            inner.set_forward(update[level], level, next);
        }

        while inner.current_level > 0 && inner.head[inner.current_level].is_none() {
            inner.current_level -= 1;
            tracing::trace!(top = inner.current_level, "lowered active level");
        }

        Some(inner.arena.free(target).value)
    }

    /// Replaces the value of an existing key in place; the entry keeps
    /// its position and tower. Returns the previous value.
    pub fn set_value(&self, key: &K, value: V) -> Option<V> {
        let mut guard = self.inner.write();
        let inner = &mut *guard;

        let update = self.sweep(inner, key);
        let target = self.match_at(inner, update[0], key)?;
        Some(std::mem::replace(
            &mut inner.arena.get_mut(target).value,
            value,
        ))
    }

    pub fn len(&self) -> usize {
        self.inner.read().arena.live()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels currently in use.
    pub fn height(&self) -> usize {
        self.inner.read().current_level + 1
    }

    pub fn max_level(&self) -> usize {
        self.inner.read().head.len()
    }
}
