mod arena;
mod level_generator;

pub mod comparator;
pub mod error;
pub mod options;
pub mod skip_list;

pub mod prelude {
    #![allow(unused)]

    pub use crate::{
        comparator::{Comparator, DefaultComparator, ReverseComparator},
        error::{Error, Result},
        options::SkipListOptions,
        skip_list::SkipList,
    };
}
