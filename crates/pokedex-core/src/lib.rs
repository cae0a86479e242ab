pub mod catalog;
pub mod error;
pub mod index;
pub mod name_map;
pub mod normalize;
pub mod storage;
