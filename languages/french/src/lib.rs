pub mod resolver;

pub use resolver::{FRENCH, FrenchResolver};
