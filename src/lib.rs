#![doc = include_str!("../README.md")]

pub mod binary;
pub mod choice;
pub mod collection;
pub mod constant;
pub mod error;
pub mod generator;
pub mod lift;
pub mod map_collection;
pub mod prelude;
pub mod primitive;
pub mod property;
pub mod recursive;
pub mod runner;
pub mod sample;
pub mod seed;
pub mod size;
pub mod string;
pub mod term;
pub mod tree;
pub mod tuple;

pub use error::GeneratorError;
pub use generator::Generator;
pub use runner::{check_all, Checker, Checks, Config, Event, Outcome};
pub use sample::{pick, take};
pub use seed::Seed;
pub use size::Size;
pub use tree::LazyTree;
