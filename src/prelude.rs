//! The commonly-imported surface: `use seedling::prelude::*;` pulls in the
//! `Generator` trait and the primitive/combinator constructors most
//! property bodies need, without requiring a long list of individual
//! `use` statements.

pub use crate::binary::{binary, bitstring};
pub use crate::choice::{frequency, member_of, one_of, weighted};
pub use crate::collection::{list_of, uniq_list_of};
pub use crate::constant::constant;
pub use crate::generator::Generator;
pub use crate::lift::IntoGenerator;
pub use crate::map_collection::{fixed_map, keyword_of, map_of, optional_map};
pub use crate::primitive::{
    boolean, byte, float, float_in_range, integer, integer_in_range, positive_integer,
};
pub use crate::property::Verify;
pub use crate::recursive::tree;
pub use crate::runner::{check_all, Config, Outcome};
pub use crate::sample::{pick, take};
pub use crate::seed::Seed;
pub use crate::size::Size;
pub use crate::string::{atom, string};
pub use crate::term::term;
pub use crate::tuple::{tuple2, tuple3, tuple4};
