mod error;
mod types;
mod parser;
mod env;
mod visitor;
mod env_visitor;
mod map_visitor;
mod pairs_visitor;
mod wrapper;

pub use error::{Error, VisitError};
pub use types::{MalformedPolicy, ParseOptions};
pub use parser::split_pair;
pub use env::{env_map, env_map_from, env_map_with_options, environ};
pub use visitor::KeyValueVisitor;
pub use env_visitor::{visit_env, visit_env_with_options, EnvVisitor};
pub use map_visitor::MapVisitor;
pub use pairs_visitor::PairsVisitor;
pub use wrapper::{FilterPairs, MapPairs, PairMapper, Wrapper};
