pub mod assertions;
pub mod fixtures;
pub mod prelude;
