mod error;
mod event;
mod handler;
mod options;
mod parser;
mod scanner;

#[cfg(feature = "map")]
mod map;


pub use {error::*, event::*, handler::*, parser::*, scanner::*};

pub(crate) use {options::*, scanner::COMMENT};

#[cfg(feature = "map")]
pub use map::*;
