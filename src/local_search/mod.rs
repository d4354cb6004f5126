//! Local search: neighborhoods, step functions, and the descent driver.

mod neighborhood;
mod search;
mod step;

pub use neighborhood::{Move, Moves, Neighborhood};
pub use search::{LocalSearch, WhenStagnant};
pub use step::Step;
