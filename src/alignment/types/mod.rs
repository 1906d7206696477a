mod output;
mod state;
mod std_traits;

pub use output::*;
pub use state::*;
