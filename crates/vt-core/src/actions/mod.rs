//! Social action records and the client-side filter engine.

mod criteria;
mod filter;
mod model;
mod options;

pub use criteria::{FilterCriteria, FilterField};
pub use filter::{apply_filter, matches};
pub use model::{ActionLocation, ActionRecord};
pub use options::{cities_in_state, FilterOptions};
