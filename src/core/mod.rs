pub mod engine;
pub mod greedy;
pub mod resolver;
pub mod summary;

pub use engine::{ChangeEngine, ChangeRequest};
pub use greedy::compute_change;
pub use resolver::{resolve_denominations, DenominationRegistry};
pub use summary::summarize;
