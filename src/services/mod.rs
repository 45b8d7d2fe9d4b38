pub mod dispatcher;
pub mod issue_source;
pub mod partitioner;
pub mod roulette;

pub use dispatcher::{ActionDispatcher, DispatchReport, WriteFailure};
pub use issue_source::{build_search_query, IssueSource};
pub use partitioner::{partition, partition_randomly};
pub use roulette::{Roulette, RunOutcome, RunReport};
