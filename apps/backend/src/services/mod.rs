//! Game core services. Each takes the persistence collaborator per call and
//! keeps no state between calls.

pub mod chain_linker;
pub mod games;
pub mod threads;
pub mod topology;
pub mod turns;

pub use chain_linker::{ChainLinker, RecordAnswer};
pub use games::{GameOverview, GameService};
pub use threads::{PlayerThread, ThreadReconstructor, ThreadWalk};
pub use topology::RingTopology;
pub use turns::TurnStateResolver;
