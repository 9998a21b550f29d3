pub mod assembler;
pub mod clock;
pub mod discover;
pub mod enrichment;
pub mod genres;
pub mod planner;
pub mod providers;
pub mod random;
pub mod recommendations;
pub mod selector;

pub use clock::{Clock, FixedClock, SystemClock};
pub use providers::{TmdbClient, UpstreamClient};
pub use random::{RandomSource, SeededRandom, ThreadRandom};
pub use recommendations::RecommendationService;
