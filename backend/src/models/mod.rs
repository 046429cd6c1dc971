//! Immutable reference data model.

#[macro_use]
pub mod macros;

pub mod category;
pub mod contestant;
pub mod season;

pub use category::{
    Activity, BreakdownEntry, CategoryBreakdown, Format, Judgement, Setting, TaskBreakdown,
    TaskCategory,
};
pub use contestant::{Contestant, ContestantId, SeriesNumber};
pub use season::{Season, SeasonContestant, SeasonWinner};
