pub mod broadcaster;
pub mod state;

pub use broadcaster::{FilterStateBroadcaster, Subscription};
pub use state::{FilterGroup, FilterStateUpdate, GlobalFilterState};
