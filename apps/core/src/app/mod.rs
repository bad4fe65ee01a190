//! # App Module
//!
//! Explicit application state plus the typed event dispatcher that
//! replaces the original pages' ad-hoc DOM callbacks. All shared state is
//! owned by a single dispatcher task; user-facing flows talk to it through
//! a cloneable handle.

pub mod dispatcher;
pub mod events;
pub mod state;

pub use dispatcher::DispatcherHandle;
pub use events::{DispatchError, UiEvent};
pub use state::{AppState, ChartSeries, EmotionTally};
