//! Terminal UI.
//!
//! Follows a unidirectional MVI flow: key events and fetch results become
//! intents, reducers in `feed` and `search` produce new state, `view` maps
//! state to display elements and `render` draws them.

pub mod app;
pub mod events;
pub mod feed;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod search;
pub mod terminal_guard;
pub mod theme;
pub mod view;
pub mod worker;

pub use runtime::run;
