use super::intent::Intent;
use super::state::UiState;

/// Pure state transition: (State, Intent) -> State.
///
/// Reducers never perform I/O. Fetches are issued by the caller and their
/// results come back as intents.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
