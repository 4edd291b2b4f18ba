use crate::ui::mvi::Reducer;
use crate::ui::search::intent::SearchIntent;
use crate::ui::search::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::Insert(ch) => state.text.push(ch),
            SearchIntent::DeleteChar => {
                state.text.pop();
            }
            SearchIntent::Clear => state.text.clear(),
            SearchIntent::Set(text) => state.text = text,
        }
        state
    }
}
