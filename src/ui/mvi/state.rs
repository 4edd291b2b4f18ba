/// Marker trait for UI state values.
///
/// `Default` is the initial state; reducers take ownership and return a
/// replacement.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
