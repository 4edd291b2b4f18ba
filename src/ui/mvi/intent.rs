/// Marker trait for intents: key presses, submitted searches, fetch results.
pub trait Intent: Send + 'static {}
