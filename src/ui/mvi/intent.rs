/// Marker trait for intents: user actions (key presses, clicks) and system
/// events (countdown ticks, completion) fed into a reducer.
pub trait Intent: Send + 'static {}
