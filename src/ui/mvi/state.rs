/// Marker trait for view state.
///
/// State is a self-contained value the view can render without consulting
/// anything else. `Default` is the state of a freshly created screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
