//! Map-marker domain: styling and the marker/selection synchronization board.
mod board;
mod marker;

pub use board::MarkerBoard;
pub use marker::{MarkerEntry, MarkerId, MarkerStyle};
