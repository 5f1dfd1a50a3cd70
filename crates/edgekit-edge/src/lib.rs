//! edgekit-edge - Canny-style edge detection pipeline
//!
//! The four pipeline stages, each a pure function from image(s) to a
//! freshly allocated image:
//!
//! 1. [`gradient`] - Sobel magnitude/direction, magnitude normalized to
//!    [0, 1]
//! 2. [`non_maximum_suppression`] - directional thinning of the
//!    magnitude field
//! 3. [`double_threshold`] - ternary strong/weak/background
//!    classification
//! 4. [`edge_track`] - non-transitive hysteresis resolution to a binary
//!    edge map
//!
//! [`detect_edges`] chains all four behind a Gaussian smoothing front
//! step with a single parameter struct.

mod detect;
mod error;
pub mod gradient;
pub mod hysteresis;
pub mod nms;
pub mod threshold;

pub use detect::{EdgeParams, detect_edges};
pub use error::{EdgeError, EdgeResult};
pub use gradient::{GradientField, gradient, sobel_response};
pub use hysteresis::{EdgeClass, classify, edge_track};
pub use nms::non_maximum_suppression;
pub use threshold::double_threshold;
