//! Hysteresis edge tracking
//!
//! Final stage of the pipeline: strong classifications are kept, weak
//! classifications are kept only when directly adjacent to a strong
//! one, background is dropped. The result is a binary edge map.
//!
//! This is a single, non-transitive pass: a weak pixel is promoted only
//! by a strong pixel among its immediate 8 neighbors in the ORIGINAL
//! classification, never by an already-promoted weak neighbor. A chain
//! of weak pixels reaching a strong pixel only through other weak
//! pixels stays suppressed. Classical Canny hysteresis instead
//! propagates through connected components; switching to that would be
//! a deliberate design change, not a fix.

use edgekit_core::Image;

/// Per-pixel classification consumed by the tracker.
///
/// Produced once from the double-threshold output by matching channel-0
/// values against the sentinel values; the tracker never re-derives
/// state from floats after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeClass {
    /// Neither sentinel value
    Background,
    /// Equals the weak sentinel value
    Weak,
    /// Equals the strong sentinel value
    Strong,
}

/// Offsets of the 8 neighbors examined when promoting a weak pixel.
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Classify every pixel of channel 0 against the sentinel values.
///
/// Returns one [`EdgeClass`] per pixel in row-major order. A sample
/// equal to `strong_val` is `Strong`, equal to `weak_val` is `Weak`,
/// anything else is `Background`. (When the two sentinels are equal,
/// `Strong` wins.)
pub fn classify(image: &Image, weak_val: f32, strong_val: f32) -> Vec<EdgeClass> {
    let (w, h, _) = image.dimensions();
    let mut classes = Vec::with_capacity((w as usize) * (h as usize));
    for y in 0..h {
        for x in 0..w {
            let value = image.at(x, y, 0);
            classes.push(if value == strong_val {
                EdgeClass::Strong
            } else if value == weak_val {
                EdgeClass::Weak
            } else {
                EdgeClass::Background
            });
        }
    }
    classes
}

/// Resolve weak classifications into a binary edge map.
///
/// Channel 0 of the input is classified once via [`classify`], then
/// resolved per pixel:
///
/// - `Strong` -> 1.0
/// - `Weak` -> 1.0 if any of its 8 neighbors (coordinates clamped at
///   the borders) is `Strong` in the input classification, else 0.0
/// - `Background` -> 0.0
///
/// Output samples are therefore exactly 0.0 or 1.0. The output keeps
/// the input's dimensions and channel count, with channels beyond 0
/// zero-filled.
///
/// # Examples
///
/// ```
/// use edgekit_core::Image;
/// use edgekit_edge::edge_track;
///
/// let mut im = Image::new(3, 3, 1);
/// im.set(1, 1, 0, 1.0);  // strong center
/// im.set(0, 1, 0, 0.25); // weak neighbor: promoted
/// let out = edge_track(&im, 0.25, 1.0);
/// assert_eq!(out.at(1, 1, 0), 1.0);
/// assert_eq!(out.at(0, 1, 0), 1.0);
/// assert_eq!(out.at(2, 2, 0), 0.0);
/// ```
pub fn edge_track(image: &Image, weak_val: f32, strong_val: f32) -> Image {
    let (w, h, c) = image.dimensions();
    let classes = classify(image, weak_val, strong_val);
    let class_at = |x: i32, y: i32| -> EdgeClass {
        let x = (x.max(0) as u32).min(w - 1);
        let y = (y.max(0) as u32).min(h - 1);
        classes[(y as usize) * (w as usize) + (x as usize)]
    };

    let mut out = Image::new(w, h, c);

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let value = match class_at(x, y) {
                EdgeClass::Strong => 1.0,
                EdgeClass::Weak => {
                    let promoted = NEIGHBORS
                        .iter()
                        .any(|&(dx, dy)| class_at(x + dx, y + dy) == EdgeClass::Strong);
                    if promoted { 1.0 } else { 0.0 }
                }
                EdgeClass::Background => 0.0,
            };
            out.set(x, y, 0, value);
        }
    }

    out
}
