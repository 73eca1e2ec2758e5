//! Control nodes tick their children and compose the results.

mod fallback;
mod sequence;
