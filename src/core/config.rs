/// Tolerance used by the approximate comparisons (`almost_eq`, `is_almost_parallel`, ...).
/// The exact tests never consult it.
pub const EPSILON: f64 = 1e-9;
