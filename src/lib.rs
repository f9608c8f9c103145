//! A small 2D vector arithmetic library.
//!
//! The whole crate revolves around [`Vector2`](util::linalg::Vector2): a pair of `f64`
//! components with in-place (chainable) mutators, pure derived values, and free functions
//! for the binary operations. Most users only need the prelude:
//!
//! ```
//! use vector2::core::prelude::*;
//!
//! let mut v = Vector2::new(1.0, 2.0);
//! v.add(Vector2::one()).times(2.0);
//! assert_eq!(v, Vector2::new(4.0, 6.0));
//! assert_eq!(linalg::distance(Vector2::new(5.0, 5.0), Vector2::new(2.0, 1.0)), 5.0);
//! ```

pub mod core;
pub mod util;
