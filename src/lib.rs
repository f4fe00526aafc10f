//! Art-gallery guard placement over exact rational coordinates.
//!
//! Given a floor plan (an outer polygon plus zero or more polygonal
//! holes), the crate computes vertex guards that together see the whole
//! interior:
//!
//! 1. holes are stitched onto the boundary with bridge edges,
//! 2. the stitched polygon is triangulated by ear clipping,
//! 3. triangles are greedily merged into maximal convex components,
//! 4. guards are chosen by greedy set cover, then dominated guards pruned.
//!
//! Minimum guard count is NP-hard; the pipeline guarantees coverage, not
//! optimality. All predicates run over [`num_rational::BigRational`], so
//! ties are decided exactly; floats only appear in reporting helpers such
//! as segment lengths.
//!
//! ```rust
//! use art_gallery::Gallery;
//!
//! # fn main() -> Result<(), art_gallery::Error> {
//! let gallery = Gallery::new(
//!   vec![(0, 0).into(), (4, 0).into(), (4, 4).into(), (0, 4).into()],
//!   vec![],
//! )?;
//! let guards = gallery.guards()?;
//! assert_eq!(guards.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
pub mod data;
mod error;
mod gallery;

pub use data::{
  ComponentId, ConvexComponent, Guard, GuardId, Orientation, Path, Point, PointLocation,
  Polygon, Ring, Scalar, Segment, Triangle, VisibilityMap,
};
pub use error::Error;
pub use gallery::Gallery;
