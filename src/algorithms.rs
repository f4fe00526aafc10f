pub mod convex;
pub mod earclip;
pub mod guards;
pub mod stitch;

#[doc(inline)]
pub use convex::merge_components;
#[doc(inline)]
pub use earclip::triangulate;
#[doc(inline)]
pub use guards::select_guards;
#[doc(inline)]
pub use stitch::stitch;
