//! Optional visual layers fed by the frame's hit-point cloud
//!
//! Each layer owns an `enabled` flag (toggled by whatever input layer sits
//! outside the core) and emits plain draw requests; none of them touch the
//! simulation. The trails layer expects its sink to represent a persistent
//! offscreen surface, the others redraw from scratch every frame.

pub mod heatmap;
pub mod mesh;
pub mod trails;

pub use heatmap::HeatmapLayer;
pub use mesh::MeshNetwork;
pub use trails::TrailsLayer;
