pub mod clipper;
pub mod clipper_base;
pub mod clipper_offset;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod intersect_node;
pub mod join;
pub mod local_minima;
pub mod maxima;
pub mod out_pt;
pub mod out_rec;
pub mod output;
pub mod poly_tree;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use clipper::Clipper;
pub use clipper_offset::ClipperOffset;
pub use config::ClipperConfig;
pub use enums::*;
pub use error::{ClipperError, ClipperResult};
pub use poly_tree::{PolyNode, PolyTree};
