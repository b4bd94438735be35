//! Geometry domain: 2D point math for drawn paths and limb curves.
//!
//! Everything here is a pure function over `Vec2` slices. Points live in the
//! torso-centred coronal plane used by the shape domain, but nothing in this
//! module depends on that convention.

mod path;


pub use path::{
    bounding_box, mirror_x, path_length, perpendicular_distance, resample_to_equal_segments,
    segment_distance, simplify_path, smooth,
};
