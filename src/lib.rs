//! Ground-truth format converters for object tracking datasets.
//!
//! This library converts per-frame ground truth in a modified YOLO format
//! (`class_id object_id x y w h`, relative coordinates, persistent object
//! identifiers) into the MOT challenge format (one `gt.txt`, absolute
//! coordinates, contiguous renumbered identifiers) or the PASCAL VOC format
//! (one file per frame, absolute corner coordinates, no identifiers).

pub mod config;
pub mod conversion;
pub mod error;
pub mod io;
pub mod mot_dataset;
pub mod remap;
pub mod types;
pub mod utils;
pub mod voc_dataset;

// Re-export commonly used types and functions
pub use config::{Args, ClassFilter};
pub use error::{ConvertError, Result};
pub use io::{enumerate_frame_files, frame_index, read_detection_file};
pub use mot_dataset::process_mot_dataset;
pub use remap::IdentityRemapper;
pub use types::{ConversionStats, Detection};
pub use voc_dataset::process_voc_dataset;
