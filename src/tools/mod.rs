mod descriptor_scanner;
mod frame_sequence;
mod input_resolver;
mod path_validator;
mod raster;

pub use descriptor_scanner::scan_descriptors;
pub use frame_sequence::{FileFrameSource, FrameSource, count_frames, frame_path, with_suffix};
pub use input_resolver::{InputKind, resolve_input};
pub use path_validator::{ensure_parent_exists, validate_directory_exists};
pub use raster::{Raster, load_raster, save_raster};
