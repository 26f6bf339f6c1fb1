//! File and stdin I/O for raw notes blobs

mod fs;

pub use fs::{BlobError, BlobSource, read_blob, read_blob_from, write_blob};
