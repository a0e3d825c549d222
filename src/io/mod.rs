//! I/O operations module
//!
//! Contains the test file naming convention, the buffered copy and read
//! loops, and input file generation.

pub mod disk;
pub mod fixture;
pub mod paths;

pub use disk::{copy_stream, drain_stream, OutputFile};
pub use fixture::{create_input_file, ensure_input_file};
pub use paths::{FileRole, TestFileLayout};
