// Utility Module
// File input/output for the command-line front end

pub mod file_ops;

pub use file_ops::{read_input, read_input_text, write_output, FileError, FileResult};
