//! Reading text to annotate

use crate::error::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Read text from a file, or from stdin when the path is absent or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
