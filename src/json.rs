// SPDX-License-Identifier: MIT
//! JSON interchange for decoded movies
//!
//! Binary SWF encoding lives outside this crate. Decoders and encoders hand
//! movies over as JSON, which is also the format used by the CLI.

use std::io::{Read, Write};

use crate::movie::Movie;

/// Errors that can occur while reading or writing a movie document
#[derive(Debug, thiserror::Error)]
pub enum DocumentIoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid movie document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a movie from a JSON document
pub fn read_movie<R: Read>(reader: R) -> Result<Movie, DocumentIoError> {
    Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
}

/// Write a movie as a JSON document
pub fn write_movie<W: Write>(mut writer: W, movie: &Movie, pretty: bool) -> Result<(), DocumentIoError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, movie)?;
    } else {
        serde_json::to_writer(&mut writer, movie)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn from_str(json: &str) -> Result<Movie, DocumentIoError> {
    Ok(serde_json::from_str(json)?)
}

pub fn to_string_pretty(movie: &Movie) -> Result<String, DocumentIoError> {
    Ok(serde_json::to_string_pretty(movie)?)
}
