use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;

use crate::parser::ElementError;

pub mod config;
mod assets;
mod binary;
mod info;

pub use assets::{assets, latest};
pub use binary::{binary_url_latest, binary_url_release};
pub use info::{available, release_names, release_versions};

/// Where command results and warnings are written.
pub struct Output<W: Write, E: Write> {
    pub out: W,
    pub err: E,
    pub json: bool,
}

impl Output<std::io::Stdout, std::io::Stderr> {
    pub fn stdio(json: bool) -> Self {
        Self {
            out: std::io::stdout(),
            err: std::io::stderr(),
            json,
        }
    }
}

impl<W: Write, E: Write> Output<W, E> {
    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)
            .context("Failed to write JSON output")?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Reports dropped elements without failing the command.
    fn warn_dropped(&mut self, errors: &[ElementError]) -> Result<()> {
        for error in errors {
            writeln!(self.err, "warning: {}: {}", error.context, error.message)?;
        }
        Ok(())
    }
}
