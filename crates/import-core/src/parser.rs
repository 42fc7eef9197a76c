//! Target file parsing.
//!
//! Target files are line-oriented text: one record per line, fields
//! separated by runs of whitespace. Blank lines and `#` comments are
//! skipped. Records are streamed, never bulk-loaded, so file size is
//! unbounded.
//!
//! ```text
//! # brows raised
//! 4302 0.0 0.013 -0.001
//! 4303 0.001 0.014 -0.001
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use targetkit_common::{TargetkitError, TargetkitResult};

/// One displacement record, parsed positionally from a line
/// `index dx dy dz`.
///
/// Field names follow file order; the coordinate-system remap to mesh
/// space happens in [`displacement`](crate::apply::displacement), not
/// here.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRecord {
    /// Vertex index into the base geometry. Records addressing vertices
    /// beyond the mesh's vertex count are valid and ignored on apply.
    pub index: usize,
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

/// Streaming reader producing [`TargetRecord`]s from a text source.
///
/// A malformed record ends the stream with a file-level error carrying
/// the path and 1-based line number; comment and blank lines are never
/// errors.
pub struct TargetReader<R> {
    path: PathBuf,
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl TargetReader<BufReader<File>> {
    /// Open a target file for streaming.
    pub fn open(path: &Path) -> TargetkitResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(path, BufReader::new(file)))
    }
}

impl<R: BufRead> TargetReader<R> {
    /// Wrap an arbitrary buffered reader; `path` is used in diagnostics.
    pub fn new(path: impl Into<PathBuf>, reader: R) -> Self {
        Self {
            path: path.into(),
            lines: reader.lines(),
            line_no: 0,
        }
    }

    fn parse_line(&self, line: &str) -> TargetkitResult<TargetRecord> {
        let mut fields = line.split_whitespace();

        let index_field = fields.next().unwrap_or_default();
        let index: usize = index_field.parse().map_err(|_| {
            TargetkitError::parse(
                &self.path,
                self.line_no,
                format!("invalid vertex index '{index_field}'"),
            )
        })?;

        let mut displacement = [0.0f64; 3];
        for slot in &mut displacement {
            let field = fields.next().ok_or_else(|| {
                TargetkitError::parse(
                    &self.path,
                    self.line_no,
                    format!("expected 4 fields, found {}", line.split_whitespace().count()),
                )
            })?;
            *slot = field.parse().map_err(|_| {
                TargetkitError::parse(
                    &self.path,
                    self.line_no,
                    format!("invalid displacement '{field}'"),
                )
            })?;
        }

        // Extra trailing fields are tolerated.
        Ok(TargetRecord {
            index,
            dx: displacement[0],
            dy: displacement[1],
            dz: displacement[2],
        })
    }
}

impl<R: BufRead> Iterator for TargetReader<R> {
    type Item = TargetkitResult<TargetRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            return Some(self.parse_line(trimmed));
        }
    }
}
