use serde::{Deserialize, Serialize};

use crate::error::{PipelineError, Result};

/// Row-oriented table of string cells.
///
/// The empty string represents a missing value. Every stage of the pipeline
/// consumes a `Frame` and produces a new one; nothing mutates a frame that
/// another stage still holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Frame {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Build a frame from literal headers and rows. Intended for tests and
    /// small fixtures; rows are padded or truncated to the header width.
    pub fn from_rows<H, R, C>(headers: H, rows: R) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let mut frame = Self::new(headers);
        for row in rows {
            frame.push_row(row.into_iter().map(Into::into).collect());
        }
        frame
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<String>) {
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Column index or a schema error naming the missing column.
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| PipelineError::schema(format!("required column {name:?} is absent")))
    }

    /// Cell value by row index and column name, if both exist.
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|cells| cells[idx].as_str())
    }

    /// All values of one column, top to bottom.
    pub fn column_values(&self, name: &str) -> Result<Vec<&str>> {
        let idx = self.require_column(name)?;
        Ok(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// Project to the named columns, in the given order.
    pub fn select(&self, names: &[&str]) -> Result<Frame> {
        let indices: Vec<usize> = names
            .iter()
            .map(|name| self.require_column(name))
            .collect::<Result<_>>()?;
        let rows = self
            .rows
            .iter()
            .map(|row| indices.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok(Frame {
            headers: names.iter().map(|name| (*name).to_string()).collect(),
            rows,
        })
    }

    /// Drop the named columns; every name must exist.
    pub fn without_columns(&self, names: &[&str]) -> Result<Frame> {
        for name in names {
            self.require_column(name)?;
        }
        let kept: Vec<usize> = (0..self.headers.len())
            .filter(|&idx| !names.contains(&self.headers[idx].as_str()))
            .collect();
        let headers = kept.iter().map(|&idx| self.headers[idx].clone()).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| kept.iter().map(|&idx| row[idx].clone()).collect())
            .collect();
        Ok(Frame { headers, rows })
    }

    /// Rename a column in place.
    pub fn rename_column(&mut self, from: &str, to: &str) -> Result<()> {
        let idx = self.require_column(from)?;
        self.headers[idx] = to.to_string();
        Ok(())
    }

    /// Append a column; the value count must match the row count.
    pub fn with_column(mut self, name: &str, values: Vec<String>) -> Result<Frame> {
        if values.len() != self.rows.len() {
            return Err(PipelineError::schema(format!(
                "column {name:?} has {} values for {} rows",
                values.len(),
                self.rows.len()
            )));
        }
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(self)
    }

    /// Keep the rows for which the predicate holds.
    pub fn filter_rows<P>(&self, mut predicate: P) -> Frame
    where
        P: FnMut(&[String]) -> bool,
    {
        Frame {
            headers: self.headers.clone(),
            rows: self
                .rows
                .iter()
                .filter(|row| predicate(row))
                .cloned()
                .collect(),
        }
    }

    /// Stack another frame below this one. Headers must match exactly.
    pub fn vstack(&self, other: &Frame) -> Result<Frame> {
        if self.headers != other.headers {
            return Err(PipelineError::schema(format!(
                "cannot stack frames with differing headers: {:?} vs {:?}",
                self.headers, other.headers
            )));
        }
        let mut rows = self.rows.clone();
        rows.extend(other.rows.iter().cloned());
        Ok(Frame {
            headers: self.headers.clone(),
            rows,
        })
    }
}

/// Per-column statistics used for numeric projection and null-rate
/// diagnostics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnHint {
    /// True when every non-missing value parses as f64 and at least one
    /// value is present.
    pub is_numeric: bool,
    /// Distinct non-missing values over non-missing count.
    pub unique_ratio: f64,
    /// Missing values over row count.
    pub null_ratio: f64,
}
