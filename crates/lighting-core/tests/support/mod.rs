//! Recording command stream shared by the integration tests.
#![allow(dead_code)]

use lighting_core::gpu::registers::{LIGHTING_LUT_DATA0, LIGHTING_LUT_INDEX};
use lighting_core::CommandStream;

/// One call made on the stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Write {
    Single(u16, u32),
    Incremental(u16, Vec<u32>),
    Bulk(u16, Vec<u32>),
}

impl Write {
    pub fn register(&self) -> u16 {
        match self {
            Write::Single(id, _) | Write::Incremental(id, _) | Write::Bulk(id, _) => *id,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct MockError;

impl core::fmt::Display for MockError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MockError")
    }
}

/// Records every write. With `fail_after = Some(n)` the stream accepts `n`
/// calls and rejects the rest.
#[derive(Debug, Default)]
pub struct MockStream {
    pub writes: Vec<Write>,
    pub fail_after: Option<usize>,
}

impl MockStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(n: usize) -> Self {
        Self {
            writes: Vec::new(),
            fail_after: Some(n),
        }
    }

    fn accept(&self) -> Result<(), MockError> {
        match self.fail_after {
            Some(n) if self.writes.len() >= n => Err(MockError),
            _ => Ok(()),
        }
    }

    /// Values written to LUT_INDEX, one per table upload.
    pub fn lut_selects(&self) -> Vec<u32> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                Write::Single(LIGHTING_LUT_INDEX, v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    /// All samples written to the LUT data port, in order.
    pub fn lut_data(&self) -> Vec<u32> {
        self.writes
            .iter()
            .filter_map(|w| match w {
                Write::Bulk(LIGHTING_LUT_DATA0, words) => Some(words.clone()),
                _ => None,
            })
            .flatten()
            .collect()
    }

    /// Writes that are not part of a table upload.
    pub fn register_writes(&self) -> Vec<Write> {
        self.writes
            .iter()
            .filter(|w| w.register() != LIGHTING_LUT_INDEX && w.register() != LIGHTING_LUT_DATA0)
            .cloned()
            .collect()
    }

    pub fn take(&mut self) -> Vec<Write> {
        std::mem::take(&mut self.writes)
    }
}

impl CommandStream for MockStream {
    type Error = MockError;

    fn write_register(&mut self, id: u16, value: u32) -> Result<(), Self::Error> {
        self.accept()?;
        self.writes.push(Write::Single(id, value));
        Ok(())
    }

    fn write_registers_incremental(&mut self, base: u16, words: &[u32]) -> Result<(), Self::Error> {
        self.accept()?;
        self.writes.push(Write::Incremental(base, words.to_vec()));
        Ok(())
    }

    fn write_registers_bulk(&mut self, id: u16, words: &[u32]) -> Result<(), Self::Error> {
        self.accept()?;
        self.writes.push(Write::Bulk(id, words.to_vec()));
        Ok(())
    }
}

/// Writes of one full table upload to `group`/`sub_id`.
pub const LUT_UPLOAD_WRITES: usize = 1 + 256 / 8;

pub fn lut_select(group: u32, sub_id: u32) -> u32 {
    (group << 11) | (sub_id << 8)
}
