#![no_std]

/// Append-only sink for GPU register writes.
///
/// Writes are consumed by the GPU in submission order, so no flush or
/// barrier is needed between a synchronization pass and the draw that
/// depends on it. Implementations decide how writes are encoded (a command
/// buffer, a register trace, a live transport).
pub trait CommandStream {
    type Error: core::fmt::Debug;

    /// Append one 32-bit write to register `id`.
    fn write_register(&mut self, id: u16, value: u32) -> Result<(), Self::Error>;

    /// Append `words.len()` writes starting at register `base`, advancing
    /// the target register after every word.
    fn write_registers_incremental(&mut self, base: u16, words: &[u32]) -> Result<(), Self::Error>;

    /// Append every word of `words` to the same register `id` (array port
    /// write, the target does not advance).
    fn write_registers_bulk(&mut self, id: u16, words: &[u32]) -> Result<(), Self::Error>;
}

impl<S: CommandStream + ?Sized> CommandStream for &mut S {
    type Error = S::Error;

    fn write_register(&mut self, id: u16, value: u32) -> Result<(), Self::Error> {
        (**self).write_register(id, value)
    }

    fn write_registers_incremental(&mut self, base: u16, words: &[u32]) -> Result<(), Self::Error> {
        (**self).write_registers_incremental(base, words)
    }

    fn write_registers_bulk(&mut self, id: u16, words: &[u32]) -> Result<(), Self::Error> {
        (**self).write_registers_bulk(id, words)
    }
}
