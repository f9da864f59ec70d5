//! Fixed-capacity GPU command list.
//!
//! Packets use the hardware command-buffer layout:
//!
//! ```text
//! word 0      first parameter
//! word 1      header: [15:0] register id, [19:16] byte mask,
//!             [27:20] parameter count - 1, [31] incremental
//! word 2..    remaining parameters
//! (padding)   one zero word if the packet length is odd
//! ```
//!
//! Packets are kept 8-byte aligned so the list can be submitted verbatim.

use core::fmt;

use lighting_hal::CommandStream;

/// Largest parameter count one packet header can describe.
pub const MAX_PACKET_PARAMS: usize = 256;

const HEADER_MASK_ALL: u32 = 0xF << 16;
const HEADER_INCREMENTAL: u32 = 1 << 31;

/// Errors produced while appending to a [`CommandList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandListError {
    /// The packet does not fit in the remaining capacity. Nothing was written.
    Full { needed: usize, available: usize },
}

impl fmt::Display for CommandListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandListError::Full { needed, available } => write!(
                f,
                "command list full: packet needs {needed} words, {available} available"
            ),
        }
    }
}

impl core::error::Error for CommandListError {}

/// Encoded command buffer holding at most `N` 32-bit words.
#[derive(Clone)]
pub struct CommandList<const N: usize> {
    words: heapless::Vec<u32, N>,
}

impl<const N: usize> CommandList<N> {
    pub const fn new() -> Self {
        Self {
            words: heapless::Vec::new(),
        }
    }

    /// Encoded words, ready for submission.
    pub fn as_words(&self) -> &[u32] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words still available.
    pub fn remaining(&self) -> usize {
        N - self.words.len()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Decode the list back into packets.
    pub fn packets(&self) -> Packets<'_> {
        Packets {
            words: &self.words,
        }
    }

    /// Append one packet. `params` must hold 1..=256 words.
    fn push_packet(&mut self, header: u32, params: &[u32]) -> Result<(), CommandListError> {
        debug_assert!(!params.is_empty() && params.len() <= MAX_PACKET_PARAMS);

        let len = params.len() + 1;
        let padded = len + (len & 1);
        if padded > self.remaining() {
            return Err(CommandListError::Full {
                needed: padded,
                available: self.remaining(),
            });
        }

        let full = CommandListError::Full {
            needed: padded,
            available: self.remaining(),
        };
        let header = header | (((params.len() - 1) as u32) << 20);
        self.words.push(params[0]).map_err(|_| full)?;
        self.words.push(header).map_err(|_| full)?;
        self.words.extend_from_slice(&params[1..]).map_err(|_| full)?;
        if len & 1 == 1 {
            self.words.push(0).map_err(|_| full)?;
        }
        Ok(())
    }

    /// Append `params` to `reg`, splitting into as many packets as the header
    /// count field requires. Incremental packets advance the base register.
    fn push_writes(
        &mut self,
        reg: u16,
        params: &[u32],
        incremental: bool,
    ) -> Result<(), CommandListError> {
        let needed: usize = params
            .chunks(MAX_PACKET_PARAMS)
            .map(|chunk| {
                let len = chunk.len() + 1;
                len + (len & 1)
            })
            .sum();
        if needed > self.remaining() {
            return Err(CommandListError::Full {
                needed,
                available: self.remaining(),
            });
        }

        let mut reg = reg;
        for chunk in params.chunks(MAX_PACKET_PARAMS) {
            let mut header = HEADER_MASK_ALL | u32::from(reg);
            if incremental {
                header |= HEADER_INCREMENTAL;
            }
            self.push_packet(header, chunk)?;
            if incremental {
                reg = reg.wrapping_add(chunk.len() as u16);
            }
        }
        Ok(())
    }
}

impl<const N: usize> Default for CommandList<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for CommandList<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.packets()).finish()
    }
}

impl<const N: usize> CommandStream for CommandList<N> {
    type Error = CommandListError;

    fn write_register(&mut self, id: u16, value: u32) -> Result<(), Self::Error> {
        self.push_writes(id, &[value], false)
    }

    fn write_registers_incremental(&mut self, base: u16, words: &[u32]) -> Result<(), Self::Error> {
        self.push_writes(base, words, true)
    }

    fn write_registers_bulk(&mut self, id: u16, words: &[u32]) -> Result<(), Self::Error> {
        self.push_writes(id, words, false)
    }
}

/// One decoded command packet.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Packet<'a> {
    pub register: u16,
    /// Byte-enable mask, 0xF for full-word writes.
    pub mask: u8,
    pub incremental: bool,
    pub params: Params<'a>,
}

/// Parameters of a packet; the first word precedes the header in memory.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Params<'a> {
    first: u32,
    rest: &'a [u32],
}

impl<'a> Params<'a> {
    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> Option<u32> {
        match index {
            0 => Some(self.first),
            i => self.rest.get(i - 1).copied(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + 'a {
        core::iter::once(self.first).chain(self.rest.iter().copied())
    }
}

struct Hex(u32);

impl fmt::Debug for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl fmt::Debug for Params<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter().map(Hex)).finish()
    }
}

impl fmt::Debug for Packet<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Packet")
            .field("register", &format_args!("{:#06x}", self.register))
            .field("mask", &self.mask)
            .field("incremental", &self.incremental)
            .field("params", &self.params)
            .finish()
    }
}

/// Iterator over the packets of a [`CommandList`]. Stops at the first
/// truncated packet.
#[derive(Clone)]
pub struct Packets<'a> {
    words: &'a [u32],
}

impl<'a> Iterator for Packets<'a> {
    type Item = Packet<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (&first, rest) = self.words.split_first()?;
        let (&header, rest) = rest.split_first()?;
        let count = ((header >> 20) & 0xFF) as usize + 1;
        if rest.len() < count - 1 {
            self.words = &[];
            return None;
        }
        let (params, rest) = rest.split_at(count - 1);
        let skip = (count + 1) & 1;
        self.words = rest.get(skip..).unwrap_or(&[]);
        Some(Packet {
            register: (header & 0xFFFF) as u16,
            mask: ((header >> 16) & 0xF) as u8,
            incremental: header & HEADER_INCREMENTAL != 0,
            params: Params {
                first,
                rest: params,
            },
        })
    }
}
