//! Index words and flat index buffers.
//!
//! Rendering engines differ in the size of their point-id type. An
//! [`IndexBuffer`] stores ids in either 4-byte or 8-byte words so a finished
//! buffer can be handed over without another conversion pass.

use serde::{Deserialize, Serialize};

use crate::error::{PolydataError, Result};

/// Size of one index word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexWidth {
    /// 4-byte (`u32`) ids.
    Narrow,
    /// 8-byte (`u64`) ids.
    Wide,
}

impl IndexWidth {
    /// Returns the width matching the platform's pointer size.
    #[must_use]
    pub fn native() -> Self {
        if std::mem::size_of::<usize>() <= 4 {
            IndexWidth::Narrow
        } else {
            IndexWidth::Wide
        }
    }

    /// Returns the number of bytes per index word.
    #[must_use]
    pub fn bytes(self) -> usize {
        match self {
            IndexWidth::Narrow => 4,
            IndexWidth::Wide => 8,
        }
    }

    /// Returns the largest id representable in this width.
    #[must_use]
    pub fn max_index(self) -> u64 {
        match self {
            IndexWidth::Narrow => u64::from(u32::MAX),
            IndexWidth::Wide => u64::MAX,
        }
    }
}

impl Default for IndexWidth {
    fn default() -> Self {
        Self::native()
    }
}

impl std::fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-byte", self.bytes())
    }
}

/// A flat buffer of index words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexBuffer {
    /// 4-byte words.
    Narrow(Vec<u32>),
    /// 8-byte words.
    Wide(Vec<u64>),
}

impl IndexBuffer {
    /// Creates an empty buffer of the given width.
    #[must_use]
    pub fn new(width: IndexWidth) -> Self {
        Self::with_capacity(width, 0)
    }

    /// Creates an empty buffer with room for `capacity` words.
    #[must_use]
    pub fn with_capacity(width: IndexWidth, capacity: usize) -> Self {
        match width {
            IndexWidth::Narrow => IndexBuffer::Narrow(Vec::with_capacity(capacity)),
            IndexWidth::Wide => IndexBuffer::Wide(Vec::with_capacity(capacity)),
        }
    }

    /// Returns the word width of this buffer.
    #[must_use]
    pub fn width(&self) -> IndexWidth {
        match self {
            IndexBuffer::Narrow(_) => IndexWidth::Narrow,
            IndexBuffer::Wide(_) => IndexWidth::Wide,
        }
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            IndexBuffer::Narrow(v) => v.len(),
            IndexBuffer::Wide(v) => v.len(),
        }
    }

    /// Returns true if the buffer holds no words.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the word at `pos`, if any.
    #[must_use]
    pub fn get(&self, pos: usize) -> Option<usize> {
        match self {
            IndexBuffer::Narrow(v) => v.get(pos).map(|&w| w as usize),
            IndexBuffer::Wide(v) => v.get(pos).map(|&w| w as usize),
        }
    }

    /// Checks that `value` fits in this buffer's words.
    pub fn check(&self, value: usize) -> Result<()> {
        if value as u64 > self.width().max_index() {
            return Err(PolydataError::IndexOverflow {
                index: value,
                width: self.width(),
            });
        }
        Ok(())
    }

    /// Appends one word.
    pub fn push(&mut self, value: usize) -> Result<()> {
        self.check(value)?;
        match self {
            IndexBuffer::Narrow(v) => v.push(value as u32),
            IndexBuffer::Wide(v) => v.push(value as u64),
        }
        Ok(())
    }

    /// Iterates over all words.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter_map(move |pos| self.get(pos))
    }

    /// Returns the raw bytes of the buffer in native byte order.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            IndexBuffer::Narrow(v) => bytemuck::cast_slice(v),
            IndexBuffer::Wide(v) => bytemuck::cast_slice(v),
        }
    }
}

impl From<Vec<u32>> for IndexBuffer {
    fn from(words: Vec<u32>) -> Self {
        IndexBuffer::Narrow(words)
    }
}

impl From<Vec<u64>> for IndexBuffer {
    fn from(words: Vec<u64>) -> Self {
        IndexBuffer::Wide(words)
    }
}
