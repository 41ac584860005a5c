//! Core trait definitions shared across the msaq crates.

/// A biological sequence (DNA, RNA, protein, aligned or not).
pub trait Sequence {
    /// The raw byte representation of the sequence.
    fn as_bytes(&self) -> &[u8];

    /// Length in residues/bases, gaps included.
    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    /// Whether the sequence is empty.
    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }
}

impl Sequence for [u8] {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for Vec<u8> {
    fn as_bytes(&self) -> &[u8] {
        self
    }
}

impl Sequence for str {
    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }
}

impl Sequence for String {
    fn as_bytes(&self) -> &[u8] {
        String::as_bytes(self)
    }
}

impl<T: Sequence + ?Sized> Sequence for &T {
    fn as_bytes(&self) -> &[u8] {
        (**self).as_bytes()
    }
}

/// A type that carries a numeric score.
pub trait Scored {
    /// The score value.
    fn score(&self) -> f64;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}
