//! Null indicator for the rows of a column vector.

/// Null indicator for the rows of a column vector.
///
/// Three storage methods are used for tracking null/non-null rows:
/// - `Trivial`: the vector declares "no nulls" for the batch
/// - `Nulls`: every row is null
/// - `Bytes`: mixed rows, one byte per row (`1` - present, `0` - null)
#[derive(Debug, Clone)]
pub enum Presence {
    /// All rows are valid (present).
    Trivial(usize),

    /// All rows are null.
    Nulls(usize),

    /// Presence encoded as byte array, where a byte at position `i` indicates whether
    /// the row at position `i` is valid or not.
    Bytes(Vec<u8>),
}

impl Presence {
    /// Returns the number of rows tracked by this presence, null or not.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Trivial(len) => *len,
            Self::Nulls(len) => *len,
            Self::Bytes(presence) => presence.len(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` when the vector carries the "no nulls" flag.
    #[inline]
    pub fn is_trivial_non_null(&self) -> bool {
        matches!(self, Self::Trivial(_))
    }

    /// Returns `true` if the row at `index` is null.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds of a `Bytes` presence.
    #[inline]
    pub fn is_null(&self, index: usize) -> bool {
        match self {
            Self::Trivial(_) => false,
            Self::Nulls(_) => true,
            Self::Bytes(presence) => presence[index] == 0,
        }
    }

    pub fn push_null(&mut self) {
        self.extend_with_nulls(1);
    }

    pub fn push_non_null(&mut self) {
        self.extend_with_non_nulls(1);
    }

    /// Extends this presence with `count` null rows.
    ///
    /// A `Trivial` presence is converted to `Bytes`.
    pub fn extend_with_nulls(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.is_empty() {
            *self = Self::Nulls(count);
            return;
        }
        match self {
            Self::Nulls(len) => *len += count,
            _ => {
                let presence = self.make_bytes();
                presence.resize(presence.len() + count, 0);
            }
        }
    }

    /// Extends this presence with `count` non-null rows.
    ///
    /// A `Nulls` presence is converted to `Bytes`.
    pub fn extend_with_non_nulls(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.is_empty() {
            *self = Self::Trivial(count);
            return;
        }
        match self {
            Self::Trivial(len) => *len += count,
            _ => {
                let presence = self.make_bytes();
                presence.resize(presence.len() + count, 1);
            }
        }
    }

    /// Converts this presence to the `Bytes` representation in place and returns
    /// the byte vector.
    fn make_bytes(&mut self) -> &mut Vec<u8> {
        if let Self::Trivial(len) | Self::Nulls(len) = *self {
            let fill = self.is_trivial_non_null() as u8;
            *self = Self::Bytes(vec![fill; len]);
        }
        match self {
            Self::Bytes(presence) => presence,
            _ => unreachable!("presence converted to bytes"),
        }
    }
}

impl PartialEq for Presence {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Trivial(left), Self::Trivial(right)) => left == right,
            (Self::Nulls(left), Self::Nulls(right)) => left == right,
            (Self::Bytes(left), Self::Bytes(right)) => left == right,
            _ => false,
        }
    }
}

impl Default for Presence {
    fn default() -> Self {
        Presence::Trivial(0)
    }
}

/// A builder for the [`Presence`] container.
#[derive(Default)]
pub struct PresenceBuilder {
    presence: Presence,
}

impl PresenceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_null(&mut self) {
        self.presence.push_null();
    }

    pub fn add_n_nulls(&mut self, n: usize) {
        self.presence.extend_with_nulls(n);
    }

    pub fn add_non_null(&mut self) {
        self.presence.push_non_null();
    }

    pub fn add_n_non_nulls(&mut self, n: usize) {
        self.presence.extend_with_non_nulls(n);
    }

    pub fn build(self) -> Presence {
        self.presence
    }
}
