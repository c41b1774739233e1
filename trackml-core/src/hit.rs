//! Spacepoint type and hits file layout.

#[cfg(feature = "serde")]
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// Column holding the x coordinate in a hits file.
pub const X_COLUMN: usize = 4;
/// Column holding the y coordinate in a hits file.
pub const Y_COLUMN: usize = 5;
/// Column holding the z coordinate in a hits file.
pub const Z_COLUMN: usize = 6;

// `Spacepoint::from_row` reads the coordinates as one contiguous run.
const _: () = assert!(Y_COLUMN == X_COLUMN + 1 && Z_COLUMN == Y_COLUMN + 1);

/// Token identifying the header row of a hits file.
pub const HEADER_TOKEN: &str = "hit_id";

/// Returns true if any field of the row contains [`HEADER_TOKEN`].
pub fn is_header_row<'a, I>(fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    fields.into_iter().any(|field| field.contains(HEADER_TOKEN))
}

/// A hit position in detector space.
///
/// The coordinate type is generic so rows can be carried as the raw text
/// tokens they were read from and only later turned into numbers.
/// Serializes as a three-element array `[x, y, z]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spacepoint<C> {
    pub x: C,
    pub y: C,
    pub z: C,
}

impl<C> Spacepoint<C> {
    /// Creates a new spacepoint.
    #[inline]
    pub fn new(x: C, y: C, z: C) -> Self {
        Self { x, y, z }
    }

    /// Converts every coordinate with `f`, stopping at the first failure.
    ///
    /// # Errors
    /// Returns the first error produced by `f`, in x, y, z order.
    pub fn try_map<D, E, F>(self, mut f: F) -> std::result::Result<Spacepoint<D>, E>
    where
        F: FnMut(C) -> std::result::Result<D, E>,
    {
        Ok(Spacepoint {
            x: f(self.x)?,
            y: f(self.y)?,
            z: f(self.z)?,
        })
    }

    /// Returns the coordinates as `[x, y, z]`.
    #[inline]
    pub fn into_array(self) -> [C; 3] {
        [self.x, self.y, self.z]
    }
}

impl<'a> Spacepoint<&'a str> {
    /// Picks the coordinate tokens out of a hits row.
    ///
    /// Tokens are trimmed of surrounding whitespace. Returns `None` if the
    /// row is too short to hold a z coordinate.
    pub fn from_row<I>(fields: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut coords = fields.into_iter().skip(X_COLUMN).map(str::trim);
        let x = coords.next()?;
        let y = coords.next()?;
        let z = coords.next()?;
        Some(Self::new(x, y, z))
    }
}

#[cfg(feature = "serde")]
impl<C: Serialize> Serialize for Spacepoint<C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.x)?;
        tuple.serialize_element(&self.y)?;
        tuple.serialize_element(&self.z)?;
        tuple.end()
    }
}
