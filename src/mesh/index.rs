//! Handle types for mesh vertices.
//!
//! Vertex handles are type-safe wrappers generic over the underlying integer
//! type, so a small mesh can use `u16` handles while a massive one uses `u64`.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;

/// Trait for integer types that can back a vertex handle.
///
/// Implemented for `u16`, `u32` and `u64`.
pub trait MeshIndex:
    Copy + Clone + Eq + PartialEq + Ord + PartialOrd + Hash + Debug + Display + Send + Sync + 'static
{
    /// The smallest representable index.
    const ZERO: Self;

    /// The largest representable index.
    const MAX: Self;

    /// Convert from usize to this index type.
    ///
    /// # Panics
    /// Panics if the value is too large for this index type.
    fn from_usize(v: usize) -> Self;

    /// Convert to usize.
    fn to_usize(self) -> usize;

    /// Checked conversion from usize, `None` if the value does not fit.
    fn try_from_usize(v: usize) -> Option<Self>;
}

macro_rules! impl_mesh_index {
    ($ty:ty) => {
        impl MeshIndex for $ty {
            const ZERO: Self = 0;
            const MAX: Self = <$ty>::MAX;

            #[inline]
            fn from_usize(v: usize) -> Self {
                match <$ty>::try_from(v) {
                    Ok(v) => v,
                    Err(_) => panic!("index {} too large for {}", v, stringify!($ty)),
                }
            }

            #[inline]
            fn to_usize(self) -> usize {
                self as usize
            }

            #[inline]
            fn try_from_usize(v: usize) -> Option<Self> {
                <$ty>::try_from(v).ok()
            }
        }
    };
}

impl_mesh_index!(u16);
impl_mesh_index!(u32);
impl_mesh_index!(u64);

/// A type-safe vertex handle.
///
/// Handles are opaque: they identify a point stored in a
/// [`VertexIndex`](super::VertexIndex) and order like the integers they wrap.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId<I: MeshIndex = u32>(I);

impl<I: MeshIndex> VertexId<I> {
    /// The smallest possible handle.
    pub const MIN: Self = Self(I::ZERO);

    /// The largest possible handle.
    pub const MAX: Self = Self(I::MAX);

    /// Create a new handle from a raw value.
    ///
    /// # Panics
    /// Panics if `index` does not fit the index type. Use
    /// [`try_new`](Self::try_new) for untrusted input.
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(I::from_usize(index))
    }

    /// Create a handle, or `None` if `index` does not fit the index type.
    #[inline]
    pub fn try_new(index: usize) -> Option<Self> {
        I::try_from_usize(index).map(Self)
    }

    /// Get the raw index value.
    #[inline]
    pub fn index(self) -> usize {
        self.0.to_usize()
    }

    /// Get the raw value of the underlying type.
    #[inline]
    pub fn raw(self) -> I {
        self.0
    }
}

impl<I: MeshIndex> Debug for VertexId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V({})", self.0)
    }
}

impl<I: MeshIndex> Display for VertexId<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Panics like [`VertexId::new`] if the value does not fit.
impl<I: MeshIndex> From<usize> for VertexId<I> {
    fn from(v: usize) -> Self {
        Self::new(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v: VertexId = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert_eq!(v.raw(), 42u32);
    }

    #[test]
    fn test_ordering_follows_raw_value() {
        let a: VertexId = VertexId::new(3);
        let b: VertexId = VertexId::new(10);
        assert!(a < b);
        assert!(VertexId::<u32>::MIN <= a);
        assert!(b <= VertexId::<u32>::MAX);
    }

    #[test]
    fn test_small_indices() {
        let v: VertexId<u16> = VertexId::new(1000);
        assert_eq!(v.index(), 1000);
        assert!(VertexId::<u16>::try_new(70_000).is_none());
        assert_eq!(VertexId::<u16>::try_new(65_535), Some(VertexId::MAX));
    }

    #[test]
    #[should_panic(expected = "too large for u16")]
    fn test_new_rejects_out_of_range() {
        let _: VertexId<u16> = VertexId::new(70_000);
    }

    #[test]
    fn test_format() {
        let v: VertexId = VertexId::new(42);
        assert_eq!(format!("{:?}", v), "V(42)");
        assert_eq!(format!("{}", v), "42");
    }
}
