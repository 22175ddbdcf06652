//! Bidirectional vertex storage.
//!
//! [`VertexIndex`] maps handles to points and points back to every handle
//! holding them, so duplicated coordinates can be found without a scan.

use std::collections::{BTreeMap, BTreeSet};

use super::index::{MeshIndex, VertexId};
use super::point::Point;
use crate::error::{MeshError, Result};

/// How new vertex handles are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandleAllocation {
    /// A counter that only grows. Handles are never reused until
    /// [`VertexIndex::clear`].
    #[default]
    Monotonic,

    /// One more than the largest handle currently stored, or 0 when empty.
    ///
    /// Erasing the largest handle makes the next insert reuse it, while gaps
    /// left below the maximum are never refilled. Kept for compatibility with
    /// handle numbering produced by older tooling.
    MaxPlusOne,
}

/// Options for [`VertexIndex`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VertexIndexOptions {
    /// Handle allocation policy.
    pub allocation: HandleAllocation,
}

impl VertexIndexOptions {
    /// Set the handle allocation policy.
    pub fn with_allocation(mut self, allocation: HandleAllocation) -> Self {
        self.allocation = allocation;
        self
    }
}

/// Vertex storage with lookup by handle and by exact point.
///
/// # Example
///
/// ```
/// use trindex::mesh::{Point, VertexIndex};
///
/// let mut verts: VertexIndex = VertexIndex::new();
/// let a = verts.insert(Point::new(-1.6, 2.0, 4.8));
/// let b = verts.insert(Point::new(-1.6, 2.0, 4.8));
///
/// let found = verts.search(&Point::new(-1.6, 2.0, 4.8));
/// assert_eq!(found.into_iter().collect::<Vec<_>>(), vec![a, b]);
/// ```
#[derive(Debug, Clone)]
pub struct VertexIndex<I: MeshIndex = u32> {
    points: BTreeMap<VertexId<I>, Point>,
    handles: BTreeMap<Point, BTreeSet<VertexId<I>>>,
    next: usize,
    options: VertexIndexOptions,
}

impl<I: MeshIndex> Default for VertexIndex<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: MeshIndex> VertexIndex<I> {
    /// Create an empty index with default options.
    pub fn new() -> Self {
        Self::with_options(VertexIndexOptions::default())
    }

    /// Create an empty index with the given options.
    pub fn with_options(options: VertexIndexOptions) -> Self {
        Self {
            points: BTreeMap::new(),
            handles: BTreeMap::new(),
            next: 0,
            options,
        }
    }

    /// The options this index was created with.
    pub fn options(&self) -> &VertexIndexOptions {
        &self.options
    }

    /// Store a point and return its new handle.
    ///
    /// # Panics
    /// Panics if every handle of the index type is taken. The index is left
    /// unchanged. Use [`try_insert`](Self::try_insert) to get an error instead.
    pub fn insert(&mut self, point: Point) -> VertexId<I> {
        let id = VertexId::new(self.next_raw());
        self.link(id, point);
        id
    }

    /// Store a point, or fail with [`MeshError::HandlesExhausted`] if no handle
    /// is left.
    pub fn try_insert(&mut self, point: Point) -> Result<VertexId<I>> {
        let id = VertexId::try_new(self.next_raw()).ok_or(MeshError::HandlesExhausted {
            requested: 1,
            available: 0,
        })?;
        self.link(id, point);
        Ok(id)
    }

    /// Store points in iteration order, returning their handles.
    ///
    /// # Panics
    /// Panics if the handles run out partway. Points stored before that stay.
    pub fn extend_points<T, It>(&mut self, points: It) -> Vec<VertexId<I>>
    where
        T: Into<Point>,
        It: IntoIterator<Item = T>,
    {
        points.into_iter().map(|p| self.insert(p.into())).collect()
    }

    /// Store all points or none of them.
    ///
    /// Fails with [`MeshError::HandlesExhausted`] before touching the index if
    /// there are fewer free handles than points.
    pub fn try_extend_points<T, It>(&mut self, points: It) -> Result<Vec<VertexId<I>>>
    where
        T: Into<Point>,
        It: IntoIterator<Item = T>,
    {
        let points: Vec<Point> = points.into_iter().map(Into::into).collect();
        let available = self.available();
        if points.len() > available {
            return Err(MeshError::HandlesExhausted {
                requested: points.len(),
                available,
            });
        }
        Ok(points.into_iter().map(|p| self.insert(p)).collect())
    }

    /// How many more points can be stored before the handles run out.
    ///
    /// Both allocation policies hand out consecutive handles from the next
    /// one, so this is the distance from it to the largest handle.
    pub fn available(&self) -> usize {
        I::MAX
            .to_usize()
            .checked_sub(self.next_raw())
            .map_or(0, |left| left.saturating_add(1))
    }

    /// The point stored under `id`.
    #[inline]
    pub fn get(&self, id: VertexId<I>) -> Option<&Point> {
        self.points.get(&id)
    }

    /// Whether `id` is stored.
    #[inline]
    pub fn contains(&self, id: VertexId<I>) -> bool {
        self.points.contains_key(&id)
    }

    /// Move `id` to a new point. Other handles sharing the old point keep it.
    ///
    /// Does nothing if `id` is not stored.
    pub fn modify(&mut self, id: VertexId<I>, point: Point) {
        let Some(slot) = self.points.get_mut(&id) else {
            return;
        };
        let old = std::mem::replace(slot, point);
        self.unlink(&old, id);
        self.handles.entry(point).or_default().insert(id);
    }

    /// Remove one handle. Returns its point if it was stored.
    pub fn erase(&mut self, id: VertexId<I>) -> Option<Point> {
        let point = self.points.remove(&id)?;
        self.unlink(&point, id);
        Some(point)
    }

    /// Remove every handle holding exactly `point`. Returns how many were removed.
    pub fn erase_point(&mut self, point: &Point) -> usize {
        let Some(ids) = self.handles.remove(point) else {
            return 0;
        };
        for id in &ids {
            self.points.remove(id);
        }
        ids.len()
    }

    /// All handles holding exactly `point`.
    pub fn search(&self, point: &Point) -> BTreeSet<VertexId<I>> {
        self.handles.get(point).cloned().unwrap_or_default()
    }

    /// Points held by more than one handle, in point order.
    pub fn duplicates(&self) -> impl Iterator<Item = (&Point, &BTreeSet<VertexId<I>>)> + '_ {
        self.handles.iter().filter(|(_, ids)| ids.len() > 1)
    }

    /// Number of stored vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no vertex is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Remove every vertex and restart handle allocation at 0.
    pub fn clear(&mut self) {
        self.points.clear();
        self.handles.clear();
        self.next = 0;
    }

    /// Iterate over `(handle, point)` in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (VertexId<I>, &Point)> + '_ {
        self.points.iter().map(|(&id, p)| (id, p))
    }

    /// Copy out every point in handle order.
    pub fn points(&self) -> Vec<Point> {
        self.points.values().copied().collect()
    }

    /// The raw value the next insert will use.
    fn next_raw(&self) -> usize {
        match self.options.allocation {
            HandleAllocation::Monotonic => self.next,
            HandleAllocation::MaxPlusOne => {
                self.points.keys().next_back().map_or(0, |v| v.index().saturating_add(1))
            }
        }
    }

    fn link(&mut self, id: VertexId<I>, point: Point) {
        self.next = self.next.max(id.index().saturating_add(1));
        self.points.insert(id, point);
        self.handles.entry(point).or_default().insert(id);
    }

    fn unlink(&mut self, point: &Point, id: VertexId<I>) {
        if let Some(ids) = self.handles.get_mut(point) {
            ids.remove(&id);
            if ids.is_empty() {
                self.handles.remove(point);
            }
        }
    }
}
