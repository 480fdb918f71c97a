//! Linear backing buffers for dense grids

/// Contiguous, owned cell buffer addressed by linear offset
///
/// Offsets are plain buffer positions; implementations never interpret
/// them as coordinates.
pub trait LinearStorage<T> {
    /// Allocate `len` copies of `fill`
    fn filled(len: usize, fill: T) -> Self
    where
        T: Clone;

    /// Number of stored cells
    fn len(&self) -> usize;

    /// Test whether no cells are stored
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cell at `offset`, `None` past the end
    fn get(&self, offset: usize) -> Option<&T>;

    /// Mutable cell at `offset`, `None` past the end
    fn get_mut(&mut self, offset: usize) -> Option<&mut T>;

    /// Every cell in offset order
    fn as_slice(&self) -> &[T];

    /// Every cell in offset order, mutably
    fn as_mut_slice(&mut self) -> &mut [T];
}

impl<T> LinearStorage<T> for Vec<T> {
    fn filled(len: usize, fill: T) -> Self
    where
        T: Clone,
    {
        vec![fill; len]
    }

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, offset: usize) -> Option<&T> {
        self.as_slice().get(offset)
    }

    fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(offset)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> LinearStorage<T> for Box<[T]> {
    fn filled(len: usize, fill: T) -> Self
    where
        T: Clone,
    {
        vec![fill; len].into_boxed_slice()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn get(&self, offset: usize) -> Option<&T> {
        (**self).get(offset)
    }

    fn get_mut(&mut self, offset: usize) -> Option<&mut T> {
        (**self).get_mut(offset)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
