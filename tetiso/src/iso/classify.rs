//! Level-set classification of vertices, edges, and cells
use crate::mesh::{Edge, ScalarField, Tet};

/// Which side of the level set a value lies on
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Side {
    /// Strictly less than the target value
    Below,
    /// Greater than or equal to the target value
    Above,
}

impl Side {
    /// Classifies a value against the target
    ///
    /// A value exactly equal to the target is [`Side::Above`].
    #[inline]
    pub fn of(value: f64, target: f64) -> Self {
        if value < target {
            Side::Below
        } else {
            Side::Above
        }
    }
}

/// Checks whether a set of values lies on both sides of the target
pub fn is_crossed<I: IntoIterator<Item = f64>>(values: I, target: f64) -> bool {
    let mut below = false;
    let mut above = false;
    for v in values {
        match Side::of(v, target) {
            Side::Below => below = true,
            Side::Above => above = true,
        }
        if below && above {
            return true;
        }
    }
    false
}

/// Classifies mesh entities against a level set of a scalar field
pub struct Classifier<'a, F: ?Sized> {
    field: &'a F,
    target: f64,
}

impl<F: ?Sized> Clone for Classifier<'_, F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ?Sized> Copy for Classifier<'_, F> {}

impl<'a, F: ScalarField + ?Sized> Classifier<'a, F> {
    /// Builds a classifier for the level set `field = target`
    pub fn new(field: &'a F, target: f64) -> Self {
        Self { field, target }
    }

    /// Returns the target value
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Looks up the field value at a vertex
    #[inline]
    pub fn value(&self, v: usize) -> f64 {
        self.field.value(v)
    }

    /// Classifies a single vertex
    #[inline]
    pub fn side(&self, v: usize) -> Side {
        Side::of(self.value(v), self.target)
    }

    /// Checks whether the level set separates any pair of the given vertices
    pub fn is_crossed(&self, vertices: &[usize]) -> bool {
        is_crossed(vertices.iter().map(|&v| self.value(v)), self.target)
    }

    /// Checks whether the level set crosses the given edge
    pub fn is_edge_crossed(&self, e: Edge) -> bool {
        self.side(e.start) != self.side(e.end)
    }

    /// Checks whether the level set passes through the given cell
    pub fn is_cell_crossed(&self, t: &Tet) -> bool {
        self.is_crossed(&t.0)
    }
}
