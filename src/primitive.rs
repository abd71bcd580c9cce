//! Primitive topologies and triangle assembly

/// Primitive topologies understood by the draw calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    /// Independent triangles from consecutive vertex triples
    Triangles,
    /// A strip of triangles sharing vertices between neighbors
    TriangleStrip,
}

/// Iterator assembling triangles from a vertex or index stream.
///
/// Without an external index buffer the stream is the identity over the
/// program's vertex count; with one, emitted positions are remapped through
/// it and the walk covers the index count instead.
#[derive(Debug, Clone)]
pub(crate) struct TriangleIter<'a> {
    primitive: Primitive,
    indices: Option<&'a [usize]>,
    count: usize,
    cursor: usize,
}

impl<'a> TriangleIter<'a> {
    pub(crate) fn new(primitive: Primitive, vertices: usize, indices: Option<&'a [usize]>) -> TriangleIter<'a> {
        TriangleIter {
            primitive,
            indices,
            count: indices.map_or(vertices, |indices| indices.len()),
            cursor: 0,
        }
    }

    #[inline]
    fn remap(&self, n: usize) -> usize {
        self.indices.map_or(n, |indices| indices[n])
    }
}

impl<'a> Iterator for TriangleIter<'a> {
    type Item = [usize; 3];

    fn next(&mut self) -> Option<[usize; 3]> {
        let i = self.cursor;

        if i + 2 >= self.count {
            return None;
        }

        let (step, tri) = match self.primitive {
            Primitive::Triangles => (3, [i, i + 1, i + 2]),
            // Strip winding keyed on i % 4, advancing two vertices per
            // triangle. This differs from the usual GL strip parity (i % 2)
            // and is kept as the source emits it.
            Primitive::TriangleStrip => {
                (2, if i % 4 == 0 { [i, i + 1, i + 2] } else { [i, i - 1, i + 1] })
            }
        };

        self.cursor += step;

        Some([self.remap(tri[0]), self.remap(tri[1]), self.remap(tri[2])])
    }
}

#[cfg(test)]
mod tests {
    use super::{Primitive, TriangleIter};

    #[test]
    fn triangles_in_triples() {
        let tris: Vec<_> = TriangleIter::new(Primitive::Triangles, 9, None).collect();

        assert_eq!(tris, vec![[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    }

    #[test]
    fn incomplete_trailing_triangle_is_dropped() {
        let tris: Vec<_> = TriangleIter::new(Primitive::Triangles, 8, None).collect();

        assert_eq!(tris, vec![[0, 1, 2], [3, 4, 5]]);
        assert_eq!(TriangleIter::new(Primitive::Triangles, 2, None).count(), 0);
    }

    #[test]
    fn strip_winding() {
        let tris: Vec<_> = TriangleIter::new(Primitive::TriangleStrip, 8, None).collect();

        assert_eq!(tris, vec![[0, 1, 2], [2, 1, 3], [4, 5, 6], [6, 5, 7]]);
    }

    #[test]
    fn external_indices_remap_and_bound_the_walk() {
        let indices = [2, 0, 1, 2, 1, 3];
        let tris: Vec<_> = TriangleIter::new(Primitive::Triangles, 4, Some(&indices)).collect();

        assert_eq!(tris, vec![[2, 0, 1], [2, 1, 3]]);
    }
}
