/// Integer lattice offsets within a search radius, nearest first.
///
/// Walking the table in order and stopping at the first hit yields the
/// nearest opposite-class sample without a full distance transform.
#[derive(Clone, Debug)]
pub struct OffsetTable {
    radius: i32,
    pairs: Vec<(i32, i32)>,
}

impl OffsetTable {
    /// Build the table for radius `d` (must be >= 1).
    ///
    /// Enumerates `x, y` over the half-open square `[-d, d)` (so `-d` is
    /// tested but `d` is not), keeps offsets with `x^2 + y^2 <= d^2`, and
    /// sorts ascending by squared distance. The zero offset sorts first
    /// and is dropped: the query sample itself is never a transition.
    pub fn build(d: i32) -> Self {
        debug_assert!(d >= 1);
        let d_sq = d * d;

        let mut pairs: Vec<(i32, i32)> = Vec::new();
        for x in -d..d {
            for y in -d..d {
                if x * x + y * y <= d_sq {
                    pairs.push((x, y));
                }
            }
        }
        pairs.sort_by_key(|&(x, y)| x * x + y * y);
        pairs.remove(0);

        Self { radius: d, pairs }
    }

    #[inline]
    pub fn radius(&self) -> i32 {
        self.radius
    }

    #[inline]
    pub fn pairs(&self) -> &[(i32, i32)] {
        &self.pairs
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
