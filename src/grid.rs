use itertools::iproduct;

/// Values sampled every `res` pixels across a `width x height` canvas.
///
/// Only the sample coordinates themselves hold values; anything in between
/// reads as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    res: usize,
    cols: usize,
    rows: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` at every sample point, column
    /// by column. Stops at the first `Err`.
    pub fn try_build<E>(
        width: usize,
        height: usize,
        res: usize,
        mut f: impl FnMut(usize, usize) -> Result<T, E>,
    ) -> Result<Self, E> {
        debug_assert!(res > 0);
        let cols = width.div_ceil(res);
        let rows = height.div_ceil(res);
        let mut cells = Vec::with_capacity(cols * rows);
        for (x, y) in iproduct!(
            (0..width).step_by(res),
            (0..height).step_by(res)
        ) {
            cells.push(f(x, y)?);
        }
        Ok(Self {
            res,
            cols,
            rows,
            cells,
        })
    }

    pub fn res(&self) -> usize {
        self.res
    }

    /// Value at canvas coordinate `(x, y)`, if that is a sample point.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x % self.res != 0 || y % self.res != 0 {
            return None;
        }
        let (col, row) = (x / self.res, y / self.res);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        self.cells.get(col * self.rows + row)
    }

    /// `(x, y, value)` for every sample, in sampling order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.cells.iter().enumerate().map(move |(i, v)| {
            (i / self.rows * self.res, i % self.rows * self.res, v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    fn coords(width: usize, height: usize, res: usize) -> Grid<(usize, usize)> {
        Grid::try_build(width, height, res, |x, y| Ok::<_, Infallible>((x, y)))
            .unwrap()
    }

    #[test]
    fn samples_every_res_pixels() {
        let g = coords(12, 7, 5);
        assert_eq!(g.iter().count(), 3 * 2);
        assert_eq!(g.get(10, 5), Some(&(10, 5)));
        assert_eq!(g.get(0, 0), Some(&(0, 0)));
    }

    #[test]
    fn off_grid_points_are_absent() {
        let g = coords(12, 7, 5);
        assert_eq!(g.get(3, 0), None);
        assert_eq!(g.get(15, 0), None);
        assert_eq!(g.get(0, 10), None);
    }

    #[test]
    fn iter_reports_canvas_coordinates() {
        let g = coords(12, 7, 5);
        let seen: Vec<_> = g.iter().map(|(x, y, v)| (x, y, *v)).collect();
        assert_eq!(seen.len(), 6);
        for (x, y, v) in seen {
            assert_eq!((x, y), v);
        }
    }

    #[test]
    fn build_stops_on_error() {
        let mut calls = 0;
        let r = Grid::try_build(20, 20, 5, |x, y| {
            calls += 1;
            if (x, y) == (5, 5) {
                Err("singular")
            } else {
                Ok(0.0)
            }
        });
        assert_eq!(r, Err("singular"));
        assert_eq!(calls, 6);
    }
}
