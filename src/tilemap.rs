//! Dense 2D grid used for noise fields, biome maps and tile maps.
//!
//! Coordinates are always `(x, y)`: `x` is the column in `0..width`,
//! `y` is the row in `0..height`. Storage is row-major. Unlike the noise
//! synthesizer's sampling, grid access never wraps: reading outside the
//! grid is a logic error and panics.

use crate::error::GeneratorError;

#[derive(Clone, Debug, PartialEq)]
pub struct Tilemap<T> {
    pub width: usize,
    pub height: usize,
    data: Vec<T>,
}

impl<T: Clone> Tilemap<T> {
    pub fn new_with(width: usize, height: usize, value: T) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a map from a row-major vector.
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` cells.
    pub fn from_vec(width: usize, height: usize, data: Vec<T>) -> Option<Self> {
        if width.checked_mul(height) != Some(data.len()) {
            return None;
        }
        Some(Self { width, height, data })
    }

    /// Build a map from row vectors, `rows[y][x]`.
    ///
    /// Every row must be non-empty and of equal length.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, GeneratorError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 || rows.iter().any(|r| r.len() != width) {
            return Err(GeneratorError::InvalidDimensions { width, height });
        }

        let data = rows.iter().flatten().cloned().collect();
        Ok(Self { width, height, data })
    }

    /// Copy the map out as row vectors, `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.data.chunks(self.width).map(<[T]>::to_vec).collect()
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({}, {}) outside {}x{} map",
            x,
            y,
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn get(&self, x: usize, y: usize) -> &T {
        &self.data[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, value: T) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Cells of row `y`, left to right.
    pub fn row(&self, y: usize) -> &[T] {
        let start = self.index(0, y);
        &self.data[start..start + self.width]
    }

    /// Iterate over all cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.data.iter().enumerate().map(move |(idx, val)| {
            let x = idx % self.width;
            let y = idx / self.width;
            (x, y, val)
        })
    }

    /// Iterate mutably over all cells with their coordinates, row by row.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut T)> {
        let width = self.width;
        self.data.iter_mut().enumerate().map(move |(idx, val)| {
            let x = idx % width;
            let y = idx / width;
            (x, y, val)
        })
    }

    /// Coordinates in column-major order: every `y` of column 0, then column 1, ...
    pub fn column_major_coords(&self) -> impl Iterator<Item = (usize, usize)> {
        let height = self.height;
        (0..self.width).flat_map(move |x| (0..height).map(move |y| (x, y)))
    }
}

impl Tilemap<f64> {
    /// Smallest and largest value in the map.
    pub fn min_max(&self) -> (f64, f64) {
        let mut min_v = f64::MAX;
        let mut max_v = f64::MIN;
        for &v in &self.data {
            if v < min_v {
                min_v = v;
            }
            if v > max_v {
                max_v = v;
            }
        }
        (min_v, max_v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_layout() {
        let mut map = Tilemap::new_with(3, 2, 0u8);
        map.set(2, 1, 7);
        assert_eq!(*map.get(2, 1), 7);
        assert_eq!(map.row(1), &[0, 0, 7]);
        assert_eq!(map.row(0), &[0, 0, 0]);
    }

    #[test]
    fn test_rows_round_trip() {
        let rows = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let map = Tilemap::from_rows(&rows).unwrap();
        assert_eq!(map.width, 3);
        assert_eq!(map.height, 2);
        assert_eq!(*map.get(1, 0), 2);
        assert_eq!(*map.get(2, 1), 6);
        assert_eq!(map.to_rows(), rows);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let ragged = vec![vec![1, 2], vec![3]];
        assert!(matches!(
            Tilemap::from_rows(&ragged),
            Err(GeneratorError::InvalidDimensions { .. })
        ));
        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(Tilemap::from_rows(&empty).is_err());
    }

    #[test]
    fn test_column_major_order() {
        let map = Tilemap::new_with(2, 3, ());
        let coords: Vec<_> = map.column_major_coords().collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_bounds_panics() {
        let map = Tilemap::new_with(2, 2, 0.0f64);
        map.get(2, 0);
    }

    #[test]
    fn test_from_vec_checks_length() {
        assert!(Tilemap::from_vec(2, 2, vec![0; 3]).is_none());
        assert!(Tilemap::from_vec(2, 2, vec![0; 4]).is_some());
        assert!(Tilemap::from_vec(usize::MAX, 2, vec![0; 2]).is_none());
    }
}
