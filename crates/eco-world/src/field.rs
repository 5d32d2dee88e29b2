//! Bounded 2D occupancy grid.
//!
//! A field maps each cell to at most one occupant id. The simulation keeps
//! two of them: one for animals and one for plants, sharing a coordinate
//! space but not occupancy.

use eco_core::{Error, Location, Result};

/// Moore neighbourhood offsets in row-major order, centre excluded
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular, non-wrapping grid of occupant ids
#[derive(Debug, Clone)]
pub struct Field<T> {
    depth: usize,
    width: usize,
    cells: Vec<Option<T>>,
}

impl<T: Copy + PartialEq> Field<T> {
    pub fn new(depth: usize, width: usize) -> Self {
        Self {
            depth,
            width,
            cells: vec![None; depth * width],
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn contains(&self, location: Location) -> bool {
        location.row < self.depth && location.col < self.width
    }

    /// Claim `location` for `occupant`. Fails if the cell is out of bounds or
    /// held by a different occupant.
    pub fn place(&mut self, occupant: T, location: Location) -> Result<()> {
        let index = self.index(location)?;
        match self.cells[index] {
            Some(existing) if existing != occupant => Err(Error::CellOccupied(location)),
            _ => {
                self.cells[index] = Some(occupant);
                Ok(())
            }
        }
    }

    /// Empty a cell; out-of-bounds and already-empty cells are ignored
    pub fn clear(&mut self, location: Location) {
        if let Ok(index) = self.index(location) {
            self.cells[index] = None;
        }
    }

    pub fn occupant_at(&self, location: Location) -> Option<T> {
        self.index(location).ok().and_then(|i| self.cells[i])
    }

    pub fn is_free(&self, location: Location) -> bool {
        self.contains(location) && self.occupant_at(location).is_none()
    }

    /// In-bounds neighbours of `location` in row-major order
    pub fn adjacent(&self, location: Location) -> Vec<Location> {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| location.offset(dr, dc))
            .filter(|&loc| self.contains(loc))
            .collect()
    }

    /// Unoccupied neighbours, same order as [`Field::adjacent`]
    pub fn free_adjacent(&self, location: Location) -> Vec<Location> {
        self.adjacent(location)
            .into_iter()
            .filter(|&loc| self.occupant_at(loc).is_none())
            .collect()
    }

    /// First unoccupied neighbour, if any
    pub fn free_adjacent_location(&self, location: Location) -> Option<Location> {
        self.free_adjacent(location).into_iter().next()
    }

    pub fn clear_all(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Every location in row-major order
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        (0..self.depth).flat_map(move |row| (0..self.width).map(move |col| Location::new(row, col)))
    }

    /// Occupied cells with their occupants, row-major
    pub fn occupied(&self) -> impl Iterator<Item = (Location, T)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|occupant| (self.index_to_location(i), occupant)))
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    fn index(&self, location: Location) -> Result<usize> {
        if !self.contains(location) {
            return Err(Error::OutOfBounds(location));
        }
        Ok(location.row * self.width + location.col)
    }

    fn index_to_location(&self, index: usize) -> Location {
        Location::new(index / self.width, index % self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_creation() {
        let field: Field<u32> = Field::new(4, 6);
        assert_eq!(field.depth(), 4);
        assert_eq!(field.width(), 6);
        assert_eq!(field.cells.len(), 24);
        assert_eq!(field.locations().count(), 24);
        assert_eq!(field.occupied_count(), 0);
    }

    #[test]
    fn test_place_and_clear() {
        let mut field = Field::new(3, 3);
        let loc = Location::new(1, 2);

        field.place(7u32, loc).unwrap();
        assert_eq!(field.occupant_at(loc), Some(7));

        // Same occupant again is fine, a different one is not
        assert!(field.place(7, loc).is_ok());
        assert!(matches!(field.place(8, loc), Err(Error::CellOccupied(l)) if l == loc));

        field.clear(loc);
        assert_eq!(field.occupant_at(loc), None);
        field.clear(loc);
        assert!(field.place(8, loc).is_ok());
    }

    #[test]
    fn test_out_of_bounds() {
        let mut field = Field::new(2, 2);
        let outside = Location::new(2, 0);
        assert!(matches!(field.place(1u8, outside), Err(Error::OutOfBounds(_))));
        assert_eq!(field.occupant_at(outside), None);
        assert!(!field.is_free(outside));
        field.clear(outside);
    }

    #[test]
    fn test_adjacent_order_and_bounds() {
        let field: Field<u8> = Field::new(5, 5);

        let centre = field.adjacent(Location::new(2, 2));
        assert_eq!(
            centre,
            vec![
                Location::new(1, 1),
                Location::new(1, 2),
                Location::new(1, 3),
                Location::new(2, 1),
                Location::new(2, 3),
                Location::new(3, 1),
                Location::new(3, 2),
                Location::new(3, 3),
            ]
        );

        // No wraparound at the corners
        let corner = field.adjacent(Location::new(0, 0));
        assert_eq!(
            corner,
            vec![Location::new(0, 1), Location::new(1, 0), Location::new(1, 1)]
        );
        assert_eq!(field.adjacent(Location::new(4, 2)).len(), 5);
    }

    #[test]
    fn test_single_cell_field_has_no_neighbours() {
        let field: Field<u8> = Field::new(1, 1);
        assert!(field.adjacent(Location::new(0, 0)).is_empty());
        assert_eq!(field.free_adjacent_location(Location::new(0, 0)), None);
    }

    #[test]
    fn test_free_adjacent() {
        let mut field = Field::new(3, 3);
        let centre = Location::new(1, 1);
        field.place(1u8, Location::new(0, 0)).unwrap();
        field.place(2u8, Location::new(0, 2)).unwrap();

        let free = field.free_adjacent(centre);
        assert_eq!(free.len(), 6);
        assert_eq!(free[0], Location::new(0, 1));
        assert_eq!(field.free_adjacent_location(centre), Some(Location::new(0, 1)));

        for loc in field.adjacent(centre) {
            field.place(9, loc).ok();
        }
        assert!(field.free_adjacent(centre).is_empty());
        assert_eq!(field.free_adjacent_location(centre), None);
    }

    #[test]
    fn test_clear_all_and_occupied() {
        let mut field = Field::new(2, 3);
        field.place('a', Location::new(0, 1)).unwrap();
        field.place('b', Location::new(1, 2)).unwrap();

        let occupied: Vec<_> = field.occupied().collect();
        assert_eq!(
            occupied,
            vec![(Location::new(0, 1), 'a'), (Location::new(1, 2), 'b')]
        );

        field.clear_all();
        assert_eq!(field.occupied_count(), 0);
    }
}
