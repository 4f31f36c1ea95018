/// Représente une direction cardinale dans la grille.
///
/// Le nord correspond à la ligne du dessus (`row - 1`), le sud à la ligne
/// du dessous, l'est à la colonne de droite et l'ouest à celle de gauche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre fixe d'énumération des voisins : nord, est, sud, ouest.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Fait demi tour (par ex. North -> South).
    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Coordonnées du voisin dans cette direction, s'il reste dans une
    /// grille de `rows` x `cols`.
    pub fn neighbor(
        self,
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    ) -> Option<(usize, usize)> {
        match self {
            Direction::North => (row > 0).then(|| (row - 1, col)),
            Direction::East => (col + 1 < cols).then(|| (row, col + 1)),
            Direction::South => (row + 1 < rows).then(|| (row + 1, col)),
            Direction::West => (col > 0).then(|| (row, col - 1)),
        }
    }

    /// Direction menant d'une cellule vers une cellule adjacente.
    ///
    /// Renvoie `None` si les deux positions ne sont pas voisines dans la
    /// grille (diagonale, identiques, ou trop éloignées).
    pub fn between(from: (usize, usize), to: (usize, usize)) -> Option<Direction> {
        let (fr, fc) = from;
        let (tr, tc) = to;
        if fc == tc && tr + 1 == fr {
            Some(Direction::North)
        } else if fr == tr && tc == fc + 1 {
            Some(Direction::East)
        } else if fc == tc && tr == fr + 1 {
            Some(Direction::South)
        } else if fr == tr && tc + 1 == fc {
            Some(Direction::West)
        } else {
            None
        }
    }
}
