use crate::direction::Direction;

/// État d'un mur : présent, ou ouvert (creusé).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Wall,
    Open,
}

/// Ensemble des 4 murs d'une cellule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walls {
    pub north: Wall,
    pub east: Wall,
    pub south: Wall,
    pub west: Wall,
}

impl Default for Walls {
    fn default() -> Self {
        Self {
            north: Wall::Wall,
            east: Wall::Wall,
            south: Wall::Wall,
            west: Wall::Wall,
        }
    }
}

impl Walls {
    /// Renvoie le mur dans la direction donnée.
    pub fn get(&self, direction: Direction) -> Wall {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    /// Vrai si le mur dans la direction donnée est ouvert.
    pub fn is_open(&self, direction: Direction) -> bool {
        self.get(direction) == Wall::Open
    }

    /// Ouvre le mur dans la direction donnée.
    ///
    /// Seule la génération y touche, toujours par paires : le mur opposé de
    /// la cellule voisine est ouvert dans la même opération.
    pub(crate) fn open(&mut self, direction: Direction) {
        match direction {
            Direction::North => self.north = Wall::Open,
            Direction::East => self.east = Wall::Open,
            Direction::South => self.south = Wall::Open,
            Direction::West => self.west = Wall::Open,
        }
    }
}
