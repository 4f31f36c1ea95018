use rand::Rng;
use thiserror::Error;

use crate::cell::Cell;

/// Erreurs de construction d'un labyrinthe.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Une grille doit faire au moins 1x1.
    #[error("dimensions invalides {rows}x{cols}: il faut au moins une ligne et une colonne")]
    InvalidDimensions { rows: usize, cols: usize },
}

/// Labyrinthe parfait sur une grille rectangulaire.
///
/// La grille est stockée ligne par ligne et possède toutes ses cellules
/// pour la durée de vie du labyrinthe. La génération fait partie de la
/// construction : un `Maze` rendu à l'appelant est toujours déjà creusé,
/// avec exactement un chemin simple entre deux cellules quelconques.
/// L'entrée est le coin `(0, 0)`, la sortie le coin `(rows-1, cols-1)`.
#[derive(Debug)]
pub struct Maze {
    rows: usize,
    cols: usize,
    grid: Vec<Vec<Cell>>,
    start: (usize, usize),
    end: (usize, usize),
}

impl Maze {
    /// Crée un labyrinthe déjà creusé de dimensions `rows` x `cols`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MazeError> {
        Self::with_rng(rows, cols, &mut rand::rng())
    }

    /// Comme [`Maze::new`], avec une source d'aléa fournie par l'appelant.
    ///
    /// Deux appels avec des générateurs dans le même état produisent la
    /// même configuration de murs.
    pub fn with_rng<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, MazeError> {
        let mut maze = Self::ungenerated(rows, cols)?;
        maze.generate(rng);
        Ok(maze)
    }

    /// Grille pleine, aucun passage creusé. La génération suit toujours.
    fn ungenerated(rows: usize, cols: usize) -> Result<Self, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::InvalidDimensions { rows, cols });
        }
        let grid = (0..rows)
            .map(|row| (0..cols).map(|col| Cell::new(row, col)).collect())
            .collect();
        Ok(Self {
            rows,
            cols,
            grid,
            start: (0, 0),
            end: (rows - 1, cols - 1),
        })
    }

    /// Nombre de lignes de la grille.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Nombre de colonnes de la grille.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Coordonnées de l'entrée, toujours `(0, 0)`.
    pub fn start(&self) -> (usize, usize) {
        self.start
    }

    /// Coordonnées de la sortie, toujours `(rows-1, cols-1)`.
    pub fn end(&self) -> (usize, usize) {
        self.end
    }

    /// Récupère une cellule en lecture seule.
    ///
    /// # Panics
    ///
    /// Si `(row, col)` sort de la grille : y accéder est une erreur de
    /// programmation, pas un cas d'erreur récupérable.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.grid[row][col]
    }

    pub(crate) fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.grid[row][col]
    }

    /// Parcourt toutes les cellules, ligne par ligne.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.grid.iter().flatten()
    }

    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.grid.iter_mut().flatten()
    }

    #[cfg(test)]
    pub(crate) fn blank(rows: usize, cols: usize) -> Self {
        Self::ungenerated(rows, cols).unwrap()
    }
}
