//! Génération aléatoire de labyrinthes parfaits et résolution par DFS.
//!
//! Un [`Maze`] est rendu déjà creusé : la construction alloue la grille
//! puis creuse un arbre couvrant aléatoire (DFS itératif avec retour
//! arrière), de sorte qu'il existe exactement un chemin simple entre deux
//! cellules quelconques. [`Maze::solve`] cherche ensuite un chemin du coin
//! `(0, 0)` au coin opposé en ne traversant que les murs ouverts, et
//! [`Maze::solution_path`] reconstruit ce chemin via les liens parents.
//!
//! ```
//! use rusty_maze::Maze;
//!
//! let mut maze = Maze::new(15, 25).unwrap();
//! assert!(maze.solve());
//! let path = maze.solution_path();
//! assert_eq!(path.first(), Some(&maze.start()));
//! assert_eq!(path.last(), Some(&maze.end()));
//! ```

pub mod cell;
pub mod direction;
mod generator;
pub mod maze;
mod solver;
pub mod walls;

pub use cell::{Cell, CellState};
pub use direction::Direction;
pub use maze::{Maze, MazeError};
pub use walls::{Wall, Walls};
