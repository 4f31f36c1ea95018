use log::debug;

use crate::cell::CellState;
use crate::direction::Direction;
use crate::maze::Maze;

impl Maze {
    /// Cherche un chemin de l'entrée vers la sortie par DFS itératif.
    ///
    /// Les marques de visite laissées par la génération sont d'abord
    /// effacées : la génération visite toutes les cellules, et sans remise
    /// à zéro le parcours ne trouverait plus aucune frontière à explorer.
    /// Chaque cellule empilée reçoit en lien `parent` la cellule depuis
    /// laquelle elle a été atteinte, ce qui permet ensuite de reconstruire
    /// le chemin avec [`Maze::solution_path`].
    ///
    /// Renvoie `true` dès que la sortie est dépilée ; sur un labyrinthe
    /// fraîchement généré c'est toujours le cas, la grille étant connexe.
    pub fn solve(&mut self) -> bool {
        self.reset_visits();
        debug!("résolution de {:?} vers {:?}", self.start(), self.end());

        let mut stack = vec![self.start()];
        while let Some((row, col)) = stack.pop() {
            self.cell_mut(row, col).state = CellState::Visited;

            if (row, col) == self.end() {
                return true;
            }

            for (r, c) in self.open_neighbors(row, col) {
                if self.cell(r, c).state == CellState::NotVisited {
                    self.cell_mut(r, c).parent = Some((row, col));
                    stack.push((r, c));
                }
            }
        }
        false
    }

    /// Reconstruit le chemin entrée -> sortie en remontant les liens
    /// `parent` depuis la sortie jusqu'à la cellule sans parent (l'entrée).
    ///
    /// Renvoie un chemin vide tant que la sortie n'a pas de parent : soit
    /// la résolution n'a pas encore abouti, soit la grille fait 1x1 et
    /// l'entrée est déjà la sortie.
    pub fn solution_path(&self) -> Vec<(usize, usize)> {
        let (row, col) = self.end();
        if self.cell(row, col).parent.is_none() {
            return Vec::new();
        }

        let mut path = vec![self.end()];
        let mut current = self.end();
        while let Some(parent) = self.cell(current.0, current.1).parent {
            path.push(parent);
            current = parent;
        }
        path.reverse();
        path
    }

    /// Voisins accessibles depuis `(row, col)` par un mur ouvert, dans
    /// l'ordre fixe nord, est, sud, ouest.
    fn open_neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        Direction::ALL
            .iter()
            .filter(|&&d| self.cell(row, col).walls.is_open(d))
            .filter_map(|&d| d.neighbor(row, col, self.rows(), self.cols()))
            .collect()
    }

    fn reset_visits(&mut self) {
        for cell in self.cells_mut() {
            cell.state = CellState::NotVisited;
            cell.parent = None;
        }
    }
}
