use log::{debug, trace};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use crate::cell::CellState;
use crate::direction::Direction;
use crate::maze::Maze;

impl Maze {
    /// Creuse le labyrinthe par un DFS itératif aléatoire, avec retour
    /// arrière via une pile explicite.
    ///
    /// Chaque passage relie la cellule courante à une cellule encore non
    /// visitée : le graphe des passages obtenu est donc un arbre couvrant
    /// de la grille, c'est-à-dire un labyrinthe parfait. Une cellule est
    /// remise sur la pile tant qu'il lui reste des voisins non visités ;
    /// quand il n'en reste plus, la pile nous fait remonter le chemin.
    pub(crate) fn generate<R: Rng>(&mut self, rng: &mut R) {
        debug!("génération d'un labyrinthe {}x{}", self.rows(), self.cols());
        let mut stack = vec![self.start()];
        while let Some((row, col)) = stack.pop() {
            self.cell_mut(row, col).state = CellState::Visited;

            let neighbors = self.unvisited_neighbors(row, col, rng);
            if let Some(&next) = neighbors.choose(rng) {
                stack.push((row, col));
                self.remove_wall((row, col), next);
                stack.push(next);
            }
        }
    }

    /// Voisins non visités de `(row, col)`, mélangés uniformément.
    ///
    /// Les candidats sont énumérés dans l'ordre fixe nord, est, sud,
    /// ouest, puis la liste est mélangée (Fisher-Yates via `rand`) pour
    /// que le tirage ne soit pas biaisé vers cet ordre.
    fn unvisited_neighbors<R: Rng>(
        &self,
        row: usize,
        col: usize,
        rng: &mut R,
    ) -> Vec<(usize, usize)> {
        let mut neighbors: Vec<(usize, usize)> = Direction::ALL
            .iter()
            .filter_map(|d| d.neighbor(row, col, self.rows(), self.cols()))
            .filter(|&(r, c)| self.cell(r, c).state == CellState::NotVisited)
            .collect();
        neighbors.shuffle(rng);
        neighbors
    }

    /// Ouvre la paire de murs entre deux cellules adjacentes.
    ///
    /// C'est le seul point de mutation des murs : les deux faces d'un même
    /// passage sont toujours ouvertes ensemble, jamais une seule.
    fn remove_wall(&mut self, from: (usize, usize), to: (usize, usize)) {
        let direction = Direction::between(from, to).expect("cellules non adjacentes");
        trace!("passage creusé de {:?} vers {:?}", from, to);
        self.cell_mut(from.0, from.1).walls.open(direction);
        self.cell_mut(to.0, to.1).walls.open(direction.opposite());
    }
}
