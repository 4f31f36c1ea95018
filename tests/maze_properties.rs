//! Propriétés globales d'un labyrinthe généré : arbre couvrant, connexité,
//! absence de cycle, symétrie des murs, et résolution de bout en bout.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rusty_maze::{Direction, Maze, Wall};

/// Union-find minimal pour vérifier l'absence de cycle parmi les passages.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    /// Fusionne les deux composantes; `false` si elles n'en faisaient qu'une.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra == rb {
            return false;
        }
        self.parent[ra] = rb;
        true
    }
}

/// Paires adjacentes ouvertes, chaque passage compté une seule fois
/// (en ne regardant que les murs est et sud de chaque cellule).
fn open_passages(maze: &Maze) -> Vec<((usize, usize), (usize, usize))> {
    let mut passages = Vec::new();
    for cell in maze.cells() {
        if cell.walls.east == Wall::Open {
            passages.push(((cell.row, cell.col), (cell.row, cell.col + 1)));
        }
        if cell.walls.south == Wall::Open {
            passages.push(((cell.row, cell.col), (cell.row + 1, cell.col)));
        }
    }
    passages
}

#[test]
fn passage_count_is_cells_minus_one() {
    for (rows, cols) in [(1, 1), (1, 7), (5, 1), (4, 4), (15, 25)] {
        let mut rng = StdRng::seed_from_u64(2024);
        let maze = Maze::with_rng(rows, cols, &mut rng).unwrap();
        assert_eq!(
            open_passages(&maze).len(),
            rows * cols - 1,
            "grille {}x{}",
            rows,
            cols
        );
    }
}

#[test]
fn every_cell_is_reachable_from_start() {
    let mut rng = StdRng::seed_from_u64(5);
    let maze = Maze::with_rng(9, 13, &mut rng).unwrap();

    // Parcours en profondeur sur les murs ouverts, depuis l'entrée.
    let mut seen = vec![vec![false; maze.cols()]; maze.rows()];
    let mut stack = vec![maze.start()];
    seen[0][0] = true;
    let mut count = 0;
    while let Some((row, col)) = stack.pop() {
        count += 1;
        for direction in Direction::ALL {
            if !maze.cell(row, col).walls.is_open(direction) {
                continue;
            }
            if let Some((r, c)) = direction.neighbor(row, col, maze.rows(), maze.cols()) {
                if !seen[r][c] {
                    seen[r][c] = true;
                    stack.push((r, c));
                }
            }
        }
    }
    assert_eq!(count, 9 * 13);
}

#[test]
fn carved_passages_contain_no_cycle() {
    let mut rng = StdRng::seed_from_u64(99);
    let maze = Maze::with_rng(12, 10, &mut rng).unwrap();
    let cols = maze.cols();

    let mut components = UnionFind::new(maze.rows() * cols);
    for ((ar, ac), (br, bc)) in open_passages(&maze) {
        assert!(
            components.union(ar * cols + ac, br * cols + bc),
            "un passage relie deux cellules déjà connectées: ({ar},{ac})-({br},{bc})"
        );
    }
}

#[test]
fn walls_are_symmetric_between_adjacent_cells() {
    let mut rng = StdRng::seed_from_u64(314);
    let maze = Maze::with_rng(7, 7, &mut rng).unwrap();
    for cell in maze.cells() {
        for direction in Direction::ALL {
            if let Some((r, c)) = direction.neighbor(cell.row, cell.col, 7, 7) {
                assert_eq!(
                    cell.walls.get(direction),
                    maze.cell(r, c).walls.get(direction.opposite()),
                    "murs incohérents entre ({},{}) et ({},{})",
                    cell.row,
                    cell.col,
                    r,
                    c
                );
            }
        }
    }
}

#[test]
fn solve_then_reconstruct_a_valid_path() {
    // Scénario de référence : grille 15x25.
    let mut maze = Maze::new(15, 25).unwrap();
    assert_eq!(open_passages(&maze).len(), 374);
    assert!(maze.solve());

    let path = maze.solution_path();
    assert_eq!(path.first(), Some(&(0, 0)));
    assert_eq!(path.last(), Some(&(14, 24)));
    for pair in path.windows(2) {
        let direction = Direction::between(pair[0], pair[1])
            .expect("deux cellules consécutives du chemin doivent être adjacentes");
        assert!(maze.cell(pair[0].0, pair[0].1).walls.is_open(direction));
    }
}

#[test]
fn identical_seeds_give_identical_mazes() {
    let mut rng_a = StdRng::seed_from_u64(0xC0FFEE);
    let mut rng_b = StdRng::seed_from_u64(0xC0FFEE);
    let a = Maze::with_rng(10, 14, &mut rng_a).unwrap();
    let b = Maze::with_rng(10, 14, &mut rng_b).unwrap();
    for (ca, cb) in a.cells().zip(b.cells()) {
        assert_eq!(ca.walls, cb.walls);
    }

    let mut rng_c = StdRng::seed_from_u64(0xBEEF);
    let c = Maze::with_rng(10, 14, &mut rng_c).unwrap();
    assert!(
        a.cells().zip(c.cells()).any(|(ca, cc)| ca.walls != cc.walls),
        "deux graines différentes ont donné le même labyrinthe"
    );
}

#[test]
fn single_row_maze_is_one_corridor() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut maze = Maze::with_rng(1, 6, &mut rng).unwrap();
    for col in 0..6 {
        let cell = maze.cell(0, col);
        assert_eq!(cell.walls.north, Wall::Wall);
        assert_eq!(cell.walls.south, Wall::Wall);
        assert_eq!(cell.walls.east, if col < 5 { Wall::Open } else { Wall::Wall });
        assert_eq!(cell.walls.west, if col > 0 { Wall::Open } else { Wall::Wall });
    }
    assert!(maze.solve());
}

#[test]
fn single_column_maze_is_one_corridor() {
    let mut rng = StdRng::seed_from_u64(8);
    let mut maze = Maze::with_rng(6, 1, &mut rng).unwrap();
    for row in 0..6 {
        let cell = maze.cell(row, 0);
        assert_eq!(cell.walls.east, Wall::Wall);
        assert_eq!(cell.walls.west, Wall::Wall);
        assert_eq!(cell.walls.south, if row < 5 { Wall::Open } else { Wall::Wall });
        assert_eq!(cell.walls.north, if row > 0 { Wall::Open } else { Wall::Wall });
    }
    assert!(maze.solve());
    assert_eq!(maze.solution_path().len(), 6);
}
