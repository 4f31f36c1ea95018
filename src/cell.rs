use crate::walls::Walls;

/// État d'une cellule (visitée ou pas).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    NotVisited,
    Visited,
}

/// Représente une cellule du labyrinthe.
///
/// Une cellule possède une position fixe, une configuration de murs et un
/// état indiquant si elle a été visitée. Le lien `parent` est posé pendant
/// la résolution pour pouvoir reconstruire le chemin ; c'est une simple
/// paire de coordonnées dans la grille, jamais une référence possédante.
#[derive(Debug, Clone)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    /// Les murs délimitant la cellule.
    pub walls: Walls,
    /// L'état de la cellule.
    pub state: CellState,
    /// Coordonnées (row, col) du prédécesseur dans le parcours de résolution.
    pub parent: Option<(usize, usize)>,
}

impl Cell {
    /// Crée une nouvelle instance de `Cell`.
    ///
    /// Initialise les murs avec leurs valeurs par défaut (tous présents)
    /// et l'état à `NotVisited`.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            walls: Walls::default(),
            state: CellState::NotVisited,
            parent: None,
        }
    }
}
