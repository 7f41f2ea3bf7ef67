//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the engine, the
//! renderer and the input layer can agree on dimensions and vocabulary
//! without depending on each other.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn position**: (4, 0), the top-left corner of the piece's bounding box
//!
//! # Cell Tags
//!
//! Each piece kind carries a small integer tag used in exported grids and by
//! color palettes. Tag 0 is reserved for empty cells.
//!
//! | Kind | Tag |
//! |------|-----|
//! | I | 1 |
//! | T | 2 |
//! | L | 3 |
//! | J | 4 |
//! | O | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{GameAction, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(PieceKind::from_tag(piece.tag()), Some(PieceKind::T));
//!
//! assert_eq!(GameAction::from_str("rotate"), Some(GameAction::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn column for the top-left corner of a new piece
pub const SPAWN_X: i8 = 4;

/// Spawn row for the top-left corner of a new piece
pub const SPAWN_Y: i8 = 0;

/// Tag stored for an empty cell in exported grids
pub const EMPTY_TAG: u8 = 0;

/// Default gravity interval (one row per second)
pub const DEFAULT_GRAVITY_MS: u32 = 1000;

/// Frame interval of the terminal loop (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// The seven piece kinds.
///
/// Declaration order matches the tag order (I = 1 ... Z = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    T,
    L,
    J,
    O,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in tag order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Integer tag written into grid cells (1..=7).
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.tag(), 1);
    /// assert_eq!(PieceKind::Z.tag(), 7);
    /// ```
    pub fn tag(&self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::O => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::tag`]. Returns `None` for the empty tag and
    /// anything out of range.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1..=7 => Some(Self::ALL[(tag - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase single-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// Discrete events the game reacts to.
///
/// The first four drive the engine; `Pause` and `Restart` are session-level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down; locks it when blocked, same as a gravity tick
    SoftDrop,
    /// Rotate piece 90° clockwise in place
    Rotate,
    /// Toggle pause state
    Pause,
    /// Clear the board and start over
    Restart,
}

impl GameAction {
    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// ```
    /// use blockfall_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("SOFTDROP"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("hardDrop"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a locked piece of that kind
pub type Cell = Option<PieceKind>;

/// Tag for a cell (`EMPTY_TAG` when empty).
pub fn cell_tag(cell: Cell) -> u8 {
    cell.map_or(EMPTY_TAG, |kind| kind.tag())
}
