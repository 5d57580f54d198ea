//! Cell addressing for the 3x3 board.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the nine cells on the board.
///
/// Cells are numbered 1-9 in reading order:
///
/// ```text
/// 1|2|3
/// 4|5|6
/// 7|8|9
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Cell {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Cell {
    /// All 9 cells in reading order.
    pub const ALL: [Cell; 9] = [
        Cell::TopLeft,
        Cell::TopCenter,
        Cell::TopRight,
        Cell::MiddleLeft,
        Cell::Center,
        Cell::MiddleRight,
        Cell::BottomLeft,
        Cell::BottomCenter,
        Cell::BottomRight,
    ];

    /// Returns the cell number (1-9).
    pub fn index(self) -> u8 {
        match self {
            Cell::TopLeft => 1,
            Cell::TopCenter => 2,
            Cell::TopRight => 3,
            Cell::MiddleLeft => 4,
            Cell::Center => 5,
            Cell::MiddleRight => 6,
            Cell::BottomLeft => 7,
            Cell::BottomCenter => 8,
            Cell::BottomRight => 9,
        }
    }

    /// Creates a cell from its number (1-9).
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Cell::TopLeft),
            2 => Some(Cell::TopCenter),
            3 => Some(Cell::TopRight),
            4 => Some(Cell::MiddleLeft),
            5 => Some(Cell::Center),
            6 => Some(Cell::MiddleRight),
            7 => Some(Cell::BottomLeft),
            8 => Some(Cell::BottomCenter),
            9 => Some(Cell::BottomRight),
            _ => None,
        }
    }

    /// Offset into row-major storage (0-8).
    pub(crate) fn offset(self) -> usize {
        usize::from(self.index() - 1)
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Cell::TopLeft => "Top-left",
            Cell::TopCenter => "Top-center",
            Cell::TopRight => "Top-right",
            Cell::MiddleLeft => "Middle-left",
            Cell::Center => "Center",
            Cell::MiddleRight => "Middle-right",
            Cell::BottomLeft => "Bottom-left",
            Cell::BottomCenter => "Bottom-center",
            Cell::BottomRight => "Bottom-right",
        }
    }

    /// Parses a cell number (1-9) or a label fragment.
    ///
    /// Label matching is case-insensitive and accepts partial input, so
    /// `"center"` and `"bottom-r"` both resolve.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Cell> {
        let s = s.trim();
        if s.is_empty() {
            return None;
        }

        if let Ok(num) = s.parse::<u8>() {
            return Self::from_index(num);
        }

        let s_lower = s.to_lowercase();
        // Exact label first so "center" does not resolve to "Top-center".
        if let Some(cell) = <Cell as strum::IntoEnumIterator>::iter()
            .find(|cell| cell.label().to_lowercase() == s_lower)
        {
            return Some(cell);
        }
        <Cell as strum::IntoEnumIterator>::iter()
            .find(|cell| cell.label().to_lowercase().starts_with(&s_lower))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.index())
    }
}
