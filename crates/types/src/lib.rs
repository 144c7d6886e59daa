//! Core types module - shared data structures and constants
//!
//! This module defines the data the viewer passes around: tile codes, the
//! screens built from them, the display colors they map to and the events the
//! transport delivers. Everything here is plain data with no I/O, so it can be
//! used from the renderer, the terminal layer and the wire protocol alike.
//!
//! # Tile codes
//!
//! | Code | Tile | Color |
//! |------|------|-------|
//! | 0 | `Nothing` | white |
//! | 1 | `Block` | black |
//! | 2 | `Enemy` | orange |
//! | 3 | `Mario` | red |
//!
//! # Examples
//!
//! ```
//! use tile_viewer_types::{ColorTable, Screen, Tile, TileColor};
//!
//! let screen = Screen::from_codes(vec![vec![0, 1], vec![2, 3]]).unwrap();
//! assert_eq!(screen.width(), 2);
//! assert_eq!(screen.get(1, 1), Some(Tile::Mario));
//!
//! assert_eq!(ColorTable::STANDARD.color(Tile::Enemy), TileColor::Orange);
//! assert_eq!(ColorTable::STANDARD.color_for_code(7), None);
//! ```

use thiserror::Error;

/// Tiles the producer sees to each side of the avatar.
pub const VIEW_RADIUS: usize = 6;

/// Side length of the square screen the producer normally sends (13).
pub const SCREEN_SIZE: usize = VIEW_RADIUS * 2 + 1;

/// Default display refresh tick in milliseconds (16ms ≈ 60 FPS).
pub const REFRESH_MS: u32 = 16;

/// Event name that carries a screen payload.
pub const UPDATE_SCREEN_EVENT: &str = "update_screen";

/// Semantic category of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Nothing = 0,
    Block = 1,
    Enemy = 2,
    /// The player avatar.
    Mario = 3,
}

impl Tile {
    /// All tiles in code order.
    pub const ALL: [Tile; 4] = [Tile::Nothing, Tile::Block, Tile::Enemy, Tile::Mario];

    /// Map a raw wire code to a tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use tile_viewer_types::Tile;
    ///
    /// assert_eq!(Tile::from_code(1), Some(Tile::Block));
    /// assert_eq!(Tile::from_code(4), None);
    /// ```
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Tile::Nothing),
            1 => Some(Tile::Block),
            2 => Some(Tile::Enemy),
            3 => Some(Tile::Mario),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Tile {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Tile::from_code(code).ok_or(code)
    }
}

/// Reasons a grid of raw codes cannot become a [`Screen`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScreenError {
    #[error("unknown tile code {code} at column {col}, row {row}")]
    UnknownTile { row: usize, col: usize, code: u8 },
    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// One full frame: rows of tiles, rectangular by construction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    rows: Vec<Vec<Tile>>,
}

impl Screen {
    /// Validate a grid of raw codes.
    ///
    /// Every code must name a [`Tile`] and every row must be as long as the
    /// first one. An empty grid is a valid (empty) screen.
    pub fn from_codes(codes: Vec<Vec<u8>>) -> Result<Self, ScreenError> {
        let expected = codes.first().map(Vec::len).unwrap_or(0);
        let mut rows = Vec::with_capacity(codes.len());

        for (row, row_codes) in codes.into_iter().enumerate() {
            if row_codes.len() != expected {
                return Err(ScreenError::Ragged {
                    row,
                    expected,
                    found: row_codes.len(),
                });
            }
            let tiles = row_codes
                .into_iter()
                .enumerate()
                .map(|(col, code)| {
                    Tile::from_code(code).ok_or(ScreenError::UnknownTile { row, col, code })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(tiles);
        }

        Ok(Self { rows })
    }

    /// Screen filled with a single tile.
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self {
            rows: vec![vec![tile; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    pub fn get(&self, col: usize, row: usize) -> Option<Tile> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Iterate `(col, row, tile)` in row-major order.
    pub fn iter_tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, tiles)| {
            tiles
                .iter()
                .enumerate()
                .map(move |(col, &tile)| (col, row, tile))
        })
    }

    /// Raw codes, as they appear on the wire.
    pub fn to_codes(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|r| r.iter().map(|t| t.code()).collect())
            .collect()
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Named display colors used by the color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    White,
    Black,
    Orange,
    Red,
}

impl TileColor {
    /// CSS color keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            TileColor::White => "white",
            TileColor::Black => "black",
            TileColor::Orange => "orange",
            TileColor::Red => "red",
        }
    }

    pub fn rgb(self) -> Rgb {
        match self {
            TileColor::White => Rgb::new(255, 255, 255),
            TileColor::Black => Rgb::new(0, 0, 0),
            TileColor::Orange => Rgb::new(255, 165, 0),
            TileColor::Red => Rgb::new(255, 0, 0),
        }
    }
}

/// Fixed tile-to-color mapping, indexed by tile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    entries: [TileColor; 4],
}

impl ColorTable {
    pub const STANDARD: ColorTable = ColorTable {
        entries: [
            TileColor::White,
            TileColor::Black,
            TileColor::Orange,
            TileColor::Red,
        ],
    };

    pub fn color(&self, tile: Tile) -> TileColor {
        self.entries[tile.code() as usize]
    }

    /// Bounds-checked lookup for a raw code.
    pub fn color_for_code(&self, code: u8) -> Option<TileColor> {
        self.entries.get(code as usize).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A decoded inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerEvent {
    UpdateScreen(Screen),
    /// Any other event name; carried so callers can log it.
    Unknown(String),
}

impl ViewerEvent {
    pub fn name(&self) -> &str {
        match self {
            ViewerEvent::UpdateScreen(_) => UPDATE_SCREEN_EVENT,
            ViewerEvent::Unknown(name) => name,
        }
    }
}
