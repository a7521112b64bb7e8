//! Level database - parsing and storage

use bevy::prelude::*;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::world::TileKind;

/// One placement command emitted by the parser: put `kind` at `position`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub kind: TileKind,
    pub position: Vec2,
}

/// A fully parsed level: an ordered list of tile placements
#[derive(Clone, Debug)]
pub struct Level {
    pub name: String,
    pub placements: Vec<Placement>,
}

/// Fatal level-loading errors. Level files are bundled build-time assets, so
/// neither kind is recoverable at runtime - the program aborts on both.
#[derive(Debug)]
pub enum LevelError {
    /// The bundled level file is absent
    AssetMissing {
        path: String,
        source: std::io::Error,
    },
    /// A character outside the tile alphabet appeared in the grid
    Format {
        letter: char,
        line: usize,
        column: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::AssetMissing { path, source } => {
                write!(f, "could not load level file {path}: {source}")
            }
            LevelError::Format {
                letter,
                line,
                column,
            } => {
                write!(
                    f,
                    "unknown level letter {letter:?} at line {line}, column {column}"
                )
            }
        }
    }
}

impl std::error::Error for LevelError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LevelError::AssetMissing { source, .. } => Some(source),
            LevelError::Format { .. } => None,
        }
    }
}

/// World position of the tile at (column, row):
/// a 64-unit pitch with a half-tile centering offset.
pub fn tile_position(column: usize, row: usize) -> Vec2 {
    Vec2::new(
        TILE_SIZE * column as f32 + HALF_TILE,
        TILE_SIZE * row as f32 + HALF_TILE,
    )
}

impl Level {
    /// Parse a newline-delimited ASCII grid into placement commands.
    ///
    /// Rows are read bottom-to-top: the last line of the text is row 0, so
    /// row index increases with on-screen Y. No whitespace trimming happens
    /// anywhere - a stray carriage return is a format error, not a soft skip.
    /// Empty tiles (and whole empty rows) consume grid space but emit nothing.
    pub fn parse(name: &str, text: &str) -> Result<Self, LevelError> {
        let line_count = text.split('\n').count();
        let mut placements = Vec::new();

        for (row, line) in text.split('\n').rev().enumerate() {
            for (column, letter) in line.chars().enumerate() {
                let kind = TileKind::from_char(letter).ok_or(LevelError::Format {
                    letter,
                    line: line_count - row,
                    column: column + 1,
                })?;

                if kind == TileKind::Empty {
                    continue;
                }

                placements.push(Placement {
                    kind,
                    position: tile_position(column, row),
                });
            }
        }

        Ok(Self {
            name: name.to_string(),
            placements,
        })
    }

    /// Load and parse a single level file
    pub fn load_from_file(path: &Path) -> Result<Self, LevelError> {
        let text = fs::read_to_string(path).map_err(|e| LevelError::AssetMissing {
            path: path.display().to_string(),
            source: e,
        })?;

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self::parse(&name, &text)
    }
}

/// Database of all bundled levels, loaded once at startup
#[derive(Resource)]
pub struct LevelDatabase {
    pub levels: Vec<Level>,
}

impl LevelDatabase {
    /// Load `level1.txt`, `level2.txt`, ... from `dir` until the first gap.
    ///
    /// At least one level must exist; a missing `level1.txt` or any parse
    /// failure is fatal to the caller.
    pub fn load_from_dir(dir: &str) -> Result<Self, LevelError> {
        let mut levels = Vec::new();

        for index in 1.. {
            let path = Path::new(dir).join(format!("level{index}.txt"));
            if index > 1 && !path.exists() {
                break;
            }
            levels.push(Level::load_from_file(&path)?);
        }

        info!("Loaded {} levels from {}", levels.len(), dir);
        Ok(Self { levels })
    }

    /// Get level by zero-based index
    pub fn get(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Get number of levels
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Check if database is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Current level (1-indexed, as shown to the player)
#[derive(Resource)]
pub struct CurrentLevel(pub u32);

impl Default for CurrentLevel {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_row_emits_no_placements() {
        let level = Level::parse("t", "").unwrap();
        assert!(level.placements.is_empty());

        // Blank middle row consumes a row index but emits nothing
        let level = Level::parse("t", "x\n\nx").unwrap();
        assert_eq!(level.placements.len(), 2);
        assert_eq!(level.placements[0].position, tile_position(0, 0));
        assert_eq!(level.placements[1].position, tile_position(0, 2));
    }

    #[test]
    fn unknown_letter_is_a_format_error() {
        let err = Level::parse("t", "x x\nxqx").unwrap_err();
        match err {
            LevelError::Format {
                letter,
                line,
                column,
            } => {
                assert_eq!(letter, 'q');
                assert_eq!(line, 2);
                assert_eq!(column, 2);
            }
            other => panic!("expected Format error, got {other:?}"),
        }
    }

    #[test]
    fn carriage_return_is_a_format_error() {
        let err = Level::parse("t", "x\r\nx").unwrap_err();
        assert!(matches!(err, LevelError::Format { letter: '\r', .. }));
    }

    #[test]
    fn rows_are_read_bottom_to_top() {
        // Star on the last line lands on the lowest row (y = 32);
        // wall on the first line lands on the highest.
        let level = Level::parse("t", "x\ns").unwrap();
        let star = level
            .placements
            .iter()
            .find(|p| p.kind == TileKind::Star)
            .unwrap();
        let wall = level
            .placements
            .iter()
            .find(|p| p.kind == TileKind::Wall)
            .unwrap();
        assert_eq!(star.position.y, 32.0);
        assert_eq!(wall.position.y, 96.0);
    }

    #[test]
    fn position_mapping_is_deterministic() {
        for (col, row, x, y) in [
            (0, 0, 32.0, 32.0),
            (1, 0, 96.0, 32.0),
            (0, 1, 32.0, 96.0),
            (7, 11, 480.0, 736.0),
            (15, 3, 992.0, 224.0),
        ] {
            assert_eq!(tile_position(col, row), Vec2::new(x, y));
        }
    }

    #[test]
    fn parses_all_tile_kinds() {
        let level = Level::parse("t", "xvsf ").unwrap();
        let kinds: Vec<TileKind> = level.placements.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TileKind::Wall,
                TileKind::Vortex,
                TileKind::Star,
                TileKind::Finish
            ]
        );
        // The trailing space consumed column 4 without emitting
        assert_eq!(level.placements[3].position, tile_position(3, 0));
    }
}
