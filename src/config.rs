//! Board configuration.

use crate::error::{CheckersError, CheckersResult};

/// Rows filled per side in the standard starting layout.
pub const STARTING_ROWS: usize = 3;

/// Dimensions and starting layout of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number of rows each player fills at the start.
    pub starting_rows: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: 8,
            cols: 8,
            starting_rows: STARTING_ROWS,
        }
    }
}

impl BoardConfig {
    pub fn new(rows: usize, cols: usize) -> Self {
        BoardConfig {
            rows,
            cols,
            starting_rows: STARTING_ROWS,
        }
    }

    pub fn with_starting_rows(mut self, starting_rows: usize) -> Self {
        self.starting_rows = starting_rows;
        self
    }

    /// Checks that both players' starting rows fit without overlapping.
    pub fn validate(&self) -> CheckersResult<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(CheckersError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                reason: "board must have at least one row and one column",
            });
        }
        if self.rows < 2 * self.starting_rows {
            return Err(CheckersError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
                reason: "starting rows of both players overlap",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard_board() {
        let config = BoardConfig::default();
        assert_eq!((config.rows, config.cols, config.starting_rows), (8, 8, 3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_overlapping_starting_rows_rejected() {
        let config = BoardConfig::new(5, 8);
        assert!(matches!(
            config.validate(),
            Err(CheckersError::InvalidDimensions { rows: 5, .. })
        ));
        assert!(config.with_starting_rows(2).validate().is_ok());
    }

    #[test]
    fn test_zero_columns_rejected() {
        assert!(BoardConfig::new(8, 0).validate().is_err());
    }
}
