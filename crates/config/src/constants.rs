//! Centralized constants for the envdefaults workspace.
//!
//! File names, gate variables and help-table geometry live here so the
//! loader, the help printer and the CLI agree on them.

// =============================================================================
// Dotenv Loading
// =============================================================================

/// Name of the override file looked up in the home and working directories.
pub const DOTENV_FILE_NAME: &str = ".env";

/// Environment variable that disables `.env` loading when set to `1` or `true`.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Help Table Layout
// =============================================================================

/// Terminal width assumed when the real size cannot be queried.
pub const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Upper bound for the description column.
pub const MAX_DESCRIPTION_WIDTH: usize = 40;

/// Fixed width of the type column (fits the longest type label).
pub const TYPE_COLUMN_WIDTH: usize = 12;

/// Width consumed by the type and description columns plus separators,
/// subtracted from the terminal width to size the default column.
pub const FIXED_COLUMNS_WIDTH: usize = 62;

/// Narrowest default column, used when the terminal is too small.
pub const MIN_DEFAULT_WIDTH: usize = 10;

/// Marker appended to truncated cells.
pub const ELLIPSIS: &str = "...";
