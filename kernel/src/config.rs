/// Compile-time limits for the shell and its namespace.
///
/// Everything here is fixed at build time. The only runtime knob is the
/// log level of the hosted simulator (`RUST_LOG`); behavior switches are
/// Cargo features (`strict-touch`).

/// File slots in the namespace pool.
pub const MAX_FILES: usize = 100;

/// Directory slots in the namespace pool.
pub const MAX_DIRS: usize = 50;

/// Total entries the namespace can hold. Files and directories share one pool.
pub const CAPACITY: usize = MAX_FILES + MAX_DIRS;

/// Longest entry name, in characters.
pub const MAX_NAME_LEN: usize = 31;

/// Longest command or argument token. Tokens are truncated to this.
pub const MAX_TOKEN_LEN: usize = MAX_NAME_LEN;

/// Longest line the editor accepts before dropping keystrokes.
pub const MAX_LINE_LEN: usize = 255;

/// Printed after every completed line.
pub const PROMPT: &str = "> ";

/// Whether `touch` rejects a name already used by a sibling.
pub const STRICT_TOUCH: bool = cfg!(feature = "strict-touch");

// Slot indices are stored as u16.
static_assertions::const_assert!(CAPACITY <= u16::MAX as usize);
static_assertions::const_assert!(MAX_TOKEN_LEN <= MAX_LINE_LEN);
