//! Built-in defaults for linter identity and engine options.

/// Command name used in reports and help output.
pub const DEFAULT_CMD: &str = "standard-engine";

/// Version reported when the embedding linter does not provide one.
pub const DEFAULT_VERSION: &str = "0.0.0";

/// One-line description shown in the report headline.
pub const DEFAULT_TAGLINE: &str = "Standard Style";

/// Project homepage shown in the report headline.
pub const DEFAULT_HOMEPAGE: &str = "https://github.com/exuanbo/standard-engine";

/// Where users should report bugs.
pub const DEFAULT_BUGS: &str = "https://github.com/exuanbo/standard-engine/issues";

/// File extensions linted when a directory is given.
pub const DEFAULT_EXTENSIONS: [&str; 6] = [".js", ".jsx", ".mjs", ".cjs", ".ts", ".tsx"];

/// Patterns that are always ignored.
pub const DEFAULT_IGNORE: [&str; 4] = ["**/*.min.js", "coverage/**", "node_modules/**", "vendor/**"];

/// Ignore files read from the project root unless disabled.
pub const DEFAULT_GIT_IGNORE_FILES: [&str; 2] = [".gitignore", ".git/info/exclude"];
