//! Built-in lookup tables and command-line defaults.
//!
//! These tables are never mutated. Each run copies them into its own
//! [`ExtensionSet`](crate::ExtensionSet) and [`ExclusionSet`](crate::ExclusionSet)
//! before merging user-supplied entries.

/// Default output file name, resolved against the working directory.
pub const DEFAULT_OUTPUT: &str = "code_output.txt";

/// Default size threshold in mebibytes.
pub const DEFAULT_THRESHOLD_MIB: f64 = 0.5;

/// Extensions (with their leading dot) and exact file names included by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &[
    ".go", ".py", ".js", ".ts", ".java", ".c", ".cpp", ".h", ".hpp", ".rs", ".html", ".css",
    ".scss", ".less", ".json", ".xml", ".yaml", ".yml", ".md", ".sh", ".bash", ".zsh", ".rb",
    ".php", ".swift", ".kt", ".kts", ".gradle", ".pl", ".pm", ".lua", ".sql", ".r", ".dart",
    ".pas", ".dfm", ".cs", ".fs", ".vb", ".vbs", ".scala", ".clj", ".cljs", ".edn", ".erl",
    ".hrl", ".ex", ".exs", ".elm", ".hs", ".lhs", ".feature", ".tf", ".tfvars", ".hcl", ".ini",
    ".toml", ".cfg", ".conf", ".properties", ".dockerfile", "Dockerfile", "Makefile", ".mod",
    ".sum", ".csproj", ".sln", ".yaml-tml", ".json-tml", ".xhtml", ".phtml", ".tpl", ".env",
    ".example", ".graphql", ".gql", ".vue", ".svelte", ".jsx", ".tsx",
];

/// Directory base names whose subtrees are never walked.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "node_modules",
    "vendor",
    ".vscode",
    ".idea",
    "__pycache__",
    "build",
    "dist",
    "target",
    "bin",
    "obj",
    "out",
    ".DS_Store",
    ".svn",
    ".hg",
    "CVS",
    ".cache",
    ".pytest_cache",
    ".mypy_cache",
    ".tox",
    ".next",
    ".nuxt",
    ".svelte-kit",
    "coverage",
    "site",
    "public",
    "tmp",
    "temp",
    "logs",
    "log",
    "assets",
    "static",
    "migrations",
    ".terraform",
    ".serverless",
    ".venv",
    "venv",
    "env",
    ".env",
    "jspm_packages",
    "bower_components",
    "web_modules",
];
