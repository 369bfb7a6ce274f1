//! File classification by extension.

/// Image extensions offered as ASCII art or raw view.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Extensions that are safe to open directly as plain text.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "go", "py", "js", "ts", "java", "c", "cpp", "h", "html", "css", "json", "xml", "yaml",
    "yml", "md", "sh", "bash", "rb", "php", "sql", "swift", "kt", "rs", "pl", "lua", "r", "matlab",
    "vb", "cs", "scala", "groovy", "clojure", "erlang", "elixir", "haskell", "rust", "asm", "log",
    "conf", "cfg", "ini", "env", "gradle", "maven", "npm", "yarn",
];

/// How a file should be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Text,
    /// Needs confirmation before opening as text
    Unknown,
}

impl FileKind {
    /// Detect the kind from a file name (case-insensitive extension).
    pub fn from_name(name: &str) -> Self {
        let Some((_, ext)) = name.rsplit_once('.') else {
            return Self::Unknown;
        };
        let ext = ext.to_ascii_lowercase();

        if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
            Self::Image
        } else if TEXT_EXTENSIONS.contains(&ext.as_str()) {
            Self::Text
        } else {
            Self::Unknown
        }
    }
}
