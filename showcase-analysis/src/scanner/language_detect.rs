//! Primary language detection from file extensions.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::types::FileEntry;

/// Languages reported in the showcase index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    JavaScript,
    Python,
    Go,
    Rust,
    Java,
    Kotlin,
    Swift,
    Dart,
    Solidity,
    Html,
    Css,
    Php,
    CSharp,
    Cpp,
    C,
    Ruby,
}

impl Language {
    /// Detect language from a bare file extension (no leading dot, lowercase).
    pub fn from_extension(ext: Option<&str>) -> Option<Language> {
        match ext? {
            // TypeScript sources are reported under JavaScript.
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "mts" | "cts" => {
                Some(Language::JavaScript)
            }
            "py" => Some(Language::Python),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "java" => Some(Language::Java),
            "kt" | "kts" => Some(Language::Kotlin),
            "swift" => Some(Language::Swift),
            "dart" => Some(Language::Dart),
            "sol" => Some(Language::Solidity),
            "html" | "htm" => Some(Language::Html),
            "css" | "scss" | "sass" => Some(Language::Css),
            "php" => Some(Language::Php),
            "cs" => Some(Language::CSharp),
            "cpp" | "cc" | "cxx" | "hpp" => Some(Language::Cpp),
            "c" | "h" => Some(Language::C),
            "rb" => Some(Language::Ruby),
            _ => None,
        }
    }

    /// Returns the display name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Java => "Java",
            Language::Kotlin => "Kotlin",
            Language::Swift => "Swift",
            Language::Dart => "Dart",
            Language::Solidity => "Solidity",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Php => "PHP",
            Language::CSharp => "C#",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Ruby => "Ruby",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The most common language among `files`, or `None` if no file is recognised.
/// Ties go to the language seen first.
pub fn primary_language(files: &[FileEntry]) -> Option<Language> {
    let mut counts: FxHashMap<Language, (usize, usize)> = FxHashMap::default();
    for (position, file) in files.iter().enumerate() {
        if let Some(lang) = Language::from_extension(file.bare_extension()) {
            counts.entry(lang).or_insert((0, position)).0 += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|(_, (a_count, a_first)), (_, (b_count, b_first))| {
            a_count.cmp(b_count).then(b_first.cmp(a_first))
        })
        .map(|(lang, _)| lang)
}
