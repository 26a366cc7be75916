use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    JavaScript,
    Cpp,
    Lua,
    Python,
}

/// How a language spells its comments and strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentRules {
    pub line: &'static str,
    /// Prefix that turns `line` into something else (Lua's `--[[`).
    pub line_excludes: Option<&'static str>,
    pub block: Option<(&'static str, &'static str)>,
    pub docstring_quotes: &'static [&'static str],
    pub string_delimiters: &'static [char],
}

const JAVASCRIPT_RULES: CommentRules = CommentRules {
    line: "//",
    line_excludes: None,
    block: Some(("/*", "*/")),
    docstring_quotes: &[],
    string_delimiters: &['"', '\'', '`'],
};

const LUA_RULES: CommentRules = CommentRules {
    line: "--",
    line_excludes: Some("--[["),
    block: Some(("--[[", "]]")),
    docstring_quotes: &[],
    string_delimiters: &['"', '\''],
};

const PYTHON_RULES: CommentRules = CommentRules {
    line: "#",
    line_excludes: None,
    block: None,
    docstring_quotes: &["'''", "\"\"\""],
    string_delimiters: &['"', '\''],
};

impl Language {
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Cpp,
        Language::Lua,
        Language::Python,
    ];

    /// Parses an editor-style language id such as `javascript` or `py`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "typescript" | "ts" => Some(Language::JavaScript),
            "cpp" | "c++" | "c" => Some(Language::Cpp),
            "lua" => Some(Language::Lua),
            "python" | "py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" | "ts" => Some(Language::JavaScript),
            "c" | "h" | "cc" | "cpp" | "cxx" | "hpp" => Some(Language::Cpp),
            "lua" => Some(Language::Lua),
            "py" => Some(Language::Python),
            _ => None,
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn rules(&self) -> CommentRules {
        match self {
            // C++ shares the JavaScript comment syntax
            Language::JavaScript | Language::Cpp => JAVASCRIPT_RULES,
            Language::Lua => LUA_RULES,
            Language::Python => PYTHON_RULES,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Cpp => "cpp",
            Language::Lua => "lua",
            Language::Python => "python",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
