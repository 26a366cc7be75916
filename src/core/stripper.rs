use crate::domain::language::{CommentRules, Language};
use crate::domain::model::{StripOutcome, StripStats};
use crate::utils::error::{DecommentError, Result};
use regex::Regex;

/// Text-based comment remover for one language.
///
/// Works line by line and only knows about string literals well enough to
/// keep `"not a // comment"` intact. Block comments are removed before any
/// string tracking happens.
#[derive(Debug, Clone)]
pub struct Stripper {
    language: Language,
    rules: CommentRules,
    block: Option<Regex>,
    blank_runs: Regex,
}

impl Stripper {
    pub fn new(language: Language) -> Result<Self> {
        let rules = language.rules();

        let block = match rules.block {
            Some((start, end)) => Some(compile(&format!(
                r"(?s){}.*?{}",
                regex::escape(start),
                regex::escape(end)
            ))?),
            None => None,
        };

        Ok(Self {
            language,
            rules,
            block,
            blank_runs: compile(r"\n\s*\n\s*\n")?,
        })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn strip(&self, text: &str) -> StripOutcome {
        let mut stats = StripStats {
            lines_in: text.lines().count(),
            ..StripStats::default()
        };

        let kept = if self.rules.docstring_quotes.is_empty() {
            self.strip_with_blocks(text, &mut stats)
        } else {
            self.strip_with_docstrings(text, &mut stats)
        };

        // 壓縮連續空行，頭尾去空白，保留一個結尾換行
        let joined = kept.join("\n");
        let collapsed = self.blank_runs.replace_all(&joined, "\n\n");
        let mut result = collapsed.trim().to_string();
        result.push('\n');

        stats.lines_out = result.lines().filter(|l| !l.trim().is_empty()).count();

        tracing::debug!(
            "Stripped {} source: {} -> {} lines ({} block, {} line, {} docstring)",
            self.language,
            stats.lines_in,
            stats.lines_out,
            stats.block_comments,
            stats.line_comments,
            stats.docstrings
        );

        StripOutcome {
            text: result,
            stats,
        }
    }

    fn strip_with_blocks(&self, text: &str, stats: &mut StripStats) -> Vec<String> {
        let without_blocks = match &self.block {
            Some(re) => {
                stats.block_comments = re.find_iter(text).count();
                re.replace_all(text, "").into_owned()
            }
            None => text.to_string(),
        };

        without_blocks
            .lines()
            .filter_map(|line| self.keep_code(line, stats))
            .collect()
    }

    fn strip_with_docstrings(&self, text: &str, stats: &mut StripStats) -> Vec<String> {
        let mut kept = Vec::new();
        let mut open_quote: Option<&str> = None;
        // 賦值用的多行字串 (x = """...)，內容原樣保留
        let mut open_string: Option<&str> = None;

        for line in text.lines() {
            let trimmed = line.trim();

            if let Some(quote) = open_string {
                kept.push(line.to_string());
                if line.contains(quote) {
                    open_string = None;
                }
                continue;
            }

            if let Some(quote) = open_quote {
                if trimmed.ends_with(quote) {
                    open_quote = None;
                }
                continue;
            }

            match self.docstring_start(trimmed) {
                Some(quote) => {
                    stats.docstrings += 1;
                    if !self.closes_on_same_line(trimmed) {
                        open_quote = Some(quote);
                    }
                }
                None => {
                    if let Some(code) = self.keep_code(line, stats) {
                        open_string = self.unclosed_triple_quote(&code);
                        kept.push(code);
                    }
                }
            }
        }

        if open_string.is_some() {
            tracing::warn!("Unterminated multi-line string at end of input");
        }

        if open_quote.is_some() {
            tracing::warn!("Unterminated docstring, dropped everything after it");
        }

        kept
    }

    /// A code line that leaves a `"""` or `'''` string open.
    fn unclosed_triple_quote(&self, code: &str) -> Option<&'static str> {
        self.rules
            .docstring_quotes
            .iter()
            .copied()
            .find(|quote| code.matches(quote).count() % 2 == 1)
    }

    fn docstring_start(&self, trimmed: &str) -> Option<&'static str> {
        self.rules
            .docstring_quotes
            .iter()
            .copied()
            .find(|quote| trimmed.starts_with(quote))
    }

    // The opening quote takes the first three bytes, so a closing quote needs
    // at least three more.
    fn closes_on_same_line(&self, trimmed: &str) -> bool {
        trimmed.len() >= 6
            && self
                .rules
                .docstring_quotes
                .iter()
                .any(|quote| trimmed[3..].ends_with(quote))
    }

    fn keep_code(&self, line: &str, stats: &mut StripStats) -> Option<String> {
        let (code, had_comment) = split_line_comment(line, &self.rules);
        if had_comment {
            stats.line_comments += 1;
        }
        if code.trim().is_empty() {
            None
        } else {
            Some(code.to_string())
        }
    }
}

/// Returns the part of `line` before its line comment, and whether one was found.
pub fn split_line_comment<'a>(line: &'a str, rules: &CommentRules) -> (&'a str, bool) {
    let mut in_string: Option<char> = None;
    let mut escaped = false;

    for (i, ch) in line.char_indices() {
        match in_string {
            Some(delimiter) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == delimiter {
                    in_string = None;
                }
            }
            None => {
                if rules.string_delimiters.contains(&ch) {
                    in_string = Some(ch);
                    continue;
                }

                let rest = &line[i..];
                let excluded = rules
                    .line_excludes
                    .is_some_and(|prefix| rest.starts_with(prefix));
                if rest.starts_with(rules.line) && !excluded {
                    return (&line[..i], true);
                }
            }
        }
    }

    (line, false)
}

/// Strips `text` as `language` in one call.
pub fn strip_comments(text: &str, language: Language) -> Result<StripOutcome> {
    Ok(Stripper::new(language)?.strip(text))
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| DecommentError::ConfigError {
        message: format!("Invalid comment pattern '{}': {}", pattern, e),
    })
}
