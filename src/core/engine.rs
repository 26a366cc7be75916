use crate::core::stripper::Stripper;
use crate::core::{Language, Storage, StripReport, StripSettings};
use crate::utils::error::{DecommentError, Result};

/// Result of one strip run. `text` is what should go to stdout when the
/// report has no output path.
#[derive(Debug, Clone)]
pub struct StripRun {
    pub report: StripReport,
    pub text: String,
}

pub struct StripEngine<S: Storage> {
    storage: S,
}

impl<S: Storage> StripEngine<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn run<C: StripSettings>(&self, settings: &C) -> Result<StripRun> {
        let input = settings.input();
        tracing::info!("Stripping comments from {}", input);

        // Read
        let size = self.storage.file_size(input).await?;
        if size > settings.max_file_bytes() {
            return Err(DecommentError::InputTooLargeError {
                path: input.to_string(),
                size,
                limit: settings.max_file_bytes(),
            });
        }
        let raw = self.storage.read_file(input).await?;
        let source = String::from_utf8(raw)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        tracing::debug!("Read {} bytes", source.len());

        // Strip
        let language = resolve_language(settings.language(), input)?;
        let stripper = Stripper::new(language)?;
        let outcome = stripper.strip(&source);
        tracing::info!(
            "Removed {} block, {} line and {} docstring comments ({} language)",
            outcome.stats.block_comments,
            outcome.stats.line_comments,
            outcome.stats.docstrings,
            language
        );

        // Write
        let target = if settings.in_place() {
            Some(input)
        } else {
            settings.output()
        };
        if let Some(path) = target {
            self.storage.write_file(path, outcome.text.as_bytes()).await?;
            tracing::info!("Output saved to: {}", path);
        }

        let report = StripReport {
            input: input.to_string(),
            output: target.map(str::to_string),
            language,
            bytes_before: source.len(),
            bytes_after: outcome.text.len(),
            stats: outcome.stats,
        };

        Ok(StripRun {
            report,
            text: outcome.text,
        })
    }
}

/// Explicit id first, then the file extension. An id nobody knows falls back
/// to JavaScript rules.
pub fn resolve_language(id: Option<&str>, path: &str) -> Result<Language> {
    if let Some(id) = id {
        return Ok(Language::from_id(id).unwrap_or_else(|| {
            tracing::warn!("Unknown language '{}', using javascript rules", id);
            Language::JavaScript
        }));
    }

    Language::from_path(path).ok_or_else(|| DecommentError::UnknownLanguageError {
        path: path.to_string(),
    })
}
