use serde::Serialize;
use std::fmt;

/// Result of converting a single candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConversionOutcome {
    Converted { id: Option<String>, slug: String },
    Failed { id: Option<String>, reason: String },
}

impl ConversionOutcome {
    pub fn converted(id: Option<&str>, slug: impl Into<String>) -> Self {
        Self::Converted {
            id: id.map(str::to_string),
            slug: slug.into(),
        }
    }

    pub fn failed(id: Option<&str>, reason: impl Into<String>) -> Self {
        Self::Failed {
            id: id.map(str::to_string),
            reason: reason.into(),
        }
    }
}

/// Terminal artifact of one run, handed to the completion callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    pub converted: usize,
    pub total: usize,
    pub dry_run: bool,
    pub errors: Vec<String>,
    pub slugs_generated: Vec<String>,
    pub outcomes: Vec<ConversionOutcome>,
}

impl ConversionReport {
    pub fn new(total: usize, dry_run: bool) -> Self {
        Self {
            total,
            dry_run,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: ConversionOutcome) {
        match &outcome {
            ConversionOutcome::Converted { slug, .. } => {
                self.converted += 1;
                self.slugs_generated.push(slug.clone());
            }
            ConversionOutcome::Failed { id, reason } => {
                let id = id.as_deref().unwrap_or("<no id>");
                self.errors.push(format!("{id}: {reason}"));
            }
        }
        self.outcomes.push(outcome);
    }

    pub fn processed(&self) -> usize {
        self.outcomes.len()
    }

    pub fn failed(&self) -> usize {
        self.errors.len()
    }
}

/// Emitted after each chunk with cumulative counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConversionProgress {
    pub chunk: usize,
    pub converted: usize,
    pub processed: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunPhase {
    Scanning,
    Converting,
    Done,
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Scanning => "scanning",
            Self::Converting => "converting",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}
