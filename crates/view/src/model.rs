use serde::{Deserialize, Serialize};

/// A single stack frame span in the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Span {
    /// Unique identifier within this profile.
    pub id: u64,
    /// Display name (function, component, etc.).
    pub name: String,
    /// Start time in logical units from profile start.
    pub start: f64,
    /// End time in logical units from profile start.
    pub end: f64,
    /// Stack depth (0 = top-level).
    pub depth: u32,
    /// Index of the parent span, if any.
    pub parent: Option<u64>,
    /// Self time (exclusive of children).
    pub self_time: f64,
    /// Optional category for grouping / coloring.
    pub category: Option<String>,
}

impl Span {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileMetadata {
    pub name: Option<String>,
    pub start_time: f64,
    pub end_time: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub metadata: ProfileMetadata,
    pub spans: Vec<Span>,
}

impl Profile {
    pub fn duration(&self) -> f64 {
        self.metadata.end_time - self.metadata.start_time
    }

    /// Number of stack rows: one past the deepest span, 0 for an empty
    /// profile.
    pub fn depth_rows(&self) -> u32 {
        self.spans.iter().map(|s| s.depth + 1).max().unwrap_or(0)
    }

    /// The smallest positive span duration — the narrowest width a zoomed
    /// view still needs to distinguish. Falls back to the full duration
    /// (then 1.0) for degenerate profiles.
    pub fn min_span_duration(&self) -> f64 {
        let min = self
            .spans
            .iter()
            .map(Span::duration)
            .filter(|d| *d > 0.0)
            .fold(f64::INFINITY, f64::min);
        if min.is_finite() {
            return min;
        }
        let duration = self.duration();
        if duration > 0.0 { duration } else { 1.0 }
    }

    /// Get a span by its id.
    pub fn span(&self, id: u64) -> Option<&Span> {
        self.spans.iter().find(|s| s.id == id)
    }
}
