use std::fs;
use std::io;
use std::path::Path;

use log::{info, warn};

/// Labels used when the label file cannot be read, in classifier output order.
pub const DEFAULT_LABELS: [&str; 9] = [
    "CPU",
    "GPU",
    "RAM",
    "Motherboard",
    "Sata SSD",
    "NVMe SSD",
    "HDD",
    "PSU",
    "Air Cooling",
];

/// Ordered class names; position `i` names the classifier's output `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelList {
    labels: Vec<String>,
}

impl Default for LabelList {
    fn default() -> Self {
        Self {
            labels: DEFAULT_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl LabelList {
    pub fn new(labels: Vec<impl Into<String>>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses a label file: one label per line, blank lines skipped.
    ///
    /// Teachable Machine exports prefix each line with its output index
    /// (`"0 CPU"`); the index is stripped.
    pub fn parse(contents: &str) -> Self {
        let labels = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(strip_index)
            .map(str::to_string)
            .collect();
        Self { labels }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::parse(&contents))
    }

    /// Reads the label file, falling back to [`DEFAULT_LABELS`] when it is
    /// missing or unreadable.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(labels) if !labels.is_empty() => {
                info!("Successfully loaded {} labels from: {:?}", labels.len(), path);
                labels
            }
            Ok(_) => {
                warn!("Labels file at {:?} is empty. Using default labels.", path);
                Self::default()
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("Labels file not found at {:?}. Using default labels.", path);
                Self::default()
            }
            Err(e) => {
                warn!("Error reading labels file from {:?}: {}. Using default labels.", path, e);
                Self::default()
            }
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

fn strip_index(line: &str) -> &str {
    match line.split_once(char::is_whitespace) {
        Some((head, rest)) if head.chars().all(|c| c.is_ascii_digit()) => rest.trim_start(),
        _ => line,
    }
}
