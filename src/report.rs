//! Report assembly over a completed index.
//!
//! The reporter only reads: it snapshots the index's in-order traversal into
//! a serializable result that the output layer renders. Entry order is
//! ascending by key; duplicate order is arrival order.

use serde::Serialize;

use crate::index::DedupIndex;
use crate::output::Outputable;

/// Result structure for a dedup run - entries grouped by key
#[derive(Debug, Clone, Serialize)]
pub struct DedupReport {
    pub total_entries: usize,
    pub total_duplicates: usize,
    pub lines_read: usize,
    pub malformed_lines: usize,
    pub entries: Vec<ReportEntry>,
}

/// One canonical full name with its same-key duplicates
#[derive(Debug, Clone, Serialize)]
pub struct ReportEntry {
    pub full_name: String,
    pub first_name: String,
    pub key: u64,
    pub duplicates: Vec<String>,
}

impl DedupReport {
    /// Snapshot `index` in ascending key order, duplicates in arrival order.
    pub fn from_index(index: &DedupIndex, lines_read: usize, malformed_lines: usize) -> Self {
        let entries: Vec<ReportEntry> = index
            .entries()
            .map(|entry| ReportEntry {
                full_name: entry.full_name.clone(),
                first_name: entry.first_name.clone(),
                key: entry.key,
                duplicates: entry
                    .duplicates
                    .iter()
                    .map(|d| d.full_name.clone())
                    .collect(),
            })
            .collect();
        let total_duplicates = entries.iter().map(|e| e.duplicates.len()).sum();

        Self {
            total_entries: entries.len(),
            total_duplicates,
            lines_read,
            malformed_lines,
            entries,
        }
    }
}

impl Outputable for DedupReport {
    fn to_table(&self) -> String {
        let mut lines = Vec::new();

        lines.push("Unique First Names".to_string());
        lines.push(String::new());

        if self.entries.is_empty() {
            lines.push("No entries found.".to_string());
        } else {
            lines.push(format!(
                "Found {} unique first name(s) ({} duplicate(s) total):",
                self.total_entries, self.total_duplicates
            ));
            lines.push(String::new());

            for (idx, entry) in self.entries.iter().enumerate() {
                lines.push(format!(
                    "Entry {} - {} (first name: {}, key: {})",
                    idx + 1,
                    entry.full_name,
                    entry.first_name,
                    entry.key
                ));

                for duplicate in &entry.duplicates {
                    lines.push(format!("  duplicate: {}", duplicate));
                }
            }
        }

        if self.malformed_lines > 0 {
            lines.push(String::new());
            lines.push(format!(
                "Skipped {} malformed line(s) of {} read.",
                self.malformed_lines, self.lines_read
            ));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;

    fn sample_report() -> DedupReport {
        DedupReport {
            total_entries: 2,
            total_duplicates: 1,
            lines_read: 3,
            malformed_lines: 0,
            entries: vec![
                ReportEntry {
                    full_name: "Bob Jones".to_string(),
                    first_name: "Bob".to_string(),
                    key: 100,
                    duplicates: vec![],
                },
                ReportEntry {
                    full_name: "Alice Smith".to_string(),
                    first_name: "Alice".to_string(),
                    key: 200,
                    duplicates: vec!["Alice Cooper".to_string()],
                },
            ],
        }
    }

    #[test]
    fn test_to_table_empty() {
        let report = DedupReport {
            total_entries: 0,
            total_duplicates: 0,
            lines_read: 1,
            malformed_lines: 0,
            entries: vec![],
        };

        let output = report.to_table();
        assert!(output.contains("Unique First Names"));
        assert!(output.contains("No entries found"));
    }

    #[test]
    fn test_to_table_lists_entries_and_duplicates() {
        let output = sample_report().to_table();
        assert!(output.contains("Found 2 unique first name(s) (1 duplicate(s) total)"));
        assert!(output.contains("Bob Jones"));
        assert!(output.contains("Alice Smith"));
        assert!(output.contains("first name: Alice, key: 200"));
        assert!(output.contains("  duplicate: Alice Cooper"));
    }

    #[test]
    fn test_to_table_reports_skipped_lines() {
        let report = DedupReport {
            total_entries: 0,
            total_duplicates: 0,
            lines_read: 2,
            malformed_lines: 2,
            entries: vec![],
        };

        let output = report.to_table();
        assert!(output.contains("Skipped 2 malformed line(s) of 2 read"));
    }

    #[test]
    fn test_format_json() {
        let output = sample_report().format(OutputFormat::Json);
        assert!(output.contains("total_entries"));
        assert!(output.contains("total_duplicates"));
        assert!(output.contains("\"key\": 200"));
        assert!(output.contains("Alice Cooper"));
    }

    #[test]
    fn test_from_index_preserves_order() {
        use crate::hash::first_name_key;
        use crate::index::DedupIndex;

        let mut index = DedupIndex::new();
        for line in ["Alice Smith", "Bob Jones", "Alice Cooper"] {
            let (first, _) = line.split_once(' ').unwrap();
            index.insert_or_merge(
                first_name_key(first.as_bytes()),
                line.to_string(),
                first.to_string(),
            );
        }

        let report = DedupReport::from_index(&index, 3, 0);
        assert_eq!(report.total_entries, 2);
        assert_eq!(report.total_duplicates, 1);

        let keys: Vec<u64> = report.entries.iter().map(|e| e.key).collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);

        let alice = report
            .entries
            .iter()
            .find(|e| e.first_name == "Alice")
            .unwrap();
        assert_eq!(alice.duplicates, vec!["Alice Cooper".to_string()]);
    }
}
