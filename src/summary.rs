/// Aggregate result of one processed batch.
///
/// Built once per drop, immutable afterwards, consumed once by whichever
/// front end presents it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub removed: usize,
    pub not_present: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.removed + self.not_present + self.failed
    }

    /// Gates both the alert styling and the auto-quit timer.
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }

    pub fn title(&self) -> &'static str {
        if self.has_failures() {
            "Error"
        } else {
            "Success"
        }
    }

    pub fn message(&self) -> String {
        if self.has_failures() {
            if self.failed == 1 && self.removed == 0 && self.not_present == 0 {
                "Failed to remove the quarantine attribute from the file.".to_string()
            } else {
                format!(
                    "Failed to process {} {}.",
                    self.failed,
                    plural("file", self.failed)
                )
            }
        } else if self.removed > 0 && self.not_present == 0 {
            if self.removed == 1 {
                "Quarantine attribute removed.".to_string()
            } else {
                format!("Quarantine attribute removed from {} files.", self.removed)
            }
        } else if self.removed == 0 && self.not_present > 0 {
            if self.not_present == 1 {
                "The file has no quarantine attribute.".to_string()
            } else {
                format!("{} files had no quarantine attribute.", self.not_present)
            }
        } else {
            format!(
                "Processed {} files: {} removed, {} had no quarantine attribute.",
                self.total(),
                self.removed,
                self.not_present
            )
        }
    }
}

fn plural(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
