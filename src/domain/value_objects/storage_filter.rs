/// Include/ignore name filter for storage entries.
///
/// A non-empty include list takes exclusive precedence: the ignore list is
/// then never consulted, even when it names the same entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StorageFilter {
    ignore: Vec<String>,
    include: Vec<String>,
}

impl StorageFilter {
    #[must_use]
    pub fn new(ignore: Vec<String>, include: Vec<String>) -> Self {
        Self { ignore, include }
    }

    /// Whether the named storage should be checked.
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        if self.include.is_empty() {
            !self.ignore.iter().any(|entry| entry == name)
        } else {
            self.include.iter().any(|entry| entry == name)
        }
    }
}
