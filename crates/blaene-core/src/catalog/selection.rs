use std::collections::BTreeSet;

/// The category labels the shopper has switched on.
///
/// Toggles that carry no label still count as active filters. They match no
/// category, so while any is on only the labelled members get through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    labels: BTreeSet<String>,
    unlabelled: usize,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `label`. Returns `true` when the label is now active.
    pub fn toggle(&mut self, label: &str) -> bool {
        if self.labels.remove(label) {
            false
        } else {
            self.labels.insert(label.to_string());
            true
        }
    }

    /// Record how many active toggles have no label.
    pub fn set_unlabelled(&mut self, count: usize) {
        self.unlabelled = count;
    }

    pub fn unlabelled(&self) -> usize {
        self.unlabelled
    }

    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty() && self.unlabelled == 0
    }

    /// Active filters, labelled or not.
    pub fn len(&self) -> usize {
        self.labels.len() + self.unlabelled
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// No active label lets every category through.
    pub fn admits(&self, category: &str) -> bool {
        self.is_empty() || self.contains(category)
    }
}

impl<S: Into<String>> FromIterator<S> for FilterSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().map(Into::into).collect(),
            unlabelled: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_membership() {
        let mut selection = FilterSelection::new();
        assert!(selection.toggle("ring"));
        assert!(selection.contains("ring"));
        assert!(!selection.toggle("ring"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_empty_selection_admits_everything() {
        let selection = FilterSelection::new();
        assert!(selection.admits("ring"));
        assert!(selection.admits(""));
    }

    #[test]
    fn test_selection_admits_only_members() {
        let selection: FilterSelection = ["ring", "necklace"].into_iter().collect();
        assert_eq!(selection.len(), 2);
        assert!(selection.admits("necklace"));
        assert!(!selection.admits("bracelet"));
        assert!(!selection.admits(""));
    }

    #[test]
    fn test_unlabelled_filters_admit_nothing_on_their_own() {
        let mut selection = FilterSelection::new();
        selection.set_unlabelled(1);
        assert!(!selection.is_empty());
        assert_eq!(selection.len(), 1);
        assert!(!selection.admits("ring"));
        assert!(!selection.admits(""));

        selection.toggle("ring");
        assert!(selection.admits("ring"));
        assert!(!selection.admits("necklace"));

        selection.toggle("ring");
        selection.set_unlabelled(0);
        assert!(selection.is_empty());
        assert!(selection.admits("necklace"));
    }
}
