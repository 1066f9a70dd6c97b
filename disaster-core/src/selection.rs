use crate::category::Category;

/// Categories currently selected in the legend.
///
/// Insertion order is kept so the published list matches the click order.
/// An empty selection means "no filter": every record is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    categories: Vec<Category>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the category if absent, remove it if present.
    ///
    /// Returns `true` when the category is selected afterwards.
    pub fn toggle(&mut self, category: Category) -> bool {
        match self.categories.iter().position(|c| *c == category) {
            Some(pos) => {
                self.categories.remove(pos);
                false
            }
            None => {
                self.categories.push(category);
                true
            }
        }
    }

    pub fn contains(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The full current selection, the payload of a "categories changed" event.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = SelectionState::new();
        assert!(selection.toggle(Category::Flooding));
        assert!(selection.contains(Category::Flooding));
        assert!(!selection.toggle(Category::Flooding));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection = SelectionState::new();
        selection.toggle(Category::Flooding);
        selection.toggle(Category::SevereStorm);
        let before = selection.clone();

        selection.toggle(Category::TropicalCyclone);
        selection.toggle(Category::TropicalCyclone);
        assert_eq!(selection, before);
    }

    #[test]
    fn categories_keep_click_order() {
        let mut selection = SelectionState::new();
        selection.toggle(Category::SevereStorm);
        selection.toggle(Category::WinterStormFreeze);
        assert_eq!(
            selection.categories(),
            &[Category::SevereStorm, Category::WinterStormFreeze]
        );
    }
}
