/// The active tab out of a fixed set, with wrap-around navigation.
#[derive(Debug, Clone, Copy)]
pub struct TabBar<T: Copy + PartialEq + 'static> {
    tabs: &'static [T],
    active: usize,
}

impl<T: Copy + PartialEq + 'static> TabBar<T> {
    /// Creates a new `TabBar` with the first tab active.
    ///
    /// # Arguments
    /// * `tabs` - The tabs in display order, must not be empty.
    pub fn new(tabs: &'static [T]) -> Self {
        assert!(!tabs.is_empty(), "a tab bar needs at least one tab");
        Self { tabs, active: 0 }
    }

    pub fn tabs(&self) -> &'static [T] {
        self.tabs
    }

    pub fn active(&self) -> T {
        self.tabs[self.active]
    }

    pub fn index(&self) -> usize {
        self.active
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1) % self.tabs.len();
    }

    pub fn previous(&mut self) {
        self.active = (self.active + self.tabs.len() - 1) % self.tabs.len();
    }

    /// Activates `tab`, returns whether it was found.
    pub fn select(&mut self, tab: T) -> bool {
        match self.tabs.iter().position(|t| *t == tab) {
            Some(i) => {
                self.active = i;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use synthetic::Algorithm;

    #[test]
    fn navigation_wraps() {
        let mut bar = TabBar::new(&Algorithm::ALL);
        assert_eq!(bar.active(), Algorithm::XgBoost);
        bar.previous();
        assert_eq!(bar.active(), Algorithm::Svm);
        bar.next();
        bar.next();
        assert_eq!(bar.active(), Algorithm::Knn);
    }

    #[test]
    fn select_by_value() {
        let mut bar = TabBar::new(&Algorithm::ALL);
        assert!(bar.select(Algorithm::RandomForest));
        assert_eq!(bar.index(), 3);
    }
}
