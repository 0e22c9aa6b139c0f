/// A collapsible section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub body: &'static str,
    pub open: bool,
}

/// A list of collapsible sections with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disclosure {
    sections: Vec<Section>,
    cursor: usize,
}

impl Disclosure {
    /// Creates a new `Disclosure`, every section starts closed.
    pub fn new(sections: &[(&'static str, &'static str)]) -> Self {
        let sections = sections
            .iter()
            .map(|&(title, body)| Section {
                title,
                body,
                open: false,
            })
            .collect();

        Self { sections, cursor: 0 }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.sections.get(index).is_some_and(|s| s.open)
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(section) = self.sections.get_mut(index) {
            section.open = !section.open;
        }
    }

    pub fn toggle_selected(&mut self) {
        self.toggle(self.cursor);
    }

    pub fn expand_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.open = true);
    }

    pub fn collapse_all(&mut self) {
        self.sections.iter_mut().for_each(|s| s.open = false);
    }

    pub fn select_next(&mut self) {
        if self.cursor + 1 < self.sections.len() {
            self.cursor += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Disclosure {
        Disclosure::new(&[("a", "first"), ("b", "second"), ("c", "third")])
    }

    #[test]
    fn starts_closed_and_toggles() {
        let mut d = sample();
        assert!(!d.is_open(0));
        d.toggle(0);
        assert!(d.is_open(0));
        d.toggle(0);
        assert!(!d.is_open(0));
        assert!(!d.is_open(10));
    }

    #[test]
    fn cursor_is_bounded() {
        let mut d = sample();
        d.select_previous();
        assert_eq!(d.cursor(), 0);
        for _ in 0..5 {
            d.select_next();
        }
        assert_eq!(d.cursor(), 2);
        d.toggle_selected();
        assert!(d.is_open(2));
    }

    #[test]
    fn expand_and_collapse_all() {
        let mut d = sample();
        d.expand_all();
        assert!(d.sections().iter().all(|s| s.open));
        d.collapse_all();
        assert!(d.sections().iter().all(|s| !s.open));
    }
}
