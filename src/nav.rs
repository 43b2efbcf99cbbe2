//! Navigation state: hamburger menu, link selection and the section spy.
//!
//! Links are identified by their index in document order and carry the
//! `#<section-id>` href they point at.

/// Vertical extent of one page section, in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            top,
            height,
        }
    }

    /// Half-open spy range `(top - lead, top - lead + height]`
    fn contains(&self, scroll_y: f64, lead: f64) -> bool {
        let start = self.top - lead;
        scroll_y > start && scroll_y <= start + self.height
    }
}

/// Section id an anchor href points at (`"#about"` -> `"about"`)
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Smooth-scroll destination for a section under a fixed header
pub fn scroll_target(section_top: f64, header_offset: f64) -> f64 {
    section_top - header_offset
}

/// Navbar gets the `scrolled` class strictly past the threshold
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

/// Index of the section the viewer is in.
///
/// Adjacent sections produce contiguous, non-overlapping ranges. If the
/// layout makes ranges overlap, the last section in document order wins.
pub fn current_section(scroll_y: f64, sections: &[SectionBounds], lead: f64) -> Option<usize> {
    sections
        .iter()
        .rposition(|section| section.contains(scroll_y, lead))
}

#[derive(Clone, Debug, Default)]
pub struct NavState {
    hrefs: Vec<String>,
    active: Option<usize>,
    menu_open: bool,
}

impl NavState {
    pub fn new(hrefs: Vec<String>) -> Self {
        Self {
            hrefs,
            active: None,
            menu_open: false,
        }
    }

    pub fn len(&self) -> usize {
        self.hrefs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hrefs.is_empty()
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Hamburger press; returns the new menu state
    pub fn toggle_menu(&mut self) -> bool {
        self.menu_open = !self.menu_open;
        self.menu_open
    }

    /// Link click: activates the link, closes the menu, returns the
    /// section id to scroll to.
    pub fn select(&mut self, index: usize) -> Option<&str> {
        let href = self.hrefs.get(index)?;
        self.active = Some(index);
        self.menu_open = false;
        section_id(href)
    }

    /// Recompute the active link for a scroll position.
    ///
    /// Returns true when the active link changed. Positions outside every
    /// section leave the previous link active.
    pub fn spy(&mut self, scroll_y: f64, sections: &[SectionBounds], lead: f64) -> bool {
        let Some(current) = current_section(scroll_y, sections, lead) else {
            return false;
        };
        let id = sections[current].id.as_str();
        let next = self
            .hrefs
            .iter()
            .position(|href| section_id(href) == Some(id));

        let changed = next != self.active;
        self.active = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new("home", 0.0, 700.0),
            SectionBounds::new("about", 700.0, 600.0),
            SectionBounds::new("projects", 1300.0, 900.0),
            SectionBounds::new("contact", 2200.0, 500.0),
        ]
    }

    fn links() -> NavState {
        NavState::new(
            ["#home", "#about", "#projects", "#contact"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }

    #[test]
    fn test_scrolled_is_strict_threshold() {
        assert!(!is_scrolled(0.0, 100.0));
        assert!(!is_scrolled(100.0, 100.0));
        assert!(is_scrolled(100.5, 100.0));
        assert!(is_scrolled(5000.0, 100.0));
    }

    #[test]
    fn test_scroll_target_subtracts_header() {
        assert_eq!(scroll_target(700.0, 80.0), 620.0);
        assert_eq!(scroll_target(0.0, 80.0), -80.0);
    }

    #[test]
    fn test_section_id_requires_anchor() {
        assert_eq!(section_id("#about"), Some("about"));
        assert_eq!(section_id("#"), None);
        assert_eq!(section_id("/resume.pdf"), None);
    }

    #[test]
    fn test_spy_range_is_open_below_closed_above() {
        let sections = page();
        // about spans (600, 1200]
        assert_eq!(current_section(600.0, &sections, 100.0), Some(0));
        assert_eq!(current_section(600.5, &sections, 100.0), Some(1));
        assert_eq!(current_section(1200.0, &sections, 100.0), Some(1));
        assert_eq!(current_section(1200.5, &sections, 100.0), Some(2));
    }

    #[test]
    fn test_spy_overlap_prefers_later_section() {
        let sections = vec![
            SectionBounds::new("hero", 0.0, 1000.0),
            SectionBounds::new("about", 500.0, 500.0),
        ];
        assert_eq!(current_section(450.0, &sections, 100.0), Some(1));
        assert_eq!(current_section(300.0, &sections, 100.0), Some(0));
    }

    #[test]
    fn test_spy_gap_keeps_previous_link() {
        let sections = page();
        let mut nav = links();

        assert!(nav.spy(800.0, &sections, 100.0));
        assert_eq!(nav.active(), Some(1));

        // Past the end of the last section
        assert!(!nav.spy(10_000.0, &sections, 100.0));
        assert_eq!(nav.active(), Some(1));
    }

    #[test]
    fn test_spy_marks_at_most_one_link() {
        let sections = page();
        let mut nav = links();

        let mut y = -200.0;
        while y < 3000.0 {
            nav.spy(y, &sections, 100.0);
            let active = (0..nav.len()).filter(|&i| nav.is_active(i)).count();
            assert!(active <= 1, "{} links active at {}", active, y);
            y += 37.0;
        }
    }

    #[test]
    fn test_spy_section_without_link_clears_active() {
        let sections = page();
        let mut nav = NavState::new(vec!["#home".to_string()]);

        nav.spy(50.0, &sections, 100.0);
        assert_eq!(nav.active(), Some(0));

        assert!(nav.spy(800.0, &sections, 100.0));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn test_select_activates_and_closes_menu() {
        let mut nav = links();
        assert!(nav.toggle_menu());

        assert_eq!(nav.select(2), Some("projects"));
        assert!(nav.is_active(2));
        assert!(!nav.is_active(0));
        assert!(!nav.menu_open());
    }

    #[test]
    fn test_select_out_of_range_is_ignored() {
        let mut nav = links();
        nav.toggle_menu();

        assert_eq!(nav.select(9), None);
        assert_eq!(nav.active(), None);
        assert!(nav.menu_open());
    }

    #[test]
    fn test_menu_toggle_flips() {
        let mut nav = links();
        assert!(nav.toggle_menu());
        assert!(!nav.toggle_menu());
    }
}
