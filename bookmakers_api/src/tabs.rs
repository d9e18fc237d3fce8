//! Tab controls: active-state tracking and sort parameter extraction.

use url::Url;

use crate::sort::SortMode;

/// One tab control, identified by the href its link carries.
#[derive(Clone, Debug)]
pub struct Tab {
    href: String,
}

impl Tab {
    pub fn new(href: impl Into<String>) -> Self {
        Self { href: href.into() }
    }

    pub fn href(&self) -> &str {
        &self.href
    }

    /// Resolves the href against `base` and maps its `type` and `id`
    /// query parameters to a sort mode. An href that does not resolve
    /// behaves like a link with no parameters; no error originates here.
    pub fn sort_mode(&self, base: &Url) -> SortMode {
        let Ok(url) = base.join(&self.href) else {
            return SortMode::from_params(None, None);
        };
        let mut sort_type = None;
        let mut subrating_id = None;
        // First occurrence of each parameter wins; an empty value counts
        // as absent.
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                "type" if sort_type.is_none() && !value.is_empty() => {
                    sort_type = Some(value.into_owned())
                }
                "id" if subrating_id.is_none() && !value.is_empty() => {
                    subrating_id = Some(value.into_owned())
                }
                _ => {}
            }
        }
        SortMode::from_params(sort_type.as_deref(), subrating_id.as_deref())
    }
}

/// The fixed set of tab controls above the board.
///
/// At most one tab is active at a time; none is before the first
/// activation.
pub struct TabSet {
    base: Url,
    tabs: Vec<Tab>,
    active: Option<usize>,
}

impl TabSet {
    /// Builds the tab set over a fixed list of controls. `base` is the
    /// page location tab hrefs resolve against.
    pub fn new(base: Url, tabs: Vec<Tab>) -> Self {
        Self {
            base,
            tabs,
            active: None,
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Marks `index` as the only active tab and returns the sort mode
    /// its link selects. An out-of-range index leaves the set untouched.
    pub fn activate(&mut self, index: usize) -> Option<SortMode> {
        let tab = self.tabs.get(index)?;
        let mode = tab.sort_mode(&self.base);
        self.active = Some(index);
        Some(mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::Subrating;

    fn base() -> Url {
        Url::parse("https://ratings.example.com/bookmakers/").unwrap()
    }

    fn tab_set(hrefs: &[&str]) -> TabSet {
        TabSet::new(base(), hrefs.iter().map(|href| Tab::new(*href)).collect())
    }

    #[test]
    fn activation_is_mutually_exclusive() {
        let mut tabs = tab_set(&["?type=byuser", "?type=byeditors", "?type=bybonus"]);
        assert_eq!(tabs.active_index(), None);

        tabs.activate(1);
        assert!(tabs.is_active(1));
        assert!(!tabs.is_active(0));

        tabs.activate(2);
        assert!(tabs.is_active(2));
        assert!(!tabs.is_active(1));
        assert_eq!(tabs.active_index(), Some(2));
    }

    #[test]
    fn tab_set_exposes_its_controls() {
        let tabs = tab_set(&["?type=byuser", "?type=byeditors"]);
        let hrefs: Vec<&str> = tabs.tabs().iter().map(|t| t.href()).collect();
        assert_eq!(hrefs, vec!["?type=byuser", "?type=byeditors"]);
    }

    #[test]
    fn out_of_range_activation_is_a_no_op() {
        let mut tabs = tab_set(&["?type=byuser"]);
        tabs.activate(0);
        assert_eq!(tabs.activate(7), None);
        assert_eq!(tabs.active_index(), Some(0));
    }

    #[test]
    fn activation_extracts_the_sort_parameters() {
        let mut tabs = tab_set(&[
            "?type=byeditors",
            "?type=bysubrating&id=reliability",
            "/bookmakers?type=bybonus",
        ]);
        assert_eq!(tabs.activate(0), Some(SortMode::ByEditors));
        assert_eq!(
            tabs.activate(1),
            Some(SortMode::BySubrating(Subrating::Reliability))
        );
        assert_eq!(tabs.activate(2), Some(SortMode::ByBonus));
    }

    #[test]
    fn missing_or_empty_type_defaults_to_byuser() {
        let mut tabs = tab_set(&["#all", "?id=reliability", "?type="]);
        assert_eq!(tabs.activate(0), Some(SortMode::ByUser));
        assert_eq!(tabs.activate(1), Some(SortMode::ByUser));
        assert_eq!(tabs.activate(2), Some(SortMode::ByUser));
    }

    #[test]
    fn unknown_type_falls_through_to_unsorted() {
        let mut tabs = tab_set(&["?type=alphabetical"]);
        assert_eq!(tabs.activate(0), Some(SortMode::Unsorted));
    }

    #[test]
    fn unresolvable_href_behaves_like_a_bare_link() {
        let mut tabs = tab_set(&["https://["]);
        assert_eq!(tabs.activate(0), Some(SortMode::ByUser));
        assert!(tabs.is_active(0));
    }

    #[test]
    fn first_occurrence_of_a_parameter_wins() {
        let mut tabs = tab_set(&["?type=bybonus&type=byeditors"]);
        assert_eq!(tabs.activate(0), Some(SortMode::ByBonus));
    }
}
