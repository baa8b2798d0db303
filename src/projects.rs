use crate::content::{Project, ProjectCategory, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Ai,
    Devops,
}

impl ProjectFilter {
    pub const ALL: [ProjectFilter; 3] = [ProjectFilter::All, ProjectFilter::Ai, ProjectFilter::Devops];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Ai => "AI/ML",
            ProjectFilter::Devops => "DevOps",
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Ai => project.category == ProjectCategory::Ai,
            ProjectFilter::Devops => project.category == ProjectCategory::Devops,
        }
    }

    pub fn count(&self) -> usize {
        PROJECTS.iter().filter(|p| self.matches(p)).count()
    }

    pub fn next(&self) -> Self {
        match self {
            ProjectFilter::All => ProjectFilter::Ai,
            ProjectFilter::Ai => ProjectFilter::Devops,
            ProjectFilter::Devops => ProjectFilter::All,
        }
    }
}

/// Selection and filter state of the projects section.
#[derive(Debug)]
pub struct ProjectsView {
    pub filter: ProjectFilter,
    pub selected: usize,
    pub detail_open: bool,
}

impl ProjectsView {
    pub fn new() -> Self {
        Self {
            filter: ProjectFilter::All,
            selected: 0,
            detail_open: false,
        }
    }

    pub fn visible(&self) -> Vec<&'static Project> {
        PROJECTS.iter().filter(|p| self.filter.matches(p)).collect()
    }

    pub fn selected_project(&self) -> Option<&'static Project> {
        self.visible().get(self.selected).copied()
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
        self.detail_open = false;
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
    }

    pub fn toggle_detail(&mut self) {
        if self.selected_project().is_some() {
            self.detail_open = !self.detail_open;
        }
    }
}

impl Default for ProjectsView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_counts() {
        assert_eq!(ProjectFilter::All.count(), 3);
        assert_eq!(ProjectFilter::Ai.count(), 2);
        assert_eq!(ProjectFilter::Devops.count(), 1);
    }

    #[test]
    fn test_cycle_filter_resets_selection() {
        let mut view = ProjectsView::new();
        view.select_next();
        view.toggle_detail();
        assert!(view.detail_open);
        view.cycle_filter();
        assert_eq!(view.filter, ProjectFilter::Ai);
        assert_eq!(view.selected, 0);
        assert!(!view.detail_open);
        let titles: Vec<&str> = view.visible().iter().map(|p| p.title).collect();
        assert_eq!(titles, vec!["AI-Powered DevOps Assistant", "GenAI Code Review Agent"]);
    }

    #[test]
    fn test_selection_wraps() {
        let mut view = ProjectsView::new();
        view.select_prev();
        assert_eq!(view.selected, 2);
        view.select_next();
        assert_eq!(view.selected, 0);
        view.filter = ProjectFilter::Devops;
        view.select_next();
        assert_eq!(view.selected_project().map(|p| p.id), Some(2));
    }
}
