/// Tab identifiers for the dashboard.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Overview,
    Trends,
}

impl TabId {
    pub const ALL: [TabId; 2] = [TabId::Overview, TabId::Trends];

    pub fn name(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Trends => "Trends",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            TabId::Overview => 0,
            TabId::Trends => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(TabId::Overview),
            1 => Some(TabId::Trends),
            _ => None,
        }
    }

    /// The following tab, wrapping to the first
    pub fn next(&self) -> Self {
        Self::from_index((self.index() + 1) % Self::ALL.len()).unwrap_or_default()
    }
}
