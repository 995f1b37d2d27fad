use super::TabContainer;
use crate::component::ComponentId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub component: ComponentId,
    pub caption: String,
}

/// A tabbed container; tabs keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSheet {
    tabs: Vec<Tab>,
}

impl TabSheet {
    pub fn new() -> TabSheet {
        TabSheet::default()
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }
}

impl TabContainer for TabSheet {
    fn add_tab(&mut self, component: ComponentId, caption: &str) -> usize {
        self.tabs.push(Tab {
            component,
            caption: caption.to_string(),
        });
        self.tabs.len() - 1
    }
}
