use super::{Alignment, OrderedContainer};
use crate::component::ComponentId;
use crate::error::ToolkitError;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// A vertical or horizontal box layout.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedLayout {
    orientation: Orientation,
    components: Vec<ComponentId>,
    alignments: HashMap<ComponentId, Alignment>,
    expand_ratios: HashMap<ComponentId, f32>,
}

impl OrderedLayout {
    pub fn new(orientation: Orientation) -> OrderedLayout {
        OrderedLayout {
            orientation,
            components: Vec::new(),
            alignments: HashMap::new(),
            expand_ratios: HashMap::new(),
        }
    }

    pub fn vertical() -> OrderedLayout {
        OrderedLayout::new(Orientation::Vertical)
    }

    pub fn horizontal() -> OrderedLayout {
        OrderedLayout::new(Orientation::Horizontal)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn components(&self) -> &[ComponentId] {
        &self.components
    }

    pub fn alignment_of(&self, component: ComponentId) -> Option<Alignment> {
        self.alignments.get(&component).copied()
    }

    /// Expand ratio of a component; zero if never set.
    pub fn expand_ratio_of(&self, component: ComponentId) -> f32 {
        self.expand_ratios.get(&component).copied().unwrap_or(0.)
    }

    fn check_member(&self, component: ComponentId) -> Result<(), ToolkitError> {
        if self.components.contains(&component) {
            Ok(())
        } else {
            Err(ToolkitError::UnknownComponent(component))
        }
    }
}

impl OrderedContainer for OrderedLayout {
    fn add_component(&mut self, component: ComponentId) {
        self.components.retain(|c| *c != component);
        self.components.push(component);
    }

    fn set_component_alignment(
        &mut self,
        component: ComponentId,
        alignment: Alignment,
    ) -> Result<(), ToolkitError> {
        self.check_member(component)?;
        self.alignments.insert(component, alignment);
        Ok(())
    }

    fn set_expand_ratio(
        &mut self,
        component: ComponentId,
        ratio: f32,
    ) -> Result<(), ToolkitError> {
        self.check_member(component)?;
        self.expand_ratios.insert(component, ratio);
        Ok(())
    }
}
