use web_sys::Element;
use yew::NodeRef;

pub const ACTIVE_CLASS: &str = "active";

/// A visual unit the slider can mark as current or not.
pub trait Indicator {
    fn activate(&self);
    fn deactivate(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Slide,
    Dot,
}

/// Toggles the `active` class (and the matching aria attribute) on a
/// rendered element.
pub struct ClassIndicator {
    node: NodeRef,
    role: Role,
}

impl ClassIndicator {
    pub fn slide(node: NodeRef) -> Self {
        Self { node, role: Role::Slide }
    }

    pub fn dot(node: NodeRef) -> Self {
        Self { node, role: Role::Dot }
    }

    fn apply(&self, active: bool) {
        // not mounted yet, or already gone
        if let Some(element) = self.node.cast::<Element>() {
            mark(&element, self.role, active);
        }
    }
}

impl Indicator for ClassIndicator {
    fn activate(&self) {
        self.apply(true);
    }

    fn deactivate(&self) {
        self.apply(false);
    }
}

pub fn aria_attribute(role: Role, active: bool) -> (&'static str, &'static str) {
    match role {
        Role::Slide => ("aria-hidden", if active { "false" } else { "true" }),
        Role::Dot => ("aria-selected", if active { "true" } else { "false" }),
    }
}

/// Applies the active/inactive marking to one element.
pub fn mark(element: &Element, role: Role, active: bool) {
    if let Err(e) = element.class_list().toggle_with_force(ACTIVE_CLASS, active) {
        log::warn!("Failed to toggle slider class: {:?}", e);
    }
    let (name, value) = aria_attribute(role, active);
    if let Err(e) = element.set_attribute(name, value) {
        log::warn!("Failed to set {} on slider element: {:?}", name, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slides_hide_from_assistive_tech_when_inactive() {
        assert_eq!(aria_attribute(Role::Slide, true), ("aria-hidden", "false"));
        assert_eq!(aria_attribute(Role::Slide, false), ("aria-hidden", "true"));
    }

    #[test]
    fn dots_report_selection() {
        assert_eq!(aria_attribute(Role::Dot, true), ("aria-selected", "true"));
        assert_eq!(aria_attribute(Role::Dot, false), ("aria-selected", "false"));
    }

    #[test]
    fn unmounted_indicator_is_ignored() {
        let indicator = ClassIndicator::dot(NodeRef::default());
        indicator.activate();
        indicator.deactivate();
    }
}
