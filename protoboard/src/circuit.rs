//! Circuit document lifecycle operations.
//!
//! The one rule with teeth lives here: removing a component must never leave
//! a net pointing at it. Every node referencing the removed component is
//! stripped, and a net stripped down to zero nodes is deleted outright.

use crate::schema::{Circuit, Component, Net};

impl Circuit {
    /// Look up a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    /// Look up a net by id.
    pub fn net(&self, id: &str) -> Option<&Net> {
        self.nets.iter().find(|n| n.id == id)
    }

    pub fn add_component(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn add_net(&mut self, net: Net) {
        self.nets.push(net);
    }

    /// Remove a component and prune every net that references it.
    ///
    /// Nodes naming the removed component are stripped from their nets; a net
    /// stripped down to zero nodes is deleted. Nets the component never
    /// touched are left alone, so removing an unknown id is a strict no-op.
    pub fn remove_component(&mut self, id: &str) {
        self.components.retain(|c| c.id != id);
        self.nets.retain_mut(|net| {
            let before = net.nodes.len();
            net.nodes.retain(|node| node.component != id);
            net.nodes.len() == before || !net.nodes.is_empty()
        });
    }

    /// Remove a net by id. Unknown ids are a no-op.
    pub fn remove_net(&mut self, id: &str) {
        self.nets.retain(|n| n.id != id);
    }
}
