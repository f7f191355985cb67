// SPDX-License-Identifier: MPL-2.0
//! In-memory scene graph implementing [`Surface`].
//!
//! Nodes and their attributes are kept in a map; animations progress when
//! the host calls [`RetainedSurface::advance`] (typically from a tick
//! subscription), which returns the completion events that became due.

use super::{Animation, NodeId, NodeKind, NodeSpec, Surface};
use crate::notification::Event;
use std::collections::HashMap;
use std::f32::consts::TAU;
use std::time::Duration;

/// Spinner rotation speed, in turns per second.
const SPINNER_TURNS_PER_SEC: f32 = 1.0;

/// A node and its current attributes.
#[derive(Debug, Clone)]
pub struct Node {
    spec: NodeSpec,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    text: String,
    image: Option<String>,
    visible: bool,
    opacity: f32,
    scale: f32,
    listening: bool,
}

impl Node {
    fn new(spec: NodeSpec) -> Self {
        Self {
            spec,
            parent: None,
            children: Vec::new(),
            text: String::new(),
            image: None,
            visible: spec.visible,
            opacity: spec.opacity,
            scale: 1.0,
            listening: false,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.spec.kind
    }

    #[must_use]
    pub fn width(&self) -> Option<f32> {
        self.spec.width
    }

    #[must_use]
    pub fn height(&self) -> Option<f32> {
        self.spec.height
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn touch_enabled(&self) -> bool {
        self.spec.touch_enabled
    }

    /// Whether a tap listener is attached to this node.
    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

#[derive(Debug, Clone)]
struct Running {
    node: NodeId,
    from_opacity: f32,
    from_scale: f32,
    target: Animation,
    elapsed: Duration,
    on_complete: Option<Event>,
}

/// Retained scene graph with a single root container.
#[derive(Debug, Clone)]
pub struct RetainedSurface {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    root: NodeId,
    running: Vec<Running>,
    spinner_rotation: f32,
}

impl Default for RetainedSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RetainedSurface {
    /// Creates a surface holding only its root container.
    #[must_use]
    pub fn new() -> Self {
        let mut surface = Self {
            nodes: HashMap::new(),
            next_id: 0,
            root: NodeId(0),
            running: Vec::new(),
            spinner_rotation: 0.0,
        };
        surface.root = surface.create(NodeSpec::container());
        surface
    }

    /// The window-level container, a valid parent for notifications.
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns whether `child` is attached directly under `parent`.
    #[must_use]
    pub fn is_attached(&self, parent: NodeId, child: NodeId) -> bool {
        self.nodes
            .get(&child)
            .is_some_and(|node| node.parent == Some(parent))
    }

    /// Returns whether an animation is running on `node`.
    #[must_use]
    pub fn is_animating(&self, node: NodeId) -> bool {
        self.running.iter().any(|r| r.node == node)
    }

    /// Returns whether any animation is running.
    #[must_use]
    pub fn has_animations(&self) -> bool {
        !self.running.is_empty()
    }

    /// Current spinner angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Progresses every running animation by `elapsed` and returns the
    /// completion events of the ones that finished, in start order.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Event> {
        self.spinner_rotation =
            (self.spinner_rotation + elapsed.as_secs_f32() * SPINNER_TURNS_PER_SEC * TAU) % TAU;

        let mut completed = Vec::new();
        let nodes = &mut self.nodes;
        self.running.retain_mut(|running| {
            running.elapsed += elapsed;
            let progress = if running.target.duration.is_zero() {
                1.0
            } else {
                (running.elapsed.as_secs_f32() / running.target.duration.as_secs_f32()).min(1.0)
            };

            let finished = progress >= 1.0;
            if let Some(node) = nodes.get_mut(&running.node) {
                node.opacity = lerp(running.from_opacity, running.target.opacity, progress);
                if let Some(scale) = running.target.scale {
                    node.scale = lerp(running.from_scale, scale, progress);
                }
            }

            if finished {
                completed.extend(running.on_complete);
            }
            !finished
        });
        completed
    }

    /// Simulates a tap on `node`.
    ///
    /// The tap bubbles up through the ancestors; returns [`Event::Tapped`] if
    /// any of them listens.
    #[must_use]
    pub fn tap(&self, node: NodeId) -> Option<Event> {
        let mut current = Some(node);
        while let Some(id) = current {
            let node = self.nodes.get(&id)?;
            if node.listening {
                return Some(Event::Tapped);
            }
            current = node.parent;
        }
        None
    }

    fn detach(&mut self, child: NodeId) {
        let Some(parent) = self.nodes.get_mut(&child).and_then(|node| node.parent.take()) else {
            return;
        };
        if let Some(parent) = self.nodes.get_mut(&parent) {
            parent.children.retain(|id| *id != child);
        }
    }
}

impl Surface for RetainedSurface {
    fn create(&mut self, spec: NodeSpec) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(spec));
        id
    }

    fn is_container(&self, node: NodeId) -> bool {
        self.nodes
            .get(&node)
            .is_some_and(|node| node.kind() == NodeKind::Container)
    }

    fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|node| node.parent);
        }
        false
    }

    fn add_child(&mut self, parent: NodeId, child: NodeId) {
        if !self.is_container(parent) || !self.nodes.contains_key(&child) {
            return;
        }
        if self.contains(child, parent) {
            return;
        }
        if self.is_attached(parent, child) {
            return;
        }
        self.detach(child);
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.nodes.get_mut(&parent) {
            node.children.push(child);
        }
    }

    fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.is_attached(parent, child) {
            self.detach(child);
        }
    }

    fn destroy(&mut self, node: NodeId) {
        if node == self.root {
            return;
        }
        self.detach(node);

        let mut pending = vec![node];
        while let Some(id) = pending.pop() {
            if let Some(removed) = self.nodes.remove(&id) {
                pending.extend(removed.children);
            }
        }
        let nodes = &self.nodes;
        self.running.retain(|r| nodes.contains_key(&r.node));
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.text = text.to_string();
        }
    }

    fn set_image(&mut self, node: NodeId, source: &str) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.image = Some(source.to_string());
        }
    }

    fn set_visible(&mut self, node: NodeId, visible: bool) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.visible = visible;
        }
    }

    fn set_scale(&mut self, node: NodeId, scale: f32) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.scale = scale;
        }
    }

    fn animate(&mut self, node: NodeId, animation: Animation, on_complete: Option<Event>) {
        let Some(current) = self.nodes.get(&node) else {
            return;
        };
        let running = Running {
            node,
            from_opacity: current.opacity,
            from_scale: current.scale,
            target: animation,
            elapsed: Duration::ZERO,
            on_complete,
        };
        self.running.retain(|r| r.node != node);
        self.running.push(running);
    }

    fn set_tap_listener(&mut self, node: NodeId, listening: bool) {
        if let Some(node) = self.nodes.get_mut(&node) {
            node.listening = listening;
        }
    }
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    if t >= 1.0 {
        to
    } else {
        from + (to - from) * t
    }
}
