use std::sync::{Arc, Mutex};

use postboard_types::{PostId, UserId};

/// Handle into the document arena.
///
/// Ids are never reused; a removed node's slot stays tombstoned, so a
/// stale handle resolves to nothing instead of to an unrelated node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single element in the virtual document.
#[derive(Debug, Clone)]
pub struct Node {
    pub tag: String,
    pub text: String,
    pub classes: Vec<String>,
    /// Post this node belongs to (the `data-post-id` tag of the source).
    pub post_tag: Option<PostId>,
    /// Select-option value, set only on `option` nodes.
    pub option_value: Option<UserId>,
    pub hidden: bool,
    pub disabled: bool,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            text: String::new(),
            classes: Vec::new(),
            post_tag: None,
            option_value: None,
            hidden: false,
            disabled: false,
            parent: None,
            children: Vec::new(),
        }
    }
}

/// The document shared between the controller, the listener registry
/// and whatever renders it.
pub type SharedDocument = Arc<Mutex<Document>>;

/// Arena-backed virtual document tree.
///
/// This is the rendering substrate the engine mutates: a select control
/// for the employee list and a main container for post entries, both
/// created up front. Subtrees are built detached (document-fragment
/// semantics) and only become visible once appended.
#[derive(Debug)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    select: NodeId,
    main: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            select: NodeId(0),
            main: NodeId(0),
        };
        doc.select = doc.create_element("select");
        doc.main = doc.create_element("main");
        doc
    }

    pub fn shared() -> SharedDocument {
        Arc::new(Mutex::new(Self::new()))
    }

    /// The employee select control.
    pub fn select(&self) -> NodeId {
        self.select
    }

    /// The main post container.
    pub fn main(&self) -> NodeId {
        self.main
    }

    // --- construction ---

    /// Create a detached element with the given tag.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(tag)));
        id
    }

    /// Append `child` under `parent`, detaching it from any previous
    /// parent first. No-ops if either node is gone.
    pub fn append(&mut self, parent: NodeId, child: NodeId) {
        if self.get(parent).is_none() || self.get(child).is_none() {
            return;
        }
        self.detach(child);
        if let Some(node) = self.get_mut(child) {
            node.parent = Some(parent);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.push(child);
        }
    }

    fn detach(&mut self, child: NodeId) {
        let old_parent = self.get(child).and_then(|n| n.parent);
        if let Some(parent) = old_parent
            && let Some(node) = self.get_mut(parent)
        {
            node.children.retain(|c| *c != child);
        }
        if let Some(node) = self.get_mut(child) {
            node.parent = None;
        }
    }

    /// Remove every child of `parent`, destroying the subtrees. Stale
    /// handles into a destroyed subtree resolve to nothing afterwards.
    pub fn clear_children(&mut self, parent: NodeId) {
        let children = match self.get(parent) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        if let Some(node) = self.get_mut(parent) {
            node.children.clear();
        }
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let children = match self.get(id) {
            Some(node) => node.children.clone(),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
        self.nodes[id.0] = None;
    }

    // --- attributes ---

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        if let Some(node) = self.get_mut(id) {
            node.text = text.to_string();
        }
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(node) = self.get_mut(id)
            && !node.classes.iter().any(|c| c == class)
        {
            node.classes.push(class.to_string());
        }
    }

    pub fn set_post_tag(&mut self, id: NodeId, post_id: PostId) {
        if let Some(node) = self.get_mut(id) {
            node.post_tag = Some(post_id);
        }
    }

    pub fn set_option_value(&mut self, id: NodeId, value: UserId) {
        if let Some(node) = self.get_mut(id) {
            node.option_value = Some(value);
        }
    }

    pub fn set_hidden(&mut self, id: NodeId, hidden: bool) {
        if let Some(node) = self.get_mut(id) {
            node.hidden = hidden;
        }
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|n| n.hidden)
    }

    pub fn set_select_disabled(&mut self, disabled: bool) {
        let select = self.select;
        if let Some(node) = self.get_mut(select) {
            node.disabled = disabled;
        }
    }

    pub fn select_disabled(&self) -> bool {
        self.get(self.select).is_some_and(|n| n.disabled)
    }

    // --- queries ---

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(|slot| slot.as_ref())
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn text_of(&self, id: NodeId) -> Option<&str> {
        self.get(id).map(|n| n.text.as_str())
    }

    pub fn children_of(&self, id: NodeId) -> Vec<NodeId> {
        self.get(id).map(|n| n.children.clone()).unwrap_or_default()
    }

    /// The unique section tagged with `post_id`, if rendered.
    pub fn section_for_post(&self, post_id: PostId) -> Option<NodeId> {
        self.find_tagged("section", post_id)
    }

    /// The unique toggle button tagged with `post_id`, if rendered.
    pub fn button_for_post(&self, post_id: PostId) -> Option<NodeId> {
        self.find_tagged("button", post_id)
    }

    fn find_tagged(&self, tag: &str, post_id: PostId) -> Option<NodeId> {
        self.nodes.iter().enumerate().find_map(|(i, slot)| {
            slot.as_ref()
                .filter(|n| n.tag == tag && n.post_tag == Some(post_id))
                .map(|_| NodeId(i))
        })
    }

    /// All post-tagged buttons in the subtree under `root`, in document
    /// order.
    pub fn buttons_under(&self, root: NodeId) -> Vec<NodeId> {
        let mut buttons = Vec::new();
        self.collect_buttons(root, &mut buttons);
        buttons
    }

    fn collect_buttons(&self, id: NodeId, out: &mut Vec<NodeId>) {
        let Some(node) = self.get(id) else { return };
        if node.tag == "button" && node.post_tag.is_some() {
            out.push(id);
        }
        for child in &node.children {
            self.collect_buttons(*child, out);
        }
    }
}
