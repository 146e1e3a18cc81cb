// File: crates/rechart-core/src/svg.rs
// Summary: Retained SVG document: an arena of shape nodes the chart creates, mutates and serializes.

use std::fmt::Write;

use indexmap::IndexMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Group,
    Line,
    Rect,
    Path,
    Circle,
    Text,
}

impl ShapeKind {
    pub const fn tag(self) -> &'static str {
        match self {
            ShapeKind::Group => "g",
            ShapeKind::Line => "line",
            ShapeKind::Rect => "rect",
            ShapeKind::Path => "path",
            ShapeKind::Circle => "circle",
            ShapeKind::Text => "text",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AttrValue {
    Num(f64),
    Text(String),
}

impl From<f64> for AttrValue {
    fn from(v: f64) -> Self { AttrValue::Num(v) }
}

impl From<i64> for AttrValue {
    fn from(v: i64) -> Self { AttrValue::Num(v as f64) }
}

impl From<&str> for AttrValue {
    fn from(v: &str) -> Self { AttrValue::Text(v.to_string()) }
}

impl From<String> for AttrValue {
    fn from(v: String) -> Self { AttrValue::Text(v) }
}

impl AttrValue {
    fn render(&self) -> String {
        match self {
            AttrValue::Num(v) => fmt_num(*v),
            AttrValue::Text(s) => s.clone(),
        }
    }
}

/// Handle to a node in an [`SvgDocument`]. Invalidated by [`SvgDocument::clear`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct SvgNode {
    pub kind: ShapeKind,
    pub classes: Vec<String>,
    pub attrs: IndexMap<String, String>,
    pub text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl SvgNode {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

/// The SVG subtree a chart owns. Nothing else writes into it.
#[derive(Clone, Debug, Default)]
pub struct SvgDocument {
    nodes: Vec<Option<SvgNode>>,
    roots: Vec<NodeId>,
    width: Option<f64>,
    height: Option<f64>,
    created: usize,
}

impl SvgDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a shape with `classes` and `attrs`, appended to `parent` or to the
    /// document root.
    pub fn create_shape(
        &mut self,
        kind: ShapeKind,
        classes: &[&str],
        attrs: &[(&str, AttrValue)],
        parent: Option<NodeId>,
    ) -> NodeId {
        let id = self.alloc(kind, classes, attrs, parent);
        let parent = self.node(id).and_then(|n| n.parent);
        self.siblings_mut(parent).push(id);
        id
    }

    /// Create a shape as the preceding sibling of `before`.
    pub fn insert_before(
        &mut self,
        kind: ShapeKind,
        classes: &[&str],
        attrs: &[(&str, AttrValue)],
        before: NodeId,
    ) -> NodeId {
        let parent = self.node(before).and_then(|n| n.parent);
        let id = self.alloc(kind, classes, attrs, parent);
        let siblings = self.siblings_mut(parent);
        let at = siblings.iter().position(|&s| s == before).unwrap_or(siblings.len());
        siblings.insert(at, id);
        id
    }

    fn alloc(
        &mut self,
        kind: ShapeKind,
        classes: &[&str],
        attrs: &[(&str, AttrValue)],
        parent: Option<NodeId>,
    ) -> NodeId {
        let node = SvgNode {
            kind,
            classes: classes.iter().filter(|c| !c.is_empty()).map(|c| c.to_string()).collect(),
            attrs: attrs.iter().map(|(k, v)| (k.to_string(), v.render())).collect(),
            text: None,
            children: Vec::new(),
            parent: parent.filter(|p| self.node(*p).is_some()),
        };
        self.nodes.push(Some(node));
        self.created += 1;
        NodeId(self.nodes.len() - 1)
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> &mut Vec<NodeId> {
        if let Some(Some(node)) = parent.and_then(|p| self.nodes.get_mut(p.0)) {
            return &mut node.children;
        }
        &mut self.roots
    }

    pub fn node(&self, id: NodeId) -> Option<&SvgNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SvgNode> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: impl Into<AttrValue>) {
        if let Some(n) = self.node_mut(id) {
            n.attrs.insert(name.to_string(), value.into().render());
        }
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.node(id).and_then(|n| n.attr(name))
    }

    pub fn set_text(&mut self, id: NodeId, text: impl Into<String>) {
        if let Some(n) = self.node_mut(id) {
            n.text = Some(text.into());
        }
    }

    /// Detach and drop `id` with its subtree.
    pub fn remove(&mut self, id: NodeId) {
        let Some(parent) = self.node(id).map(|n| n.parent) else { return };
        self.siblings_mut(parent).retain(|&c| c != id);
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.get_mut(next.0).and_then(Option::take) {
                stack.extend(node.children);
            }
        }
    }

    /// Drop every node. Outstanding [`NodeId`]s become dangling.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }

    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = Some(width);
        self.height = Some(height);
    }

    pub fn size(&self) -> Option<(f64, f64)> {
        self.width.zip(self.height)
    }

    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Live node count.
    pub fn len(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Nodes ever created, across clears.
    pub fn created_count(&self) -> usize {
        self.created
    }

    /// Live nodes carrying `class`, in creation order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.as_ref().is_some_and(|n| n.has_class(class)))
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Serialize as a standalone `<svg>` element, optionally embedding `style`.
    pub fn to_svg_string(&self, style: Option<&str>) -> String {
        let mut out = String::from(r#"<svg xmlns="http://www.w3.org/2000/svg""#);
        if let Some((w, h)) = self.size() {
            let _ = write!(out, r#" width="{}" height="{}""#, fmt_num(w), fmt_num(h));
        }
        out.push('>');
        if let Some(css) = style {
            let _ = write!(out, "<style>{}</style>", escape_xml(css));
        }
        for &id in &self.roots {
            self.write_node(&mut out, id);
        }
        out.push_str("</svg>");
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId) {
        let Some(node) = self.node(id) else { return };
        let tag = node.kind.tag();
        let _ = write!(out, "<{tag}");
        if !node.classes.is_empty() {
            let _ = write!(out, r#" class="{}""#, escape_xml(&node.classes.join(" ")));
        }
        for (k, v) in &node.attrs {
            let _ = write!(out, r#" {k}="{}""#, escape_xml(v));
        }
        if node.children.is_empty() && node.text.is_none() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(text) = &node.text {
            out.push_str(&escape_xml(text));
        }
        for &child in &node.children {
            self.write_node(out, child);
        }
        let _ = write!(out, "</{tag}>");
    }
}

/// Format a number the way it should appear in markup: integers without a
/// fractional part, everything else in shortest round-trip form.
pub fn fmt_num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}

pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
