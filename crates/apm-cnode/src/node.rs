//! The configuration tree node.

/// One node of a parsed configuration tree.
///
/// A node has a name, a string value (empty for sections) and an ordered list
/// of children. Trees are immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigNode {
    name: String,
    value: String,
    children: Vec<ConfigNode>,
}

impl ConfigNode {
    /// Create a leaf `name value`.
    pub fn leaf(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            children: Vec::new(),
        }
    }

    /// Create a section `name { children }`.
    pub fn section(name: impl Into<String>, children: Vec<ConfigNode>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            children,
        }
    }

    /// Add a child, builder style.
    pub fn with_child(mut self, child: ConfigNode) -> Self {
        self.children.push(child);
        self
    }

    /// Node name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Node value (empty for sections).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Children in document order.
    pub fn children(&self) -> &[ConfigNode] {
        &self.children
    }

    /// First immediate child named `name`. Does not search deeper.
    pub fn find(&self, name: &str) -> Option<&ConfigNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_depth_one() {
        let root = ConfigNode::section(
            "",
            vec![ConfigNode::section("outer", vec![ConfigNode::leaf("inner", "x")])],
        );
        assert!(root.find("outer").is_some());
        assert!(root.find("inner").is_none());
        assert_eq!(root.find("outer").unwrap().find("inner").unwrap().value(), "x");
    }

    #[test]
    fn builder_appends_in_order() {
        let node = ConfigNode::section("s", Vec::new())
            .with_child(ConfigNode::leaf("a", "1"))
            .with_child(ConfigNode::leaf("b", "2"));
        let names: Vec<_> = node.children().iter().map(ConfigNode::name).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(node.value(), "");
    }
}
