/// Single attribute on an element. A `None` value renders as a bare boolean attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: Option<String>,
}

/// Plain markup tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Node::Element(value)
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::Text(value.to_string())
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::Text(value)
    }
}

/// Element with a tag, ordered attributes, and children.
///
/// Builder methods consume and return the element so a tree reads top-down without any
/// shared mutable state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<Attr>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute, replacing any previous value with the same name.
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        let value = Some(value.into());
        match self.attrs.iter_mut().find(|attr| attr.name == name) {
            Some(existing) => existing.value = value,
            None => self.attrs.push(Attr {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Adds a boolean attribute such as `hidden` or `checked`.
    pub fn flag(mut self, name: &str) -> Self {
        if !self.attrs.iter().any(|attr| attr.name == name) {
            self.attrs.push(Attr {
                name: name.to_string(),
                value: None,
            });
        }
        self
    }

    pub fn flag_if(self, condition: bool, name: &str) -> Self {
        if condition {
            self.flag(name)
        } else {
            self
        }
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Appends classes to the `class` attribute.
    pub fn classes(mut self, classes: &[&str]) -> Self {
        let added = classes
            .iter()
            .map(|class| class.trim())
            .filter(|class| !class.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if added.is_empty() {
            return self;
        }

        match self.attrs.iter_mut().find(|attr| attr.name == "class") {
            Some(Attr {
                value: Some(existing),
                ..
            }) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(&added);
            }
            Some(existing) => existing.value = Some(added),
            None => self.attrs.push(Attr {
                name: "class".to_string(),
                value: Some(added),
            }),
        }
        self
    }

    pub fn class(self, class: &str) -> Self {
        self.classes(&[class])
    }

    /// Sets a `data-*` attribute.
    pub fn data(self, key: &str, value: impl Into<String>) -> Self {
        self.attr(&format!("data-{key}"), value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn child_if(self, condition: bool, node: impl FnOnce() -> Node) -> Self {
        if condition {
            self.child(node())
        } else {
            self
        }
    }

    pub fn maybe_child(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|attr| attr.name == name)
            .and_then(|attr| attr.value.as_deref())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|attr| attr.name == name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|value| value.split_whitespace().any(|candidate| candidate == class))
            .unwrap_or(false)
    }

    pub fn text_content(&self) -> String {
        Node::Element(self.clone()).text_content()
    }

    /// Depth-first pre-order walk over this element and every descendant element.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.walk(&mut found);
        found
    }

    fn walk<'a>(&'a self, found: &mut Vec<&'a Element>) {
        found.push(self);
        for child in &self.children {
            if let Node::Element(element) = child {
                element.walk(found);
            }
        }
    }

    pub fn find_all(&self, predicate: impl Fn(&Element) -> bool) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|element| predicate(element))
            .collect()
    }

    pub fn find(&self, predicate: impl Fn(&Element) -> bool) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|element| predicate(element))
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(|element| element.get_attr("id") == Some(id))
    }

    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        self.find_all(|element| element.has_class(class))
    }

    /// Form controls (`input`, `textarea`, `select`) carrying the given `name`.
    pub fn fields_named(&self, name: &str) -> Vec<&Element> {
        self.find_all(|element| {
            matches!(element.tag, "input" | "textarea" | "select")
                && element.get_attr("name") == Some(name)
        })
    }
}

pub fn element(tag: &'static str) -> Element {
    Element::new(tag)
}

pub fn div() -> Element {
    Element::new("div")
}

pub fn span(content: impl Into<String>) -> Element {
    Element::new("span").text(content)
}

pub fn p() -> Element {
    Element::new("p")
}

pub fn p_text(content: impl Into<String>) -> Element {
    p().text(content)
}

pub fn h1() -> Element {
    Element::new("h1")
}

pub fn h2(content: impl Into<String>) -> Element {
    Element::new("h2").text(content)
}

pub fn a(content: impl Into<String>) -> Element {
    Element::new("a").text(content)
}

pub fn img() -> Element {
    Element::new("img")
}

pub fn form() -> Element {
    Element::new("form")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn textarea() -> Element {
    Element::new("textarea")
}

pub fn select() -> Element {
    Element::new("select")
}

pub fn option(content: impl Into<String>) -> Element {
    Element::new("option").text(content)
}

pub fn button(content: impl Into<String>) -> Element {
    Element::new("button").attr("type", "button").text(content)
}

pub fn submit_button(content: impl Into<String>) -> Element {
    Element::new("button").attr("type", "submit").text(content)
}
