//! Namespace-aware SVG document tree.
//!
//! Panels are read into a small owned element tree so the extractor can run
//! descendant queries in document order. Names are resolved by quick-xml's
//! `NsReader`, so `inkscape:label` matches however the Inkscape namespace
//! happens to be bound. General entities declared in the internal DTD subset
//! (Illustrator writes `xmlns="&ns_svg;"`) are expanded in attribute values
//! and namespace URIs.

use crate::error::{PanelError, Result};
use quick_xml::escape::{resolve_predefined_entity, unescape_with};
use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::name::{LocalName, QName, ResolveResult};
use quick_xml::NsReader;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static ENTITY_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<!ENTITY\s+([A-Za-z_:][\w.:-]*)\s+(?:"([^"]*)"|'([^']*)')\s*>"#)
        .expect("entity regex is valid")
});

/// Namespace-resolved element or attribute name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedName {
    /// Namespace URI, `None` for unqualified names
    pub namespace: Option<String>,
    /// Local part of the name
    pub local: String,
}

impl QualifiedName {
    /// Returns true if this name is `local` in `namespace`.
    #[must_use]
    pub fn matches(&self, namespace: Option<&str>, local: &str) -> bool {
        self.namespace.as_deref() == namespace && self.local == local
    }
}

/// Attribute with an unescaped value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Attribute name
    pub name: QualifiedName,
    /// Unescaped value
    pub value: String,
}

/// Element node. Text content is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Element name
    pub name: QualifiedName,
    /// Attributes in source order (namespace declarations excluded)
    pub attributes: Vec<Attribute>,
    /// Child elements in document order
    pub children: Vec<Element>,
}

impl Element {
    /// Returns true if this element is `local` in `namespace`.
    #[must_use]
    pub fn is(&self, namespace: &str, local: &str) -> bool {
        self.name.matches(Some(namespace), local)
    }

    /// Looks up an attribute value. Pass `None` for plain attributes like `id`.
    #[must_use]
    pub fn attr(&self, namespace: Option<&str>, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name.matches(namespace, local))
            .map(|attr| attr.value.as_str())
    }

    /// All descendants in document order (pre-order), excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator returned by [`Element::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}

/// Parsed panel document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Wraps an already-built element tree.
    #[must_use]
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    /// Root element (normally `<svg>`).
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Parses XML text into a document tree.
    ///
    /// # Errors
    ///
    /// Returns [`PanelError::Document`] for malformed XML, unbound namespace
    /// prefixes, undeclared entities, multiple root elements, or a document
    /// without any element.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = NsReader::from_str(xml);
        let mut entities = Entities::default();
        let mut open: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position();
            match reader.read_event() {
                Ok(Event::DocType(doctype)) => entities = Entities::declared_in(&doctype)?,
                Ok(Event::Start(e)) => {
                    let element = open_element(&reader, &e, &entities)?;
                    open.push(element);
                }
                Ok(Event::Empty(e)) => {
                    let element = open_element(&reader, &e, &entities)?;
                    close_element(element, &mut open, &mut root)?;
                }
                Ok(Event::End(_)) => {
                    let element = open.pop().ok_or_else(|| {
                        PanelError::Document(format!("unexpected end tag at byte {position}"))
                    })?;
                    close_element(element, &mut open, &mut root)?;
                }
                Ok(Event::Eof) => break,
                Ok(_) => {}
                Err(e) => {
                    return Err(PanelError::Document(format!(
                        "{e} (near byte {})",
                        reader.buffer_position()
                    )))
                }
            }
        }

        if let Some(unclosed) = open.last() {
            return Err(PanelError::Document(format!(
                "unclosed element <{}>",
                unclosed.name.local
            )));
        }

        root.map(Self::from_root)
            .ok_or_else(|| PanelError::Document("no root element".to_string()))
    }
}

/// General entities from the internal DTD subset.
#[derive(Debug, Default)]
struct Entities(HashMap<String, String>);

impl Entities {
    fn declared_in(doctype: &BytesText<'_>) -> Result<Self> {
        let text = doctype
            .decode()
            .map_err(|e| PanelError::Document(format!("in DOCTYPE: {e}")))?;
        let mut entities = HashMap::new();
        for caps in ENTITY_DECLARATION.captures_iter(&text) {
            let value = caps.get(2).or_else(|| caps.get(3)).map_or("", |m| m.as_str());
            // First declaration is binding
            entities
                .entry(caps[1].to_string())
                .or_insert_with(|| value.to_string());
        }
        Ok(Self(entities))
    }

    fn resolve(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(String::as_str)
            .or_else(|| resolve_predefined_entity(name))
    }

    fn expand(&self, raw: &str, context: &str) -> Result<String> {
        unescape_with(raw, |name| self.resolve(name))
            .map(|value| value.into_owned())
            .map_err(|e| PanelError::Document(format!("{context}: {e}")))
    }
}

/// Reads a start tag, resolving its name and attributes against the namespaces in scope.
fn open_element(
    reader: &NsReader<&[u8]>,
    start: &BytesStart<'_>,
    entities: &Entities,
) -> Result<Element> {
    let raw_name = utf8(start.name().as_ref())?.to_string();
    let resolver = reader.resolver();

    let (namespace, local) = resolver.resolve_element(start.name());
    let name = qualified_name(namespace, local, start.name(), entities)?;

    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| PanelError::Document(format!("in <{raw_name}>: {e}")))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let value = attr
            .decode_and_unescape_value_with(reader.decoder(), |name| entities.resolve(name))
            .map_err(|e| {
                PanelError::Document(format!(
                    "in <{raw_name}> attribute {}: {e}",
                    String::from_utf8_lossy(attr.key.as_ref())
                ))
            })?
            .into_owned();
        let (namespace, local) = resolver.resolve_attribute(attr.key);
        attributes.push(Attribute {
            name: qualified_name(namespace, local, attr.key, entities)?,
            value,
        });
    }

    Ok(Element {
        name,
        attributes,
        children: Vec::new(),
    })
}

/// Turns a resolved name into an owned [`QualifiedName`].
fn qualified_name(
    namespace: ResolveResult<'_>,
    local: LocalName<'_>,
    raw: QName<'_>,
    entities: &Entities,
) -> Result<QualifiedName> {
    let namespace = match namespace {
        ResolveResult::Bound(ns) => {
            let uri = entities.expand(utf8(ns.0)?, "in namespace URI")?;
            (!uri.is_empty()).then_some(uri)
        }
        ResolveResult::Unbound => None,
        ResolveResult::Unknown(prefix) => {
            return Err(PanelError::Document(format!(
                "unbound namespace prefix '{}' in {}",
                String::from_utf8_lossy(&prefix),
                String::from_utf8_lossy(raw.as_ref())
            )))
        }
    };
    Ok(QualifiedName {
        namespace,
        local: utf8(local.as_ref())?.to_string(),
    })
}

/// Attaches a finished element to its parent, or makes it the root.
fn close_element(
    element: Element,
    open: &mut [Element],
    root: &mut Option<Element>,
) -> Result<()> {
    if let Some(parent) = open.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(PanelError::Document(format!(
            "multiple root elements (extra <{}>)",
            element.name.local
        )));
    }
    *root = Some(element);
    Ok(())
}

fn utf8(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| PanelError::Document(format!("invalid UTF-8: {e}")))
}
