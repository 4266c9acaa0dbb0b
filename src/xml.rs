//! Minimal element tree for building input files, with a deterministic
//! normalization pass and an indenting writer on top of `quick-xml`.

use crate::error::Result;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::cmp::Ordering;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct XmlElement {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub text: Option<String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        XmlElement {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing any previous value under the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Append a new child and return a handle to it.
    pub fn sub_element(&mut self, tag: impl Into<String>) -> &mut XmlElement {
        self.children.push(XmlElement::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn push(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// Direct children with the given tag.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a XmlElement> + 'a {
        self.children.iter().filter(move |c| c.tag == tag)
    }

    pub fn find(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Put the tree into its canonical order.
    ///
    /// Attributes are sorted by name at every level. Among the direct
    /// children, those carrying an `id` attribute are moved after the rest and
    /// ordered by tag, then by id; children without an id keep their order.
    pub fn normalize(&mut self) {
        sort_attributes(self);
        let (mut with_id, without_id): (Vec<_>, Vec<_>) = std::mem::take(&mut self.children)
            .into_iter()
            .partition(|c| c.get("id").is_some());
        with_id.sort_by(|a, b| a.tag.cmp(&b.tag).then_with(|| compare_ids(a, b)));
        self.children = without_id;
        self.children.extend(with_id);
    }

    /// Serialize with an XML declaration and two-space indentation.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
        write_element(&mut writer, self)?;
        let mut out = String::from_utf8_lossy(&writer.into_inner()).into_owned();
        out.push('\n');
        Ok(out)
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_xml_string()?;
        std::fs::write(path.as_ref(), content)?;
        log::debug!("wrote {}", path.as_ref().display());
        Ok(())
    }
}

fn sort_attributes(element: &mut XmlElement) {
    element.attributes.sort_by(|a, b| a.0.cmp(&b.0));
    for child in element.children.iter_mut() {
        sort_attributes(child);
    }
}

fn compare_ids(a: &XmlElement, b: &XmlElement) -> Ordering {
    let (ia, ib) = (a.get("id").unwrap_or(""), b.get("id").unwrap_or(""));
    match (ia.parse::<u64>(), ib.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => ia.cmp(ib),
    }
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &XmlElement) -> Result<()> {
    let mut start = BytesStart::new(element.tag.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &element.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
    Ok(())
}

/// Format a float the way input files expect it: shortest round-trip digits,
/// integral values keep a trailing `.0`, and very large or small magnitudes
/// switch to exponent notation.
pub fn format_float(value: f64) -> String {
    if value == 0.0 || !value.is_finite() {
        return format!("{:?}", value);
    }
    let magnitude = value.abs();
    if (1.0e-4..1.0e16).contains(&magnitude) {
        let s = format!("{}", value);
        if s.contains('.') {
            s
        } else {
            format!("{}.0", s)
        }
    } else {
        format!("{:e}", value)
    }
}
