// src/document/strict.rs
use std::ops::ControlFlow;

use quick_xml::escape::{resolve_html5_entity, resolve_predefined_entity};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{is_cell, Document, MarkupReader};
use crate::config::StrictOptions;
use crate::utils::error::MarkupError;

/// Well-formed XML only, checked as the document is walked: a problem is
/// reported when a walk reaches it, never earlier. Non-validating; element
/// names are matched on their local part so XHTML namespaces make no
/// difference.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictReader {
    options: StrictOptions,
}

impl StrictReader {
    pub fn new(options: StrictOptions) -> Self {
        Self { options }
    }
}

impl MarkupReader for StrictReader {
    fn name(&self) -> &'static str {
        "strict"
    }

    fn parse<'a>(&self, source: &'a [u8]) -> Result<Box<dyn Document + 'a>, MarkupError> {
        let text = std::str::from_utf8(source)?;
        Ok(Box::new(StrictDocument { text, options: self.options }))
    }
}

struct StrictDocument<'a> {
    text: &'a str,
    options: StrictOptions,
}

impl StrictDocument<'_> {
    /// Checks an opening tag against the document-level rules.
    fn open_element(&self, e: &BytesStart, depth: usize, root_seen: &mut bool, nodes: &mut u32) -> Result<(), MarkupError> {
        for attr in e.attributes() {
            attr?;
        }
        if depth == 0 {
            if *root_seen {
                return Err(MarkupError::Structure("more than one root element".to_string()));
            }
            *root_seen = true;
        }
        *nodes += 1;
        if *nodes > self.options.nodes_limit {
            return Err(MarkupError::Structure(format!("more than {} elements", self.options.nodes_limit)));
        }
        Ok(())
    }
}

impl Document for StrictDocument<'_> {
    fn walk_cells(&self, visit: &mut dyn FnMut(&str) -> ControlFlow<()>) -> Result<(), MarkupError> {
        let mut reader = Reader::from_str(self.text);
        let config = reader.config_mut();
        config.trim_text(false);
        config.check_end_names = true;

        let mut depth = 0usize;
        let mut root_seen = false;
        let mut nodes = 0u32;
        // A declared DTD is taken to be XHTML's, which supplies the HTML entities.
        let mut html_entities = false;
        // Text collected by every cell still open, innermost last.
        let mut open_cells: Vec<String> = Vec::new();

        loop {
            match reader.read_event()? {
                Event::Start(e) => {
                    self.open_element(&e, depth, &mut root_seen, &mut nodes)?;
                    depth += 1;
                    if is_cell(e.local_name().as_ref()) {
                        open_cells.push(String::new());
                    }
                }
                Event::Empty(e) => {
                    self.open_element(&e, depth, &mut root_seen, &mut nodes)?;
                    if is_cell(e.local_name().as_ref()) && visit("").is_break() {
                        return Ok(());
                    }
                }
                Event::End(e) => {
                    depth = depth.saturating_sub(1);
                    if is_cell(e.local_name().as_ref()) {
                        let text = open_cells.pop().unwrap_or_default();
                        if visit(text.trim()).is_break() {
                            return Ok(());
                        }
                    }
                }
                Event::Text(e) => {
                    let text = if html_entities {
                        e.unescape_with(|entity| {
                            resolve_predefined_entity(entity).or_else(|| resolve_html5_entity(entity))
                        })?
                    } else {
                        e.unescape()?
                    };
                    if depth == 0 {
                        if !text.trim().is_empty() {
                            return Err(MarkupError::Structure("text outside the root element".to_string()));
                        }
                        continue;
                    }
                    for cell in &mut open_cells {
                        cell.push_str(&text);
                    }
                }
                Event::CData(e) => {
                    let raw = e.into_inner();
                    let text = std::str::from_utf8(&raw)?;
                    for cell in &mut open_cells {
                        cell.push_str(text);
                    }
                }
                Event::DocType(_) => {
                    if !self.options.allow_dtd {
                        return Err(MarkupError::DoctypeDisabled);
                    }
                    html_entities = true;
                }
                Event::Eof => {
                    if depth > 0 {
                        return Err(MarkupError::Structure(format!("{} element(s) left open", depth)));
                    }
                    if !root_seen {
                        return Err(MarkupError::Structure("no root element".to_string()));
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells_with(reader: StrictReader, xml: &str) -> Result<Vec<String>, MarkupError> {
        let doc = reader.parse(xml.as_bytes())?;
        let mut out = Vec::new();
        doc.walk_cells(&mut |t| {
            out.push(t.to_string());
            ControlFlow::Continue(())
        })?;
        Ok(out)
    }

    fn cells(xml: &str) -> Result<Vec<String>, MarkupError> {
        cells_with(StrictReader::default(), xml)
    }

    #[test]
    fn cells_come_out_trimmed_in_order() {
        let xml = r#"<html><body><table>
            <tr><td> result: </td><td>passed</td></tr>
            <tr><td>totalTime:</td><td><b>12</b>000</td></tr>
            <tr><td>empty:</td><td/></tr>
        </table></body></html>"#;
        assert_eq!(cells(xml).unwrap(), vec!["result:", "passed", "totalTime:", "12000", "empty:", ""]);
    }

    #[test]
    fn xhtml_doctype_brings_html_entities() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">
<html xmlns="http://www.w3.org/1999/xhtml"><body><table><tr><td>a&amp;b</td><TD>1&nbsp;234</TD></tr></table></body></html>"#;
        assert_eq!(cells(xml).unwrap(), vec!["a&b", "1\u{a0}234"]);
    }

    #[test]
    fn html_entity_without_doctype_is_rejected() {
        assert!(matches!(cells("<table><tr><td>1&nbsp;2</td></tr></table>"), Err(MarkupError::Xml(_))));
    }

    #[test]
    fn nested_cells_close_inner_first() {
        let xml = "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td></tr></table>";
        assert_eq!(cells(xml).unwrap(), vec!["inner", "outerinner"]);
    }

    #[test]
    fn walk_stops_before_a_malformed_tail() {
        let reader = StrictReader::default();
        let doc = reader.parse(b"<t><td>1</td><td>2</td><td>3&nbsp;<br></td></t>").unwrap();
        let mut seen = 0;
        let result = doc.walk_cells(&mut |_| {
            seen += 1;
            if seen == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });
        assert!(result.is_ok());
        assert_eq!(seen, 2);

        // A full walk does reach it.
        assert!(doc.walk_cells(&mut |_| ControlFlow::Continue(())).is_err());
    }

    #[test]
    fn rejects_malformed_markup_and_bad_encoding() {
        assert!(matches!(cells("<table><tr><td>x</tr></table>"), Err(MarkupError::Xml(_))));
        assert!(matches!(cells("<table border=1><tr><td>x</td></tr></table>"), Err(MarkupError::Attribute(_))));
        assert!(cells("<table><tr><td>x</td></tr>").is_err());
        assert!(matches!(cells("<a></a><b></b>"), Err(MarkupError::Structure(_))));
        assert!(matches!(StrictReader::default().parse(b"<td>\xff</td>"), Err(MarkupError::Encoding(_))));
    }

    #[test]
    fn doctype_rejected_when_disabled() {
        let reader = StrictReader::new(StrictOptions { allow_dtd: false, ..StrictOptions::default() });
        assert!(matches!(
            cells_with(reader, "<!DOCTYPE html><html><td>a</td></html>"),
            Err(MarkupError::DoctypeDisabled)
        ));
    }

    #[test]
    fn element_limit_is_enforced() {
        let reader = StrictReader::new(StrictOptions { nodes_limit: 3, ..StrictOptions::default() });
        assert!(cells_with(reader, "<t><td>a</td><td>b</td></t>").is_ok());
        assert!(matches!(
            cells_with(reader, "<t><td>a</td><td>b</td><td>c</td></t>"),
            Err(MarkupError::Structure(_))
        ));
    }
}
