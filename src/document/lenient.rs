// src/document/lenient.rs
use std::ops::ControlFlow;

use scraper::{ElementRef, Html};

use super::{is_cell, Document, MarkupReader};
use crate::utils::error::MarkupError;

/// HTML tag soup reader (html5ever via scraper). Unclosed tags and missing
/// structure are repaired the way a browser would, so parsing never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LenientReader;

impl MarkupReader for LenientReader {
    fn name(&self) -> &'static str {
        "lenient"
    }

    fn parse<'a>(&self, source: &'a [u8]) -> Result<Box<dyn Document + 'a>, MarkupError> {
        let text = String::from_utf8_lossy(source);
        let html = Html::parse_document(&text);
        if !html.errors.is_empty() {
            tracing::debug!("Lenient reader repaired {} markup problems", html.errors.len());
        }
        Ok(Box::new(LenientDocument { html }))
    }
}

struct LenientDocument {
    html: Html,
}

impl Document for LenientDocument {
    fn walk_cells(&self, visit: &mut dyn FnMut(&str) -> ControlFlow<()>) -> Result<(), MarkupError> {
        // Post-order walk with an explicit stack: an element is visited once
        // all of its children have been, which is when its close tag would be.
        let mut stack: Vec<(ElementRef, bool)> = vec![(self.html.root_element(), false)];
        while let Some((element, expanded)) = stack.pop() {
            if expanded {
                if is_cell(element.value().name().as_bytes()) {
                    let text = element.text().collect::<String>();
                    if visit(text.trim()).is_break() {
                        return Ok(());
                    }
                }
                continue;
            }
            stack.push((element, true));
            let children: Vec<ElementRef> = element.children().filter_map(ElementRef::wrap).collect();
            stack.extend(children.into_iter().rev().map(|child| (child, false)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(html: &str) -> Vec<String> {
        let doc = LenientReader.parse(html.as_bytes()).unwrap();
        let mut out = Vec::new();
        doc.walk_cells(&mut |t| {
            out.push(t.to_string());
            ControlFlow::Continue(())
        })
        .unwrap();
        out
    }

    #[test]
    fn tolerates_unclosed_cells() {
        let html = "<html><body><TABLE><TR><TD>commands processed:<TD> 12 <TR><TD>failed commands:<TD>3</TABLE>";
        assert_eq!(cells(html), vec!["commands processed:", "12", "failed commands:", "3"]);
    }

    #[test]
    fn nested_cells_close_inner_first() {
        let html = "<table><tr><td>outer<table><tr><td>inner</td></tr></table></td><td>last</td></tr></table>";
        assert_eq!(cells(html), vec!["inner", "outerinner", "last"]);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let doc = LenientReader.parse(b"<table><tr><td>a\xff</td></tr></table>").unwrap();
        let mut first = None;
        doc.walk_cells(&mut |t| {
            first = Some(t.to_string());
            ControlFlow::Break(())
        })
        .unwrap();
        assert_eq!(first.as_deref(), Some("a\u{FFFD}"));
    }
}
