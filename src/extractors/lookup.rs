// src/extractors/lookup.rs
use std::ops::ControlFlow;

use crate::document::Document;
use crate::utils::error::MarkupError;

/// Returns the text of the cell that closes right after the cell whose text
/// is exactly `label`. Stops walking at the first hit.
///
/// A label sitting in the last cell of the document yields `None`. Markup
/// errors are only raised if the walk reaches them before a hit.
pub fn find(document: &dyn Document, label: &str) -> Result<Option<String>, MarkupError> {
    let mut armed = false;
    let mut found = None;
    document.walk_cells(&mut |cell| {
        if armed {
            found = Some(cell.to_string());
            return ControlFlow::Break(());
        }
        if cell == label {
            armed = true;
        } else {
            tracing::trace!("Skipping cell: {}", cell);
        }
        ControlFlow::Continue(())
    })?;
    tracing::debug!("Lookup '{}' -> {:?}", label, found);
    Ok(found)
}
