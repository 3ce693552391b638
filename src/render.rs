//! Plain-text rendering of a `FilterView`.
//!
//! Output mirrors the handbook screen top to bottom: header, tab strip, result
//! counter, then either concept cards or the empty-state block. Renderers
//! write into any `fmt::Write` so callers can buffer or print directly.

use crate::catalog::ConceptRecord;
use crate::session::FilterView;
use std::fmt;

pub const EMPTY_TITLE: &str = "Nothing found";
pub const EMPTY_HINT: &str = "Try changing the query or choosing another category";

/// Render the whole screen for `view`.
pub fn render_view(title: &str, view: &FilterView<'_>, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(title.chars().count()))?;
    render_tabs(view, writer)?;
    writeln!(writer, "Found: {}", view.count())?;
    writeln!(writer)?;

    if view.is_empty() {
        return render_empty_state(writer);
    }
    for record in &view.results {
        render_card(record, writer)?;
    }
    Ok(())
}

/// One line listing every tab; the selected tab is bracketed.
pub fn render_tabs(view: &FilterView<'_>, writer: &mut impl fmt::Write) -> fmt::Result {
    let tabs = view
        .categories
        .iter()
        .enumerate()
        .map(|(idx, tab)| {
            if Some(idx) == view.selected_tab {
                format!("[{tab}]")
            } else {
                tab.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    writeln!(writer, "Categories: {tabs}")
}

pub fn render_card(record: &ConceptRecord, writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{} ({})", record.title, record.category)?;
    writeln!(writer, "  {}", record.description)?;
    writeln!(writer, "  Formula: {}", record.formula)?;
    writeln!(writer)
}

fn render_empty_state(writer: &mut impl fmt::Write) -> fmt::Result {
    writeln!(writer, "{EMPTY_TITLE}")?;
    writeln!(writer, "{EMPTY_HINT}")
}
