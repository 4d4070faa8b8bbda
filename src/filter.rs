use crate::dom::{self, DomTable};
use crate::error::Result;
use web_sys::{HtmlInputElement, HtmlTableElement};

/// Upper-cased search text, compared against upper-cased cell text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn new(input: &str) -> SearchTerm {
        SearchTerm(input.to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `text` contains the term, ignoring case. The empty term matches everything.
    pub fn matches(&self, text: &str) -> bool {
        text.to_uppercase().contains(&self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    /// Value for the row's inline `display` style.
    pub fn display(&self) -> &'static str {
        match self {
            Visibility::Shown => "",
            Visibility::Hidden => "none",
        }
    }
}

pub trait FilterRow {
    /// Text content of each cell, in source order. Cells without text yield an empty string. A row
    /// without cells matches no term, not even the empty one.
    fn cell_texts(&self) -> Vec<String>;

    fn set_visibility(&self, visibility: Visibility) -> Result<()>;
}

pub trait FilterTable {
    type Row: FilterRow;

    /// All rows in source order, header first.
    fn rows(&self) -> Vec<Self::Row>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub shown: usize,
    pub hidden: usize,
}

pub fn row_visibility<I, S>(term: &SearchTerm, cells: I) -> Visibility
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if cells.into_iter().any(|cell| term.matches(cell.as_ref())) {
        Visibility::Shown
    } else {
        Visibility::Hidden
    }
}

/// Shows the data rows of `table` with a cell containing `term` and hides the rest.
///
/// The first row is the header and is left untouched. Every data row is recomputed from scratch,
/// so repeated calls with the same term and content give the same result.
pub fn apply<T: FilterTable>(term: &SearchTerm, table: &T) -> Result<FilterSummary> {
    let mut summary = FilterSummary::default();
    for row in table.rows().iter().skip(1) {
        let visibility = row_visibility(term, row.cell_texts());
        row.set_visibility(visibility)?;
        match visibility {
            Visibility::Shown => summary.shown += 1,
            Visibility::Hidden => summary.hidden += 1,
        }
    }
    Ok(summary)
}

/// Filters the table identified by `table_id` using the current value of the input identified by
/// `input_id`.
pub fn table_search(input_id: &str, table_id: &str) -> Result<FilterSummary> {
    let document = dom::document()?;
    let input: HtmlInputElement = dom::element_by_id(&document, input_id, "an input element")?;
    let table: HtmlTableElement = dom::element_by_id(&document, table_id, "a table element")?;

    let term = SearchTerm::new(&input.value());
    let summary = apply(&term, &DomTable::new(table))?;
    log::debug!(
        "filtered {table_id} by '{}': {} shown, {} hidden",
        term.as_str(),
        summary.shown,
        summary.hidden
    );
    Ok(summary)
}
