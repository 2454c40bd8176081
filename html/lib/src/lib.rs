//! Minimal typed HTML elements.
//!
//! Each element implements [`HtmlContent`] to describe its inner HTML and
//! derives [`HtmlElement`] to get its tags. Text content is escaped, nested
//! elements are rendered as-is.
//!
//! ## Examples
//!
//! ```
//! use html_elements::{H1, HtmlElement};
//!
//! let heading = H1::new("Symbols");
//! assert_eq!(heading.to_html(), "<h1>Symbols</h1>");
//! ```

// The derive macro refers to this crate by name.
extern crate self as html_elements;

pub use html_element_derive::HtmlElement;

/// Provides the inner HTML of an element.
pub trait HtmlContent {
    fn get_content(&self) -> String;
}

/// An element with a start tag, an end tag and content.
pub trait HtmlElement: HtmlContent {
    fn start_tag() -> String;
    fn end_tag() -> String;

    fn to_html(&self) -> String {
        let mut s = Self::start_tag();
        s += &self.get_content();
        s += &Self::end_tag();
        s
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// A top level heading.
#[derive(Debug, Clone, HtmlElement)]
pub struct H1 {
    heading: String,
}

impl H1 {
    pub fn new(heading: &str) -> Self {
        H1 {
            heading: heading.to_string(),
        }
    }
}

impl HtmlContent for H1 {
    fn get_content(&self) -> String {
        escape(&self.heading)
    }
}

/// A table header cell.
#[derive(Debug, Clone, HtmlElement)]
pub struct Th {
    text: String,
}

impl Th {
    pub fn new(text: &str) -> Self {
        Th {
            text: text.to_string(),
        }
    }
}

impl HtmlContent for Th {
    fn get_content(&self) -> String {
        escape(&self.text)
    }
}

/// A table data cell.
#[derive(Debug, Clone, HtmlElement)]
pub struct Td {
    text: String,
}

impl Td {
    pub fn new(text: &str) -> Self {
        Td {
            text: text.to_string(),
        }
    }
}

impl HtmlContent for Td {
    fn get_content(&self) -> String {
        escape(&self.text)
    }
}

/// A cell inside a [`Tr`].
#[derive(Debug, Clone)]
enum Cell {
    Header(Th),
    Data(Td),
}

impl Cell {
    fn to_html(&self) -> String {
        match self {
            Cell::Header(th) => th.to_html(),
            Cell::Data(td) => td.to_html(),
        }
    }
}

/// A table row.
#[derive(Debug, Clone, HtmlElement)]
pub struct Tr {
    cells: Vec<Cell>,
}

impl Tr {
    /// Builds a row of header cells.
    pub fn headers<'a>(texts: impl IntoIterator<Item = &'a str>) -> Self {
        Tr {
            cells: texts.into_iter().map(|t| Cell::Header(Th::new(t))).collect(),
        }
    }

    /// Builds a row of data cells.
    pub fn data<S: AsRef<str>>(texts: impl IntoIterator<Item = S>) -> Self {
        Tr {
            cells: texts
                .into_iter()
                .map(|t| Cell::Data(Td::new(t.as_ref())))
                .collect(),
        }
    }
}

impl HtmlContent for Tr {
    fn get_content(&self) -> String {
        self.cells.iter().map(Cell::to_html).collect()
    }
}

/// A table made of rows.
#[derive(Debug, Clone, Default, HtmlElement)]
pub struct Table {
    rows: Vec<Tr>,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: Tr) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<Tr> for Table {
    fn from_iter<T: IntoIterator<Item = Tr>>(iter: T) -> Self {
        Table {
            rows: iter.into_iter().collect(),
        }
    }
}

impl HtmlContent for Table {
    fn get_content(&self) -> String {
        self.rows.iter().map(HtmlElement::to_html).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_renders_with_tags() {
        let a = H1::new("this is a heading test");
        assert_eq!("<h1>this is a heading test</h1>", a.to_html());
    }

    #[test]
    fn derived_tags_use_lowercase_type_name() {
        assert_eq!(Table::start_tag(), "<table>");
        assert_eq!(Table::end_tag(), "</table>");
        assert_eq!(Tr::start_tag(), "<tr>");
    }

    #[test]
    fn text_content_is_escaped() {
        let cell = Td::new("a<b> & \"c\"");
        assert_eq!(cell.to_html(), "<td>a&lt;b&gt; &amp; &quot;c&quot;</td>");
    }

    #[test]
    fn table_nests_rows_and_cells() {
        let mut table = Table::new();
        table.push(Tr::headers(["Name", "Size"]));
        table.push(Tr::data(["main", "0000002c"]));

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.to_html(),
            "<table><tr><th>Name</th><th>Size</th></tr>\
             <tr><td>main</td><td>0000002c</td></tr></table>"
        );
    }

    #[test]
    fn empty_table_renders_only_tags() {
        let table: Table = std::iter::empty().collect();
        assert!(table.is_empty());
        assert_eq!(table.to_html(), "<table></table>");
    }
}
