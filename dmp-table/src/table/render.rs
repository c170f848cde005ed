//! Rendering for the Table component.
//!
//! Rendering produces a [`TableView`]: a plain description of the header
//! cells and the rows on the current page. It never fails; cells missing
//! from a row render as empty text.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use dmp_table_lib::model::{Column, SortDirection, TableRow};

use super::state::Table;

/// Sort indicator shown next to a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortGlyph {
    /// Column cannot be sorted.
    None,
    /// Column can be sorted but is not part of the current sort.
    Neutral,
    /// Column is sorted ascending.
    Ascending,
    /// Column is sorted descending.
    Descending,
}

impl SortGlyph {
    /// Returns the glyph for a column's current state.
    pub fn for_column(column: &Column) -> Self {
        if !column.allows_sorting {
            return SortGlyph::None;
        }
        match column.direction {
            None => SortGlyph::Neutral,
            Some(SortDirection::Ascending) => SortGlyph::Ascending,
            Some(SortDirection::Descending) => SortGlyph::Descending,
        }
    }

    /// Returns the glyph text.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortGlyph::None => "",
            SortGlyph::Neutral => "↕",
            SortGlyph::Ascending => "▲",
            SortGlyph::Descending => "▼",
        }
    }
}

/// A rendered column header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Column id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Sort indicator.
    pub glyph: SortGlyph,
    /// Whether the column holds the row header.
    pub is_row_header: bool,
    /// Whether the header accepts sort interaction.
    pub sortable: bool,
}

impl HeaderView {
    /// Returns the label with its sort indicator on the right.
    pub fn text(&self) -> String {
        match self.glyph {
            SortGlyph::None => self.label.clone(),
            glyph => format!("{} {}", self.label, glyph.as_str()),
        }
    }
}

/// A rendered cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Id of the column the cell belongs to.
    pub column_id: String,
    /// Cell text; empty when the row has no value for the column.
    pub text: String,
    /// Whether the cell is the row's accessible header.
    pub is_row_header: bool,
}

/// A rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    /// Row key.
    pub key: String,
    /// One cell per column, in column order.
    pub cells: Vec<CellView>,
}

/// Position of the rendered page within the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number.
    pub number: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Total number of rows across pages.
    pub total_rows: usize,
}

/// A rendered table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    /// Table id string.
    pub id: String,
    /// Accessible label.
    pub label: String,
    /// Styling hook.
    pub class_name: Option<String>,
    /// Column headers in display order.
    pub headers: Vec<HeaderView>,
    /// Rows on the current page.
    pub rows: Vec<RowView>,
    /// Page position, when paginated.
    pub page: Option<PageInfo>,
}

impl<R: TableRow + Clone> Table<R> {
    /// Render the current state.
    pub fn view(&self) -> TableView {
        let Ok(guard) = self.inner.read() else {
            return TableView {
                id: self.id_string(),
                label: String::new(),
                class_name: None,
                headers: Vec::new(),
                rows: Vec::new(),
                page: None,
            };
        };

        let headers = guard
            .columns
            .iter()
            .map(|column| HeaderView {
                id: column.id.clone(),
                label: column.name.clone(),
                glyph: SortGlyph::for_column(column),
                is_row_header: column.is_row_header,
                sortable: column.allows_sorting,
            })
            .collect();

        let (visible, page) = match guard.pagination {
            Some(pagination) => {
                let page = pagination.apply(&guard.rows);
                let info = PageInfo {
                    number: page.number(),
                    total_pages: page.total_pages(),
                    total_rows: page.total_rows(),
                };
                (page.rows(), Some(info))
            }
            None => (guard.rows.as_slice(), None),
        };

        let rows = visible
            .iter()
            .map(|row| render_row(row, &guard.columns))
            .collect();

        TableView {
            id: self.id_string(),
            label: guard.label.clone(),
            class_name: guard.class_name.clone(),
            headers,
            rows,
            page,
        }
    }
}

fn render_row<R: TableRow>(row: &R, columns: &[Column]) -> RowView {
    let cells = columns
        .iter()
        .map(|column| CellView {
            column_id: column.id.clone(),
            text: row
                .cell(&column.id)
                .map(ToString::to_string)
                .unwrap_or_default(),
            is_row_header: column.is_row_header,
        })
        .collect();
    RowView {
        key: row.key(),
        cells,
    }
}

fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

impl fmt::Display for TableView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header_text: Vec<String> = self.headers.iter().map(HeaderView::text).collect();

        let mut widths: Vec<usize> = header_text.iter().map(|h| h.width()).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.text.width());
                }
            }
        }

        writeln!(f, "{}", self.label)?;

        let header_line: Vec<String> = header_text
            .iter()
            .zip(&widths)
            .map(|(h, &w)| pad(h, w))
            .collect();
        writeln!(f, "{}", header_line.join(" | ").trim_end())?;

        let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
        writeln!(f, "{}", rule.join("-+-"))?;

        for row in &self.rows {
            let line: Vec<String> = row
                .cells
                .iter()
                .zip(&widths)
                .map(|(c, &w)| pad(&c.text, w))
                .collect();
            writeln!(f, "{}", line.join(" | ").trim_end())?;
        }

        if let Some(page) = self.page {
            writeln!(
                f,
                "Page {} of {} ({} rows)",
                page.number, page.total_pages, page.total_rows
            )?;
        }
        Ok(())
    }
}
