use crate::{FetchError, FetchErrorResult};

use acc_core::{Cell, ConnectionLimitTable, TableRow};

use scraper::{ElementRef, Html, Selector};

// Same ceilings browsers apply
const MAX_COLSPAN: usize = 1000;
const MAX_ROWSPAN: usize = 65534;

/// Extract the first `<table>` in `html` as data rows.
///
/// Rows under `<thead>` and rows made only of `<th>` cells are headers and
/// are skipped. `rowspan` and `colspan` cells are repeated into every row
/// and column they cover. Rows of tables nested inside the first table are ignored.
/// Returns `Ok(None)` when the document has no table at all.
pub fn first_table(html: &str) -> FetchErrorResult<Option<ConnectionLimitTable>> {
    let document = Html::parse_document(html);
    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;

    let Some(table) = document.select(&table_selector).next() else {
        return Ok(None);
    };

    let mut rows = Vec::new();
    let mut carried = Vec::new();
    for row in table.select(&row_selector) {
        let Some(in_head) = header_flag(row, table) else {
            continue;
        };

        let cells: Vec<ElementRef<'_>> = row
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|cell| matches!(cell.value().name(), "td" | "th"))
            .collect();

        // Spans are tracked through header rows too so body columns stay aligned
        let expanded = expand_spans(&cells, &mut carried);

        if in_head || cells.iter().all(|cell| cell.value().name() == "th") {
            continue;
        }

        rows.push(TableRow::new(expanded));
    }

    Ok(Some(ConnectionLimitTable::new(rows)))
}

/// A spanned cell still owed to rows below.
struct Carried {
    cell: Cell,
    remaining: usize,
}

/// Lay out one row's cells by column, filling columns still covered by a
/// `rowspan` from an earlier row and repeating `colspan` cells.
fn expand_spans(cells: &[ElementRef<'_>], carried: &mut Vec<Option<Carried>>) -> Vec<Cell> {
    let mut expanded = Vec::new();
    let mut pending = cells.iter();

    loop {
        let column = expanded.len();
        if let Some(Some(span)) = carried.get_mut(column) {
            expanded.push(span.cell.clone());
            span.remaining -= 1;
            if span.remaining == 0 {
                carried[column] = None;
            }
            continue;
        }

        match pending.next() {
            Some(element) => {
                let cell = Cell::parse(&element.text().collect::<String>());
                let colspan = span_attr(*element, "colspan", MAX_COLSPAN);
                let rowspan = span_attr(*element, "rowspan", MAX_ROWSPAN);

                for _ in 0..colspan {
                    let column = expanded.len();
                    if rowspan > 1 {
                        if carried.len() <= column {
                            carried.resize_with(column + 1, || None);
                        }
                        carried[column] = Some(Carried {
                            cell: cell.clone(),
                            remaining: rowspan - 1,
                        });
                    }
                    expanded.push(cell.clone());
                }
            }
            // A later column is still spanned from above; leave this one blank
            None if carried.iter().skip(column).any(Option::is_some) => {
                expanded.push(Cell::Text(String::new()));
            }
            None => break,
        }
    }

    expanded
}

/// Span attribute value, 1 when absent, zero or malformed.
fn span_attr(element: ElementRef<'_>, name: &str, max: usize) -> usize {
    element
        .value()
        .attr(name)
        .and_then(|value| value.trim().parse::<usize>().ok())
        .filter(|span| *span > 0)
        .map_or(1, |span| span.min(max))
}

fn selector(css: &str) -> FetchErrorResult<Selector> {
    Selector::parse(css).map_err(|e| FetchError::selector(format!("{css}: {e:?}")))
}

/// Whether `row` sits in the `<thead>` of `table`, or `None` when the
/// nearest enclosing table is a different (nested) one.
fn header_flag(row: ElementRef<'_>, table: ElementRef<'_>) -> Option<bool> {
    let mut in_head = false;
    for ancestor in row.ancestors().filter_map(ElementRef::wrap) {
        match ancestor.value().name() {
            "thead" => in_head = true,
            "table" => return (ancestor == table).then_some(in_head),
            _ => {}
        }
    }
    None
}
