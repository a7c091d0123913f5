// * Console preview of the leading rows, columns padded to the widest cell

use crate::config::constants::CSV_HEADERS;
use crate::refinery::Dataset;

/// Renders a header plus the first `n` rows as an aligned text table
pub fn render_preview(dataset: &Dataset, n: usize) -> String {
    let rows: Vec<[String; 4]> = dataset
        .head(n)
        .iter()
        .map(|r| {
            [
                r.name.clone(),
                r.category.clone(),
                r.stars.to_string(),
                r.forks.to_string(),
            ]
        })
        .collect();

    let mut widths = CSV_HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &CSV_HEADERS.map(String::from), &widths);
    for row in &rows {
        push_line(&mut out, row, &widths);
    }
    out
}

// * Text columns left-aligned, counters right-aligned
fn push_line(out: &mut String, cells: &[String; 4], widths: &[usize; 4]) {
    let line = format!(
        "{:<w0$}  {:<w1$}  {:>w2$}  {:>w3$}",
        cells[0],
        cells[1],
        cells[2],
        cells[3],
        w0 = widths[0],
        w1 = widths[1],
        w2 = widths[2],
        w3 = widths[3],
    );
    out.push_str(line.trim_end());
    out.push('\n');
}
