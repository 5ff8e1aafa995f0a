use colored::Colorize;

fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect()
}

fn render_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Render rows under a header line. Cells beyond the header count are dropped.
pub fn format_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths = column_widths(headers, rows);
    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let header_line = render_row(&header_cells, &widths);

    let mut lines = vec![header_line.bold().to_string(), "-".repeat(header_line.chars().count())];
    lines.extend(rows.iter().map(|row| render_row(row, &widths)));
    lines.join("\n")
}

/// Render key-value pairs with aligned keys
pub fn format_record(data: &[(&str, String)]) -> String {
    let max_key_len = data.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

    data.iter()
        .map(|(key, value)| {
            let padded_key = format!("{:width$}", key, width = max_key_len);
            format!("  {}: {}", padded_key.bright_cyan(), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
