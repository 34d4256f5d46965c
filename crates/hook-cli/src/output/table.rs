#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned plain-text table.
///
/// The last column absorbs truncation when `max_width` is too small.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect::<Vec<_>>();

    if let (Some(max_width), Some(last)) = (options.max_width, widths.len().checked_sub(1)) {
        let fixed = widths[..last].iter().sum::<usize>() + last * 2;
        widths[last] = widths[last].min(max_width.saturating_sub(fixed).max(headers[last].len()));
    }

    let header_line = join_cells(headers.iter().map(|h| (*h).to_string()), &widths, false);
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = (0..widths.len()).map(|index| {
            row.get(index)
                .map_or_else(|| "-".to_string(), |cell| first_line(cell))
        });
        lines.push(join_cells(cells, &widths, options.color));
    }
    lines.join("\n")
}

fn join_cells(cells: impl Iterator<Item = String>, widths: &[usize], color: bool) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| {
            let text = truncate(&cell, *width);
            let pad = width.saturating_sub(text.chars().count());
            let painted = if color { colorize(&text) } else { text };
            format!("{painted}{}", " ".repeat(pad))
        })
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

fn first_line(value: &str) -> String {
    match value.split_once('\n') {
        Some((head, _)) => format!("{head}…"),
        None => value.to_string(),
    }
}

fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out = value.chars().take(width - 1).collect::<String>();
    out.push('…');
    out
}

fn colorize(value: &str) -> String {
    let code = match value.to_ascii_lowercase().as_str() {
        "true" | "written" | "installed" | "success" => "32",
        "unchanged" | "skipped" => "33",
        "false" | "error" | "missing" | "not_a_git_repository" => "31",
        _ => return value.to_string(),
    };
    format!("\u{1b}[{code}m{value}\u{1b}[0m")
}
