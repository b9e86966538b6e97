//! `<tbl>` table tags
//!
//! ```text
//! <tbl Name,Score>
//! Ada,10
//! Linus,9
//! </tbl>
//! ```
//!
//! becomes a pipe table the Markdown engine turns into `<table>`. The conversion is
//! purely textual: cells are split on commas and any tags inside them are left for
//! later passes.

use crate::error::RenderError;
use crate::pass::Pass;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static TABLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<tbl ([^>\n]*)>(.*?)</tbl>").expect("table tag pattern compiles")
});

/// Build a Markdown pipe table from the tag's header list and body.
///
/// The table is surrounded by blank lines so it never merges with a neighbouring
/// paragraph.
pub fn build_pipe_table(headers: &str, body: &str) -> String {
    let headers = split_cells(headers);

    let mut table = String::from("\n");
    push_row(&mut table, &headers);

    table.push('|');
    for _ in &headers {
        table.push_str(" --- |");
    }
    table.push('\n');

    for line in body.lines().map(str::trim).filter(|line| !line.is_empty()) {
        push_row(&mut table, &split_cells(line));
    }

    table.push('\n');
    table
}

fn split_cells(line: &str) -> Vec<String> {
    line.split(',')
        .map(|cell| cell.trim().replace('|', "\\|"))
        .collect()
}

fn push_row(table: &mut String, cells: &[String]) {
    table.push('|');
    for cell in cells {
        table.push(' ');
        table.push_str(cell);
        table.push_str(" |");
    }
    table.push('\n');
}

/// Replace every complete `<tbl …>…</tbl>` block; unterminated tags are left as-is.
pub fn convert_table_tags(input: &str) -> String {
    TABLE_TAG
        .replace_all(input, |caps: &Captures| build_pipe_table(&caps[1], &caps[2]))
        .into_owned()
}

/// Source pass converting table tags. Must run before the Markdown engine.
pub struct TableTags;

impl Pass for TableTags {
    fn name(&self) -> &str {
        "table-tags"
    }

    fn description(&self) -> &str {
        "Converts <tbl H1,H2> blocks of comma-separated rows into pipe tables"
    }

    fn apply(&self, input: &str) -> Result<String, RenderError> {
        Ok(convert_table_tags(input))
    }
}
