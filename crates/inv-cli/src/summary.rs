use std::fmt::Write;
use std::path::Path;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use inv_cli::pipeline::RunResult;
use inv_normalization::Category;

/// Summary table, findings table and input errors, ready to print.
pub fn render_report(result: &RunResult) -> String {
    let mut out = String::new();
    if !result.documents.is_empty() {
        let _ = writeln!(out, "{}", summary_table(result));
    }
    if result.finding_count() > 0 {
        let _ = writeln!(out, "{}", findings_table(result));
    }
    for error in &result.errors {
        let _ = writeln!(out, "error: {error}");
    }
    out
}

fn summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        header_cell("Input"),
        header_cell("Items"),
        header_cell("Entries"),
    ];
    header.extend(Category::all().iter().map(|category| header_cell(category.label())));
    header.push(header_cell("Output"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    let output_column = 3 + Category::all().len();
    for index in 1..output_column {
        align_column(&mut table, index, CellAlignment::Right);
    }

    let mut totals = vec![0usize; Category::all().len()];
    for document in &result.documents {
        let mut row = vec![
            Cell::new(&document.input).add_attribute(Attribute::Bold),
            Cell::new(document.items),
            Cell::new(document.accounting_entries),
        ];
        for (total, category) in totals.iter_mut().zip(Category::all()) {
            let count = document.diagnostic.count(*category);
            *total += count;
            row.push(count_cell(count, category_color(*category)));
        }
        row.push(output_cell(document.output.as_deref()));
        table.add_row(row);
    }

    if result.documents.len() > 1 {
        let mut row = vec![
            Cell::new("Total").add_attribute(Attribute::Bold),
            Cell::new(result.documents.iter().map(|d| d.items).sum::<usize>()),
            Cell::new(
                result
                    .documents
                    .iter()
                    .map(|d| d.accounting_entries)
                    .sum::<usize>(),
            ),
        ];
        for (total, category) in totals.iter().zip(Category::all()) {
            row.push(count_cell(*total, category_color(*category)));
        }
        row.push(dim_cell(""));
        table.add_row(row);
    }
    table
}

fn findings_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Field"),
        header_cell("Category"),
        header_cell("Message"),
    ]);
    apply_findings_table_style(&mut table);
    for document in &result.documents {
        for finding in document.diagnostic.findings() {
            let category = finding.category();
            table.add_row(vec![
                dim_cell(&document.input),
                Cell::new(&finding.context).fg(Color::Blue),
                Cell::new(category.label()).fg(category_color(category)),
                Cell::new(finding.message()),
            ]);
        }
    }
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![ColumnConstraint::UpperBoundary(Width::Percentage(30))]);
}

fn apply_findings_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    table.set_constraints(vec![
        ColumnConstraint::UpperBoundary(Width::Percentage(20)),
        ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ColumnConstraint::UpperBoundary(Width::Fixed(26)),
        ColumnConstraint::LowerBoundary(Width::Percentage(30)),
    ]);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::FieldInvalid | Category::OutOfRange => Color::Yellow,
        Category::SignInvalid => Color::Magenta,
        Category::CrossFieldInconsistent => Color::Red,
        Category::RequiredEmpty => Color::DarkYellow,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count == 0 {
        dim_cell("-")
    } else {
        Cell::new(count).fg(color)
    }
}

fn output_cell(path: Option<&Path>) -> Cell {
    match path {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
