use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use datamuse::config::config::DisplayConfig;
use serde_json::Value;

/// Columns shown for a result set. `word` always comes first, then every
/// other key in the order it is first seen across records.
pub fn result_columns(data: &[Value], display: &DisplayConfig) -> Vec<String> {
    let mut columns = vec!["word".to_string()];
    for record in data {
        if let Some(obj) = record.as_object() {
            for key in obj.keys() {
                let hidden = (key == "score" && !display.show_score)
                    || (key == "tags" && !display.show_tags);
                if !hidden && !columns.contains(key) {
                    columns.push(key.clone());
                }
            }
        }
    }
    columns
}

pub fn cell_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.replace('\t', ": "),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Some(Value::Null) | None => String::new(),
        Some(v) => v.to_string(),
    }
}

pub fn render_table(data: &[Value], display: &DisplayConfig) -> Table {
    let columns = result_columns(data, display);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(
        columns
            .iter()
            .map(|c| Cell::new(c).add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );

    for record in data {
        if let Some(obj) = record.as_object() {
            let row: Vec<String> = columns.iter().map(|c| cell_text(obj.get(c))).collect();
            table.add_row(row);
        }
    }
    table
}

pub fn export_to_csv(data: &[Value], display: &DisplayConfig, filename: &str) -> anyhow::Result<()> {
    let columns = result_columns(data, display);
    let mut wtr = csv::Writer::from_path(filename)?;
    wtr.write_record(&columns)?;

    for record in data {
        if let Some(obj) = record.as_object() {
            let row: Vec<String> = columns
                .iter()
                .map(|c| cell_text(obj.get(c)).replace('\n', "; "))
                .collect();
            wtr.write_record(&row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}
