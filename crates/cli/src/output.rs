use hek_query::{
    Block,
    catalog::{self, Category, Comparable},
};

use crate::error::CliError;

/// Renders blocks as pretty JSON, or as `key=value` lines with a blank line
/// between requests.
pub fn format_blocks(blocks: &[Block], pairs: bool) -> Result<String, CliError> {
    if !pairs {
        return Ok(serde_json::to_string_pretty(blocks)?);
    }

    let requests: Vec<String> = blocks
        .iter()
        .map(|block| {
            block
                .to_query_pairs()
                .into_iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("\n")
        })
        .collect();
    Ok(requests.join("\n\n"))
}

pub fn write_blocks(blocks: &[Block], output: Option<&str>, pairs: bool) -> Result<(), CliError> {
    let rendered = format_blocks(blocks, pairs)?;
    match output {
        Some(path) => std::fs::write(path, rendered)?,
        None => println!("{rendered}"),
    }
    Ok(())
}

pub fn format_fields(category: Option<&str>) -> Result<String, CliError> {
    let categories: Vec<&Category> = match category {
        Some(name) => vec![
            catalog::category(name).ok_or_else(|| CliError::UnknownCategory(name.to_string()))?,
        ],
        None => catalog::CATEGORIES.iter().collect(),
    };

    let mut out = String::new();
    for cat in categories {
        match cat.event_code {
            Some(code) => out.push_str(&format!("{} (event type '{code}')\n", cat.name)),
            None => out.push_str(&format!("{}\n", cat.name)),
        }
        for field in cat.fields {
            out.push_str(&format!("  {}\n", field.name()));
        }
    }
    Ok(out)
}

pub fn format_events() -> String {
    catalog::EVENT_CODES.join("\n")
}
