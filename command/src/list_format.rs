use schema::{Function, FunctionList};
use std::fmt;
use std::str::FromStr;
use utility::{Error, Result};

pub const TABLE_FORMAT: &str = "table";
pub const WIDE_FORMAT: &str = "wide";
pub const JSON_FORMAT: &str = "json";
pub const YAML_FORMAT: &str = "yaml";
pub const OUTPUT_FORMATS: [&str; 4] = [TABLE_FORMAT, WIDE_FORMAT, JSON_FORMAT, YAML_FORMAT];

const TABLE_HEADER: [&str; 8] = [
    "NAME",
    "NAMESPACE",
    "HANDLER",
    "SOURCE",
    "RUNTIME",
    "TYPE",
    "TOPIC",
    "DEPENDENCIES",
];
const WIDE_HEADER: [&str; 2] = ["ENV", "MEMORY"];
///spaces between two columns
const COLUMN_GUTTER: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Wide,
    Json,
    Yaml,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "" | TABLE_FORMAT => Ok(OutputFormat::Table),
            WIDE_FORMAT => Ok(OutputFormat::Wide),
            JSON_FORMAT => Ok(OutputFormat::Json),
            YAML_FORMAT => Ok(OutputFormat::Yaml),
            other => Err(Error::InvalidFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Table => TABLE_FORMAT,
            OutputFormat::Wide => WIDE_FORMAT,
            OutputFormat::Json => JSON_FORMAT,
            OutputFormat::Yaml => YAML_FORMAT,
        };
        f.write_str(name)
    }
}

/// render formats the function list, the same list and format always give the same text
pub fn render(list: &FunctionList, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(table_format_list(list, false)),
        OutputFormat::Wide => Ok(table_format_list(list, true)),
        OutputFormat::Json => json_format_list(list),
        OutputFormat::Yaml => yaml_format_list(list),
    }
}

/// one row per function below an upper case header, wide adds the env and memory columns
pub fn table_format_list(list: &FunctionList, wide: bool) -> String {
    let mut header: Vec<String> = TABLE_HEADER.iter().map(|h| h.to_string()).collect();
    if wide {
        header.extend(WIDE_HEADER.iter().map(|h| h.to_string()));
    }

    let mut rows = vec![header];
    for function in &list.items {
        rows.push(function_row(function, wide));
    }
    format_columns(&rows)
}

/// the whole list as pretty printed JSON
pub fn json_format_list(list: &FunctionList) -> Result<String> {
    let mut res = serde_json::to_string_pretty(list).map_err(|e| Error::Encode(e.to_string()))?;
    res.push('\n');
    Ok(res)
}

/// the whole list as a YAML document
pub fn yaml_format_list(list: &FunctionList) -> Result<String> {
    let mut res = serde_yaml::to_string(list).map_err(|e| Error::Encode(e.to_string()))?;
    if !res.ends_with('\n') {
        res.push('\n');
    }
    Ok(res)
}

fn function_row(function: &Function, wide: bool) -> Vec<String> {
    let spec = &function.spec;
    let mut row = vec![
        single_line(&function.metadata.name, " "),
        single_line(&function.metadata.namespace, " "),
        single_line(&spec.handler, " "),
        single_line(&spec.function, " "),
        single_line(&spec.runtime, " "),
        single_line(&spec.trigger_type, " "),
        single_line(&spec.topic, " "),
        single_line(&spec.deps, ", "),
    ];
    if wide {
        row.push(env_column(function));
        row.push(memory_column(function));
    }
    row
}

/// env of the first container as `name = value` pairs in declaration order
pub fn env_column(function: &Function) -> String {
    function
        .first_container()
        .map(|container| {
            container
                .env
                .iter()
                .map(|env| format!("{} = {}", env.name, env.value))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_default()
}

/// memory limit of the first container, falling back to its memory request
pub fn memory_column(function: &Function) -> String {
    function
        .first_container()
        .and_then(|container| container.memory())
        .map(|memory| memory.to_string())
        .unwrap_or_default()
}

// a requirements file or a source snippet spans several lines, a cell can't
fn single_line(text: &str, separator: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn format_columns(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut res = String::new();
    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == row.len() {
                line.push_str(cell);
            } else {
                line.push_str(format!("{:width$}", cell, width = widths[i] + COLUMN_GUTTER).as_str());
            }
        }
        res.push_str(line.trim_end());
        res.push('\n');
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        struct TestCase {
            input: &'static str,
            want: Option<OutputFormat>,
        }
        let cases = vec![
            TestCase { input: "", want: Some(OutputFormat::Table) },
            TestCase { input: "table", want: Some(OutputFormat::Table) },
            TestCase { input: "wide", want: Some(OutputFormat::Wide) },
            TestCase { input: "json", want: Some(OutputFormat::Json) },
            TestCase { input: "yaml", want: Some(OutputFormat::Yaml) },
            TestCase { input: "YAML", want: None },
            TestCase { input: "xml", want: None },
        ];
        for case in cases {
            let got = case.input.parse::<OutputFormat>().ok();
            assert_eq!(got, case.want, "input {:?}", case.input);
        }

        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid output format \"xml\", must be one of: table, wide, json, yaml"
        );
    }

    #[test]
    fn test_output_format_names() {
        for name in OUTPUT_FORMATS.iter() {
            let format: OutputFormat = name.parse().unwrap();
            assert_eq!(format.to_string(), *name);
        }
    }

    #[test]
    fn test_single_line() {
        assert_eq!(single_line("requests\n  flask==0.12\n\n", ", "), "requests, flask==0.12");
        assert_eq!(single_line("", ", "), "");
        assert_eq!(single_line("fdeps", ", "), "fdeps");
    }

    #[test]
    fn test_format_columns() {
        let rows = vec![
            vec!["A".to_string(), "BB".to_string(), "C".to_string()],
            vec!["long".to_string(), "".to_string(), "".to_string()],
        ];
        assert_eq!(format_columns(&rows), "A      BB   C\nlong\n");
    }
}
