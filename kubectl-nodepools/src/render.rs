//! kubectl-style rendering of pool reports and pool members.

use tabled::Table;
use tabled::Tabled;
use tabled::settings::Alignment;
use tabled::settings::Modify;
use tabled::settings::Padding;
use tabled::settings::Remove;
use tabled::settings::Style;
use tabled::settings::object::Columns;
use tabled::settings::object::Rows;
use tabled::settings::themes::Theme;

use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    Table,
    Name,
    Json,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Options {
    pub(crate) headers: bool,
    pub(crate) format: Format,
    pub(crate) type_listing: nodepools::TypeListing,
}

#[derive(Tabled)]
struct PoolRow<'a> {
    #[tabled(rename = "NAME")]
    name: &'a str,
    #[tabled(rename = "NODES")]
    nodes: usize,
    #[tabled(rename = "TYPE")]
    types: String,
}

#[derive(Tabled)]
struct NodeRow<'a> {
    #[tabled(rename = "NODE")]
    name: &'a str,
    #[tabled(rename = "STATUS")]
    status: &'a str,
}

pub(crate) fn pools(report: &nodepools::Report, options: &Options) -> Result<String, Error> {
    let text = match options.format {
        Format::Json => json(report)?,
        Format::Name => names("NAME", report.iter().map(|pool| pool.name.as_str()), options),
        Format::Table => {
            let rows = report
                .iter()
                .map(|pool| PoolRow {
                    name: &pool.name,
                    nodes: pool.node_count,
                    types: pool.type_list(options.type_listing),
                })
                .collect::<Vec<_>>();
            let mut rendered = table(&rows, options);
            if let Some(table) = &mut rendered {
                table.with(Modify::new(Columns::one(1)).with(Alignment::right()));
            }
            finish(rendered)
        }
    };
    Ok(text)
}

pub(crate) fn nodes(nodes: &nodepools::NodeFilterResult, options: &Options) -> Result<String, Error> {
    let text = match options.format {
        Format::Json => json(nodes)?,
        Format::Name => names("NODE", nodes.iter().map(|node| node.name.as_str()), options),
        Format::Table => {
            let rows = nodes
                .iter()
                .map(|node| NodeRow {
                    name: &node.name,
                    status: &node.status,
                })
                .collect::<Vec<_>>();
            finish(table(&rows, options))
        }
    };
    Ok(text)
}

fn json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, Error> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

fn names<'a>(header: &'a str, names: impl Iterator<Item = &'a str>, options: &Options) -> String {
    options
        .headers
        .then_some(header)
        .into_iter()
        .chain(names)
        .flat_map(|line| [line, "\n"])
        .collect()
}

/// Builds a borderless table, `None` when there is nothing to show at all.
fn table<T: Tabled>(rows: &[T], options: &Options) -> Option<Table> {
    if rows.is_empty() && !options.headers {
        return None;
    }

    let mut table = Table::new(rows);
    let mut theme = Theme::from_style(Style::empty());
    theme.remove_horizontal_lines();
    table.with(theme);
    table.with(Modify::new(Columns::new(..)).with(Padding::new(0, 2, 0, 0)));
    if !options.headers {
        table.with(Remove::row(Rows::first()));
    }
    Some(table)
}

fn finish(table: Option<Table>) -> String {
    table
        .map(|table| {
            table
                .to_string()
                .lines()
                .flat_map(|line| [line.trim_end(), "\n"])
                .collect::<String>()
        })
        .unwrap_or_default()
}
