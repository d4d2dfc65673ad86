mod document;
mod error;
mod paths;

use std::fs::{self, File};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use clap::Parser;
use log::{debug, error, info};
use simplelog::{Config, LevelFilter, WriteLogger};
use tabledom::{find_element, first_by_tag, text_width, Element, Event, Tag};
use tablekit::sorter::{SORT_DOWN_CLASS, SORT_UP_CLASS};
use tablekit::{
    PaginationController, PaginatorConfig, ParserRegistry, SortEngine, StripedTable,
};

use document::{control_id, TableDocument, PAGE_SIZE_ID, PAGER_ID, TABLE_ID};
use error::DemoError;

#[derive(Parser)]
#[command(
    name = "tablekit-demo",
    about = "Sort and page a table loaded from a JSON document"
)]
struct Cli {
    /// Table document (JSON)
    table: PathBuf,

    /// Click the header of column COL (0-based); repeat to toggle or re-sort
    #[arg(long = "sort", value_name = "COL")]
    sort: Vec<usize>,

    /// Rows per page, as if picked in the page-size select
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Page to show: a number, or first, last, next, prev
    #[arg(long, value_name = "PAGE")]
    page: Option<PageTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageTarget {
    Number(usize),
    First,
    Prev,
    Next,
    Last,
}

impl PageTarget {
    /// Class of the pager control that performs this move.
    fn control_class(self, config: &PaginatorConfig) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::First => Some(config.css_first.as_str()),
            Self::Prev => Some(config.css_prev.as_str()),
            Self::Next => Some(config.css_next.as_str()),
            Self::Last => Some(config.css_last.as_str()),
        }
    }
}

impl FromStr for PageTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(Self::First),
            "prev" => Ok(Self::Prev),
            "next" => Ok(Self::Next),
            "last" => Ok(Self::Last),
            _ => s
                .parse()
                .map(Self::Number)
                .map_err(|_| format!("expected a page number or first/last/next/prev, got '{s}'")),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging() {
        eprintln!("Warning: {}", e);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging() -> Result<(), DemoError> {
    let path = paths::log_file().ok_or_else(|| DemoError::Logging("no cache directory".into()))?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|e| DemoError::Logging(e.to_string()))?;
    }
    let log_file = File::create(&path).map_err(|e| DemoError::Logging(e.to_string()))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(|e| DemoError::Logging(e.to_string()))
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let doc = TableDocument::load(&cli.table)?;
    let mut root = doc.build()?;
    info!(
        "Loaded {} ({} columns, {} rows)",
        cli.table.display(),
        doc.headers.len(),
        doc.rows.len()
    );

    let registry = Arc::new(ParserRegistry::builtin()?);
    let sorter = SortEngine::with_config(registry, doc.sorter.clone());
    let mut paginator = PaginationController::new(doc.paginator.clone()).with_sorter(sorter);
    paginator.attach(&mut root, TABLE_ID, PAGER_ID)?;

    let mut striped = match &doc.stripes {
        Some(config) => {
            let mut striped = StripedTable::new(config.clone());
            if let Some(sorted) = paginator.sorter_mut().map(SortEngine::subscribe) {
                striped = striped.follow(sorted);
            }
            striped.attach(&mut root, TABLE_ID)?;
            Some(striped)
        }
        None => None,
    };

    for &column in &cli.sort {
        let header = paginator
            .sorter()
            .and_then(|sorter| sorter.header_cell_ids().get(column).cloned())
            .ok_or(DemoError::NoColumn(column))?;
        debug!("Clicking header of column {}", column);
        paginator.handle_event(&mut root, &Event::click(header));
    }

    if let Some(rows) = cli.page_size {
        paginator.handle_event(&mut root, &Event::change(PAGE_SIZE_ID, rows.to_string()));
    }

    if let Some(target) = cli.page {
        let control = target.control_class(paginator.config()).map(control_id);
        match (control, target) {
            (Some(id), _) => {
                paginator.handle_event(&mut root, &Event::click(id));
            }
            (None, PageTarget::Number(page)) => {
                paginator.go_to_page(&mut root, page);
            }
            (None, _) => {}
        }
    }

    if let Some(striped) = striped.as_mut() {
        striped.poll_sort_events(&mut root);
        striped.restripe(&mut root);
    }

    print_page(&root, &doc, &paginator, striped.is_some());
    Ok(())
}

/// Print the header and the visible rows as an aligned text table.
fn print_page(root: &Element, doc: &TableDocument, paginator: &PaginationController, striped: bool) {
    let Some(table) = find_element(root, TABLE_ID) else {
        return;
    };

    let headers: Vec<String> = first_by_tag(table, Tag::THead)
        .and_then(|thead| first_by_tag(thead, Tag::Tr))
        .map(|row| {
            row.cells()
                .map(|cell| {
                    let mut text = cell.text_content();
                    if cell.has_class(SORT_UP_CLASS) {
                        text.push_str(" ^");
                    } else if cell.has_class(SORT_DOWN_CLASS) {
                        text.push_str(" v");
                    }
                    text
                })
                .collect()
        })
        .unwrap_or_default();

    let marker = &paginator.config().marker;
    let rows: Vec<(Vec<String>, &str)> = first_by_tag(table, Tag::TBody)
        .map(|body| {
            body.child_elements()
                .iter()
                .filter(|row| row.tag == Tag::Tr && row.is_displayed() && !marker.hides(row))
                .map(|row| {
                    let stripe = doc
                        .stripes
                        .as_ref()
                        .filter(|_| striped)
                        .map_or("", |config| {
                            if row.has_class(&config.even_class) {
                                "even"
                            } else if row.has_class(&config.odd_class) {
                                "odd"
                            } else {
                                ""
                            }
                        });
                    (row.cells().map(Element::text_content).collect(), stripe)
                })
                .collect()
        })
        .unwrap_or_default();

    let mut widths: Vec<usize> = headers.iter().map(|h| text_width(h) as usize).collect();
    for (cells, _) in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(text_width(cell) as usize);
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let pad = width.saturating_sub(text_width(cell) as usize);
                format!("{}{}", cell, " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(" | ")
    };

    println!("{}", line(&headers));
    println!(
        "{}",
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("-+-")
    );
    for (cells, stripe) in &rows {
        if striped {
            println!("{}  {}", line(cells), stripe);
        } else {
            println!("{}", line(cells));
        }
    }

    let state = paginator.state();
    println!(
        "page {} ({} rows, {} per page)",
        state.display(),
        state.row_count(),
        state.rows_per_page()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_target_from_str() {
        assert_eq!("3".parse::<PageTarget>(), Ok(PageTarget::Number(3)));
        assert_eq!("last".parse::<PageTarget>(), Ok(PageTarget::Last));
        assert!("third".parse::<PageTarget>().is_err());
    }

    #[test]
    fn test_cli_collects_repeated_sorts() {
        let cli = Cli::try_parse_from([
            "tablekit-demo",
            "ledger.json",
            "--sort",
            "2",
            "--sort",
            "2",
            "--page",
            "next",
            "--page-size",
            "25",
        ])
        .unwrap();
        assert_eq!(cli.sort, vec![2, 2]);
        assert_eq!(cli.page, Some(PageTarget::Next));
        assert_eq!(cli.page_size, Some(25));
    }
}
