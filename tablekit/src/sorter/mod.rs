//! Multi-row table sorter.
//!
//! A [`SortEngine`] decorates a `table` element so that clicking a header
//! cell sorts the body. Rows are sorted in blocks of `rows_per_block`
//! consecutive rows; each block is ordered by the cell of one representative
//! row, and the rows of a block always stay together in their original order.
//!
//! Columns need no sort function configured up front: at attach time every
//! column is bound to the parser that matches its first body cell, unless an
//! override names one. The data in a column is assumed to be homogeneous.

mod blocks;
mod state;

pub use state::{SortState, HEADER_CLASS, SORT_DOWN_CLASS, SORT_UP_CLASS};

use std::sync::Arc;
use std::sync::mpsc::Receiver;

use log::{debug, trace, warn};
use tabledom::{
    descendants_by_tag_and_class, find_element, find_element_mut, first_by_tag, text_width,
    Element, Event, Tag,
};

use crate::config::SorterConfig;
use crate::error::DecorateError;
use crate::event::{EventResult, Notifier, SortEvent};
use crate::parsers::{Parser, ParserRegistry, SortKey};
use crate::rows;

/// Sorts blocks of body rows by the column whose header was clicked.
///
/// # Example
///
/// ```ignore
/// let registry = Arc::new(ParserRegistry::builtin()?);
/// let mut sorter = SortEngine::new(registry).rows_per_block(2);
/// sorter.attach(&mut root, "ledger")?;
/// let sorted = sorter.subscribe();
///
/// sorter.click_header(&mut root, 1);
/// assert_eq!(sorted.try_recv()?.column, 1);
/// ```
#[derive(Debug)]
pub struct SortEngine {
    registry: Arc<ParserRegistry>,
    config: SorterConfig,
    /// Decorated table, `None` while detached.
    table_id: Option<String>,
    /// Ids of the sortable header cells, by column.
    header_cells: Vec<String>,
    /// Parser bound to each column.
    bindings: Vec<Arc<Parser>>,
    state: SortState,
    notifier: Notifier<SortEvent>,
}

impl SortEngine {
    /// Create an engine with the default configuration.
    pub fn new(registry: Arc<ParserRegistry>) -> Self {
        Self::with_config(registry, SorterConfig::default())
    }

    /// Create an engine with the given configuration.
    pub fn with_config(registry: Arc<ParserRegistry>, config: SorterConfig) -> Self {
        Self {
            registry,
            config,
            table_id: None,
            header_cells: Vec::new(),
            bindings: Vec::new(),
            state: SortState::new(),
            notifier: Notifier::default(),
        }
    }

    // -------------------------------------------------------------------------
    // Configuration (takes effect at the next attach)
    // -------------------------------------------------------------------------

    pub fn rows_per_block(mut self, rows: usize) -> Self {
        self.config = self.config.rows_per_block(rows);
        self
    }

    pub fn representative_offset(mut self, offset: usize) -> Self {
        self.config = self.config.representative_offset(offset);
        self
    }

    pub fn fixed_width(mut self, fixed: bool) -> Self {
        self.config = self.config.fixed_width(fixed);
        self
    }

    pub fn header_row_class(mut self, class: impl Into<String>) -> Self {
        self.config = self.config.header_row_class(class);
        self
    }

    pub fn reverse_by_default(mut self, column: usize) -> Self {
        self.config = self.config.reverse_by_default(column);
        self
    }

    pub fn column_offset(mut self, column: usize, offset: usize) -> Self {
        self.config = self.config.column_offset(column, offset);
        self
    }

    pub fn override_parser(mut self, column: usize, parser_id: impl Into<String>) -> Self {
        self.config = self.config.override_parser(column, parser_id);
        self
    }

    pub fn config(&self) -> &SorterConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Decorate the table `table_id` inside `root`.
    ///
    /// Every header cell gets the `header` class and loses any stale
    /// direction indicator, fixed widths are applied when enabled, and each
    /// column is bound to a parser. On error nothing is modified.
    pub fn attach(&mut self, root: &mut Element, table_id: &str) -> Result<(), DecorateError> {
        let table = find_element(root, table_id)
            .ok_or_else(|| DecorateError::NotFound(table_id.to_string()))?;
        if table.tag != Tag::Table {
            return Err(DecorateError::NotATable {
                id: table_id.to_string(),
                tag: table.tag,
            });
        }

        let header_row = first_by_tag(table, Tag::THead)
            .and_then(|thead| {
                descendants_by_tag_and_class(thead, Tag::Tr, self.config.header_row_class.as_deref())
                    .into_iter()
                    .next()
            })
            .ok_or_else(|| DecorateError::MissingHeaderRow(table_id.to_string()))?;
        let body = first_by_tag(table, Tag::TBody)
            .ok_or_else(|| DecorateError::MissingBody(table_id.to_string()))?;

        for (&column, parser_id) in &self.config.parser_overrides {
            if self.registry.get(parser_id).is_none() {
                return Err(DecorateError::UnknownParser {
                    column,
                    parser: parser_id.clone(),
                });
            }
        }

        let header_row_id = header_row.id.clone();
        let columns = header_row.cells().count();
        let first_row = body.child_elements().iter().find(|e| e.tag == Tag::Tr);
        let sample: Vec<String> = first_row
            .map(|row| row.cells().map(Element::text_content).collect())
            .unwrap_or_default();

        self.bindings = (0..columns)
            .map(|column| self.detect_parser(column, sample.get(column).map(String::as_str)))
            .collect();

        let Some(header_row) = find_element_mut(root, &header_row_id) else {
            return Err(DecorateError::MissingHeaderRow(table_id.to_string()));
        };
        self.header_cells.clear();
        for (column, cell) in header_row.cells_mut().enumerate() {
            cell.add_class(HEADER_CLASS);
            cell.remove_class(SORT_UP_CLASS);
            cell.remove_class(SORT_DOWN_CLASS);
            if self.config.fixed_width {
                if let Some(text) = sample.get(column) {
                    cell.style.width = Some(text_width(text));
                }
            }
            self.header_cells.push(cell.id.clone());
        }

        self.table_id = Some(table_id.to_string());
        self.state = SortState::new();

        debug!(
            "SortEngine: attached to '{}' ({} columns, {} rows per block)",
            table_id,
            columns,
            self.config.block_size()
        );
        for (column, parser) in self.bindings.iter().enumerate() {
            trace!("SortEngine: column {} -> {}", column, parser.id());
        }
        Ok(())
    }

    /// Forget the decorated table and disconnect every subscriber.
    pub fn detach(&mut self) {
        if let Some(table_id) = self.table_id.take() {
            debug!("SortEngine: detached from '{}'", table_id);
        }
        self.header_cells.clear();
        self.bindings.clear();
        self.state = SortState::new();
        self.notifier.clear();
    }

    pub fn is_attached(&self) -> bool {
        self.table_id.is_some()
    }

    /// Id of the decorated table.
    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    fn detect_parser(&self, column: usize, sample: Option<&str>) -> Arc<Parser> {
        if let Some(parser) = self
            .config
            .parser_overrides
            .get(&column)
            .and_then(|id| self.registry.get(id))
        {
            return Arc::clone(parser);
        }
        match sample {
            Some(text) => Arc::clone(self.registry.resolve(text)),
            None => Arc::clone(self.registry.catch_all()),
        }
    }

    // -------------------------------------------------------------------------
    // State
    // -------------------------------------------------------------------------

    pub fn state(&self) -> SortState {
        self.state
    }

    /// Active sort column, `None` before the first sort.
    pub fn sort_column(&self) -> Option<usize> {
        self.state.column
    }

    pub fn is_reversed(&self) -> bool {
        self.state.reversed
    }

    /// Parser bound to each column.
    pub fn bindings(&self) -> &[Arc<Parser>] {
        &self.bindings
    }

    /// Parser bound to `column`.
    pub fn parser_for(&self, column: usize) -> Option<&Parser> {
        self.bindings.get(column).map(Arc::as_ref)
    }

    /// Ids of the sortable header cells, by column.
    pub fn header_cell_ids(&self) -> &[String] {
        &self.header_cells
    }

    /// Column whose header cell has id `target`.
    pub fn column_of(&self, target: &str) -> Option<usize> {
        self.header_cells.iter().position(|id| id == target)
    }

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------

    /// Receive a [`SortEvent`] after every completed sort.
    pub fn subscribe(&mut self) -> Receiver<SortEvent> {
        self.notifier.subscribe()
    }

    /// Number of connected subscribers (as of the last notification).
    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
    }

    // -------------------------------------------------------------------------
    // Sorting
    // -------------------------------------------------------------------------

    /// Handle a UI event. Clicks on header cells sort.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> EventResult {
        match event {
            Event::Click { target } => match self.column_of(target) {
                Some(column) => {
                    self.click_header(root, column);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
            Event::Change { .. } => EventResult::Ignored,
        }
    }

    /// Apply a header click on `column`: update the sort state, redraw the
    /// direction indicators, sort the body and notify subscribers.
    ///
    /// Returns the published event, or `None` when detached, the column is
    /// out of range, or the table is gone from `root`.
    pub fn click_header(&mut self, root: &mut Element, column: usize) -> Option<SortEvent> {
        let table_id = self.table_id.clone()?;
        if column >= self.header_cells.len() {
            debug!(
                "SortEngine: ignoring click on column {} of '{}' ({} columns)",
                column,
                table_id,
                self.header_cells.len()
            );
            return None;
        }
        if find_element(root, &table_id).is_none() {
            warn!("SortEngine: table '{}' is no longer in the tree", table_id);
            return None;
        }

        let reverse_by_default = self.config.reverse_by_default.contains(&column);
        self.state.click(column, reverse_by_default);
        self.render_indicators(root);
        self.sort_body(root, &table_id, column);

        let event = SortEvent {
            table_id,
            column,
            reversed: self.state.reversed,
        };
        self.notifier.notify(&event);
        Some(event)
    }

    /// Clear every header cell's indicator, then mark the active one.
    fn render_indicators(&self, root: &mut Element) {
        for (column, cell_id) in self.header_cells.iter().enumerate() {
            let Some(cell) = find_element_mut(root, cell_id) else {
                continue;
            };
            cell.remove_class(SORT_UP_CLASS);
            cell.remove_class(SORT_DOWN_CLASS);
            if let Some(indicator) = self.state.indicator(column) {
                cell.add_class(indicator);
            }
        }
    }

    fn sort_body(&self, root: &mut Element, table_id: &str, column: usize) {
        let Some(body) = rows::body_mut(root, table_id) else {
            return;
        };
        let Some(parser) = self.bindings.get(column) else {
            return;
        };

        let offset = self.config.offset_for(column);
        let rows = body.take_children();
        let row_count = rows.len();
        let blocks = blocks::partition(rows, self.config.block_size());
        let sorted = blocks::sort_blocks(
            blocks,
            |block| {
                let text = blocks::representative(block, offset)
                    .and_then(|row| row.cells().nth(column))
                    .map(Element::text_content)
                    .unwrap_or_default();
                parser.normalize(&text)
            },
            |a: &SortKey, b: &SortKey| parser.compare(a, b),
            self.state.reversed,
        );
        body.set_children(sorted.into_iter().flatten().collect());

        debug!(
            "SortEngine: sorted {} rows of '{}' by column {} with '{}'{}",
            row_count,
            table_id,
            column,
            parser.id(),
            if self.state.reversed { " (reversed)" } else { "" }
        );
    }
}
