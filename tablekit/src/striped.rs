//! Alternating row classes.
//!
//! A [`StripedTable`] gives body rows alternating `even`/`odd` classes and
//! re-applies them whenever the row order or visibility may have changed:
//! after a sort, or when a collapse collaborator shows or hides rows.

use std::sync::mpsc::Receiver;

use log::{debug, trace};
use tabledom::{find_element, Element, Event, Tag};

use crate::config::StripeConfig;
use crate::error::DecorateError;
use crate::event::{CollapseEvent, EventResult, SortEvent};
use crate::marker::is_row_hidden;
use crate::rows;
use crate::sorter::SortEngine;

/// Keeps a table's body rows striped.
///
/// # Example
///
/// ```ignore
/// let mut striped = StripedTable::new(StripeConfig::new().filter_hidden_rows(true))
///     .with_sorter(SortEngine::new(registry));
/// striped.attach(&mut root, "ledger")?;
///
/// // A collapsible section just hid some rows.
/// striped.on_collapse(&mut root, CollapseEvent::Hidden);
/// ```
#[derive(Debug)]
pub struct StripedTable {
    config: StripeConfig,
    sorter: Option<SortEngine>,
    /// Notifications from the child sorter, replaced on every attach.
    sort_events: Option<Receiver<SortEvent>>,
    /// Notifications from sorters owned elsewhere, kept across detach.
    followed: Vec<Receiver<SortEvent>>,
    table_id: Option<String>,
}

impl StripedTable {
    pub fn new(config: StripeConfig) -> Self {
        Self {
            config,
            sorter: None,
            sort_events: None,
            followed: Vec::new(),
            table_id: None,
        }
    }

    /// Compose with a sort engine that decorates the same table.
    pub fn with_sorter(mut self, sorter: SortEngine) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Restripe on notifications from a sort engine owned elsewhere.
    pub fn follow(mut self, sort_events: Receiver<SortEvent>) -> Self {
        self.followed.push(sort_events);
        self
    }

    pub fn sorter(&self) -> Option<&SortEngine> {
        self.sorter.as_ref()
    }

    pub fn sorter_mut(&mut self) -> Option<&mut SortEngine> {
        self.sorter.as_mut()
    }

    pub fn config(&self) -> &StripeConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.table_id.is_some()
    }

    /// Decorate table `table_id` and stripe it. On error nothing is modified.
    pub fn attach(&mut self, root: &mut Element, table_id: &str) -> Result<(), DecorateError> {
        let table = find_element(root, table_id)
            .ok_or_else(|| DecorateError::NotFound(table_id.to_string()))?;
        if table.tag != Tag::Table {
            return Err(DecorateError::NotATable {
                id: table_id.to_string(),
                tag: table.tag,
            });
        }
        if rows::body(root, table_id).is_none() {
            return Err(DecorateError::MissingBody(table_id.to_string()));
        }

        if let Some(sorter) = self.sorter.as_mut() {
            sorter.attach(root, table_id)?;
            self.sort_events = Some(sorter.subscribe());
        }

        self.table_id = Some(table_id.to_string());
        self.restripe(root);
        debug!("StripedTable: attached to '{}'", table_id);
        Ok(())
    }

    /// Detach from the table, and the child sorter with it.
    pub fn detach(&mut self) {
        if let Some(sorter) = self.sorter.as_mut() {
            sorter.detach();
        }
        self.sort_events = None;
        self.table_id = None;
    }

    /// Re-apply the row classes. Returns the number of striped rows.
    ///
    /// With `filter_hidden_rows`, hidden rows are skipped and do not advance
    /// the alternation.
    pub fn restripe(&self, root: &mut Element) -> usize {
        let Some(table_id) = self.table_id.as_deref() else {
            return 0;
        };
        let odd = self.config.odd_class.as_str();
        let even = self.config.even_class.as_str();

        let mut striped = 0;
        for row in rows::rows_mut(root, table_id) {
            if self.config.filter_hidden_rows && is_row_hidden(row, &self.config.hide_class) {
                continue;
            }
            if striped % 2 == 0 {
                row.add_remove_classes(&[odd], &[even]);
            } else {
                row.add_remove_classes(&[even], &[odd]);
            }
            striped += 1;
        }
        trace!("StripedTable: striped {} rows of '{}'", striped, table_id);
        striped
    }

    /// Handle a UI event. Header clicks go to the child sorter.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> EventResult {
        let result = match self.sorter.as_mut() {
            Some(sorter) => sorter.handle_event(root, event),
            None => EventResult::Ignored,
        };
        self.poll_sort_events(root);
        result
    }

    /// Restripe if any sort notification is pending. Returns how many were
    /// drained.
    pub fn poll_sort_events(&mut self, root: &mut Element) -> usize {
        let drained: usize = self
            .sort_events
            .iter()
            .chain(&self.followed)
            .map(|rx| rx.try_iter().count())
            .sum();
        if drained > 0 {
            self.restripe(root);
        }
        drained
    }

    /// React to a collapse collaborator showing or hiding rows.
    pub fn on_collapse(&mut self, root: &mut Element, event: CollapseEvent) {
        match event {
            CollapseEvent::Hidden | CollapseEvent::Shown | CollapseEvent::Collapsed => {
                trace!("StripedTable: collapse {:?}", event);
                self.restripe(root);
            }
        }
    }
}
