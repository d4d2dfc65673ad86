//! Table pagination.
//!
//! A [`PaginationController`] shows one page of body rows at a time and hides
//! the rest with the configured [`RowMarker`](crate::marker::RowMarker). Its
//! controls live in a separate host element and are found by class:
//!
//! ```text
//! div#pager
//! ├── button.first   button.prev   button.next   button.last
//! ├── select.pagesize    (value is the page size)
//! └── input.pagedisplay  (shows "current/total")
//! ```
//!
//! When composed with a [`SortEngine`], the controller re-derives its page
//! bounds from every sort notification.

mod state;

pub use state::{PageState, DEFAULT_ROWS_PER_PAGE};

use std::sync::mpsc::Receiver;

use log::{debug, trace};
use tabledom::{
    descendants_by_class, descendants_by_tag_and_class, find_element, find_element_mut, Element,
    Event, Tag,
};

use crate::config::PaginatorConfig;
use crate::error::DecorateError;
use crate::event::{EventResult, SortEvent};
use crate::rows;
use crate::sorter::SortEngine;

/// Page navigation triggered by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PageAction {
    First,
    Prev,
    Next,
    Last,
}

/// Ids of the located host controls.
#[derive(Debug, Clone, Default)]
struct Controls {
    first: Option<String>,
    prev: Option<String>,
    next: Option<String>,
    last: Option<String>,
    page_size: Option<String>,
    page_display: Option<String>,
}

impl Controls {
    fn locate(host: &Element, config: &PaginatorConfig) -> Self {
        let by_class = |class: &str| {
            descendants_by_class(host, class)
                .first()
                .map(|e| e.id.clone())
        };
        let by_tag = |tag: Tag, class: &str| {
            descendants_by_tag_and_class(host, tag, Some(class))
                .first()
                .map(|e| e.id.clone())
        };
        Self {
            first: by_class(&config.css_first),
            prev: by_class(&config.css_prev),
            next: by_class(&config.css_next),
            last: by_class(&config.css_last),
            page_size: by_tag(Tag::Select, &config.css_page_size),
            page_display: by_tag(Tag::Input, &config.css_page_display),
        }
    }

    fn action_for(&self, target: &str) -> Option<PageAction> {
        let is = |id: &Option<String>| id.as_deref() == Some(target);
        if is(&self.first) {
            Some(PageAction::First)
        } else if is(&self.prev) {
            Some(PageAction::Prev)
        } else if is(&self.next) {
            Some(PageAction::Next)
        } else if is(&self.last) {
            Some(PageAction::Last)
        } else {
            None
        }
    }
}

/// Shows one page of a table's body rows at a time.
#[derive(Debug)]
pub struct PaginationController {
    config: PaginatorConfig,
    sorter: Option<SortEngine>,
    sort_events: Option<Receiver<SortEvent>>,
    table_id: Option<String>,
    host_id: Option<String>,
    controls: Controls,
    state: PageState,
}

impl PaginationController {
    pub fn new(config: PaginatorConfig) -> Self {
        let state = PageState::new(config.rows_per_page);
        Self {
            config,
            sorter: None,
            sort_events: None,
            table_id: None,
            host_id: None,
            controls: Controls::default(),
            state,
        }
    }

    /// Compose with a sort engine that decorates the same table.
    pub fn with_sorter(mut self, sorter: SortEngine) -> Self {
        self.sorter = Some(sorter);
        self
    }

    pub fn sorter(&self) -> Option<&SortEngine> {
        self.sorter.as_ref()
    }

    pub fn sorter_mut(&mut self) -> Option<&mut SortEngine> {
        self.sorter.as_mut()
    }

    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn is_attached(&self) -> bool {
        self.table_id.is_some()
    }

    pub fn table_id(&self) -> Option<&str> {
        self.table_id.as_deref()
    }

    pub fn host_id(&self) -> Option<&str> {
        self.host_id.as_deref()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Decorate table `table_id`, with controls inside element `host_id`.
    ///
    /// The initial page size is read from the page-size `select` when it
    /// holds a positive number. On error nothing is modified.
    pub fn attach(
        &mut self,
        root: &mut Element,
        table_id: &str,
        host_id: &str,
    ) -> Result<(), DecorateError> {
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
        if find_element(root, host_id).is_none() {
            return Err(DecorateError::HostNotFound(host_id.to_string()));
        }

        if let Some(sorter) = self.sorter.as_mut() {
            sorter.attach(root, table_id)?;
            self.sort_events = Some(sorter.subscribe());
        }

        let Some(host) = find_element(root, host_id) else {
            return Err(DecorateError::HostNotFound(host_id.to_string()));
        };
        self.controls = Controls::locate(host, &self.config);
        let rows_per_page = self
            .controls
            .page_size
            .as_deref()
            .and_then(|id| find_element(root, id))
            .and_then(Element::value)
            .and_then(|value| value.trim().parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(self.config.rows_per_page);

        self.table_id = Some(table_id.to_string());
        self.host_id = Some(host_id.to_string());
        self.state = PageState::new(rows_per_page);
        self.state.set_row_count(rows::row_count(root, table_id));
        self.render(root);

        debug!(
            "PaginationController: attached to '{}' ({} rows, {} per page, {} pages)",
            table_id,
            self.state.row_count(),
            self.state.rows_per_page(),
            self.state.total_pages()
        );
        Ok(())
    }

    /// Detach from the table, and the child sorter with it.
    pub fn detach(&mut self) {
        if let Some(sorter) = self.sorter.as_mut() {
            sorter.detach();
        }
        if let Some(table_id) = self.table_id.take() {
            debug!("PaginationController: detached from '{}'", table_id);
        }
        self.host_id = None;
        self.sort_events = None;
        self.controls = Controls::default();
        self.state = PageState::new(self.config.rows_per_page);
    }

    // -------------------------------------------------------------------------
    // Page state
    // -------------------------------------------------------------------------

    /// Change the page size. Ignored unless `rows > 0`.
    pub fn set_rows_per_page(&mut self, root: &mut Element, rows: usize) {
        if !self.is_attached() || !self.state.set_rows_per_page(rows) {
            return;
        }
        if let Some(select) = self
            .controls
            .page_size
            .as_deref()
            .and_then(|id| find_element_mut(root, id))
        {
            select.set_value(rows.to_string());
        }
        self.render(root);
    }

    /// Show page `target`, clamped into range. Returns true when the page
    /// changed.
    pub fn go_to_page(&mut self, root: &mut Element, target: usize) -> bool {
        if !self.is_attached() || !self.state.go_to(target) {
            return false;
        }
        trace!("PaginationController: page {}", self.state.display());
        self.render(root);
        true
    }

    pub fn next(&mut self, root: &mut Element) -> bool {
        self.go_to_page(root, self.state.current_page().saturating_add(1))
    }

    pub fn prev(&mut self, root: &mut Element) -> bool {
        self.go_to_page(root, self.state.current_page().saturating_sub(1))
    }

    pub fn first(&mut self, root: &mut Element) -> bool {
        self.go_to_page(root, 1)
    }

    pub fn last(&mut self, root: &mut Element) -> bool {
        self.go_to_page(root, self.state.total_pages())
    }

    /// Recompute page bounds from the current row count and re-render.
    pub fn on_row_set_changed(&mut self, root: &mut Element) {
        let Some(table_id) = self.table_id.as_deref() else {
            return;
        };
        self.state.set_row_count(rows::row_count(root, table_id));
        self.render(root);
    }

    /// Show the rows of the current page, hide the rest, and update the page
    /// display.
    pub fn render(&self, root: &mut Element) {
        let Some(table_id) = self.table_id.as_deref() else {
            return;
        };
        let window = self.state.window();
        for (index, row) in rows::rows_mut(root, table_id).enumerate() {
            self.config.marker.apply(row, window.contains(&index));
        }
        if let Some(display) = self
            .controls
            .page_display
            .as_deref()
            .and_then(|id| find_element_mut(root, id))
        {
            display.set_value(self.state.display());
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Handle a UI event: page controls, page-size changes, and header clicks
    /// for the child sorter. Pending sort notifications are processed
    /// afterwards.
    pub fn handle_event(&mut self, root: &mut Element, event: &Event) -> EventResult {
        if !self.is_attached() {
            return EventResult::Ignored;
        }

        let result = match event {
            Event::Click { target } => match self.controls.action_for(target) {
                Some(action) => {
                    match action {
                        PageAction::First => self.first(root),
                        PageAction::Prev => self.prev(root),
                        PageAction::Next => self.next(root),
                        PageAction::Last => self.last(root),
                    };
                    EventResult::Consumed
                }
                None => match self.sorter.as_mut() {
                    Some(sorter) => sorter.handle_event(root, event),
                    None => EventResult::Ignored,
                },
            },
            Event::Change { target, value }
                if self.controls.page_size.as_deref() == Some(target.as_str()) =>
            {
                if let Ok(rows) = value.trim().parse::<usize>() {
                    self.set_rows_per_page(root, rows);
                }
                // A rejected value falls back to the size in effect.
                if let Some(select) = find_element_mut(root, target) {
                    select.set_value(self.state.rows_per_page().to_string());
                }
                EventResult::Consumed
            }
            Event::Change { .. } => EventResult::Ignored,
        };

        self.poll_sort_events(root);
        result
    }

    /// Process pending sort notifications. Returns how many were handled.
    pub fn poll_sort_events(&mut self, root: &mut Element) -> usize {
        let pending: Vec<SortEvent> = match self.sort_events.as_ref() {
            Some(rx) => rx.try_iter().collect(),
            None => return 0,
        };
        for event in &pending {
            trace!(
                "PaginationController: '{}' sorted by column {}",
                event.table_id,
                event.column
            );
            self.on_row_set_changed(root);
        }
        pending.len()
    }
}
