//! Table component state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock, Weak};

use dmp_table_lib::TableDocument;
use dmp_table_lib::error::PageError;
use dmp_table_lib::model::{ColumnSet, Row, TableRow};
use dmp_table_lib::page::Pagination;
use dmp_table_lib::sort::sort_rows;

/// Callback invoked with the updated column set when sorting is delegated.
pub type SortChangeHandler = Arc<dyn Fn(&ColumnSet) + Send + Sync>;

/// Unique identifier for a Table instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Initial props supplied by the owning page.
pub struct TableProps<R> {
    /// Initial column set.
    pub column_data: ColumnSet,
    /// Initial row set.
    pub row_data: Vec<R>,
    /// Accessible label for the table.
    pub label: String,
    /// Optional styling hook.
    pub class_name: Option<String>,
    /// When set, sorting is delegated to this handler instead of done in memory.
    pub on_sort_change: Option<SortChangeHandler>,
    /// Optional page settings.
    pub pagination: Option<Pagination>,
}

impl<R> TableProps<R> {
    /// Creates props with the required fields.
    pub fn new(label: impl Into<String>, column_data: ColumnSet, row_data: Vec<R>) -> Self {
        Self {
            column_data,
            row_data,
            label: label.into(),
            class_name: None,
            on_sort_change: None,
            pagination: None,
        }
    }

    /// Sets the styling hook.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Delegates sorting to `handler`.
    pub fn on_sort_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&ColumnSet) + Send + Sync + 'static,
    {
        self.on_sort_change = Some(Arc::new(handler));
        self
    }

    /// Paginates the table.
    pub fn paginate(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

impl<R> fmt::Debug for TableProps<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableProps")
            .field("label", &self.label)
            .field("class_name", &self.class_name)
            .field("columns", &self.column_data.len())
            .field("rows", &self.row_data.len())
            .field("delegated", &self.on_sort_change.is_some())
            .field("pagination", &self.pagination)
            .finish()
    }
}

impl From<TableDocument> for TableProps<Row> {
    fn from(doc: TableDocument) -> Self {
        Self {
            column_data: doc.column_data,
            row_data: doc.row_data,
            label: doc.label,
            class_name: doc.class_name,
            on_sort_change: None,
            pagination: None,
        }
    }
}

/// Internal state for the Table component.
pub(super) struct TableInner<R> {
    /// Current column definitions, including sort directions.
    pub columns: ColumnSet,
    /// Current row order.
    pub rows: Vec<R>,
    /// Accessible label.
    pub label: String,
    /// Styling hook.
    pub class_name: Option<String>,
    /// Delegated sort handler.
    pub on_sort_change: Option<SortChangeHandler>,
    /// Page settings.
    pub pagination: Option<Pagination>,
}

impl<R> fmt::Debug for TableInner<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableInner")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("label", &self.label)
            .field("delegated", &self.on_sort_change.is_some())
            .field("pagination", &self.pagination)
            .finish()
    }
}

/// A sortable, optionally paginated data table.
///
/// `Table<R>` holds its own copy of the columns and rows it was mounted
/// with and reacts to sort interactions:
/// - Without an `on_sort_change` handler, rows are re-sorted in memory.
/// - With a handler, the updated column set is handed to the owner and the
///   row order is left alone until the owner supplies new rows.
///
/// The handle is cheap to clone; clones share state.
pub struct Table<R> {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<TableInner<R>>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl<R: TableRow + Clone> Table<R> {
    /// Mounts a table from its props.
    pub fn new(props: TableProps<R>) -> Self {
        let inner = TableInner {
            columns: props.column_data,
            rows: props.row_data,
            label: props.label,
            class_name: props.class_name,
            on_sort_change: props.on_sort_change,
            pagination: props.pagination,
        };
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(inner)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// Get the accessible label.
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|g| g.label.clone())
            .unwrap_or_default()
    }

    /// Get the styling hook.
    pub fn class_name(&self) -> Option<String> {
        self.inner.read().ok().and_then(|g| g.class_name.clone())
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the current column set.
    pub fn columns(&self) -> ColumnSet {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Replace the column set.
    ///
    /// This is a prop update, not a sort interaction: the sort-change
    /// handler is not called and rows are not re-sorted.
    pub fn set_columns(&self, columns: ColumnSet) {
        if let Ok(mut guard) = self.inner.write() {
            guard.columns = columns;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Returns `true` if sorting is delegated to an `on_sort_change` handler.
    pub fn is_delegated(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.on_sort_change.is_some())
            .unwrap_or(false)
    }

    /// Install or remove the sort-change handler.
    pub fn set_on_sort_change(&self, handler: Option<SortChangeHandler>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.on_sort_change = handler;
        }
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get all rows in their current order.
    pub fn rows(&self) -> Vec<R> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Get the row keys in their current order.
    pub fn row_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.rows.iter().map(TableRow::key).collect())
            .unwrap_or_default()
    }

    /// Replace the rows.
    ///
    /// The last update wins. When sorting is done in memory and a sort is
    /// active, the new rows are sorted straight away so the row order always
    /// matches the header state.
    pub fn set_rows(&self, rows: Vec<R>) {
        let snapshot = self.inner.read().ok().and_then(|g| {
            (g.on_sort_change.is_none() && g.columns.has_active()).then(|| g.columns.clone())
        });
        let mut rows = match &snapshot {
            Some(columns) => sort_rows(&rows, columns).into_owned(),
            None => rows,
        };

        if let Ok(mut guard) = self.inner.write() {
            // The columns changed while sorting.
            if guard.on_sort_change.is_none()
                && guard.columns.has_active()
                && snapshot.as_ref() != Some(&guard.columns)
            {
                rows = sort_rows(&rows, &guard.columns).into_owned();
            }
            guard.rows = rows;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Pagination
    // -------------------------------------------------------------------------

    /// Get the page settings.
    pub fn pagination(&self) -> Option<Pagination> {
        self.inner.read().ok().and_then(|g| g.pagination)
    }

    /// Set or remove the page settings.
    pub fn set_pagination(&self, pagination: Option<Pagination>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.pagination = pagination;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the current page number, if paginated.
    pub fn current_page(&self) -> Option<usize> {
        self.pagination().map(|p| p.page())
    }

    /// Get the number of pages, 1 when not paginated.
    pub fn total_pages(&self) -> usize {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.pagination.map(|p| p.total_pages(g.rows.len())))
            .unwrap_or(1)
    }

    /// Move to another page.
    ///
    /// Does nothing on an unpaginated table.
    pub fn go_to_page(&self, page: usize) -> Result<(), PageError> {
        if let Ok(mut guard) = self.inner.write()
            && let Some(current) = guard.pagination
        {
            let next = current.with_page(page)?;
            if next != current {
                guard.pagination = Some(next);
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the table has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    /// Create a handle that does not keep the table alive.
    ///
    /// Sort-change handlers stored on the table should capture this rather
    /// than a clone, which would form a reference cycle.
    pub fn downgrade(&self) -> WeakTable<R> {
        WeakTable {
            id: self.id,
            inner: Arc::downgrade(&self.inner),
            dirty: Arc::downgrade(&self.dirty),
        }
    }
}

/// A non-owning handle to a [`Table`].
pub struct WeakTable<R> {
    id: TableId,
    inner: Weak<RwLock<TableInner<R>>>,
    dirty: Weak<AtomicBool>,
}

impl<R> WeakTable<R> {
    /// Get a full handle, or `None` if the table has been dropped.
    pub fn upgrade(&self) -> Option<Table<R>> {
        Some(Table {
            id: self.id,
            inner: self.inner.upgrade()?,
            dirty: self.dirty.upgrade()?,
        })
    }
}

impl<R> Clone for WeakTable<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Weak::clone(&self.inner),
            dirty: Weak::clone(&self.dirty),
        }
    }
}

impl<R> fmt::Debug for WeakTable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakTable").field("id", &self.id).finish()
    }
}

impl<R> Clone for Table<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<R> fmt::Debug for Table<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("dirty", &self.dirty)
            .finish()
    }
}
