use tokio::sync::watch;

use crate::domain::shared::pagination::{PAGE_SIZE, page_slice, total_pages};
use crate::domain::shared::record::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenState {
    Loading,
    Ready,
    /// Terminal for the screen: shown instead of the table, never retried.
    Failed(String),
}

/// What a view binding renders for an admin screen.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSnapshot<R> {
    pub state: ScreenState,
    pub records: Vec<R>,
    /// 1-based.
    pub current_page: usize,
}

impl<R> CollectionSnapshot<R> {
    pub fn page_items(&self) -> &[R] {
        page_slice(&self.records, self.current_page, PAGE_SIZE)
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.records.len(), PAGE_SIZE)
    }

    /// Row number shown in the first column for the `index`-th row of the page.
    pub fn row_number(&self, index: usize) -> usize {
        index + 1 + (self.current_page.saturating_sub(1)) * PAGE_SIZE
    }
}

/// Fully loaded list of records mirrored from the backend.
///
/// Records are only ever swapped for what the server returned; nothing here
/// edits a record's fields.
pub struct AdminCollection<R: Record> {
    state: watch::Sender<CollectionSnapshot<R>>,
}

impl<R: Record> Default for AdminCollection<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> AdminCollection<R> {
    pub fn new() -> Self {
        let (state, _) = watch::channel(CollectionSnapshot {
            state: ScreenState::Loading,
            records: Vec::new(),
            current_page: 1,
        });
        Self { state }
    }

    pub fn subscribe(&self) -> watch::Receiver<CollectionSnapshot<R>> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> CollectionSnapshot<R> {
        self.state.borrow().clone()
    }

    pub fn find(&self, id: i64) -> Option<R> {
        self.state
            .borrow()
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    pub fn set_ready(&self, records: Vec<R>) {
        self.state.send_modify(|snapshot| {
            snapshot.state = ScreenState::Ready;
            snapshot.records = records;
            snapshot.current_page = 1;
        });
    }

    pub fn set_failed(&self, message: &str) {
        self.state.send_modify(|snapshot| {
            snapshot.state = ScreenState::Failed(message.to_string());
        });
    }

    /// Swaps the record with the same id for `record`. Unknown ids are ignored.
    pub fn replace(&self, record: R) {
        self.state.send_if_modified(|snapshot| {
            match snapshot.records.iter_mut().find(|r| r.id() == record.id()) {
                Some(slot) => {
                    *slot = record;
                    true
                }
                None => false,
            }
        });
    }

    /// Drops the record with `id`. When that leaves the current page empty
    /// and it is not the first, the view moves back to the last page.
    pub fn remove(&self, id: i64) {
        self.state.send_modify(|snapshot| {
            snapshot.records.retain(|r| r.id() != id);
            let last = snapshot.total_pages().max(1);
            if snapshot.current_page > last {
                snapshot.current_page = last;
            }
        });
    }

    pub fn set_page(&self, page: usize) {
        self.state.send_modify(|snapshot| {
            let last = snapshot.total_pages().max(1);
            snapshot.current_page = page.clamp(1, last);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        label: &'static str,
    }

    impl Record for Row {
        fn id(&self) -> i64 {
            self.id
        }
    }

    fn rows(count: i64) -> Vec<Row> {
        (1..=count).map(|id| Row { id, label: "old" }).collect()
    }

    #[test]
    fn should_start_loading_on_first_page() {
        let collection: AdminCollection<Row> = AdminCollection::new();
        let snapshot = collection.snapshot();

        assert_eq!(snapshot.state, ScreenState::Loading);
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn should_replace_record_by_id() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(3));

        collection.replace(Row { id: 2, label: "new" });

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.records[1], Row { id: 2, label: "new" });
        assert_eq!(snapshot.records[0].label, "old");
        assert_eq!(snapshot.records.len(), 3);
    }

    #[test]
    fn should_ignore_replacement_for_unknown_id() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(2));
        let before = collection.snapshot();

        collection.replace(Row { id: 99, label: "new" });

        assert_eq!(collection.snapshot(), before);
    }

    #[test]
    fn should_step_back_when_last_row_of_page_removed() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(8));
        collection.set_page(2);

        collection.remove(8);

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.records.len(), 7);
    }

    #[test]
    fn should_step_back_when_page_emptied_by_removal_elsewhere() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(8));
        collection.set_page(2);

        collection.remove(1);

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.current_page, 1);
        assert_eq!(snapshot.total_pages(), 1);
        assert_eq!(snapshot.page_items().len(), 7);
    }

    #[test]
    fn should_stay_on_first_page_when_emptied() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(1));

        collection.remove(1);

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.current_page, 1);
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn should_stay_on_page_when_other_rows_remain() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(9));
        collection.set_page(2);

        collection.remove(8);

        assert_eq!(collection.snapshot().current_page, 2);
        assert_eq!(collection.snapshot().page_items().len(), 1);
    }

    #[test]
    fn should_clamp_page_to_available_range() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(10));

        collection.set_page(5);
        assert_eq!(collection.snapshot().current_page, 2);

        collection.set_page(0);
        assert_eq!(collection.snapshot().current_page, 1);
    }

    #[test]
    fn should_number_rows_across_pages() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(10));
        collection.set_page(2);

        assert_eq!(collection.snapshot().row_number(0), 8);
    }

    #[test]
    fn should_keep_records_when_failed() {
        let collection = AdminCollection::new();
        collection.set_ready(rows(2));

        collection.set_failed("Session expired");

        let snapshot = collection.snapshot();
        assert_eq!(snapshot.state, ScreenState::Failed("Session expired".to_string()));
        assert_eq!(snapshot.records.len(), 2);
    }
}
