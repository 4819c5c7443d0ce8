//! Dependent-selection chains (client → contract → employee).
//!
//! Every request form and the reports filter bar narrow their selection
//! through the same kind of chain: picking at one level repopulates the
//! next one from the backend and wipes everything below it. The state
//! machine here is deliberately UI-free; pages hold a chain inside an
//! `RwSignal` and drive it from their change handlers, applying fetch
//! results through tickets so a slow response for an abandoned selection
//! can never clobber a newer one.

/// Option row of one chain level.
pub trait ChainItem: Clone {
    fn id(&self) -> &str;
    /// Text shown in the selector.
    fn label(&self) -> String;
}

/// Ties an in-flight options fetch to the selection state that started it.
///
/// Tickets are compared against the level's generation counter when the
/// response lands; a mismatch means the user moved on and the response is
/// dropped on the floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
}

/// One level of a chain: nullable selection, wholesale-replaced options,
/// a loading flag scoped to this level and the staleness generation.
#[derive(Debug, Clone, PartialEq)]
pub struct Level<T> {
    selected: Option<String>,
    options: Vec<T>,
    loading: bool,
    generation: u64,
}

impl<T> Default for Level<T> {
    fn default() -> Self {
        Self {
            selected: None,
            options: Vec::new(),
            loading: false,
            generation: 0,
        }
    }
}

impl<T: ChainItem> Level<T> {
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The selected option row, if the selection is still present in the
    /// current options list.
    pub fn selected_item(&self) -> Option<&T> {
        let id = self.selected.as_deref()?;
        self.options.iter().find(|item| item.id() == id)
    }

    /// Selector rows as (id, label) pairs.
    pub fn choices(&self) -> Vec<(String, String)> {
        self.options
            .iter()
            .map(|item| (item.id().to_string(), item.label()))
            .collect()
    }

    /// Start loading options for this level. Invalidates any fetch still
    /// in flight and clears the stale options immediately.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        self.selected = None;
        self.options.clear();
        FetchTicket {
            generation: self.generation,
        }
    }

    /// Replace the options wholesale. Returns `false` (and changes
    /// nothing) when the ticket no longer matches the current selection
    /// state.
    pub fn apply_options(&mut self, ticket: FetchTicket, items: Vec<T>) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.options = items;
        self.loading = false;
        true
    }

    /// Settle a failed fetch: options stay empty, loading clears. Returns
    /// `false` for stale tickets, in which case the failure is not this
    /// level's problem anymore.
    pub fn fail(&mut self, ticket: FetchTicket) -> bool {
        if ticket.generation != self.generation {
            return false;
        }
        self.loading = false;
        true
    }

    fn select(&mut self, id: Option<String>) {
        self.selected = id.filter(|v| !v.is_empty());
    }

    fn clear(&mut self) {
        self.generation += 1;
        self.selected = None;
        self.options.clear();
        self.loading = false;
    }
}

/// Two-level chain, used by the reports filter bar (client → contract).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cascade2<A, B> {
    pub first: Level<A>,
    pub second: Level<B>,
}

impl<A: ChainItem, B: ChainItem> Cascade2<A, B> {
    pub fn new() -> Self {
        Self {
            first: Level::default(),
            second: Level::default(),
        }
    }

    /// Select at the first level. The second level is cleared
    /// synchronously; the returned ticket (present only for a non-empty
    /// selection) must be settled with `second.apply_options` / `second.fail`.
    pub fn select_first(&mut self, id: Option<String>) -> Option<FetchTicket> {
        self.first.select(id);
        self.second.clear();
        self.first.selected_id()?;
        Some(self.second.begin_fetch())
    }

    pub fn select_second(&mut self, id: Option<String>) {
        self.second.select(id);
    }
}

/// Three-level chain shared by the request forms
/// (client → contract → employee).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cascade3<A, B, C> {
    pub first: Level<A>,
    pub second: Level<B>,
    pub third: Level<C>,
}

impl<A: ChainItem, B: ChainItem, C: ChainItem> Cascade3<A, B, C> {
    pub fn new() -> Self {
        Self {
            first: Level::default(),
            second: Level::default(),
            third: Level::default(),
        }
    }

    /// Select at the first level; clears both downstream levels
    /// synchronously. Returns the fetch ticket for the second level's
    /// options, or `None` when the selection was emptied.
    pub fn select_first(&mut self, id: Option<String>) -> Option<FetchTicket> {
        self.first.select(id);
        self.second.clear();
        self.third.clear();
        self.first.selected_id()?;
        Some(self.second.begin_fetch())
    }

    /// Select at the second level; clears the third level synchronously.
    /// Returns the fetch ticket for the third level's options.
    pub fn select_second(&mut self, id: Option<String>) -> Option<FetchTicket> {
        self.second.select(id);
        self.third.clear();
        self.second.selected_id()?;
        Some(self.third.begin_fetch())
    }

    pub fn select_third(&mut self, id: Option<String>) {
        self.third.select(id);
    }

    /// The fully joined record at the deepest level, or `None` while any
    /// level of the chain is unresolved.
    pub fn resolve(&self) -> Option<&C> {
        self.first.selected_id()?;
        self.second.selected_id()?;
        self.third.selected_item()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    impl Row {
        fn new(id: &str, name: &str) -> Self {
            Self {
                id: id.to_string(),
                name: name.to_string(),
            }
        }
    }

    impl ChainItem for Row {
        fn id(&self) -> &str {
            &self.id
        }

        fn label(&self) -> String {
            self.name.clone()
        }
    }

    fn rows(ids: &[&str]) -> Vec<Row> {
        ids.iter().map(|id| Row::new(id, id)).collect()
    }

    #[test]
    fn selecting_upstream_clears_downstream_synchronously() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let t1 = chain.select_first(Some("a".to_string())).unwrap();
        assert!(chain.second.apply_options(t1, rows(&["x", "y"])));
        let t2 = chain.select_second(Some("x".to_string())).unwrap();
        assert!(chain.third.apply_options(t2, rows(&["e1"])));
        chain.select_third(Some("e1".to_string()));

        // New upstream pick wipes both lower levels before any fetch lands.
        chain.select_first(Some("b".to_string()));
        assert_eq!(chain.second.selected_id(), None);
        assert!(chain.second.options().is_empty());
        assert_eq!(chain.third.selected_id(), None);
        assert!(chain.third.options().is_empty());
        assert!(!chain.third.is_loading());
    }

    #[test]
    fn stale_fetch_never_overwrites_newer_selection() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let stale = chain.select_first(Some("a".to_string())).unwrap();
        let fresh = chain.select_first(Some("b".to_string())).unwrap();

        // The slow response for "a" settles after "b" was picked.
        assert!(!chain.second.apply_options(stale, rows(&["a-1", "a-2"])));
        assert!(chain.second.options().is_empty());
        assert!(chain.second.is_loading());

        assert!(chain.second.apply_options(fresh, rows(&["b-1"])));
        assert_eq!(chain.second.options(), rows(&["b-1"]).as_slice());
        assert!(!chain.second.is_loading());
    }

    #[test]
    fn out_of_order_completion_keeps_newer_result() {
        let mut chain: Cascade2<Row, Row> = Cascade2::new();
        let stale = chain.select_first(Some("a".to_string())).unwrap();
        let fresh = chain.select_first(Some("b".to_string())).unwrap();

        // Fast path: the newer fetch lands first, then the old one limps in.
        assert!(chain.second.apply_options(fresh, rows(&["b-1"])));
        assert!(!chain.second.apply_options(stale, rows(&["a-1"])));
        assert_eq!(chain.second.options(), rows(&["b-1"]).as_slice());
    }

    #[test]
    fn empty_selection_clears_child_without_loading() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let ticket = chain.select_first(Some("a".to_string())).unwrap();
        chain.second.apply_options(ticket, rows(&["x"]));

        assert!(chain.select_first(Some(String::new())).is_none());
        assert_eq!(chain.first.selected_id(), None);
        assert!(chain.second.options().is_empty());
        assert!(!chain.second.is_loading());
    }

    #[test]
    fn failed_fetch_leaves_options_empty_and_parent_selected() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let ticket = chain.select_first(Some("a".to_string())).unwrap();
        assert!(chain.second.fail(ticket));
        assert_eq!(chain.first.selected_id(), Some("a"));
        assert!(chain.second.options().is_empty());
        assert!(!chain.second.is_loading());
    }

    #[test]
    fn stale_failure_is_ignored() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let stale = chain.select_first(Some("a".to_string())).unwrap();
        let fresh = chain.select_first(Some("b".to_string())).unwrap();
        assert!(!chain.second.fail(stale));
        assert!(chain.second.is_loading());
        assert!(chain.second.apply_options(fresh, rows(&["b-1"])));
    }

    #[test]
    fn downstream_fetch_orphaned_by_upstream_change_is_discarded() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let t1 = chain.select_first(Some("a".to_string())).unwrap();
        chain.second.apply_options(t1, rows(&["x"]));
        let employee_fetch = chain.select_second(Some("x".to_string())).unwrap();

        // Upstream change while the employee fetch is still in flight.
        chain.select_first(Some("b".to_string()));
        assert!(!chain.third.apply_options(employee_fetch, rows(&["e1"])));
        assert!(chain.third.options().is_empty());
    }

    #[test]
    fn resolve_is_null_iff_some_level_is_unresolved() {
        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        assert!(chain.resolve().is_none());

        let t1 = chain.select_first(Some("a".to_string())).unwrap();
        chain.second.apply_options(t1, rows(&["x"]));
        assert!(chain.resolve().is_none());

        let t2 = chain.select_second(Some("x".to_string())).unwrap();
        chain.third.apply_options(t2, rows(&["e1", "e2"]));
        assert!(chain.resolve().is_none());

        chain.select_third(Some("e2".to_string()));
        assert_eq!(chain.resolve().map(|r| r.id.as_str()), Some("e2"));

        chain.select_third(Some(String::new()));
        assert!(chain.resolve().is_none());
    }

    #[test]
    fn full_selection_walkthrough() {
        let companies = rows(&["A", "B"]);
        let contracts_of_a = rows(&["X"]);
        let employees_of_x = rows(&["E"]);

        let mut chain: Cascade3<Row, Row, Row> = Cascade3::new();
        let boot = chain.first.begin_fetch();
        chain.first.apply_options(boot, companies);

        let t = chain.select_first(Some("A".to_string())).unwrap();
        chain.second.apply_options(t, contracts_of_a);
        assert_eq!(chain.second.choices(), vec![("X".to_string(), "X".to_string())]);

        let t = chain.select_second(Some("X".to_string())).unwrap();
        chain.third.apply_options(t, employees_of_x);
        chain.select_third(Some("E".to_string()));

        let resolved = chain.resolve().expect("chain fully selected");
        assert_eq!(resolved.id, "E");
        assert_eq!(chain.first.selected_id(), Some("A"));
        assert_eq!(chain.second.selected_id(), Some("X"));
    }
}
