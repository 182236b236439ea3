//! In-memory state for the paginated member table.
//!
//! The controller owns the fetched member list, the search-filtered working
//! view, the current page and the transient selection/edit overlay. Every
//! operation is a synchronous local transform and never fails; invalid input
//! is ignored.

use std::collections::HashSet;

use shared::domain::{EditableField, Member, MemberId};
use tracing::debug;

pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberTableController {
    all_members: Vec<Member>,
    working_members: Vec<Member>,
    current_page: usize,
    selected_ids: HashSet<MemberId>,
    editing_ids: HashSet<MemberId>,
    search_term: String,
}

impl Default for MemberTableController {
    fn default() -> Self {
        Self::new()
    }
}

impl MemberTableController {
    pub fn new() -> Self {
        Self {
            all_members: Vec::new(),
            working_members: Vec::new(),
            current_page: 1,
            selected_ids: HashSet::new(),
            editing_ids: HashSet::new(),
            search_term: String::new(),
        }
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        let mut controller = Self::new();
        controller.initialize(members);
        controller
    }

    pub fn initialize(&mut self, members: Vec<Member>) {
        debug!(count = members.len(), "table: initialized");
        self.working_members = members.clone();
        self.all_members = members;
        self.current_page = 1;
        self.selected_ids.clear();
        self.editing_ids.clear();
        self.search_term.clear();
    }

    /// Filters from the full list, never from the current view. A blank term
    /// restores the full list.
    pub fn search(&mut self, term: &str) {
        let term = term.trim();
        self.search_term = term.to_string();

        if term.is_empty() {
            self.working_members = self.all_members.clone();
        } else {
            let needle = term.to_lowercase();
            self.working_members = self
                .all_members
                .iter()
                .filter(|member| matches_search(member, &needle, term))
                .cloned()
                .collect();
        }

        self.current_page = 1;
        self.selected_ids.clear();
        self.prune_editing();
        debug!(
            term,
            matches = self.working_members.len(),
            "table: search applied"
        );
    }

    pub fn page_size(&self) -> usize {
        PAGE_SIZE
    }

    pub fn total_pages(&self) -> usize {
        self.working_members.len().div_ceil(PAGE_SIZE).max(1)
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Returns `false` and leaves all state untouched when `page` is outside
    /// `1..=total_pages()`.
    pub fn change_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        if page < 1 || page > total_pages {
            debug!(page, total_pages, "table: page change ignored");
            return false;
        }
        self.current_page = page;
        self.selected_ids.clear();
        debug!(page, total_pages, "table: page changed");
        true
    }

    pub fn first_page(&mut self) -> bool {
        self.change_page(1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.change_page(self.current_page.saturating_sub(1))
    }

    pub fn next_page(&mut self) -> bool {
        self.change_page(self.current_page + 1)
    }

    pub fn last_page(&mut self) -> bool {
        self.change_page(self.total_pages())
    }

    pub fn page_records(&self) -> &[Member] {
        let start = (self.current_page - 1) * PAGE_SIZE;
        if start >= self.working_members.len() {
            return &[];
        }
        let end = (start + PAGE_SIZE).min(self.working_members.len());
        &self.working_members[start..end]
    }

    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages())
    }

    /// Ids not visible on the current page are ignored when checking.
    pub fn toggle_row_select(&mut self, id: &MemberId, checked: bool) {
        if !checked {
            self.selected_ids.remove(id);
            return;
        }
        if self.is_on_current_page(id) {
            self.selected_ids.insert(id.clone());
        } else {
            debug!(id = %id, "table: select ignored for row off the current page");
        }
    }

    pub fn toggle_select_all_on_page(&mut self, checked: bool) {
        if checked {
            self.selected_ids = self
                .page_records()
                .iter()
                .map(|member| member.id.clone())
                .collect();
        } else {
            self.selected_ids.clear();
        }
        debug!(checked, selected = self.selected_ids.len(), "table: select all");
    }

    /// Header checkbox state, derived from the selection instead of stored.
    pub fn all_on_page_selected(&self) -> bool {
        let page = self.page_records();
        !page.is_empty()
            && page
                .iter()
                .all(|member| self.selected_ids.contains(&member.id))
    }

    pub fn is_selected(&self, id: &MemberId) -> bool {
        self.selected_ids.contains(id)
    }

    pub fn selected_ids(&self) -> &HashSet<MemberId> {
        &self.selected_ids
    }

    pub fn begin_edit(&mut self, id: &MemberId) {
        if self.working_members.iter().any(|member| &member.id == id) {
            self.editing_ids.insert(id.clone());
            debug!(id = %id, "table: edit started");
        } else {
            debug!(id = %id, "table: edit ignored for unknown row");
        }
    }

    /// Applies to the working view and the full list alike, so clearing a
    /// search keeps the edit. Returns `false` for an unknown id.
    pub fn apply_edit_field(
        &mut self,
        id: &MemberId,
        field: EditableField,
        value: &str,
    ) -> bool {
        let Some(member) = self
            .working_members
            .iter_mut()
            .find(|member| &member.id == id)
        else {
            return false;
        };
        member.set_field(field, value);

        if let Some(member) = self.all_members.iter_mut().find(|member| &member.id == id) {
            member.set_field(field, value);
        }
        debug!(id = %id, field = %field, "table: field edited");
        true
    }

    /// Field contents are accepted as-is.
    pub fn commit_edit(&mut self, id: &MemberId) {
        if self.editing_ids.remove(id) {
            debug!(id = %id, "table: edit committed");
        }
    }

    pub fn is_editing(&self, id: &MemberId) -> bool {
        self.editing_ids.contains(id)
    }

    pub fn editing_ids(&self) -> &HashSet<MemberId> {
        &self.editing_ids
    }

    /// Rows hidden by the current search are left alone in both lists.
    pub fn delete_row(&mut self, id: &MemberId) -> bool {
        let Some(idx) = self
            .working_members
            .iter()
            .position(|member| &member.id == id)
        else {
            debug!(id = %id, "table: delete ignored for row not in view");
            return false;
        };
        self.working_members.remove(idx);
        self.all_members.retain(|member| &member.id != id);
        self.reconcile();
        debug!(
            id = %id,
            remaining = self.working_members.len(),
            "table: row deleted"
        );
        true
    }

    /// Returns the number of rows removed from the working view.
    pub fn delete_selected(&mut self) -> usize {
        let selected = std::mem::take(&mut self.selected_ids);
        let before = self.working_members.len();
        self.working_members
            .retain(|member| !selected.contains(&member.id));
        self.all_members
            .retain(|member| !selected.contains(&member.id));
        let removed = before - self.working_members.len();
        self.reconcile();
        debug!(
            removed,
            remaining = self.working_members.len(),
            "table: selected rows deleted"
        );
        removed
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn working_records(&self) -> &[Member] {
        &self.working_members
    }

    pub fn all_records(&self) -> &[Member] {
        &self.all_members
    }

    pub fn view(&self) -> TableView {
        let rows = self
            .page_records()
            .iter()
            .map(|member| TableRow {
                selected: self.is_selected(&member.id),
                editing: self.is_editing(&member.id),
                member: member.clone(),
            })
            .collect();

        TableView {
            rows,
            all_selected: self.all_on_page_selected(),
            current_page: self.current_page,
            total_pages: self.total_pages(),
            matching: self.working_members.len(),
            total: self.all_members.len(),
            search_term: self.search_term.clone(),
        }
    }

    fn is_on_current_page(&self, id: &MemberId) -> bool {
        self.page_records().iter().any(|member| &member.id == id)
    }

    fn prune_editing(&mut self) {
        let working = &self.working_members;
        self.editing_ids
            .retain(|id| working.iter().any(|member| &member.id == id));
    }

    /// Restores the invariants after the record set shrinks: the page stays in
    /// range, and selection/edit ids refer to rows that still exist.
    fn reconcile(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
        self.prune_editing();
        let page_ids: HashSet<MemberId> = self
            .page_records()
            .iter()
            .map(|member| member.id.clone())
            .collect();
        self.selected_ids.retain(|id| page_ids.contains(id));
    }
}

fn matches_search(member: &Member, needle: &str, raw_term: &str) -> bool {
    member.name.to_lowercase().contains(needle)
        || member.email.to_lowercase().contains(needle)
        || member.role.to_lowercase().contains(needle)
        || member.id.as_str() == raw_term
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub member: Member,
    pub selected: bool,
    pub editing: bool,
}

/// Read-only snapshot of what the presentation layer should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub all_selected: bool,
    pub current_page: usize,
    pub total_pages: usize,
    pub matching: usize,
    pub total: usize,
    pub search_term: String,
}

impl TableView {
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages)
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
