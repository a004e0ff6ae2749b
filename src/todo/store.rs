pub const MAX_TODO_LEN: usize = 18;

#[derive(Debug, Clone, PartialEq)]
pub struct PendingEdit {
    pub index: usize,
    pub draft: String,
}

#[derive(Debug, Default)]
pub struct TodoListStore {
    todos: Vec<String>,
    pending_delete: Option<usize>,
    pending_edit: Option<PendingEdit>,
}

impl TodoListStore {
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            pending_delete: None,
            pending_edit: None,
        }
    }

    pub fn todos(&self) -> &[String] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn pending_delete(&self) -> Option<usize> {
        self.pending_delete
    }

    pub fn pending_edit(&self) -> Option<&PendingEdit> {
        self.pending_edit.as_ref()
    }

    pub fn add(&mut self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.chars().count() > MAX_TODO_LEN {
            return;
        }
        // New items go to the front of the list
        self.todos.insert(0, trimmed.to_string());
    }

    pub fn request_delete(&mut self, index: usize) {
        if index < self.todos.len() {
            self.pending_delete = Some(index);
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(index) = self.pending_delete.take() {
            if index < self.todos.len() {
                self.todos.remove(index);
            }
        }
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn request_edit(&mut self, index: usize) {
        if let Some(text) = self.todos.get(index) {
            self.pending_edit = Some(PendingEdit {
                index,
                draft: text.clone(),
            });
        }
    }

    pub fn update_edit_draft(&mut self, text: &str) {
        if let Some(pending) = self.pending_edit.as_mut() {
            pending.draft = text.to_string();
        }
    }

    pub fn confirm_edit(&mut self) {
        if let Some(pending) = self.pending_edit.take() {
            if pending.draft.trim().is_empty() || pending.draft.chars().count() > MAX_TODO_LEN {
                // An invalid draft stays pending until corrected or cancelled
                self.pending_edit = Some(pending);
                return;
            }
            if let Some(slot) = self.todos.get_mut(pending.index) {
                // The draft is committed as typed, untrimmed
                *slot = pending.draft;
            }
        }
    }

    pub fn cancel_edit(&mut self) {
        self.pending_edit = None;
    }
}
