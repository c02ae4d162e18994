use crate::api::{ApiCommand, ApiCommandSender, ApiOutcome, ApiResponse, Operation};
use crate::books::{Book, BookId, ReadingState};
use crate::ui::form::{AddBookFormState, FormIntent, FormReducer};
use crate::ui::move_dialog::{MoveDialogState, MoveIntent, MoveReducer};
use crate::ui::mvi::Reducer;
use crate::ui::notification::{NotificationIntent, NotificationReducer, NotificationState};
use crate::ui::requests::RequestTracker;
use crate::ui::shelf::{ShelfIntent, ShelfReducer, ShelfState};
use crate::ui::theme::SPINNER_FRAMES;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The page: owns the book list, the form, the dialogs and every request.
///
/// Requests are queued on the worker channel; results come back through
/// [`App::on_api_response`]. All state changes go through the reducers.
pub struct App {
    should_quit: bool,
    shelf: ShelfState,
    form: AddBookFormState,
    move_dialog: MoveDialogState,
    notification: NotificationState,
    requests: RequestTracker,
    api_sender: Option<ApiCommandSender>,
    spinner_frame: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            should_quit: false,
            shelf: ShelfState::default(),
            form: AddBookFormState::default(),
            move_dialog: MoveDialogState::default(),
            notification: NotificationState::default(),
            requests: RequestTracker::new(),
            api_sender: None,
            spinner_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    pub fn shelf(&self) -> &ShelfState {
        &self.shelf
    }

    pub fn books(&self) -> &[Book] {
        &self.shelf.books
    }

    pub fn form(&self) -> &AddBookFormState {
        &self.form
    }

    pub fn move_dialog(&self) -> &MoveDialogState {
        &self.move_dialog
    }

    pub fn notification(&self) -> &NotificationState {
        &self.notification
    }

    pub fn requests(&self) -> &RequestTracker {
        &self.requests
    }

    pub fn is_loading(&self) -> bool {
        self.requests.is_loading()
    }

    /// Current spinner glyph, or `None` when idle.
    pub fn spinner(&self) -> Option<&'static str> {
        self.is_loading()
            .then(|| SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()])
    }

    pub fn on_tick(&mut self) {
        if self.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
    }

    // ========================================================================
    // Network operations
    // ========================================================================

    /// `GET /books`; the list is replaced when the response arrives.
    pub fn request_fetch(&mut self) -> bool {
        self.issue(Operation::Fetch)
    }

    /// `POST /books` with the to-read state. Blank titles are not sent.
    pub fn request_add(&mut self, title: &str) -> bool {
        let title = title.trim();
        if title.is_empty() {
            return false;
        }
        self.issue(Operation::Add {
            title: title.to_string(),
        })
    }

    pub fn request_move(&mut self, id: BookId, to: ReadingState) -> bool {
        self.issue(Operation::Move { id, to })
    }

    pub fn request_delete(&mut self, id: BookId) -> bool {
        self.issue(Operation::Delete { id })
    }

    /// Applies a worker result.
    ///
    /// Accepted fetches replace the list and clear a fetch-error banner.
    /// Successful writes trigger a full re-fetch. Failures are logged and shown.
    pub fn on_api_response(&mut self, response: ApiResponse) {
        let ApiResponse {
            id,
            operation,
            result,
        } = response;

        if self.requests.finish(id).is_none() {
            tracing::debug!(request_id = id, "Ignoring response for unknown request");
            return;
        }

        match result {
            Ok(ApiOutcome::Fetched(books)) => {
                if !self.requests.accept_fetch(id) {
                    tracing::debug!(request_id = id, "Discarding stale book list");
                    return;
                }
                tracing::debug!(request_id = id, count = books.len(), "Book list refreshed");
                self.dispatch_shelf(ShelfIntent::Loaded { books });
                // Write failures stay up until dismissed
                if self.notification.message() == Some(Operation::Fetch.failure_message()) {
                    self.dispatch_notification(NotificationIntent::Dismiss);
                }
            }
            Ok(ApiOutcome::Applied) => {
                tracing::info!(
                    request_id = id,
                    operation = operation.name(),
                    "Write accepted, refreshing list"
                );
                self.request_fetch();
            }
            Err(failure) => {
                if operation == Operation::Fetch && self.requests.is_superseded(id) {
                    tracing::debug!(request_id = id, "Ignoring failure of superseded fetch");
                    return;
                }
                tracing::error!(
                    request_id = id,
                    operation = operation.name(),
                    kind = failure.kind,
                    status = ?failure.status,
                    "{}",
                    failure.detail
                );
                self.dispatch_notification(NotificationIntent::Show {
                    message: operation.failure_message().to_string(),
                });
            }
        }
    }

    fn issue(&mut self, operation: Operation) -> bool {
        let Some(sender) = &self.api_sender else {
            tracing::warn!(operation = operation.name(), "No request worker attached");
            return false;
        };
        let sender = sender.clone();

        let id = self.requests.begin(operation.clone());
        match sender.try_send(ApiCommand { id, operation }) {
            Ok(()) => true,
            Err(err) => {
                self.requests.finish(id);
                tracing::error!(request_id = id, "Failed to queue request: {}", err);
                self.dispatch_notification(NotificationIntent::Show {
                    message: "Could not send request. Please try again.".to_string(),
                });
                false
            }
        }
    }

    // ========================================================================
    // Shelf (MVI)
    // ========================================================================

    pub fn dispatch_shelf(&mut self, intent: ShelfIntent) {
        dispatch_mvi!(self, shelf, ShelfReducer, intent);
    }

    pub fn selected_book(&self) -> Option<&Book> {
        self.shelf.selected_book()
    }

    /// Deletes the book under the cursor, if any.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selected_book().map(|book| book.id) else {
            return false;
        };
        self.request_delete(id)
    }

    // ========================================================================
    // Add-book form (MVI)
    // ========================================================================

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    /// Sends the typed title and clears the form. Blank titles keep it open.
    pub fn submit_form(&mut self) -> bool {
        let Some(title) = self.form.submittable_title().map(str::to_string) else {
            return false;
        };
        self.dispatch_form(FormIntent::Submit);
        self.request_add(&title)
    }

    // ========================================================================
    // Move dialog (MVI)
    // ========================================================================

    pub fn dispatch_move(&mut self, intent: MoveIntent) {
        dispatch_mvi!(self, move_dialog, MoveReducer, intent);
    }

    /// Opens the move dialog for the book under the cursor.
    pub fn open_move_dialog(&mut self) -> bool {
        let Some(book) = self.selected_book().cloned() else {
            return false;
        };
        self.dispatch_move(MoveIntent::Open { book });
        true
    }

    /// Moves the book to the focused target and closes the dialog.
    pub fn confirm_move(&mut self) -> bool {
        let Some((id, to)) = self.move_dialog.selection() else {
            return false;
        };
        self.dispatch_move(MoveIntent::Close);
        self.request_move(id, to)
    }

    // ========================================================================
    // Error banner (MVI)
    // ========================================================================

    pub fn dispatch_notification(&mut self, intent: NotificationIntent) {
        dispatch_mvi!(self, notification, NotificationReducer, intent);
    }
}
