use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned book identifier. Opaque to the client.
pub type BookId = u64;

/// Where a book sits on the shelf.
///
/// Serialized in kebab-case to match the service: `"to-read"`,
/// `"in-progress"`, `"completed"`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum ReadingState {
    #[default]
    ToRead,
    InProgress,
    Completed,
}

impl ReadingState {
    /// Column order, left to right.
    pub const ALL: [ReadingState; 3] = [
        ReadingState::ToRead,
        ReadingState::InProgress,
        ReadingState::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReadingState::ToRead => "to-read",
            ReadingState::InProgress => "in-progress",
            ReadingState::Completed => "completed",
        }
    }

    /// Column heading.
    pub fn label(self) -> &'static str {
        match self {
            ReadingState::ToRead => "To Read",
            ReadingState::InProgress => "Reading",
            ReadingState::Completed => "Completed",
        }
    }

    pub fn column_index(self) -> usize {
        match self {
            ReadingState::ToRead => 0,
            ReadingState::InProgress => 1,
            ReadingState::Completed => 2,
        }
    }

    pub fn from_column_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// States a book in `self` can be moved to, in column order.
    pub fn move_targets(self) -> Vec<ReadingState> {
        Self::ALL.into_iter().filter(|state| *state != self).collect()
    }
}

impl fmt::Display for ReadingState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub state: ReadingState,
}

/// Body of `POST /books`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub state: ReadingState,
}

impl NewBook {
    /// New books always start on the to-read shelf.
    pub fn to_read(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            state: ReadingState::ToRead,
        }
    }
}

/// Body of `PUT /books/{id}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateChange {
    pub new_state: ReadingState,
}

/// A fetched list split into one column per [`ReadingState`].
///
/// Every book lands in exactly one column; server order is kept within a column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Columns<'a> {
    columns: [Vec<&'a Book>; 3],
}

impl<'a> Columns<'a> {
    pub fn partition(books: &'a [Book]) -> Self {
        let mut columns: [Vec<&'a Book>; 3] = Default::default();
        for book in books {
            columns[book.state.column_index()].push(book);
        }
        Self { columns }
    }

    pub fn column(&self, state: ReadingState) -> &[&'a Book] {
        &self.columns[state.column_index()]
    }

    pub fn len(&self, state: ReadingState) -> usize {
        self.column(state).len()
    }

    pub fn total(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: BookId, title: &str, state: ReadingState) -> Book {
        Book {
            id,
            title: title.to_string(),
            state,
        }
    }

    #[test]
    fn states_use_service_spelling() {
        let json = serde_json::to_string(&ReadingState::ALL).unwrap();
        assert_eq!(json, r#"["to-read","in-progress","completed"]"#);

        let parsed: ReadingState = serde_json::from_str(r#""in-progress""#).unwrap();
        assert_eq!(parsed, ReadingState::InProgress);
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = serde_json::from_str::<Book>(r#"{"id":1,"title":"X","state":"abandoned"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn new_book_body_matches_service_contract() {
        let body = serde_json::to_value(NewBook::to_read("1984")).unwrap();
        assert_eq!(body, serde_json::json!({"title": "1984", "state": "to-read"}));
    }

    #[test]
    fn state_change_body_matches_service_contract() {
        let body = serde_json::to_value(StateChange {
            new_state: ReadingState::Completed,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"new_state": "completed"}));
    }

    #[test]
    fn move_targets_exclude_current_state() {
        assert_eq!(
            ReadingState::InProgress.move_targets(),
            vec![ReadingState::ToRead, ReadingState::Completed]
        );
    }

    #[test]
    fn column_index_round_trips() {
        for state in ReadingState::ALL {
            assert_eq!(
                ReadingState::from_column_index(state.column_index()),
                Some(state)
            );
        }
        assert_eq!(ReadingState::from_column_index(3), None);
    }

    #[test]
    fn partition_places_each_book_in_its_state_column() {
        let books = vec![
            book(1, "Dune", ReadingState::ToRead),
            book(2, "Emma", ReadingState::Completed),
            book(3, "Ulysses", ReadingState::InProgress),
            book(4, "Beloved", ReadingState::ToRead),
        ];
        let columns = Columns::partition(&books);

        assert_eq!(columns.total(), books.len());
        for state in ReadingState::ALL {
            assert!(columns.column(state).iter().all(|b| b.state == state));
        }
        let to_read: Vec<_> = columns
            .column(ReadingState::ToRead)
            .iter()
            .map(|b| b.title.as_str())
            .collect();
        assert_eq!(to_read, vec!["Dune", "Beloved"]);
    }

    #[test]
    fn single_to_read_book_leaves_other_columns_empty() {
        let books = vec![book(1, "Dune", ReadingState::ToRead)];
        let columns = Columns::partition(&books);
        assert_eq!(columns.len(ReadingState::ToRead), 1);
        assert_eq!(columns.len(ReadingState::InProgress), 0);
        assert_eq!(columns.len(ReadingState::Completed), 0);
    }
}
