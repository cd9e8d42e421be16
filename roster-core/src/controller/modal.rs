use roster_model::{Record, RecordId};

use crate::directory::DirectoryError;

/// Which form a modal is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Closed,
    Creating,
    Editing,
}

/// Create/edit form state for one collection.
///
/// A failed submission keeps the form open with the error attached so the
/// operator can retry or cancel.
#[derive(Debug, Clone, PartialEq)]
pub enum Modal<R: Record> {
    Closed,
    Creating {
        draft: R::Draft,
        error: Option<DirectoryError>,
    },
    Editing {
        id: RecordId,
        draft: R::Draft,
        error: Option<DirectoryError>,
    },
}

impl<R: Record> Default for Modal<R> {
    fn default() -> Self {
        Modal::Closed
    }
}

impl<R: Record> Modal<R> {
    pub fn creating(draft: R::Draft) -> Self {
        Modal::Creating { draft, error: None }
    }

    pub fn editing(record: &R) -> Self {
        Modal::Editing {
            id: record.id().clone(),
            draft: record.to_draft(),
            error: None,
        }
    }

    pub fn mode(&self) -> ModalMode {
        match self {
            Modal::Closed => ModalMode::Closed,
            Modal::Creating { .. } => ModalMode::Creating,
            Modal::Editing { .. } => ModalMode::Editing,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }

    pub fn draft(&self) -> Option<&R::Draft> {
        match self {
            Modal::Closed => None,
            Modal::Creating { draft, .. } | Modal::Editing { draft, .. } => {
                Some(draft)
            }
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut R::Draft> {
        match self {
            Modal::Closed => None,
            Modal::Creating { draft, .. } | Modal::Editing { draft, .. } => {
                Some(draft)
            }
        }
    }

    /// Identifier being edited; `None` in create mode.
    pub fn editing_id(&self) -> Option<&RecordId> {
        match self {
            Modal::Editing { id, .. } => Some(id),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&DirectoryError> {
        match self {
            Modal::Closed => None,
            Modal::Creating { error, .. } | Modal::Editing { error, .. } => {
                error.as_ref()
            }
        }
    }

    pub(crate) fn set_error(&mut self, err: DirectoryError) {
        match self {
            Modal::Closed => {}
            Modal::Creating { error, .. } | Modal::Editing { error, .. } => {
                *error = Some(err);
            }
        }
    }

    pub fn close(&mut self) {
        *self = Modal::Closed;
    }
}
