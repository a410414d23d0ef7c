use crate::model::Id;

/// Whether submitting the form creates a product or updates one.
///
/// `Editing` is only left through a successful submission; the form has no
/// cancel action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Editing { id: Id },
}

impl FormMode {
    pub fn is_editing(&self) -> bool {
        matches!(self, FormMode::Editing { .. })
    }

    pub fn editing_id(&self) -> Option<&Id> {
        match self {
            FormMode::Create => None,
            FormMode::Editing { id } => Some(id),
        }
    }
}
