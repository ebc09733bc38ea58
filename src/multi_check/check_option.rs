use serde::{Deserialize, Serialize};

/// Label shown above the checkbox group when none is supplied
pub const DEFAULT_LABEL: &str = "MultiCheck";

/// Label of the synthetic aggregate checkbox
pub const SELECT_ALL_LABEL: &str = "Select All";

/// Selection key of the synthetic aggregate checkbox
pub const SELECT_ALL_VALUE: &str = "000";

/// A selectable item supplied by the caller
///
/// `value` is the selection key, `label` is what gets rendered and is also the
/// identity under which the checkbox region is recorded. Both are assumed to be
/// unique across an option list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CheckOption {
    pub label: String,
    pub value: String,
}

impl CheckOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// The "Select All" sentinel, always first in the column layout
    pub fn select_all() -> Self {
        Self::new(SELECT_ALL_LABEL, SELECT_ALL_VALUE)
    }

    pub fn is_select_all(&self) -> bool {
        self.value == SELECT_ALL_VALUE
    }
}
