#[cfg(doc)]
use crate::ValueSet;

/// Error for [`ValueSet::set`]
///
/// The unset placeholder has no slot in a [`ValueSet`], so it can neither be added nor removed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("the unset placeholder cannot be stored in a value set")]
pub struct UnsetValueError;

/// Error for [`ValueSet::first`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("no value present")]
pub struct EmptySetError;
