//! Constructor lookup.

use crate::error::LocateError;
use crate::table::{Constructor, ConstructorTable};
use canon_error_types::{ErrorClass, ParamKind, ParamType};

/// A located, invocable constructor.
#[derive(Debug)]
pub struct ConstructorHandle<'t, E> {
    constructor: &'t Constructor<E>,
    is_abstract: bool,
}

impl<'t, E> ConstructorHandle<'t, E> {
    pub fn constructor(&self) -> &'t Constructor<E> {
        self.constructor
    }

    /// Whether the owning type is abstract.
    pub fn targets_abstract_type(&self) -> bool {
        self.is_abstract
    }
}

/// Find the constructor whose declared parameters are exactly `kinds`,
/// with cause parameters declared as `cause_type`.
///
/// A constructor declared with a different cause class does not match,
/// even when that class is an ancestor or descendant of `cause_type`.
pub fn locate<'t, E>(
    table: &'t ConstructorTable<E>,
    kinds: &[ParamKind],
    cause_type: &'static ErrorClass,
) -> Result<ConstructorHandle<'t, E>, LocateError> {
    let wanted: Vec<ParamType> = kinds.iter().map(|k| k.resolve(cause_type)).collect();

    let constructor = table
        .constructors()
        .iter()
        .find(|c| c.signature() == wanted.as_slice())
        .ok_or(LocateError::Missing)?;

    if !constructor.visibility().is_accessible() || !table.type_visibility().is_accessible() {
        return Err(LocateError::Inaccessible);
    }

    Ok(ConstructorHandle {
        constructor,
        is_abstract: table.is_abstract(),
    })
}
