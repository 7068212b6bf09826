//! Constructor invocation.

use crate::error::{ConstructError, Thrown};
use crate::locator::ConstructorHandle;
use canon_error_types::{Arguments, Cause, ErrorValue, ParamType, Throwable};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// Invoke a located constructor with `args`.
///
/// A body that returns `Err` or panics is reported as
/// [`ConstructError::Threw`]; the panic payload becomes a
/// `RuntimeException` carrying the panic message.
pub fn construct<E: Throwable>(
    handle: &ConstructorHandle<'_, E>,
    args: Arguments,
) -> Result<E, ConstructError> {
    if handle.targets_abstract_type() {
        return Err(ConstructError::NotInstantiable);
    }

    let constructor = handle.constructor();
    for param in constructor.signature() {
        if let (ParamType::Cause(declared), Some(cause)) = (param, args.cause.as_ref()) {
            if !cause.class().is_a(declared) {
                return Err(ConstructError::ArgumentRejected {
                    argument: cause.class().name(),
                    parameter: declared.name(),
                });
            }
        }
    }

    let body = constructor.body();
    match panic::catch_unwind(AssertUnwindSafe(|| body(args))) {
        Ok(Ok(instance)) => Ok(instance),
        Ok(Err(cause)) => Err(ConstructError::Threw(Thrown(cause))),
        Err(payload) => Err(ConstructError::Threw(Thrown(panic_cause(payload)))),
    }
}

/// Turn a panic payload into a throwable.
pub(crate) fn panic_cause(payload: Box<dyn Any + Send>) -> Cause {
    let message = if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with a non-string payload".to_string()
    };
    ErrorValue::runtime(message).into_cause()
}
