//! Constructor tables.
//!
//! A [`ConstructorTable`] is what a type under verification exposes in
//! place of runtime reflection: every constructor it declares, with its
//! exact parameter types, its visibility, and a body that builds an
//! instance or fails.

use canon_error_types::{Arguments, Cause, ErrorClass, ParamType, Throwable, Visibility};
use std::fmt;

/// Body of a declared constructor. `Err` means the body raised.
pub type ConstructorBody<E> = Box<dyn Fn(Arguments) -> Result<E, Cause> + Send + Sync>;

/// A single declared constructor.
pub struct Constructor<E> {
    signature: Vec<ParamType>,
    visibility: Visibility,
    body: ConstructorBody<E>,
}

impl<E: Throwable> Constructor<E> {
    /// Declare a constructor with an explicit signature.
    pub fn declare(
        signature: Vec<ParamType>,
        body: impl Fn(Arguments) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        Self {
            signature,
            visibility: Visibility::Public,
            body: Box::new(body),
        }
    }

    /// `()`
    pub fn no_arg(body: impl Fn() -> Result<E, Cause> + Send + Sync + 'static) -> Self {
        Self::declare(Vec::new(), move |_| body())
    }

    /// `(String message)`
    pub fn message(
        body: impl Fn(Option<String>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        Self::declare(vec![ParamType::Message], move |args| body(args.message))
    }

    /// `(<class> cause)`
    pub fn cause(
        class: &'static ErrorClass,
        body: impl Fn(Option<Cause>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        Self::declare(vec![ParamType::Cause(class)], move |args| body(args.cause))
    }

    /// `(String message, <class> cause)`
    pub fn full(
        class: &'static ErrorClass,
        body: impl Fn(Option<String>, Option<Cause>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        Self::declare(
            vec![ParamType::Message, ParamType::Cause(class)],
            move |args| body(args.message, args.cause),
        )
    }

    /// Override the default public visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl<E> Constructor<E> {
    pub fn signature(&self) -> &[ParamType] {
        &self.signature
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub(crate) fn body(&self) -> &ConstructorBody<E> {
        &self.body
    }
}

impl<E> fmt::Debug for Constructor<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.signature.iter().map(|p| p.to_string()).collect();
        f.debug_struct("Constructor")
            .field("signature", &format!("({})", params.join(", ")))
            .field("visibility", &self.visibility)
            .finish_non_exhaustive()
    }
}

/// Every constructor a type declares, plus type-level access facts.
#[derive(Debug)]
pub struct ConstructorTable<E> {
    type_visibility: Visibility,
    is_abstract: bool,
    constructors: Vec<Constructor<E>>,
}

impl<E: Throwable> ConstructorTable<E> {
    /// An empty table for a public, concrete type.
    pub fn new() -> Self {
        Self {
            type_visibility: Visibility::Public,
            is_abstract: false,
            constructors: Vec::new(),
        }
    }

    /// All four canonical constructors, public, with `Throwable` causes.
    pub fn canonical() -> Self
    where
        E: CanonicalConstructors,
    {
        Self::new()
            .no_arg(|| Ok(E::canonical_default()))
            .message(|message| Ok(E::from_message(message)))
            .cause(ErrorClass::THROWABLE, |cause| Ok(E::from_cause(cause)))
            .full(ErrorClass::THROWABLE, |message, cause| {
                Ok(E::from_message_and_cause(message, cause))
            })
    }

    /// Declare a prepared constructor.
    pub fn with(mut self, constructor: Constructor<E>) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Declare a public no-argument constructor.
    pub fn no_arg(self, body: impl Fn() -> Result<E, Cause> + Send + Sync + 'static) -> Self {
        self.with(Constructor::no_arg(body))
    }

    /// Declare a public message constructor.
    pub fn message(
        self,
        body: impl Fn(Option<String>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        self.with(Constructor::message(body))
    }

    /// Declare a public cause constructor whose cause parameter is `class`.
    pub fn cause(
        self,
        class: &'static ErrorClass,
        body: impl Fn(Option<Cause>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        self.with(Constructor::cause(class, body))
    }

    /// Declare a public message-and-cause constructor whose cause parameter is `class`.
    pub fn full(
        self,
        class: &'static ErrorClass,
        body: impl Fn(Option<String>, Option<Cause>) -> Result<E, Cause> + Send + Sync + 'static,
    ) -> Self {
        self.with(Constructor::full(class, body))
    }

    /// Restrict the type itself; its constructors become unreachable.
    pub fn with_type_visibility(mut self, visibility: Visibility) -> Self {
        self.type_visibility = visibility;
        self
    }

    /// Mark the type abstract; no constructor can instantiate it.
    pub fn abstract_type(mut self) -> Self {
        self.is_abstract = true;
        self
    }
}

impl<E: Throwable> Default for ConstructorTable<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ConstructorTable<E> {
    pub fn type_visibility(&self) -> Visibility {
        self.type_visibility
    }

    pub fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    pub fn constructors(&self) -> &[Constructor<E>] {
        &self.constructors
    }
}

/// Types that publish their own constructor table.
pub trait ConstructorSource: Throwable + Sized {
    fn constructors() -> ConstructorTable<Self>;
}

/// Typed form of the canonical constructor set, for types that implement
/// all four constructors directly.
pub trait CanonicalConstructors: Throwable + Sized {
    fn canonical_default() -> Self;

    fn from_message(message: Option<String>) -> Self;

    fn from_cause(cause: Option<Cause>) -> Self;

    fn from_message_and_cause(message: Option<String>, cause: Option<Cause>) -> Self;
}
