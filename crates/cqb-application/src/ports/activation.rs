//! Activation Ports
//!
//! Describes concrete types to the registry:
//!
//! ```text
//! TypeEntry { name, description, constructors }
//!                                    │
//!                                    ▼
//!              Constructor { params: [ParamSlot], build }
//!                               │                   ▲
//!       CandidatePool ──match──▶ BoundArgs ─────────┘
//! ```
//!
//! A slot declares its expected type through [`TypeId`]; a candidate is a
//! type-erased `Arc<dyn Any + Send + Sync>`. A candidate is compatible with a
//! slot when its runtime type is exactly the slot's declared type.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use cqb_domain::error::{Error, Result};

/// A loosely-typed constructor argument
pub type Candidate = Arc<dyn Any + Send + Sync>;

/// One declared parameter of a constructor
#[derive(Clone, Copy)]
pub struct ParamSlot {
    /// Parameter name, used in diagnostics
    pub name: &'static str,
    type_id: fn() -> TypeId,
    type_name: fn() -> &'static str,
}

impl ParamSlot {
    /// Slot named `name` expecting a value of type `T`
    pub const fn of<T: Any>(name: &'static str) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>,
            type_name: std::any::type_name::<T>,
        }
    }

    /// Declared type of the slot
    pub fn type_id(&self) -> TypeId {
        (self.type_id)()
    }

    /// Declared type name of the slot
    pub fn type_name(&self) -> &'static str {
        (self.type_name)()
    }

    /// Whether `candidate`'s runtime type is the slot's declared type
    pub fn accepts(&self, candidate: &Candidate) -> bool {
        (**candidate).type_id() == self.type_id()
    }
}

impl fmt::Debug for ParamSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParamSlot")
            .field("name", &self.name)
            .field("type", &self.type_name())
            .finish()
    }
}

/// A caller-supplied, ordered list of candidates
#[derive(Clone, Default)]
pub struct CandidatePool {
    items: Vec<Candidate>,
}

impl CandidatePool {
    /// Create an empty pool
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` as a candidate
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.push(value);
        self
    }

    /// Append `value` as a candidate
    pub fn push<T: Any + Send + Sync>(&mut self, value: T) {
        self.items.push(Arc::new(value));
    }

    /// Append an already type-erased candidate
    pub fn push_candidate(&mut self, candidate: Candidate) {
        self.items.push(candidate);
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the pool is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Candidates in pool order
    pub fn candidates(&self) -> &[Candidate] {
        &self.items
    }
}

impl From<Vec<Candidate>> for CandidatePool {
    fn from(items: Vec<Candidate>) -> Self {
        Self { items }
    }
}

impl fmt::Debug for CandidatePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidatePool")
            .field("len", &self.items.len())
            .finish()
    }
}

/// Arguments bound to a constructor's slots, in slot order
pub struct BoundArgs {
    type_name: &'static str,
    slots: &'static [ParamSlot],
    values: Vec<Candidate>,
}

impl BoundArgs {
    /// Bind `values` to `slots` of `type_name`
    pub fn new(type_name: &'static str, slots: &'static [ParamSlot], values: Vec<Candidate>) -> Self {
        Self {
            type_name,
            slots,
            values,
        }
    }

    /// Number of bound values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether nothing is bound
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value bound at `index`, downcast to `T`
    pub fn get<T: Any + Send + Sync>(&self, index: usize) -> Result<Arc<T>> {
        let slot_name = self.slots.get(index).map_or("?", |slot| slot.name);
        let value = self.values.get(index).ok_or_else(|| {
            Error::activation(
                self.type_name,
                format!("no argument bound for slot {index} ('{slot_name}')"),
            )
        })?;
        Arc::clone(value).downcast::<T>().map_err(|_| {
            Error::activation(
                self.type_name,
                format!(
                    "argument for slot {index} ('{slot_name}') is not a {}",
                    std::any::type_name::<T>()
                ),
            )
        })
    }

    /// Value bound at `index`, downcast to `T` and cloned out
    pub fn cloned<T: Any + Send + Sync + Clone>(&self, index: usize) -> Result<T> {
        self.get::<T>(index).map(|value| (*value).clone())
    }

    /// Type-erased values in slot order
    pub fn values(&self) -> &[Candidate] {
        &self.values
    }
}

impl fmt::Debug for BoundArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundArgs")
            .field("type_name", &self.type_name)
            .field("slots", &self.slots)
            .finish()
    }
}

/// A constructor of a concrete type producing `Arc<I>`
pub struct Constructor<I: ?Sized + 'static> {
    /// Declared slots, in order
    pub params: &'static [ParamSlot],
    /// Builder invoked with arguments bound in slot order
    pub build: fn(BoundArgs) -> Result<Arc<I>>,
}

impl<I: ?Sized + 'static> Constructor<I> {
    /// Number of declared slots
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// First slot whose declared type repeats an earlier slot's type
    pub fn ambiguous_slot(&self) -> Option<&ParamSlot> {
        self.params.iter().enumerate().find_map(|(index, slot)| {
            self.params[..index]
                .iter()
                .any(|earlier| earlier.type_id() == slot.type_id())
                .then_some(slot)
        })
    }
}

/// A registered concrete type
pub struct TypeEntry<I: ?Sized + 'static> {
    /// Unique name the type is bound and resolved by
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Declared constructors; exactly one is required
    pub constructors: &'static [Constructor<I>],
}

impl<I: ?Sized + 'static> TypeEntry<I> {
    /// The sole constructor of this type
    ///
    /// Fails with `ConstructorAmbiguous` unless exactly one constructor is
    /// declared, and with `SignatureAmbiguous` if two of its slots share a
    /// declared type.
    pub fn sole_constructor(&self) -> Result<&'static Constructor<I>> {
        let [constructor] = self.constructors else {
            return Err(Error::constructor_ambiguous(
                self.name,
                self.constructors.len(),
            ));
        };
        if let Some(slot) = constructor.ambiguous_slot() {
            return Err(Error::signature_ambiguous(self.name, slot.type_name()));
        }
        Ok(constructor)
    }
}

impl<I: ?Sized + 'static> fmt::Debug for TypeEntry<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("name", &self.name)
            .field("constructors", &self.constructors.len())
            .finish()
    }
}
