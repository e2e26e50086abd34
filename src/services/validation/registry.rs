use std::any::{Any, TypeId};
use std::collections::HashMap;

use super::{RuleSet, ValidationErrors};

type ErasedValidator = Box<dyn Fn(&dyn Any) -> Result<(), ValidationErrors> + Send + Sync>;

/// Payload type → validator, resolved once at startup and read-only afterwards.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: HashMap<TypeId, ErasedValidator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rule set for `T`, replacing any previous one.
    pub fn register<T: Any>(mut self, rules: RuleSet<T>) -> Self {
        let validator: ErasedValidator = Box::new(move |dto: &dyn Any| match dto.downcast_ref::<T>() {
            Some(dto) => rules.validate(dto),
            None => Ok(()),
        });
        self.validators.insert(TypeId::of::<T>(), validator);
        self
    }

    pub fn contains<T: Any>(&self) -> bool {
        self.validators.contains_key(&TypeId::of::<T>())
    }

    /// `None` when no validator is registered for `T`.
    pub fn validate<T: Any>(&self, dto: &T) -> Option<Result<(), ValidationErrors>> {
        self.validators
            .get(&TypeId::of::<T>())
            .map(|validator| validator(dto))
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("validators", &self.validators.len())
            .finish()
    }
}
