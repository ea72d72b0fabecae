//! Name-indexed catalog of kernels.
//!
//! A [`KernelRegistry`] is filled once during setup (`&mut self`) and then
//! shared read-only; lookups never mutate it.

use std::collections::BTreeMap;

use crate::error::KernelError;
use crate::kernel::{BoundKernel, Kernel};
use crate::params::ParameterList;

/// Maps kernel names to kernels.
#[derive(Debug, Clone, Default)]
pub struct KernelRegistry {
    kernels: BTreeMap<&'static str, Kernel>,
}

impl KernelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a kernel.
    ///
    /// Returns `KernelError::DuplicateKernel` if the name is already taken;
    /// the existing kernel is left in place.
    pub fn register(&mut self, kernel: Kernel) -> Result<(), KernelError> {
        if self.kernels.contains_key(kernel.name()) {
            return Err(KernelError::DuplicateKernel(kernel.name().to_string()));
        }
        log::debug!(
            "registered kernel '{}' {}",
            kernel.name(),
            kernel.signature().describe()
        );
        self.kernels.insert(kernel.name(), kernel);
        Ok(())
    }

    /// Finds a kernel by name.
    ///
    /// Returns `KernelError::KernelNotFound` if absent.
    pub fn lookup(&self, name: &str) -> Result<&Kernel, KernelError> {
        self.kernels
            .get(name)
            .ok_or_else(|| KernelError::KernelNotFound(name.to_string()))
    }

    /// Looks up `name` and binds `params` against its signature.
    pub fn bind(&self, name: &str, params: ParameterList) -> Result<BoundKernel<'_>, KernelError> {
        self.lookup(name)?.bind(params)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        self.kernels.keys().copied().collect()
    }

    /// Registered kernels in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Kernel> {
        self.kernels.values()
    }

    pub fn len(&self) -> usize {
        self.kernels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kernels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::kernel::{Invocation, Signature};
    use glam::DVec2;

    fn white(_: &Invocation<'_>) -> Result<Color, KernelError> {
        Ok(Color::WHITE)
    }

    fn black(_: &Invocation<'_>) -> Result<Color, KernelError> {
        Ok(Color::BLACK)
    }

    const WHITE: Kernel = Kernel::new("white", "", Signature::new(true, &[]), white);
    const BLACK: Kernel = Kernel::new("black", "", Signature::new(true, &[]), black);

    fn registry() -> KernelRegistry {
        let mut r = KernelRegistry::new();
        r.register(WHITE).unwrap();
        r.register(BLACK).unwrap();
        r
    }

    #[test]
    fn new_registry_is_empty() {
        let r = KernelRegistry::new();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn lookup_finds_registered_kernel() {
        let r = registry();
        assert_eq!(r.lookup("white").unwrap().name(), "white");
    }

    #[test]
    fn lookup_unknown_is_not_found() {
        let r = registry();
        assert_eq!(
            r.lookup("plaid").unwrap_err(),
            KernelError::KernelNotFound("plaid".into())
        );
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut r = registry();
        let err = r.register(WHITE).unwrap_err();
        assert_eq!(err, KernelError::DuplicateKernel("white".into()));
        assert_eq!(r.len(), 2);
    }

    #[test]
    fn names_are_sorted() {
        assert_eq!(registry().names(), vec!["black", "white"]);
    }

    #[test]
    fn bind_and_evaluate_by_name() {
        let r = registry();
        let bound = r.bind("black", ParameterList::new()).unwrap();
        assert_eq!(
            bound.evaluate(DVec2::new(3.0, 4.0), Color::WHITE).unwrap(),
            Color::BLACK
        );
    }

    #[test]
    fn bind_unknown_name_fails_before_evaluation() {
        let r = registry();
        assert!(matches!(
            r.bind("missing", ParameterList::new()),
            Err(KernelError::KernelNotFound(_))
        ));
    }

    #[test]
    fn registry_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<KernelRegistry>();
    }
}
