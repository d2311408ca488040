//! Variant registry for the host's variant-selection mechanism.
//! A fixed, compile-time list of descriptors; the first entry is the default.

use crate::variant::VariantDescriptor;

#[derive(Debug, Clone, Copy)]
pub struct VariantRegistry {
    variants: &'static [&'static VariantDescriptor],
}

impl VariantRegistry {
    #[must_use]
    pub const fn new(variants: &'static [&'static VariantDescriptor]) -> Self {
        Self { variants }
    }

    /// Looks a variant up by name, ignoring ASCII case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&'static VariantDescriptor> {
        self.variants.iter().copied().find(|v| v.name.eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub fn default_variant(&self) -> Option<&'static VariantDescriptor> {
        self.variants.first().copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.variants.iter().map(|v| v.name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static VariantDescriptor> {
        self.variants.iter().copied()
    }
}
