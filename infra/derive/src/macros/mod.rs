use fxhash::FxHashSet;
use syn::DeriveInput;

pub mod error;
pub mod structured;

/// Names of the traits listed in the item's `#[derive(...)]` attributes, last path segment only.
fn derived_trait_names(input: &DeriveInput) -> FxHashSet<String> {
    let mut traits = FxHashSet::default();

    for attr in input.attrs.iter().filter(|attr| attr.path().is_ident("derive")) {
        let _ = attr.parse_nested_meta(|meta| {
            if let Some(segment) = meta.path.segments.last() {
                traits.insert(segment.ident.to_string());
            }
            Ok(())
        });
    }

    traits
}
