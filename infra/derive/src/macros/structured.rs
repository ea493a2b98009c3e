use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Visibility, WherePredicate, parse_quote};

/// Per-field options collected from `#[field(...)]`.
struct FieldMeta {
    ident: Ident,
    name: LitStr,
    tag: Option<LitStr>,
    embedded: bool,
    exported: bool,
}

/// Expands `#[derive(Structured)]`.
pub fn expand_derive(input: DeriveInput) -> TokenStream {
    let name = &input.ident;

    if derived_trait_names(&input).contains("Serialize") {
        return syn::Error::new_spanned(
            name,
            "Structured provides its own `Serialize` impl; remove `#[derive(Serialize)]`",
        )
        .to_compile_error();
    }

    let fields = match named_fields(&input) {
        Ok(fields) => fields,
        Err(err) => return err,
    };
    let metas = match fields.iter().map(parse_field).collect::<Result<Vec<_>, _>>() {
        Ok(metas) => metas,
        Err(err) => return err.to_compile_error(),
    };

    let mut generics = input.generics.clone();
    let bounds: Vec<WherePredicate> = input
        .generics
        .type_params()
        .map(|param| {
            let ident = &param.ident;
            parse_quote!(#ident: ::squadup_structs::FieldType + ::squadup_structs::serde::Serialize)
        })
        .collect();
    generics.make_where_clause().predicates.extend(bounds);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let field_exprs = metas.iter().map(field_tokens);
    let type_name = LitStr::new(&name.unraw().to_string(), name.span());

    quote! {
        #[automatically_derived]
        impl #impl_generics ::squadup_structs::Structured for #name #ty_generics #where_clause {
            fn type_name(&self) -> &'static str {
                #type_name
            }

            fn fields(&self) -> ::std::vec::Vec<::squadup_structs::Field<'_>> {
                ::std::vec![#(#field_exprs),*]
            }
        }

        #[automatically_derived]
        impl #impl_generics ::squadup_structs::FieldType for #name #ty_generics #where_clause {
            fn is_zero(&self) -> bool {
                ::squadup_structs::Structured::fields(self)
                    .iter()
                    .all(::squadup_structs::Field::is_zero)
            }

            fn as_structured(&self) -> ::core::option::Option<&dyn ::squadup_structs::Structured> {
                ::core::option::Option::Some(self)
            }
        }

        #[automatically_derived]
        impl #impl_generics ::squadup_structs::serde::Serialize for #name #ty_generics #where_clause {
            fn serialize<__S>(&self, serializer: __S) -> ::core::result::Result<__S::Ok, __S::Error>
            where
                __S: ::squadup_structs::serde::Serializer,
            {
                ::squadup_structs::__private::serialize_structured(self, serializer)
            }
        }
    }
}

fn named_fields(input: &DeriveInput) -> Result<Vec<syn::Field>, TokenStream> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields.named.iter().cloned().collect()),
            Fields::Unit => Ok(Vec::new()),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                &input.ident,
                "Structured derive only supports structs with named fields",
            )
            .to_compile_error()),
        },
        _ => Err(syn::Error::new_spanned(&input.ident, "Structured derive only supports structs")
            .to_compile_error()),
    }
}

fn parse_field(field: &syn::Field) -> syn::Result<FieldMeta> {
    let Some(ident) = field.ident.clone() else {
        return Err(syn::Error::new_spanned(field, "Structured derive requires named fields"));
    };

    let mut tag: Option<LitStr> = None;
    let mut embedded = false;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("field")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                if tag.is_some() {
                    return Err(meta.error("duplicate `tag = \"...\"` argument"));
                }
                tag = Some(meta.value()?.parse()?);
                Ok(())
            } else if meta.path.is_ident("embed") {
                embedded = true;
                Ok(())
            } else {
                Err(meta.error("expected `tag = \"...\"` or `embed`"))
            }
        })?;
    }

    let name = LitStr::new(&ident.unraw().to_string(), ident.span());
    let exported = matches!(field.vis, Visibility::Public(_));

    Ok(FieldMeta { ident, name, tag, embedded, exported })
}

fn field_tokens(meta: &FieldMeta) -> TokenStream {
    let FieldMeta { ident, name, tag, embedded, exported } = meta;

    let tag_call = tag.as_ref().map(|tag| quote! { .with_tag(#tag) });
    let embed_call = embedded.then(|| quote! { .embedded() });

    quote! {
        ::squadup_structs::Field::new(#name, &self.#ident)
            #tag_call
            #embed_call
            .exported(#exported)
    }
}
