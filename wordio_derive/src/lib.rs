use darling::{ast, Error, FromDeriveInput, FromField, FromMeta};
use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{parse_macro_input, parse_quote, DeriveInput};

#[proc_macro_derive(Codec, attributes(wordio))]
pub fn derive_codec(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    ContainerReceiver::from_derive_input(&input)
        .and_then(|receiver| receiver.validate())
        .map(|data| data.codec_impl().into_token_stream())
        .unwrap_or_else(|error| error.write_errors())
        .into()
}

#[derive(FromDeriveInput)]
#[darling(attributes(wordio), supports(struct_any))]
struct ContainerReceiver {
    ident: syn::Ident,
    generics: syn::Generics,
    data: ast::Data<(), FieldReceiver>,

    #[darling(default)]
    crate_path: Option<syn::Path>,

    #[darling(default)]
    endian: Option<EndianAttr>,
}

struct ContainerData {
    ident: syn::Ident,
    crate_path: syn::Path,
    style: ast::Style,
    fields: Vec<FieldData>,
}

impl ContainerReceiver {
    fn validate(&self) -> Result<ContainerData, Error> {
        let mut errors = Vec::new();

        let ident = self.ident.clone();
        let crate_path = self
            .crate_path
            .clone()
            .unwrap_or_else(|| parse_quote!(wordio));

        // The byte length goes into an array type, which cannot depend on type parameters.
        if !self.generics.params.is_empty() {
            errors.push(
                Error::custom("`Codec` cannot be derived for generic types")
                    .with_span(&self.generics),
            );
        }

        // `supports(struct_any)` has already turned enums and unions away.
        let (style, fields) = self
            .data
            .as_ref()
            .take_struct()
            .map(|fields| {
                let data: Vec<FieldData> = fields
                    .iter()
                    .enumerate()
                    .map(|(index, field)| field.validate(index, self.endian))
                    .collect();
                (fields.style, data)
            })
            .unwrap_or((ast::Style::Unit, Vec::new()));

        if errors.is_empty() {
            Ok(ContainerData {
                ident,
                crate_path,
                style,
                fields,
            })
        } else {
            Err(Error::multiple(errors))
        }
    }
}

impl ContainerData {
    fn codec_impl(&self) -> TokenStream {
        let Self {
            ident, crate_path, ..
        } = self;
        let src_binding = format_ident!("__wordio_src");
        let dst_binding = format_ident!("__wordio_dst");
        let endian_binding = format_ident!("__wordio_endian");
        let offset_binding = format_ident!("__wordio_offset");

        let field_len = self.fields.iter().map(|field| field.len(crate_path));

        let field_load = self.fields.iter().map(|field| {
            field.load_stmt(crate_path, &src_binding, &endian_binding, &offset_binding)
        });

        let field_store = self.fields.iter().map(|field| {
            field.store_stmt(crate_path, &dst_binding, &endian_binding, &offset_binding)
        });

        let field_cons = self.fields.iter().map(|field| {
            let FieldData {
                member, local_ident, ..
            } = field;
            match member {
                syn::Member::Named(_) => quote!(#member: #local_ident),
                syn::Member::Unnamed(_) => quote!(#local_ident),
            }
        });
        let cons_fields = match self.style {
            ast::Style::Tuple => quote!( ( #( #field_cons, )* ) ),
            ast::Style::Struct => quote!( { #( #field_cons, )* } ),
            ast::Style::Unit => quote!(),
        };

        quote! {
            impl #crate_path::Codec for #ident {
                type Bytes = [u8; 0 #( + #field_len )*];

                #[allow(unused_mut, unused_variables, unused_assignments)]
                fn load(
                    #src_binding: &Self::Bytes,
                    #endian_binding: #crate_path::ctx::Endian,
                ) -> Self {
                    let mut #offset_binding = 0usize;
                    #( #field_load )*
                    Self #cons_fields
                }

                #[allow(unused_mut, unused_variables, unused_assignments)]
                fn store(
                    &self,
                    #dst_binding: &mut Self::Bytes,
                    #endian_binding: #crate_path::ctx::Endian,
                ) {
                    let mut #offset_binding = 0usize;
                    #( #field_store )*
                }
            }
        }
    }
}

#[derive(FromField)]
#[darling(attributes(wordio))]
struct FieldReceiver {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    #[darling(default)]
    endian: Option<EndianAttr>,
}

struct FieldData {
    member: syn::Member,
    local_ident: syn::Ident,
    ty: syn::Type,
    endian: Option<EndianAttr>,
}

impl FieldReceiver {
    fn validate(&self, index: usize, container_endian: Option<EndianAttr>) -> FieldData {
        let member = match &self.ident {
            Some(ident) => syn::Member::Named(ident.clone()),
            None => syn::Member::Unnamed(syn::Index::from(index)),
        };
        FieldData {
            member,
            local_ident: format_ident!("__wordio_field_{}", index),
            ty: self.ty.clone(),
            endian: self.endian.or(container_endian),
        }
    }
}

impl FieldData {
    fn len(&self, crate_path: &syn::Path) -> TokenStream {
        let ty = &self.ty;
        quote!(<<#ty as #crate_path::Codec>::Bytes as #crate_path::ByteArray>::LEN)
    }

    fn endian_expr(&self, crate_path: &syn::Path, endian_binding: &syn::Ident) -> TokenStream {
        match self.endian {
            Some(EndianAttr::Big) => quote!(#crate_path::ctx::Endian::Big),
            Some(EndianAttr::Little) => quote!(#crate_path::ctx::Endian::Little),
            None => quote!(#endian_binding),
        }
    }

    fn load_stmt(
        &self,
        crate_path: &syn::Path,
        src_binding: &syn::Ident,
        endian_binding: &syn::Ident,
        offset_binding: &syn::Ident,
    ) -> TokenStream {
        let Self {
            local_ident, ty, ..
        } = self;
        let len = self.len(crate_path);
        let endian = self.endian_expr(crate_path, endian_binding);
        quote! {
            let #local_ident = {
                let __wordio_len = #len;
                let mut __wordio_bytes =
                    <<#ty as #crate_path::Codec>::Bytes as #crate_path::ByteArray>::zeroed();
                #crate_path::ByteArray::bytes_mut(&mut __wordio_bytes).copy_from_slice(
                    &#src_binding[#offset_binding..#offset_binding + __wordio_len],
                );
                #offset_binding += __wordio_len;
                <#ty as #crate_path::Codec>::load(&__wordio_bytes, #endian)
            };
        }
    }

    fn store_stmt(
        &self,
        crate_path: &syn::Path,
        dst_binding: &syn::Ident,
        endian_binding: &syn::Ident,
        offset_binding: &syn::Ident,
    ) -> TokenStream {
        let Self { member, ty, .. } = self;
        let len = self.len(crate_path);
        let endian = self.endian_expr(crate_path, endian_binding);
        quote! {
            {
                let __wordio_len = #len;
                let mut __wordio_bytes =
                    <<#ty as #crate_path::Codec>::Bytes as #crate_path::ByteArray>::zeroed();
                <#ty as #crate_path::Codec>::store(&self.#member, &mut __wordio_bytes, #endian);
                #dst_binding[#offset_binding..#offset_binding + __wordio_len]
                    .copy_from_slice(#crate_path::ByteArray::bytes(&__wordio_bytes));
                #offset_binding += __wordio_len;
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum EndianAttr {
    Big,
    Little,
}

impl FromMeta for EndianAttr {
    fn from_string(value: &str) -> Result<Self, Error> {
        match value {
            "big" => Ok(Self::Big),
            "little" => Ok(Self::Little),
            other => Err(Error::unknown_value(other)),
        }
    }
}
