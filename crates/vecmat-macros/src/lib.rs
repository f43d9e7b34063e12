//! Procedural macros used by `vecmat`.
//!
//! Do not use this crate directly, use `vecmat` instead.

use itertools::Itertools;
use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{
    parse::{Error, Parse, ParseStream},
    punctuated::Punctuated,
    Ident, LitInt, Token,
};

/// Generates swizzle accessors inside an `impl` block of a fixed-size vector.
///
/// Takes the component letters (in storage order), a `;`, and the list of swizzle lengths to
/// generate. For every length, one method is emitted for each combination of letters (with
/// repetition), returning a tuple of the referenced components:
///
/// ```ignore
/// impl<T: Copy> VecN<T, 2> {
///     swizzles!(x, y; 2); // xx, xy, yx, yy
/// }
/// ```
///
/// The surrounding `impl` block must declare a `Copy` element type named `T`, and `self[i]` must
/// index the `i`-th component.
#[proc_macro]
pub fn swizzles(input: TokenStream) -> TokenStream {
    match syn::parse::<SwizzleInput>(input) {
        Ok(input) => expand_swizzles(&input).into(),
        Err(err) => err.to_compile_error().into(),
    }
}

struct SwizzleInput {
    letters: Vec<Ident>,
    lengths: Vec<usize>,
}

impl Parse for SwizzleInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut letters = Vec::new();
        loop {
            letters.push(input.parse::<Ident>()?);
            if input.peek(Token![;]) {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        input.parse::<Token![;]>()?;

        let lengths = Punctuated::<LitInt, Token![,]>::parse_terminated(input)?
            .iter()
            .map(|lit| {
                let len = lit.base10_parse::<usize>()?;
                if len < 2 {
                    return Err(Error::new(
                        lit.span(),
                        "swizzles must reference at least 2 components",
                    ));
                }
                Ok(len)
            })
            .collect::<syn::Result<Vec<_>>>()?;

        if lengths.is_empty() {
            return Err(Error::new(
                Span::call_site(),
                "`swizzles!` requires at least one swizzle length",
            ));
        }
        if !letters.iter().map(|l| l.to_string()).all_unique() {
            return Err(Error::new(
                Span::call_site(),
                "`swizzles!` component letters must be unique",
            ));
        }

        Ok(Self { letters, lengths })
    }
}

fn expand_swizzles(input: &SwizzleInput) -> proc_macro2::TokenStream {
    let methods = input.lengths.iter().flat_map(|&len| {
        (0..len)
            .map(|_| input.letters.iter().enumerate())
            .multi_cartesian_product()
            .map(|combo| {
                let name = format_ident!("{}", combo.iter().map(|(_, l)| l.to_string()).join(""));
                let doc = format!(
                    "Returns the `({})` components as a tuple.",
                    combo.iter().map(|(_, l)| l.to_string()).join(", ")
                );
                let indices = combo.iter().map(|&(i, _)| i);
                let types = combo.iter().map(|_| quote!(T));

                quote! {
                    #[doc = #doc]
                    #[inline]
                    pub fn #name(&self) -> (#(#types,)*) {
                        (#(self[#indices],)*)
                    }
                }
            })
            .collect::<Vec<_>>()
    });

    quote! {
        #(#methods)*
    }
}
