//! Procedural macros for the puzzle-solver library

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Lit};

/// Derive macro generating the `Solver` part dispatch from `PartSolver<N>` impls
///
/// The type must implement `InputParser` and `PartSolver<N>` for every
/// `N` in `1..=parts`. The generated `Solver` impl dispatches `solve_part`
/// to the matching `PartSolver` and returns `SolveError::PartNotImplemented`
/// for anything else.
///
/// # Attributes
///
/// - `parts`: Required. Number of parts the solver implements (usually 2).
///
/// # Example
///
/// ```ignore
/// use puzzle_solver_macros::DaySolver;
///
/// #[derive(DaySolver)]
/// #[day_solver(parts = 2)]
/// struct Solver;
///
/// // impl InputParser for Solver { ... }
/// // impl PartSolver<1> for Solver { ... }
/// // impl PartSolver<2> for Solver { ... }
/// ```
#[proc_macro_derive(DaySolver, attributes(day_solver))]
pub fn derive_day_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("day_solver"))
        .expect("DaySolver derive macro requires #[day_solver(...)] attribute");

    let mut parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("parts") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                parts = Some(lit_int.base10_parse()?);
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[day_solver(...)] attribute");

    let parts = parts.expect("Missing required 'parts' attribute");
    assert!(parts >= 1, "'parts' must be at least 1");

    // One match arm per declared part
    let arms = (1..=parts).map(|n| {
        quote! {
            #n => <Self as ::puzzle_solver::PartSolver<#n>>::solve(parsed),
        }
    });

    let expanded = quote! {
        impl ::puzzle_solver::Solver for #name {
            const PARTS: u8 = #parts;

            fn solve_part(
                parsed: &mut Self::Parsed<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::puzzle_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => Err(::puzzle_solver::SolveError::PartNotImplemented(part)),
                }
            }
        }
    };

    TokenStream::from(expanded)
}

/// Derive macro for automatically registering solvers with the plugin system
///
/// Generates the `inventory::submit!` record so the solver is discovered
/// when the registry calls `register_all_plugins`.
///
/// # Attributes
///
/// - `day`: Required. The puzzle day (1-25).
/// - `tags`: Optional. Array of string literals for filtering
///   (e.g. `["intcode", "grid"]`).
///
/// # Requirements
///
/// The type must implement the `Solver` trait. If the trait is not
/// implemented you get a compile-time error pointing at the type:
///
/// ```text
/// error[E0277]: the trait bound `YourSolver: Solver` is not satisfied
/// ```
///
/// # Example
///
/// ```ignore
/// use puzzle_solver_macros::{AutoRegister, DaySolver};
///
/// #[derive(DaySolver, AutoRegister)]
/// #[day_solver(parts = 2)]
/// #[puzzle(day = 1, tags = ["arithmetic"])]
/// struct Solver;
/// ```
#[proc_macro_derive(AutoRegister, attributes(puzzle))]
pub fn derive_auto_register(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let attr = input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident("puzzle"))
        .expect("AutoRegister derive macro requires #[puzzle(...)] attribute");

    let mut day: Option<u8> = None;
    let mut tags: Vec<String> = Vec::new();

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("day") {
            let value: Lit = meta.value()?.parse()?;
            if let Lit::Int(lit_int) = value {
                day = Some(lit_int.base10_parse()?);
            }
        } else if meta.path.is_ident("tags") {
            // Parse array of string literals: tags = ["a", "b"]
            let _ = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            while !content.is_empty() {
                let lit: Lit = content.parse()?;
                if let Lit::Str(lit_str) = lit {
                    tags.push(lit_str.value());
                }
                if content.peek(syn::Token![,]) {
                    let _: syn::Token![,] = content.parse()?;
                }
            }
        }
        Ok(())
    })
    .expect("Failed to parse #[puzzle(...)] attribute");

    let day = day.expect("Missing required 'day' attribute");

    let tags_array = if tags.is_empty() {
        quote! { &[] }
    } else {
        let tag_strs = tags.iter().map(|s| s.as_str());
        quote! { &[#(#tag_strs),*] }
    };

    let expanded = quote! {
        // Compile-time check that the type implements the Solver trait,
        // for a clearer error than the one out of inventory::submit!
        const _: () = {
            trait MustImplementSolver: ::puzzle_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::puzzle_solver::inventory::submit! {
            ::puzzle_solver::SolverPlugin {
                day: #day,
                solver: &#name,
                tags: #tags_array,
            }
        }
    };

    TokenStream::from(expanded)
}
