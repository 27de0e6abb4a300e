//! Union construction and flattening combinators.
//!
//! All union construction in the analyzer goes through these functions so
//! that the no-nested-union invariant holds at every construction site:
//!
//! - [`union_types`] flattens, deduplicates, absorbs subsumed members,
//!   and collapses degenerate unions
//! - [`flatten_types`] exposes the leaf member sequence of any type, so
//!   rules iterate members uniformly instead of hand-unwrapping unions

use smallvec::{SmallVec, smallvec};
use tracing::trace;

use crate::types::{Type, UnionType};
use phast_common::TrinaryLogic;

/// Build the normalized union of `members`.
///
/// Nested unions are flattened in one pass, structurally-equal members
/// deduplicated, and members already covered by another member (the
/// relation answers a definite yes) absorbed. A single surviving member
/// is returned as-is; an empty input yields `Mixed`, the top type of the
/// analyzed language.
pub fn union_types(members: Vec<Type>) -> Type {
    let input_len = members.len();
    let normalized = normalize_members(members);
    trace!(input_len, normalized_len = normalized.len(), "union normalized");
    match normalized.len() {
        0 => Type::Mixed,
        1 => normalized.into_iter().next().unwrap_or(Type::Mixed),
        _ => Type::Union(
            UnionType::new(normalized).unwrap_or_else(|_| unreachable!("members were normalized")),
        ),
    }
}

/// Build a benevolent union, the loosened variant used where the
/// language's own weak comparison semantics blur member boundaries.
///
/// Normalization is identical to [`union_types`]; only the variant tag
/// differs, which relaxes how rules interpret a `Maybe` answer.
pub fn benevolent_union(members: Vec<Type>) -> Type {
    let normalized = normalize_members(members);
    match normalized.len() {
        0 => Type::Mixed,
        1 => normalized.into_iter().next().unwrap_or(Type::Mixed),
        _ => Type::BenevolentUnion(
            UnionType::new(normalized).unwrap_or_else(|_| unreachable!("members were normalized")),
        ),
    }
}

/// The flattened leaf-member sequence of `ty`.
///
/// Unions (benevolent or not) yield their members; every other type
/// yields a one-element sequence. Members of a well-formed union are
/// never unions themselves, so one level of unwrapping is exhaustive.
pub fn flatten_types(ty: &Type) -> SmallVec<[&Type; 4]> {
    match ty {
        Type::Union(union) | Type::BenevolentUnion(union) => union.members().iter().collect(),
        other => smallvec![other],
    }
}

fn normalize_members(members: Vec<Type>) -> Vec<Type> {
    let mut flat: Vec<Type> = Vec::with_capacity(members.len());
    for member in members {
        match member {
            Type::Union(union) | Type::BenevolentUnion(union) => {
                for inner in union.members() {
                    push_unique(&mut flat, inner.clone());
                }
            }
            other => push_unique(&mut flat, other),
        }
    }

    // Absorption: drop members another member already covers for certain.
    let mut kept: Vec<Type> = Vec::with_capacity(flat.len());
    'candidates: for (index, candidate) in flat.iter().enumerate() {
        for (other_index, other) in flat.iter().enumerate() {
            if index == other_index || candidate.equals(other) {
                continue;
            }
            let covered = other.is_super_type_of(candidate) == TrinaryLogic::Yes;
            let covers = candidate.is_super_type_of(other) == TrinaryLogic::Yes;
            // Mutually-covering members (same class under different casing)
            // keep the earlier one.
            if covered && (!covers || other_index < index) {
                continue 'candidates;
            }
        }
        kept.push(candidate.clone());
    }
    kept
}

fn push_unique(members: &mut Vec<Type>, candidate: Type) {
    if !members.iter().any(|existing| existing.equals(&candidate)) {
        members.push(candidate);
    }
}
