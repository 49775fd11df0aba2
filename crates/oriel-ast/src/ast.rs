//! Parsed and checked AST aggregates

use crate::{Expr, ExprId, ReferenceInfo, SourceInfo};
use oriel_types::Type;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a [`SourceInfo`].
///
/// The parsed and checked views of one expression alias the same
/// source info: macro calls or offset ranges recorded through either
/// view are visible through the other. Single-threaded by design, like
/// the rest of this crate.
pub type SourceInfoRef = Rc<RefCell<SourceInfo>>;

/// An expression tree together with its source metadata and, once the
/// checker has run, its type and reference annotations.
///
/// The default value is a valid empty instance: nil root, empty source
/// info, empty maps, unchecked. All accessors are total and return
/// neutral defaults rather than failing.
#[derive(Debug, Clone)]
pub struct CheckedAst {
    expr: Rc<Expr>,
    source_info: SourceInfoRef,
    type_map: HashMap<ExprId, Type>,
    ref_map: HashMap<ExprId, ReferenceInfo>,
    checked: bool,
}

impl Default for CheckedAst {
    fn default() -> Self {
        Self::new(Expr::nil(), Rc::new(RefCell::new(SourceInfo::default())))
    }
}

impl CheckedAst {
    /// Create an unchecked AST from a parsed expression and its source
    /// metadata. The type and reference maps start empty.
    pub fn new(expr: Expr, source_info: SourceInfoRef) -> Self {
        Self {
            expr: Rc::new(expr),
            source_info,
            type_map: HashMap::new(),
            ref_map: HashMap::new(),
            checked: false,
        }
    }

    /// Derive a checked AST from a parsed one, installing the maps the
    /// checker produced.
    ///
    /// The expression and source info are shared with `parsed`, not
    /// copied; the checked flag is derived once here, from whether
    /// either map is non-empty, and never recomputed.
    pub fn new_checked(
        parsed: &CheckedAst,
        type_map: HashMap<ExprId, Type>,
        ref_map: HashMap<ExprId, ReferenceInfo>,
    ) -> Self {
        let checked = !type_map.is_empty() || !ref_map.is_empty();
        Self {
            expr: Rc::clone(&parsed.expr),
            source_info: Rc::clone(&parsed.source_info),
            type_map,
            ref_map,
            checked,
        }
    }

    /// The root expression node.
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    /// The source metadata, shared with any other views of this tree.
    pub fn source_info(&self) -> SourceInfoRef {
        Rc::clone(&self.source_info)
    }

    /// The checked type of the node at `id`, or [`Type::Dyn`] when no
    /// annotation exists.
    pub fn get_type(&self, id: ExprId) -> Type {
        self.type_map.get(&id).cloned().unwrap_or(Type::Dyn)
    }

    /// Annotate the node at `id` with its checked type.
    pub fn set_type(&mut self, id: ExprId, ty: Type) {
        self.type_map.insert(id, ty);
    }

    /// The live map of expression id to checked type. Empty until the
    /// checker runs.
    pub fn type_map(&self) -> &HashMap<ExprId, Type> {
        &self.type_map
    }

    /// The resolved reference for the node at `id`, if the checker
    /// recorded one.
    pub fn get_reference(&self, id: ExprId) -> Option<&ReferenceInfo> {
        self.ref_map.get(&id)
    }

    /// Record what the identifier or call at `id` resolved to.
    pub fn set_reference(&mut self, id: ExprId, reference: ReferenceInfo) {
        self.ref_map.insert(id, reference);
    }

    /// The live map of expression id to resolved reference.
    pub fn reference_map(&self) -> &HashMap<ExprId, ReferenceInfo> {
        &self.ref_map
    }

    /// Overload ids resolved for the call at `id`. Empty when the node
    /// is not a call, or the AST is unchecked.
    pub fn get_overload_ids(&self, id: ExprId) -> &[String] {
        self.ref_map
            .get(&id)
            .map(|r| r.overload_ids.as_slice())
            .unwrap_or(&[])
    }

    /// Whether this AST went through the checker.
    pub fn is_checked(&self) -> bool {
        self.checked
    }
}
