//! Expression node construction
//!
//! The factory is the only place ids come from: it hands out
//! monotonically increasing ids starting at 1 and never reuses one, so
//! the side tables keyed by id stay unambiguous for the whole tree.

use crate::{Expr, ExprId, ExprKind, Literal, MapEntry};

/// Builds expression nodes with stable, unique ids.
#[derive(Debug, Default)]
pub struct ExprFactory {
    next_id: u64,
}

impl ExprFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id. Exposed for collaborators that build
    /// nodes out of band, e.g. macro expansion.
    pub fn next_id(&mut self) -> ExprId {
        self.next_id += 1;
        ExprId(self.next_id)
    }

    pub fn new_literal(&mut self, literal: Literal) -> Expr {
        let id = self.next_id();
        Expr::new(id, ExprKind::Literal(literal))
    }

    pub fn new_ident(&mut self, name: impl Into<String>) -> Expr {
        let id = self.next_id();
        Expr::new(id, ExprKind::Ident(name.into()))
    }

    pub fn new_select(&mut self, operand: Expr, field: impl Into<String>) -> Expr {
        let id = self.next_id();
        Expr::new(
            id,
            ExprKind::Select {
                operand: Box::new(operand),
                field: field.into(),
                test_only: false,
            },
        )
    }

    /// A `has(operand.field)` presence test.
    pub fn new_presence_test(&mut self, operand: Expr, field: impl Into<String>) -> Expr {
        let id = self.next_id();
        Expr::new(
            id,
            ExprKind::Select {
                operand: Box::new(operand),
                field: field.into(),
                test_only: true,
            },
        )
    }

    pub fn new_call(&mut self, function: impl Into<String>, args: Vec<Expr>) -> Expr {
        let id = self.next_id();
        Expr::new(
            id,
            ExprKind::Call {
                target: None,
                function: function.into(),
                args,
            },
        )
    }

    pub fn new_member_call(
        &mut self,
        target: Expr,
        function: impl Into<String>,
        args: Vec<Expr>,
    ) -> Expr {
        let id = self.next_id();
        Expr::new(
            id,
            ExprKind::Call {
                target: Some(Box::new(target)),
                function: function.into(),
                args,
            },
        )
    }

    pub fn new_list(&mut self, elements: Vec<Expr>) -> Expr {
        let id = self.next_id();
        Expr::new(id, ExprKind::List(elements))
    }

    pub fn new_map(&mut self, entries: Vec<MapEntry>) -> Expr {
        let id = self.next_id();
        Expr::new(id, ExprKind::Map(entries))
    }

    pub fn new_map_entry(&mut self, key: Expr, value: Expr) -> MapEntry {
        let id = self.next_id();
        MapEntry { id, key, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_and_nonzero() {
        let mut factory = ExprFactory::new();
        let a = factory.new_ident("a");
        let b = factory.new_ident("b");
        let c = factory.new_literal(Literal::Int(1));
        assert_eq!(a.id, ExprId(1));
        assert_eq!(b.id, ExprId(2));
        assert_eq!(c.id, ExprId(3));
    }

    #[test]
    fn test_nested_nodes_keep_their_ids() {
        let mut factory = ExprFactory::new();
        let operand = factory.new_ident("request");
        let operand_id = operand.id;
        let select = factory.new_select(operand, "auth");
        match &select.kind {
            ExprKind::Select { operand, .. } => assert_eq!(operand.id, operand_id),
            other => panic!("expected select, got {:?}", other),
        }
    }
}
