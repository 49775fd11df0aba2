//! Workspace-level test exercising the parse → check → diagnose flow
//! through the root re-exports.

use oriel::ast::{CheckedAst, ExprFactory, OffsetRange, ReferenceInfo, SourceInfo};
use oriel::common::{Location, TextSource};
use oriel::types::Type;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[test]
fn parse_check_and_report() {
    // "parser": build `size(name) > 10` over two lines
    let source = TextSource::new("size(name)\n> 10", "policy.oriel");
    let mut info = SourceInfo::from_source(&source);
    let mut factory = ExprFactory::new();

    let name = factory.new_ident("name");
    info.set_offset_range(name.id, OffsetRange::new(5, 9));
    let size = factory.new_call("size", vec![name]);
    info.set_offset_range(size.id, OffsetRange::new(0, 9));
    let ten = factory.new_literal(oriel::ast::Literal::Int(10));
    info.set_offset_range(ten.id, OffsetRange::new(13, 14));
    let gt = factory.new_call("_>_", vec![size, ten]);
    info.set_offset_range(gt.id, OffsetRange::point(11));

    let root_id = gt.id;
    let parsed = CheckedAst::new(gt, Rc::new(RefCell::new(info)));
    assert!(!parsed.is_checked());

    // "checker": annotate every node, resolve the call overloads
    let mut type_map = HashMap::new();
    let mut ref_map = HashMap::new();
    for (id, ty) in [
        (1, Type::String),
        (2, Type::Int),
        (3, Type::Int),
        (4, Type::Bool),
    ] {
        type_map.insert(oriel::ast::ExprId(id), ty);
    }
    ref_map.insert(
        oriel::ast::ExprId(2),
        ReferenceInfo::new_function_reference(["size_string"]),
    );
    ref_map.insert(
        oriel::ast::ExprId(4),
        ReferenceInfo::new_function_reference(["greater_int64"]),
    );
    let checked = CheckedAst::new_checked(&parsed, type_map, ref_map);

    assert!(checked.is_checked());
    assert_eq!(checked.get_type(root_id), Type::Bool);
    assert_eq!(checked.get_overload_ids(root_id), &["greater_int64"]);

    // "diagnostics": map a node back to its line and text
    let info = checked.source_info();
    let info = info.borrow();
    let loc = info.get_start_location(oriel::ast::ExprId(3));
    assert_eq!(loc, Location::new(2, 2));
    assert_eq!(source.snippet(loc.line), Some("> 10"));
}
