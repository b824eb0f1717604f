//! Unit tests for the parser.
//!
//! This module contains tests for parsing the language constructs:
//! - Declarations, assignments, declare-assigns
//! - Enum and function declarations with indented blocks
//! - Expression precedence and associativity
//! - Error cases

use crate::{
    ast::{
        expressions::Expr,
        statements::{Param, Stmt},
        types::Type,
    },
    errors::errors::ErrorCategory,
    parse_program,
};

fn parse_one(source: &str) -> Stmt {
    let mut program = parse_program(source.to_string(), Some("test.lang".to_string())).unwrap();
    assert_eq!(program.len(), 1);
    program.remove(0)
}

fn parse_assign_value(source: &str) -> Expr {
    match parse_one(source) {
        Stmt::Assign { value, .. } => value,
        other => panic!("expected assignment, got {:?}", other),
    }
}

#[test]
fn test_parse_declare() {
    assert_eq!(
        parse_one("int a"),
        Stmt::Declare {
            ty: Type::Int,
            name: "a".to_string()
        }
    );
}

#[test]
fn test_parse_declare_array_type() {
    assert_eq!(
        parse_one("int[][] m"),
        Stmt::Declare {
            ty: Type::Array(Box::new(Type::Array(Box::new(Type::Int)))),
            name: "m".to_string()
        }
    );
}

#[test]
fn test_type_display_matches_source_spelling() {
    assert_eq!(format!("{}", Type::Int), "int");
    assert_eq!(
        format!("{}", Type::Array(Box::new(Type::Array(Box::new(Type::Str))))),
        "str[][]"
    );
}

#[test]
fn test_parse_assign() {
    assert_eq!(
        parse_one("a = 0"),
        Stmt::Assign {
            name: "a".to_string(),
            op: "=".to_string(),
            value: Expr::Integer("0".to_string())
        }
    );
}

#[test]
fn test_parse_compound_assign_ops() {
    for op in ["+=", "-=", "*=", "/=", "%=", "**="] {
        let source = format!("a {} 2", op);
        match parse_one(&source) {
            Stmt::Assign { op: parsed_op, .. } => assert_eq!(parsed_op, op),
            other => panic!("expected assignment for {:?}, got {:?}", source, other),
        }
    }
}

#[test]
fn test_parse_declare_assign() {
    assert_eq!(
        parse_one("str a = \"a\""),
        Stmt::DeclareAssign {
            ty: Type::Str,
            name: "a".to_string(),
            value: Expr::String("a".to_string())
        }
    );
}

#[test]
fn test_parse_binary_expression() {
    assert_eq!(
        parse_assign_value("a = 2 + 5"),
        Expr::Binary {
            op: "+".to_string(),
            left: Box::new(Expr::Integer("2".to_string())),
            right: Box::new(Expr::Integer("5".to_string())),
        }
    );
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse_assign_value("a = 2 + 3 * 4"),
        Expr::Binary {
            op: "+".to_string(),
            left: Box::new(Expr::Integer("2".to_string())),
            right: Box::new(Expr::Binary {
                op: "*".to_string(),
                left: Box::new(Expr::Integer("3".to_string())),
                right: Box::new(Expr::Integer("4".to_string())),
            }),
        }
    );
}

#[test]
fn test_subtraction_is_left_associative() {
    assert_eq!(
        parse_assign_value("a = 1 - 2 - 3"),
        Expr::Binary {
            op: "-".to_string(),
            left: Box::new(Expr::Binary {
                op: "-".to_string(),
                left: Box::new(Expr::Integer("1".to_string())),
                right: Box::new(Expr::Integer("2".to_string())),
            }),
            right: Box::new(Expr::Integer("3".to_string())),
        }
    );
}

#[test]
fn test_power_is_right_associative() {
    assert_eq!(
        parse_assign_value("a = 2 ** 3 ** 2"),
        Expr::Binary {
            op: "**".to_string(),
            left: Box::new(Expr::Integer("2".to_string())),
            right: Box::new(Expr::Binary {
                op: "**".to_string(),
                left: Box::new(Expr::Integer("3".to_string())),
                right: Box::new(Expr::Integer("2".to_string())),
            }),
        }
    );
}

#[test]
fn test_logical_and_comparison_layering() {
    // || looser than &&, && looser than comparison
    assert_eq!(
        parse_assign_value("a = 1 < 2 && b || c"),
        Expr::Logical {
            op: "||".to_string(),
            left: Box::new(Expr::Logical {
                op: "&&".to_string(),
                left: Box::new(Expr::Comparison {
                    op: "<".to_string(),
                    left: Box::new(Expr::Integer("1".to_string())),
                    right: Box::new(Expr::Integer("2".to_string())),
                }),
                right: Box::new(Expr::Identifier("b".to_string())),
            }),
            right: Box::new(Expr::Identifier("c".to_string())),
        }
    );
}

#[test]
fn test_parse_conditional() {
    assert_eq!(
        parse_assign_value("a = b ? 1 ! 0"),
        Expr::Conditional {
            condition: Box::new(Expr::Identifier("b".to_string())),
            then_branch: Box::new(Expr::Integer("1".to_string())),
            else_branch: Box::new(Expr::Integer("0".to_string())),
        }
    );
}

#[test]
fn test_conditional_nests_rightward() {
    assert_eq!(
        parse_assign_value("a = x ? 1 ! y ? 2 ! 3"),
        Expr::Conditional {
            condition: Box::new(Expr::Identifier("x".to_string())),
            then_branch: Box::new(Expr::Integer("1".to_string())),
            else_branch: Box::new(Expr::Conditional {
                condition: Box::new(Expr::Identifier("y".to_string())),
                then_branch: Box::new(Expr::Integer("2".to_string())),
                else_branch: Box::new(Expr::Integer("3".to_string())),
            }),
        }
    );
}

#[test]
fn test_conditional_binds_below_logical() {
    assert_eq!(
        parse_assign_value("a = x || y ? 1 ! 0"),
        Expr::Conditional {
            condition: Box::new(Expr::Logical {
                op: "||".to_string(),
                left: Box::new(Expr::Identifier("x".to_string())),
                right: Box::new(Expr::Identifier("y".to_string())),
            }),
            then_branch: Box::new(Expr::Integer("1".to_string())),
            else_branch: Box::new(Expr::Integer("0".to_string())),
        }
    );
}

#[test]
fn test_parse_prefix_unary() {
    assert_eq!(
        parse_assign_value("a = ++b"),
        Expr::Unary {
            op: "++".to_string(),
            operand: "b".to_string()
        }
    );
    assert_eq!(
        parse_assign_value("a = --b"),
        Expr::Unary {
            op: "--".to_string(),
            operand: "b".to_string()
        }
    );
}

#[test]
fn test_prefix_unary_requires_identifier() {
    let result = parse_program("a = ++1".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_member_access_chains_left() {
    assert_eq!(
        parse_assign_value("a = b.c.d"),
        Expr::Access {
            left: Box::new(Expr::Access {
                left: Box::new(Expr::Identifier("b".to_string())),
                right: Box::new(Expr::Identifier("c".to_string())),
            }),
            right: Box::new(Expr::Identifier("d".to_string())),
        }
    );
}

#[test]
fn test_member_access_with_call_leaf() {
    assert_eq!(
        parse_assign_value("a = b.c()"),
        Expr::Access {
            left: Box::new(Expr::Identifier("b".to_string())),
            right: Box::new(Expr::Call {
                name: "c".to_string(),
                args: vec![]
            }),
        }
    );
}

#[test]
fn test_parse_cast() {
    assert_eq!(
        parse_assign_value("a = (int) b"),
        Expr::Cast {
            ty: Type::Int,
            operand: Box::new(Expr::Identifier("b".to_string())),
        }
    );
}

#[test]
fn test_cast_of_array_type() {
    assert_eq!(
        parse_assign_value("a = (int[]) b"),
        Expr::Cast {
            ty: Type::Array(Box::new(Type::Int)),
            operand: Box::new(Expr::Identifier("b".to_string())),
        }
    );
}

#[test]
fn test_cast_binds_tighter_than_addition() {
    assert_eq!(
        parse_assign_value("a = (int) b + 1"),
        Expr::Binary {
            op: "+".to_string(),
            left: Box::new(Expr::Cast {
                ty: Type::Int,
                operand: Box::new(Expr::Identifier("b".to_string())),
            }),
            right: Box::new(Expr::Integer("1".to_string())),
        }
    );
}

#[test]
fn test_grouping_overrides_precedence() {
    assert_eq!(
        parse_assign_value("a = (1 + 2) * 3"),
        Expr::Binary {
            op: "*".to_string(),
            left: Box::new(Expr::Binary {
                op: "+".to_string(),
                left: Box::new(Expr::Integer("1".to_string())),
                right: Box::new(Expr::Integer("2".to_string())),
            }),
            right: Box::new(Expr::Integer("3".to_string())),
        }
    );
}

#[test]
fn test_parse_call_with_args() {
    assert_eq!(
        parse_assign_value("a = f(1, g(2), \"s\")"),
        Expr::Call {
            name: "f".to_string(),
            args: vec![
                Expr::Integer("1".to_string()),
                Expr::Call {
                    name: "g".to_string(),
                    args: vec![Expr::Integer("2".to_string())]
                },
                Expr::String("s".to_string()),
            ],
        }
    );
}

#[test]
fn test_parse_enum_declaration() {
    assert_eq!(
        parse_one("enum Color {RED, GREEN, BLUE}"),
        Stmt::EnumDeclare {
            name: "Color".to_string(),
            members: vec![
                "RED".to_string(),
                "GREEN".to_string(),
                "BLUE".to_string()
            ],
        }
    );
}

#[test]
fn test_parse_empty_enum() {
    assert_eq!(
        parse_one("enum Empty {}"),
        Stmt::EnumDeclare {
            name: "Empty".to_string(),
            members: vec![],
        }
    );
}

#[test]
fn test_parse_pass() {
    assert_eq!(parse_one("pass"), Stmt::Pass);
}

#[test]
fn test_parse_return() {
    assert_eq!(parse_one("return"), Stmt::Return(None));
    assert_eq!(
        parse_one("return 1 + 2"),
        Stmt::Return(Some(Expr::Binary {
            op: "+".to_string(),
            left: Box::new(Expr::Integer("1".to_string())),
            right: Box::new(Expr::Integer("2".to_string())),
        }))
    );
}

#[test]
fn test_parse_function_declaration() {
    assert_eq!(
        parse_one("int[] a():\n  int b"),
        Stmt::FuncDeclare {
            return_type: Type::Array(Box::new(Type::Int)),
            name: "a".to_string(),
            params: vec![],
            body: vec![Stmt::Declare {
                ty: Type::Int,
                name: "b".to_string()
            }],
        }
    );
}

#[test]
fn test_parse_function_with_params() {
    assert_eq!(
        parse_one("void f(int a, str b):\n  pass"),
        Stmt::FuncDeclare {
            return_type: Type::Void,
            name: "f".to_string(),
            params: vec![
                Param {
                    ty: Type::Int,
                    name: "a".to_string()
                },
                Param {
                    ty: Type::Str,
                    name: "b".to_string()
                },
            ],
            body: vec![Stmt::Pass],
        }
    );
}

#[test]
fn test_parse_nested_function() {
    assert_eq!(
        parse_one("int f():\n  int g():\n    pass\n  return 1"),
        Stmt::FuncDeclare {
            return_type: Type::Int,
            name: "f".to_string(),
            params: vec![],
            body: vec![
                Stmt::FuncDeclare {
                    return_type: Type::Int,
                    name: "g".to_string(),
                    params: vec![],
                    body: vec![Stmt::Pass],
                },
                Stmt::Return(Some(Expr::Integer("1".to_string()))),
            ],
        }
    );
}

#[test]
fn test_incomplete_declaration_is_a_syntax_error() {
    let error = parse_program("int".to_string(), Some("test.lang".to_string())).unwrap_err();
    assert_eq!(error.category(), ErrorCategory::Syntax);
}

#[test]
fn test_empty_block_is_a_syntax_error() {
    let result = parse_program("int a():\n".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_empty_program_is_a_syntax_error() {
    let error = parse_program("".to_string(), Some("test.lang".to_string())).unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_missing_assignment_rhs_is_a_syntax_error() {
    let result = parse_program("a = ".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_reserved_class_keyword_has_no_production() {
    let result = parse_program("class Foo".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_arrow_has_no_production() {
    let result = parse_program("a => b".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_bare_expression_is_not_a_statement() {
    let result = parse_program("f(1)\n".to_string(), Some("test.lang".to_string()));
    assert!(result.is_err());
}
