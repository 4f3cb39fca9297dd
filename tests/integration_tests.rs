//! Integration tests for the front end.
//!
//! These tests drive the complete pipeline from source text through
//! tokenization and parsing to the finished syntax tree, and check the
//! debug printer's rendering of it.

use vsharp::{
    ast::{
        ast::Node,
        printer::render_ast,
        types::{LiteralValue, PrimitiveType},
    },
    lexer::lexer::tokenize,
    parser::parser::parse,
};

fn parse_source(source: &str) -> Result<Node, vsharp::errors::errors::Error> {
    let stream = tokenize(source.to_string(), Some("test.vs".to_string()))?;
    parse(stream)
}

#[test]
fn test_parse_whole_program() {
    let source = r#"
        var total : int64 = 0

        public static add(int32 [a, b]) int32 {
            return a + b;
        }
    "#;

    let ast = parse_source(source).unwrap();
    let items = match ast {
        Node::Block { children } => children,
        other => panic!("expected a block root, got {:?}", other),
    };

    assert_eq!(items.len(), 2);
    assert!(matches!(items[0], Node::VarDecl { .. }));
    assert!(matches!(items[1], Node::FunctionDecl { .. }));
}

#[test]
fn test_function_body_shape() {
    let ast = parse_source("public static foo(int32 [a, b]) int32 { return a; }").unwrap();

    let items = match ast {
        Node::Block { children } => children,
        other => panic!("expected a block root, got {:?}", other),
    };

    match &items[0] {
        Node::FunctionDecl {
            modifiers,
            name,
            params,
            return_type,
            body,
        } => {
            assert_eq!(modifiers, &vec!["public".to_string(), "static".to_string()]);
            assert_eq!(name, "foo");
            assert_eq!(
                params,
                &vec![
                    (PrimitiveType::Int32, "a".to_string()),
                    (PrimitiveType::Int32, "b".to_string()),
                ]
            );
            assert_eq!(*return_type, PrimitiveType::Int32);
            assert_eq!(
                **body,
                Node::Block {
                    children: vec![Node::Return {
                        value: Box::new(Node::Identifier {
                            name: "a".to_string()
                        }),
                    }],
                }
            );
        }
        other => panic!("expected a function declaration, got {:?}", other),
    }
}

#[test]
fn test_else_if_chains_nest_into_else_branch() {
    let ast = parse_source("if a { } else if b { } else if c { } else { }").unwrap();

    let items = match ast {
        Node::Block { children } => children,
        other => panic!("expected a block root, got {:?}", other),
    };

    let mut depth = 0;
    let mut current = &items[0];
    loop {
        match current {
            Node::If { else_branch, .. } => match else_branch.as_deref() {
                Some(next @ Node::If { .. }) => {
                    depth += 1;
                    current = next;
                }
                Some(Node::Block { .. }) => break,
                other => panic!("unexpected else branch {:?}", other),
            },
            other => panic!("expected an if expression, got {:?}", other),
        }
    }

    // Three ifs total: the outer one plus two chained through else.
    assert_eq!(depth, 2);
}

#[test]
fn test_first_error_aborts_the_parse() {
    // Line 2 is valid; the parse never reaches it.
    let result = parse_source("var broken : = 1\nvar fine : int32 = 2");

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert_eq!(error.get_error_name(), "ExpectedType");
    assert_eq!(error.get_position().0, 1);
}

#[test]
fn test_lex_error_propagates_through_parse() {
    let result = parse_source("var x : int32 = ~");

    assert!(result.is_err());
    assert!(result.err().unwrap().is_lex_error());
}

#[test]
fn test_printer_renders_expression_tree() {
    let ast = parse_source("1 + 2 * 3").unwrap();
    let rendered = render_ast(&ast);

    let expected = "\
Block
  BinaryExpr(+)
    Literal(1)
    BinaryExpr(*)
      Literal(2)
      Literal(3)
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_printer_renders_function() {
    let ast = parse_source("public foo(byte c) boolean { return true; }").unwrap();
    let rendered = render_ast(&ast);

    let expected = "\
Block
  FunctionDecl(public foo) -> boolean
    Params:
      byte c
    Body:
      Block
        ReturnExpr
          Literal(true)
";
    assert_eq!(rendered, expected);
}

#[test]
fn test_printer_escapes_byte_literals() {
    let ast = parse_source(r"'\n'").unwrap();
    let rendered = render_ast(&ast);

    assert_eq!(rendered, "Block\n  Literal('\\n')\n");
}

#[test]
fn test_byte_literal_values_round_into_tree() {
    let ast = parse_source(r"'\n' '\\' '\''").unwrap();

    let items = match ast {
        Node::Block { children } => children,
        other => panic!("expected a block root, got {:?}", other),
    };

    assert_eq!(
        items,
        vec![
            Node::literal(LiteralValue::Byte('\n')),
            Node::literal(LiteralValue::Byte('\\')),
            Node::literal(LiteralValue::Byte('\'')),
        ]
    );
}

#[test]
fn test_multi_line_program_reports_correct_lines() {
    let source = "var a : int32 = 1\nvar b : int32 = 2\nvar c : int32 = @";
    let result = parse_source(source);

    assert!(result.is_err());
    let error = result.err().unwrap();
    assert!(error.is_lex_error());
    assert_eq!(error.get_position().0, 3);
}
