use declgen_core::{
    ClassKind, ClassType, EnumType, EnumValue, FunctionType, Param, ProgramGraph, Type,
};
use indexmap::IndexMap;

use super::{Config, InterfaceProjection, PolicyTable, emit_with_config};
use crate::Error;

fn emit(program: &ProgramGraph) -> String {
    emit_with_config(program, program.exports(), Config::new().internal_root("R")).unwrap()
}

fn method(returns: Option<Type>, receiver: &str) -> Type {
    Type::Function(FunctionType::new(vec![], returns).with_receiver(Type::named(receiver)))
}

fn color_enum() -> Type {
    let mut members = IndexMap::new();
    members.insert("RED".to_string(), EnumValue::Number(0.0));
    members.insert("GREEN".to_string(), EnumValue::Number(1.0));
    Type::Enum(EnumType {
        name: "ns.Color".into(),
        element: Box::new(Type::number()),
        members,
    })
}

fn shape_interface() -> ClassType {
    let mut iface = ClassType::new("ns.Shape", ClassKind::Interface);
    iface.interfaces = vec![Type::named("ns.Base")];
    iface.instance = Box::new(Type::record([("id", Type::string())]));
    iface
        .prototype
        .insert("area".into(), method(Some(Type::number()), "ns.Shape"));
    iface.statics.insert(
        "create".into(),
        Type::Function(FunctionType::new(vec![], Some(Type::named("ns.Shape")))),
    );
    iface
}

#[test]
fn ordinary_function() {
    let f = FunctionType::new(
        vec![
            Param::new("x", Type::number()),
            Param::unnamed(Type::string()).optional(),
        ],
        Some(Type::boolean()),
    );
    let program = ProgramGraph::new()
        .define("ns.f", Type::Function(f))
        .export("ns.f");

    insta::assert_snapshot!(emit(&program), @r"
    declare namespace R.ns {
      function f(x: number, b?: string): boolean;
    }
    declare module 'goog:ns.f' {
      import alias = R.ns.f;
      export default alias;
    }
    ");
}

#[test]
fn generic_function_without_return() {
    let f = FunctionType::new(
        vec![
            Param::unnamed(Type::template("T")),
            Param::unnamed(Type::template("T")).variadic(),
        ],
        None,
    )
    .with_type_params(vec!["T".into()]);
    let program = ProgramGraph::new()
        .define("ns.each", Type::Function(f))
        .export("ns.each");

    let out = emit(&program);
    assert!(out.contains("  function each<T>(a: T, ...b: (T)[]): void;\n"));
}

#[test]
fn class_with_all_member_tables() {
    let mut class = ClassType::new("ns.Foo", ClassKind::Constructor);
    class.type_params = vec!["T".into()];
    class.superclass = Some(Box::new(Type::named("ns.Base")));
    class.interfaces = vec![Type::named("other.Iface")];
    class.constructor = vec![Param::new("value", Type::template("T"))];
    class.instance = Box::new(Type::record([
        ("value", Type::template("T")),
        ("constructor", Type::named("ns.Foo")),
    ]));
    class
        .prototype
        .insert("get".into(), method(Some(Type::template("T")), "ns.Foo"));
    class.statics.insert(
        "create".into(),
        Type::Function(FunctionType::new(vec![], Some(Type::named("ns.Foo")))),
    );
    class.statics.insert("Kind".into(), color_enum());
    class
        .statics
        .insert("superClass_".into(), Type::named("ns.Base"));
    class
        .statics
        .insert("prototype".into(), Type::FunctionPrototype("ns.Foo".into()));

    let program = ProgramGraph::new()
        .define("ns.Foo", Type::Class(class))
        .export("ns.Foo");

    insta::assert_snapshot!(emit(&program), @r"
    declare namespace R.ns {
      class Foo<T> extends Base implements other.Iface {
        constructor(value: T);
        value: T;
        get(): T;
        static create(): Foo;
        // skipped static enum Kind
      }
    }
    declare module 'goog:ns.Foo' {
      import alias = R.ns.Foo;
      export default alias;
    }
    ");
}

#[test]
fn empty_class_omits_object_superclass() {
    let mut class = ClassType::new("ns.Empty", ClassKind::Constructor);
    class.superclass = Some(Box::new(Type::named("Object")));
    let program = ProgramGraph::new()
        .define("ns.Empty", Type::Class(class))
        .export("ns.Empty");

    let out = emit(&program);
    assert!(out.contains("  class Empty {}\n"));
}

#[test]
fn class_fields_through_named_instance_type() {
    let mut class = ClassType::new("ns.Point", ClassKind::Constructor);
    class.instance = Box::new(Type::named("ns.Point.Fields"));
    let program = ProgramGraph::new()
        .define("ns.Point", Type::Class(class))
        .define(
            "ns.Point.Fields",
            Type::record([("x", Type::number()), ("y", Type::number())]),
        )
        .export("ns.Point");

    let out = emit(&program);
    assert!(out.contains("  class Point {\n    x: number;\n    y: number;\n  }\n"));
}

#[test]
fn default_interface_is_named() {
    let program = ProgramGraph::new()
        .define("ns.Shape", Type::Class(shape_interface()))
        .export("ns.Shape");

    insta::assert_snapshot!(emit(&program), @r"
    declare namespace R.ns {
      interface Shape extends Base {
        id: string;
        area(): number;
      }
      var Shape: {
        create: () => Shape,
      };
    }
    declare module 'goog:ns.Shape' {
      import alias = R.ns.Shape;
      export default alias;
    }
    ");
}

#[test]
fn inline_interface_policy() {
    let program = ProgramGraph::new()
        .define("ns.Shape", Type::Class(shape_interface()))
        .export("ns.Shape");
    let config = Config::new()
        .internal_root("R")
        .policy(PolicyTable::new().interface(true, InterfaceProjection::Inline));

    let out = emit_with_config(&program, program.exports(), config).unwrap();
    insta::assert_snapshot!(out, @r"
    declare namespace R.ns {
      type Shape = Base & {
        id: string;
        area(): number;
      };
      var Shape: {
        create: () => Shape,
      };
    }
    declare module 'goog:ns.Shape' {
      import alias = R.ns.Shape;
      export default alias;
    }
    ");
}

#[test]
fn enum_declares_alias_and_value_map() {
    let program = ProgramGraph::new()
        .define("ns.Color", color_enum())
        .export("ns.Color");

    insta::assert_snapshot!(emit(&program), @r"
    declare namespace R.ns {
      type Color = number;
      var Color: {
        RED: Color,
        GREEN: Color,
      };
    }
    declare module 'goog:ns.Color' {
      import alias = R.ns.Color;
      export default alias;
    }
    ");
}

#[test]
fn enum_shape_in_global_namespace() {
    let mut members = IndexMap::new();
    members.insert("A".to_string(), EnumValue::Opaque);
    members.insert("B".to_string(), EnumValue::Opaque);
    let e = Type::Enum(EnumType {
        name: "E".into(),
        element: Box::new(Type::number()),
        members,
    });
    let program = ProgramGraph::new().define("E", e).export("E");

    let out = emit(&program);
    assert!(out.contains("  type E = number;\n  var E: {\n    A: E,\n    B: E,\n  };\n"));
}

#[test]
fn type_alias_from_registry() {
    let program = ProgramGraph::new()
        .define("ns.Id", Type::Primitive(declgen_core::Primitive::None))
        .alias("ns.Id", Type::Union(vec![Type::string(), Type::number()]))
        .define("ns.Gone", Type::Primitive(declgen_core::Primitive::None))
        .export("ns.Id")
        .export("ns.Gone");

    let out = emit(&program);
    assert!(out.contains("  type Id = (string | number);\n"));
    assert!(out.contains("  var Gone: any;\n"));
}

#[test]
fn plain_var() {
    let program = ProgramGraph::new()
        .define("ns.VERSION", Type::string())
        .export("ns.VERSION");

    let out = emit(&program);
    assert!(out.contains("  var VERSION: string;\n"));
}

#[test]
fn member_exported_elsewhere_is_not_restated() {
    let mut class = ClassType::new("ns.Foo", ClassKind::Constructor);
    class.statics.insert("bar".into(), Type::number());
    class.statics.insert("qux".into(), Type::string());
    let program = ProgramGraph::new()
        .define("ns.Foo", Type::Class(class))
        .define("ns.Foo.bar", Type::number())
        .export("ns.Foo")
        .export("ns.Foo.bar");

    insta::assert_snapshot!(emit(&program), @r"
    declare namespace R.ns {
      class Foo {
        static qux: string;
      }
    }
    declare module 'goog:ns.Foo' {
      import alias = R.ns.Foo;
      export default alias;
    }
    declare namespace R.ns.Foo {
      var bar: number;
    }
    declare module 'goog:ns.Foo.bar' {
      import alias = R.ns.Foo.bar;
      export default alias;
    }
    ");
}

#[test]
fn instance_and_prototype_members_exported_elsewhere_are_not_restated() {
    let mut class = ClassType::new("ns.Foo", ClassKind::Constructor);
    class.instance = Box::new(Type::record([
        ("size", Type::number()),
        ("label", Type::string()),
    ]));
    class
        .prototype
        .insert("get".into(), method(Some(Type::number()), "ns.Foo"));
    class
        .prototype
        .insert("reset".into(), method(None, "ns.Foo"));
    let program = ProgramGraph::new()
        .define("ns.Foo", Type::Class(class))
        .define("ns.Foo.prototype.get", method(Some(Type::number()), "ns.Foo"))
        .define("ns.Foo.prototype.size", Type::number())
        .export("ns.Foo")
        .export("ns.Foo.prototype.get")
        .export("ns.Foo.prototype.size");

    let out = emit(&program);
    assert!(out.contains("  class Foo {\n    label: string;\n    reset(): void;\n  }\n"));
    assert!(out.contains("declare namespace R.ns.Foo.prototype {\n  function get(): number;\n}\n"));
    assert!(out.contains("declare namespace R.ns.Foo.prototype {\n  var size: number;\n}\n"));
}

#[test]
fn interface_static_enum_is_noted_on_companion_var() {
    let mut iface = shape_interface();
    iface.statics.insert("Kind".into(), color_enum());
    let program = ProgramGraph::new()
        .define("ns.Shape", Type::Class(iface))
        .export("ns.Shape");

    let out = emit(&program);
    assert!(out.contains(
        "  var Shape: {\n    create: () => Shape,\n    // skipped static enum Kind\n  };\n"
    ));
}

#[test]
fn custom_excluded_member() {
    let mut class = ClassType::new("ns.Foo", ClassKind::Constructor);
    class.instance = Box::new(Type::record([
        ("cache_", Type::unknown()),
        ("size", Type::number()),
    ]));
    let program = ProgramGraph::new()
        .define("ns.Foo", Type::Class(class))
        .export("ns.Foo");
    let config = Config::new().internal_root("R").exclude_member("cache_");

    let out = emit_with_config(&program, program.exports(), config).unwrap();
    assert!(!out.contains("cache_"));
    assert!(out.contains("    size: number;\n"));
}

#[test]
fn non_object_this_type_fails() {
    let mut class = ClassType::new("ns.Bad", ClassKind::Constructor);
    class.instance = Box::new(Type::number());
    let program = ProgramGraph::new()
        .define("ns.Bad", Type::Class(class))
        .export("ns.Bad");

    let err = emit_with_config(&program, program.exports(), Config::new()).unwrap_err();
    assert_eq!(
        err,
        Error::ThisNotObject {
            symbol: "ns.Bad".into(),
            found: "number".into(),
        }
    );
}
