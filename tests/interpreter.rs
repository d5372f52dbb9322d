mod common;

#[cfg(test)]
mod interpreter_tests {
    use pretty_assertions::assert_eq;

    use crate::common::run;

    /// Runs a program that must not report anything and returns its output.
    fn output(source: &str) -> Vec<String> {
        let (lines, errors, runtime_errors) = run(source);
        assert!(errors.is_empty(), "unexpected static errors: {:?}", errors);
        assert!(
            runtime_errors.is_empty(),
            "unexpected runtime errors: {:?}",
            runtime_errors
        );
        lines
    }

    /// Runs a program expected to fail at runtime; returns output printed
    /// before the failure and the runtime error.
    fn runtime_failure(source: &str) -> (Vec<String>, String) {
        let (lines, errors, mut runtime_errors) = run(source);
        assert!(errors.is_empty(), "unexpected static errors: {:?}", errors);
        assert_eq!(runtime_errors.len(), 1);
        (lines, runtime_errors.remove(0))
    }

    #[test]
    fn test_interpreter_01_arithmetic_and_precedence() {
        assert_eq!(
            output("print 1 + 2 * 3; print (1 + 2) * 3; print 10 / 4; print -(3 - 5); print 7 - 2 - 1;"),
            vec!["7", "9", "2.5", "2", "4"]
        );
    }

    #[test]
    fn test_interpreter_02_strings_concatenate() {
        assert_eq!(output("print \"foo\" + \"bar\";"), vec!["foobar"]);
    }

    #[test]
    fn test_interpreter_03_truthiness_and_equality() {
        assert_eq!(
            output(
                "print !nil; print !0; print !\"\"; print nil == nil; print 1 == \"1\"; \
                 print \"a\" == \"a\"; print 2 != 3; print true == true;"
            ),
            vec!["true", "false", "false", "true", "false", "true", "true", "true"]
        );
    }

    #[test]
    fn test_interpreter_04_comparisons() {
        assert_eq!(
            output("print 1 < 2; print 2 <= 2; print 3 > 4; print 4 >= 5;"),
            vec!["true", "true", "false", "false"]
        );
    }

    #[test]
    fn test_interpreter_05_logical_operators_short_circuit() {
        let source = "var called = false;\n\
                      fun touch() { called = true; return true; }\n\
                      print false and touch();\n\
                      print called;\n\
                      print 1 or touch();\n\
                      print called;\n\
                      print nil or \"fallback\";\n\
                      print true and touch();\n\
                      print called;";

        assert_eq!(
            output(source),
            vec!["false", "false", "1", "false", "fallback", "true", "true"]
        );
    }

    #[test]
    fn test_interpreter_06_division_by_zero_is_ieee() {
        assert_eq!(output("print 1 / 0; print -1 / 0;"), vec!["inf", "-inf"]);
    }

    #[test]
    fn test_interpreter_07_block_scoping_and_shadowing() {
        let source = "var a = \"global\";\n\
                      {\n\
                        var a = \"outer\";\n\
                        {\n\
                          var a = \"inner\";\n\
                          print a;\n\
                        }\n\
                        print a;\n\
                      }\n\
                      print a;";

        assert_eq!(output(source), vec!["inner", "outer", "global"]);
    }

    #[test]
    fn test_interpreter_08_lexical_scope_ignores_later_shadowing() {
        let source = "var a = \"global\";\n\
                      {\n\
                        fun show() { print a; }\n\
                        show();\n\
                        var a = \"block\";\n\
                        show();\n\
                      }";

        assert_eq!(output(source), vec!["global", "global"]);
    }

    #[test]
    fn test_interpreter_09_control_flow() {
        let source = "var i = 0; while (i < 3) { print i; i = i + 1; }\n\
                      for (var j = 0; j < 2; j = j + 1) print j * 10;\n\
                      if (i == 3) print \"yes\"; else print \"no\";\n\
                      if (nil) print \"never\";";

        assert_eq!(output(source), vec!["0", "1", "2", "0", "10", "yes"]);
    }

    #[test]
    fn test_interpreter_10_recursive_fibonacci() {
        let source = "fun fib(n) { if (n < 2) return n; return fib(n-1) + fib(n-2); } print fib(10);";
        assert_eq!(output(source), vec!["55"]);
    }

    #[test]
    fn test_interpreter_11_closures_keep_their_environment() {
        let source = "fun makeCounter() {\n\
                        var count = 0;\n\
                        fun counter() { count = count + 1; return count; }\n\
                        return counter;\n\
                      }\n\
                      var a = makeCounter();\n\
                      var b = makeCounter();\n\
                      print a(); print a(); print b(); print a();";

        assert_eq!(output(source), vec!["1", "2", "1", "3"]);
    }

    #[test]
    fn test_interpreter_12_return_unwinds_out_of_loops() {
        let source = "fun first() { for (var i = 0; ; i = i + 1) { if (i == 4) return i; } }\n\
                      print first();\n\
                      fun nothing() { return; }\n\
                      print nothing();\n\
                      fun implicit() {}\n\
                      print implicit();";

        assert_eq!(output(source), vec!["4", "nil", "nil"]);
    }

    #[test]
    fn test_interpreter_13_scope_restored_after_return() {
        let source = "var x = \"global\";\n\
                      fun f() { var x = \"local\"; { return x; } }\n\
                      print f();\n\
                      print x;";

        assert_eq!(output(source), vec!["local", "global"]);
    }

    #[test]
    fn test_interpreter_14_stringification() {
        let source = "fun f() {} class K {} print f; print clock; print K; print K(); print nil; print 3.0;";

        assert_eq!(
            output(source),
            vec!["<fn f>", "<native fn>", "K", "K instance", "nil", "3"]
        );
    }

    #[test]
    fn test_interpreter_15_clock_returns_a_number() {
        assert_eq!(output("print clock() > 0;"), vec!["true"]);
    }

    #[test]
    fn test_interpreter_16_class_initializer_and_methods() {
        let source = "class Cake { init(flavor) { this.flavor = flavor; } taste() { print \"The \" + this.flavor + \" cake is delicious!\"; } } Cake(\"German chocolate\").taste();";

        assert_eq!(
            output(source),
            vec!["The German chocolate cake is delicious!"]
        );
    }

    #[test]
    fn test_interpreter_17_fields_shadow_methods_and_methods_bind_this() {
        let source = "class Box { get() { return this.v; } }\n\
                      var b = Box();\n\
                      b.v = 1;\n\
                      var m = b.get;\n\
                      b.v = 2;\n\
                      print m();\n\
                      b.get = \"field\";\n\
                      print b.get;";

        assert_eq!(output(source), vec!["2", "field"]);
    }

    #[test]
    fn test_interpreter_18_initializer_returns_instance() {
        let source = "class P { init() { this.x = 1; return; } }\n\
                      var p = P();\n\
                      print p.init();\n\
                      print p.x;";

        assert_eq!(output(source), vec!["P instance", "1"]);
    }

    #[test]
    fn test_interpreter_19_super_dispatch_is_static() {
        let source = "class A { f() { return \"A\"; } } class B < A { f() { return super.f() + \"B\"; } } print B().f();";
        assert_eq!(output(source), vec!["AB"]);

        // `super` inside B's method means A even when the receiver is a C.
        let source = "class A { m() { return \"A\"; } }\n\
                      class B < A { m() { return \"B\" + super.m(); } }\n\
                      class C < B {}\n\
                      print C().m();";
        assert_eq!(output(source), vec!["BA"]);
    }

    #[test]
    fn test_interpreter_20_inherited_initializer_sets_arity() {
        let source = "class A { init(x) { this.x = x; } }\n\
                      class B < A {}\n\
                      print B(5).x;";

        assert_eq!(output(source), vec!["5"]);
    }

    #[test]
    fn test_interpreter_21_wrong_arity_halts_program() {
        let (lines, error) = runtime_failure("fun f(a, b) {}\nprint \"before\";\nf(1);\nprint \"after\";");

        assert_eq!(lines, vec!["before"]);
        assert_eq!(error, "Expected 2 arguments but got 1.\n[line 3]");
    }

    #[test]
    fn test_interpreter_22_operand_type_errors() {
        assert_eq!(runtime_failure("print -\"a\";").1, "Operand must be a number.\n[line 1]");
        assert_eq!(runtime_failure("print 1 < \"a\";").1, "Operands must be numbers.\n[line 1]");
        assert_eq!(
            runtime_failure("print 1 + \"a\";").1,
            "Operands must be two numbers or two strings.\n[line 1]"
        );
    }

    #[test]
    fn test_interpreter_23_undefined_names() {
        assert_eq!(runtime_failure("print nope;").1, "Undefined variable 'nope'.\n[line 1]");
        assert_eq!(runtime_failure("nope = 1;").1, "Undefined variable 'nope'.\n[line 1]");
        assert_eq!(
            runtime_failure("class A {} print A().missing;").1,
            "Undefined property 'missing'.\n[line 1]"
        );
    }

    #[test]
    fn test_interpreter_24_object_errors() {
        assert_eq!(
            runtime_failure("\"str\"();").1,
            "Can only call functions and classes.\n[line 1]"
        );
        assert_eq!(
            runtime_failure("var x = 1; print x.y;").1,
            "Only instances have properties.\n[line 1]"
        );
        assert_eq!(
            runtime_failure("var x = 1; x.y = 2;").1,
            "Only instances have fields.\n[line 1]"
        );
        assert_eq!(
            runtime_failure("var NotAClass = 1; class B < NotAClass {}").1,
            "Superclass must be a class.\n[line 1]"
        );
    }

    #[test]
    fn test_interpreter_25_error_in_nested_call_aborts_run() {
        let (lines, error) = runtime_failure(
            "fun inner() { return nil + 1; }\nfun outer() { { inner(); } }\nprint \"go\";\nouter();",
        );

        assert_eq!(lines, vec!["go"]);
        assert_eq!(error, "Operands must be two numbers or two strings.\n[line 1]");
    }

    #[test]
    fn test_interpreter_26_deterministic_reruns() {
        let source = "var s = \"\"; for (var i = 0; i < 5; i = i + 1) s = s + \"x\"; print s;";
        assert_eq!(output(source), output(source));
    }

    #[test]
    fn test_interpreter_27_huge_numbers_print_in_exponent_form() {
        assert_eq!(
            output("print 1000000000000000000000 * 1000000000; print 100000000000000000000;"),
            vec!["1e30", "100000000000000000000"]
        );
    }
}
