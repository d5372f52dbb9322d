mod common;

#[cfg(test)]
mod lox_tests {
    use pretty_assertions::assert_eq;

    use crate::common::{run, session};

    #[test]
    fn test_lox_01_clean_run_exits_zero() {
        let (mut lox, out) = session();
        lox.run("print \"hi\";");

        assert_eq!(out.lines(), vec!["hi"]);
        assert!(!lox.had_error());
        assert!(!lox.had_runtime_error());
        assert_eq!(lox.exit_code(), 0);
    }

    #[test]
    fn test_lox_02_syntax_error_suppresses_execution() {
        let (mut lox, out) = session();
        lox.run("print \"first\";\nprint ;\nprint \"last\";");

        assert!(out.lines().is_empty());
        assert_eq!(
            lox.reporter().errors,
            vec!["[line 2] Error at ';': Expect expression."]
        );
        assert_eq!(lox.exit_code(), 65);
    }

    #[test]
    fn test_lox_03_every_independent_error_is_reported() {
        let (_, errors, _) = run("var a = @;\nprint (1;\nvar = 3;");

        assert_eq!(
            errors,
            vec![
                "[line 1] Error: Unexpected character: @",
                "[line 1] Error at ';': Expect expression.",
                "[line 2] Error at ';': Expect ')' after expression.",
                "[line 3] Error at '=': Expect variable name.",
            ]
        );
    }

    #[test]
    fn test_lox_04_resolve_error_suppresses_execution() {
        let (lines, errors, runtime_errors) = run("print \"never\";\nreturn;");

        assert!(lines.is_empty());
        assert_eq!(
            errors,
            vec!["[line 2] Error at 'return': Can't return from top-level code."]
        );
        assert!(runtime_errors.is_empty());
    }

    #[test]
    fn test_lox_05_runtime_error_exit_code() {
        let (mut lox, out) = session();
        lox.run("print 1;\nprint -nil;\nprint 2;");

        assert_eq!(out.lines(), vec!["1"]);
        assert_eq!(
            lox.reporter().runtime_errors,
            vec!["Operand must be a number.\n[line 2]"]
        );
        assert!(lox.had_runtime_error());
        assert_eq!(lox.exit_code(), 70);
    }

    #[test]
    fn test_lox_06_globals_persist_across_runs() {
        let (mut lox, out) = session();

        lox.run("var greeting = \"hello\";");
        lox.run("fun greet(name) { return greeting + \", \" + name; }");
        lox.run("print greet(\"world\");");

        assert_eq!(out.lines(), vec!["hello, world"]);
    }

    #[test]
    fn test_lox_07_closures_survive_across_runs() {
        let (mut lox, out) = session();

        lox.run("fun make() { var n = 0; fun inc() { n = n + 1; return n; } return inc; } var c = make();");
        lox.run("{ var shadow = 1; print c(); }");
        lox.run("print c();");

        assert_eq!(out.lines(), vec!["1", "2"]);
    }

    #[test]
    fn test_lox_08_reset_error_lets_the_next_line_run() {
        let (mut lox, out) = session();

        lox.run("print ;");
        assert!(lox.had_error());

        lox.reset_error();
        lox.run("print \"recovered\";");

        assert_eq!(out.lines(), vec!["recovered"]);
        assert!(!lox.had_error());
        assert_eq!(lox.exit_code(), 0);
    }
}
