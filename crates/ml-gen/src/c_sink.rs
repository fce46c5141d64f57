//! Renders the event stream from [`crate::visit::accept`] into a standalone,
//! C99-and-later, standard-library-only C source file.

use crate::hexfloat::format_hex_float;
use crate::sink::Sink;
use ml_sem::PlainToken;

const PRELUDE: &str = r#"#include <stdio.h>
#include <stdlib.h>
#include <math.h>

static void ml_print(double value) {
    double whole;
    double frac = modf(value, &whole);
    if (frac != 0.0) {
        printf("%.6f\n", value);
    } else {
        printf("%.0f\n", value);
    }
}

static double ml_parse_arg(int index, char **argv, int argc) {
    if (index + 1 >= argc) {
        return 0;
    }
    return atof(argv[index + 1]);
}

"#;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Target {
    None,
    FuncBody,
    Main,
}

/// Builds the emitted program incrementally as [`Sink`] calls arrive. Each
/// section writes into its own buffer so that, regardless of visit order,
/// the final program assembles them in the fixed layout C requires
/// (declarations before `main`).
pub struct CSink {
    globals: String,
    functions: String,
    main_body: String,

    func_body: String,
    func_name: String,
    func_params: Vec<String>,

    stmt: String,
    stmt_is_print: bool,
    target: Target,
}

impl CSink {
    pub fn new() -> Self {
        Self {
            globals: String::new(),
            functions: String::new(),
            main_body: String::new(),
            func_body: String::new(),
            func_name: String::new(),
            func_params: Vec::new(),
            stmt: String::new(),
            stmt_is_print: false,
            target: Target::None,
        }
    }

    fn active_buffer(&mut self) -> &mut String {
        match self.target {
            Target::FuncBody => &mut self.func_body,
            Target::Main | Target::None => &mut self.main_body,
        }
    }

    /// Consumes the sink and assembles the full C source. The `main`
    /// wrapper text itself is written by `main_section_start`/
    /// `main_section_end`, not here; this just orders the section buffers.
    pub fn finish(self) -> String {
        let mut out = String::with_capacity(
            PRELUDE.len() + self.globals.len() + self.functions.len() + self.main_body.len() + 64,
        );
        out.push_str(PRELUDE);
        out.push_str(&self.globals);
        if !self.globals.is_empty() {
            out.push('\n');
        }
        out.push_str(&self.functions);
        out.push_str(&self.main_body);
        out
    }
}

impl Default for CSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for CSink {
    fn arg_visit_index(&mut self, index: u32) {
        self.globals
            .push_str(&format!("static double ml_arg{index} = 0;\n"));
    }

    fn global_visit_var(&mut self, name: &str) {
        self.globals.push_str(&format!("static double {name} = 0;\n"));
    }

    fn sub_func_visit_start(&mut self, name: &str, params: &[&str], _has_return: bool, _is_last: bool) {
        self.target = Target::FuncBody;
        self.func_body.clear();
        self.func_name = name.to_string();
        self.func_params = params.iter().map(|p| p.to_string()).collect();
    }

    fn sub_func_visit_end(&mut self, has_return: bool, _is_last: bool) {
        if !has_return {
            self.func_body.push_str("    return 0;\n");
        }
        let params = self
            .func_params
            .iter()
            .map(|p| format!("double {p}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.functions.push_str(&format!(
            "static double {}({}) {{\n{}}}\n\n",
            self.func_name, params, self.func_body
        ));
        self.target = Target::None;
    }

    fn main_section_start(&mut self) {
        self.target = Target::Main;
        self.main_body
            .push_str("int main(int ml_argc, char **ml_argv) {\n");
    }

    fn main_visit_arg(&mut self, index: u32) {
        self.main_body.push_str(&format!(
            "    ml_arg{index} = ml_parse_arg({index}, ml_argv, ml_argc);\n"
        ));
    }

    fn main_section_end(&mut self) {
        self.main_body.push_str("    return EXIT_SUCCESS;\n}\n");
    }

    fn statement_start(&mut self) {
        self.stmt.clear();
        self.stmt_is_print = false;
    }

    fn statement_end(&mut self) {
        let line = if self.stmt_is_print {
            format!("    ml_print({});\n", self.stmt)
        } else {
            format!("    {};\n", self.stmt)
        };
        self.active_buffer().push_str(&line);
    }

    fn statement_visit_print_start(&mut self) {
        self.stmt_is_print = true;
    }

    fn statement_visit_print_end(&mut self) {}

    fn visit_number(&mut self, value: f64) {
        self.stmt.push_str(&format_hex_float(value));
    }

    fn visit_arg(&mut self, index: u32) {
        self.stmt.push_str(&format!("ml_arg{index}"));
    }

    fn visit_symbol(&mut self, name: &str) {
        self.stmt.push_str(name);
    }

    fn visit_token(&mut self, kind: PlainToken) {
        self.stmt.push_str(match kind {
            PlainToken::Print => "",
            PlainToken::Return => "return ",
            PlainToken::Assign => " = ",
            PlainToken::Plus => " + ",
            PlainToken::Minus => " - ",
            PlainToken::Star => " * ",
            PlainToken::Slash => " / ",
            PlainToken::Comma => ", ",
            PlainToken::LParen => "(",
            PlainToken::RParen => ")",
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visit::accept;
    use ml_lex::Lexer;
    use ml_sem::Analyzer;
    use std::io::Cursor;

    fn emit(src: &str) -> String {
        let mut lexer = Lexer::new(Cursor::new(src.as_bytes().to_vec()));
        let an = Analyzer::new().analyze(&mut lexer).unwrap();
        let mut sink = CSink::new();
        accept(&an, &mut sink);
        sink.finish()
    }

    #[test]
    fn emits_prelude_and_main() {
        let c = emit("x <- 1\n");
        assert!(c.contains("#include <stdio.h>"));
        assert!(c.contains("int main(int ml_argc, char **ml_argv) {"));
        assert!(c.contains("return EXIT_SUCCESS;"));
    }

    #[test]
    fn assignment_and_print_round_trip_in_text() {
        let c = emit("x <- 2.5\nprint x\n");
        assert!(c.contains("static double x = 0;"));
        assert!(c.contains("x = 0x1.4p+1;"));
        assert!(c.contains("ml_print(x);"));
    }

    #[test]
    fn function_without_return_gets_implicit_zero() {
        let c = emit("function printsum a b\n\tprint a + b\nprintsum (12, 6)\n");
        assert!(c.contains("static double printsum(double a, double b) {"));
        assert!(c.contains("ml_print(a + b);"));
        assert!(c.contains("return 0;"));
        assert!(c.contains(&format!(
            "printsum({}, {});",
            format_hex_float(12.0),
            format_hex_float(6.0)
        )));
    }

    #[test]
    fn function_with_return_has_no_implicit_zero_appended_twice() {
        let c = emit("function multiply a b\n\treturn a * b\nprint multiply(12, 6)\n");
        let body_start = c.find("static double multiply").unwrap();
        let body = &c[body_start..];
        let body_end = body.find("}\n").unwrap();
        assert_eq!(body[..body_end].matches("return").count(), 1);
    }

    #[test]
    fn argument_reference_uses_ml_arg_prefix() {
        let c = emit("print arg2 + 1\n");
        assert!(c.contains("static double ml_arg2 = 0;"));
        assert!(c.contains("ml_arg2 = ml_parse_arg(2, ml_argv, ml_argc);"));
        assert!(c.contains("ml_print(ml_arg2 + "));
    }
}
