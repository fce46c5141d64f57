//! The visitor interface the walk in [`crate::visit::accept`] drives. A sink
//! doesn't see the program's data structures at all, only this sequence of
//! calls — the same shape the LLVM builder API takes one IR instruction at a
//! time, here aimed at a text backend instead.

use ml_sem::PlainToken;

pub trait Sink {
    fn arg_section_start(&mut self) {}
    fn arg_visit_index(&mut self, index: u32);
    fn arg_section_end(&mut self) {}

    fn global_section_start(&mut self) {}
    fn global_visit_var(&mut self, name: &str);
    fn global_section_end(&mut self) {}

    fn sub_func_section_start(&mut self) {}
    fn sub_func_visit_start(&mut self, name: &str, params: &[&str], has_return: bool, is_last: bool);
    fn sub_func_visit_end(&mut self, has_return: bool, is_last: bool);
    fn sub_func_section_end(&mut self) {}

    fn main_section_start(&mut self) {}
    fn main_visit_arg(&mut self, index: u32);
    fn main_section_end(&mut self) {}

    fn statement_start(&mut self);
    fn statement_end(&mut self);
    fn statement_visit_print_start(&mut self);
    fn statement_visit_print_end(&mut self);

    fn visit_number(&mut self, value: f64);
    fn visit_arg(&mut self, index: u32);
    fn visit_symbol(&mut self, name: &str);
    fn visit_token(&mut self, kind: PlainToken);
}
