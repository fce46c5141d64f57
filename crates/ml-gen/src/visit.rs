//! Walks an analyzed program and drives a [`Sink`] through it, in the fixed
//! section order: argument indices, globals, functions, then `main`.

use crate::sink::Sink;
use ml_sem::{Analyzer, PlainToken, SymbolTable, TokenEntry, Usage};

pub fn accept(an: &Analyzer, sink: &mut dyn Sink) {
    if !an.arg_indexes.is_empty() {
        sink.arg_section_start();
        for &index in &an.arg_indexes {
            sink.arg_visit_index(index);
        }
        sink.arg_section_end();
    }

    let globals: Vec<&str> = an
        .symbols
        .iter_sorted()
        .filter(|(_, _, usage)| *usage == Usage::GlobalVar)
        .map(|(_, name, _)| name)
        .collect();
    if !globals.is_empty() {
        sink.global_section_start();
        for name in &globals {
            sink.global_visit_var(name);
        }
        sink.global_section_end();
    }

    if !an.functions.is_empty() {
        sink.sub_func_section_start();
        let count = an.functions.len();
        for (i, fid) in an.functions.indices().enumerate() {
            let f = &an.functions[fid];
            let name = an.symbols.name(f.name);
            let params: Vec<&str> = an.param_offsets[f.params.clone()]
                .iter()
                .map(|&pid| an.symbols.name(pid))
                .collect();
            let is_last = i + 1 == count;
            sink.sub_func_visit_start(name, &params, f.has_return, is_last);
            walk_statements(&an.tokens_sub[f.body.clone()], &an.symbols, sink);
            sink.sub_func_visit_end(f.has_return, is_last);
        }
        sink.sub_func_section_end();
    }

    sink.main_section_start();
    for &index in &an.arg_indexes {
        sink.main_visit_arg(index);
    }
    walk_statements(&an.tokens_main, &an.symbols, sink);
    sink.main_section_end();
}

fn walk_statements(entries: &[TokenEntry], symbols: &SymbolTable, sink: &mut dyn Sink) {
    let mut i = 0;
    while i < entries.len() {
        sink.statement_start();

        let is_print = matches!(entries[i], TokenEntry::Plain(PlainToken::Print));
        if is_print {
            sink.statement_visit_print_start();
            i += 1;
        }

        loop {
            match &entries[i] {
                TokenEntry::Terminator => {
                    i += 1;
                    break;
                }
                TokenEntry::Number(value) => sink.visit_number(*value),
                TokenEntry::Argument(index) => sink.visit_arg(*index),
                TokenEntry::Symbol(id) => sink.visit_symbol(symbols.name(*id)),
                TokenEntry::Plain(tok) => sink.visit_token(*tok),
            }
            i += 1;
        }

        if is_print {
            sink.statement_visit_print_end();
        }
        sink.statement_end();
    }
}
