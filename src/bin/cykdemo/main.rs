/*
    MIT License

    Copyright (c) 2020 Lars Krueger <lars_e_krueger@gmx.de>

    Permission is hereby granted, free of charge, to any person obtaining a copy
    of this software and associated documentation files (the "Software"), to deal
    in the Software without restriction, including without limitation the rights
    to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
    copies of the Software, and to permit persons to whom the Software is
    furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in all
    copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
    OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
    SOFTWARE.
*/

//! Demo: parse a line of text against a small built-in `term`/`expr`
//! grammar and print what the engine found. Not a general-purpose tool —
//! see `cykparse::tokenizer` for the limits of the reference tokenizer.

#[macro_use]
extern crate log;
extern crate flexi_logger;

use std::io::{self, Read};

use structopt::StructOpt;

use cykparse::tokenizer::tokenize;
use cykparse::{Grammar, IntoRhsSymbol, Specifier};

#[derive(Debug, StructOpt)]
#[structopt(name = "cykdemo", about = "CYK grammar/forest parser demo")]
struct CommandLine {
    /// Text to parse. Reads a line from stdin if omitted.
    #[structopt(long)]
    input: Option<String>,

    /// flexi_logger spec, e.g. "debug" or "trace". Off by default.
    #[structopt(long)]
    log: Option<String>,
}

/// The `term`/`expr` demo grammar from the scenario walkthroughs:
/// `term -> sym`, `expr -> term`, `expr -> expr Keyword("plus") term`.
fn demo_grammar() -> Grammar {
    let mut g = Grammar::new();
    g.add_terminal("sym");
    g.add_rule("term", vec!["sym"]).expect("term rule");
    g.add_rule("expr", vec!["term"]).expect("expr -> term");
    g.add_rule(
        "expr",
        vec![
            "expr".into_rhs_symbol(),
            Specifier::Keyword("plus".to_string()).into_rhs_symbol(),
            "term".into_rhs_symbol(),
        ],
    )
    .expect("expr -> expr plus term");
    g
}

fn main() {
    let cmd_line = CommandLine::from_args();

    if let Some(spec) = &cmd_line.log {
        let _ = flexi_logger::Logger::with_str(spec)
            .format(flexi_logger::with_thread)
            .start();
        info!("logging is ready");
    }
    debug!("{:?}", cmd_line);

    let text = match &cmd_line.input {
        Some(s) => s.clone(),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).expect("read stdin");
            buf
        }
    };

    let grammar = demo_grammar();
    let tokens = tokenize(&text, &["plus"]);
    debug!("tokens: {:?}", tokens);

    let table = grammar.parse(tokens).expect("demo grammar compiles");

    println!("tokens parsed: {}", table.token_count());
    println!("count: {}", table.len());
    println!("shortest: {}", table.shortest());

    let covers = table.just(1).unwrap_or_default();
    println!("covers of size 1: {}", covers.len());
    for (i, result) in covers.iter().enumerate() {
        println!(
            "  [{}] ambiguity={} head={}",
            i,
            result.ambiguity,
            result.head(0)
        );
        if result.ambiguity == 1 {
            let mut rendered = String::new();
            let mut visitor = |rule: Option<cykparse::RuleHandle>,
                                children: Vec<
                cykparse::TreeValue<cykparse::tokenizer::SimpleToken, String>,
            >|
             -> String {
                let label = rule.map(|r| r.head.clone()).unwrap_or_else(|| "?".to_string());
                format!("({} {})", label, children.len())
            };
            if let Ok(trees) = result.traverse(&mut visitor) {
                for t in trees {
                    if let cykparse::TreeValue::Value(v) = t {
                        rendered.push_str(&v);
                    }
                }
                println!("      traversal: {}", rendered);
            }
        } else {
            for (seg, explanations) in result.explain().iter().enumerate() {
                println!("      segment {} candidates: {}", seg, explanations.len());
            }
        }
    }
}
