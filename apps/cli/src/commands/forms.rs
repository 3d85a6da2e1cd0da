//! `formwork forms`: list configured forms.

use std::fmt::Write;

use crate::config::AppConfig;

pub fn run(config: &AppConfig) {
    print!("{}", render(config));
}

fn render(config: &AppConfig) -> String {
    let mut out = String::new();
    for (name, fields) in &config.forms {
        let _ = writeln!(out, "{name}");
        for (field, rules) in fields {
            let rules: Vec<String> = rules.iter().map(ToString::to_string).collect();
            let _ = writeln!(out, "  {field}: {}", rules.join(", "));
        }
    }
    out
}
