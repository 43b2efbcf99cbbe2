//! AST-level test to keep `unwrap()` / `expect()` out of non-test code.
//!
//! Everything the page does degrades silently or reports a named
//! `SiteError`; a panic in a browser event handler kills the whole module.
//!
//! Example of bad code:
//! ```ignore
//! let storage = window.local_storage().unwrap().unwrap();
//! ```
//!
//! Example of correct code:
//! ```ignore
//! let storage = window.local_storage().ok().flatten();
//! ```

use std::fs;
use std::path::Path;
use syn::visit::Visit;
use syn::{Attribute, ExprMethodCall, File, ItemFn, ItemMod};
use walkdir::WalkDir;

const FORBIDDEN: &[&str] = &["unwrap", "expect"];

struct UnwrapVisitor {
    current_file: String,
    violations: Vec<(String, String)>,
}

impl UnwrapVisitor {
    fn new(file: String) -> Self {
        Self {
            current_file: file,
            violations: Vec::new(),
        }
    }
}

/// `#[cfg(test)]` or `#[test]`
fn is_test_only(attrs: &[Attribute]) -> bool {
    attrs.iter().any(|attr| {
        if attr.path().is_ident("test") {
            return true;
        }
        if !attr.path().is_ident("cfg") {
            return false;
        }
        attr.parse_args::<syn::Ident>()
            .map(|ident| ident == "test")
            .unwrap_or(false)
    })
}

impl<'ast> Visit<'ast> for UnwrapVisitor {
    fn visit_item_mod(&mut self, module: &'ast ItemMod) {
        if is_test_only(&module.attrs) {
            return;
        }
        syn::visit::visit_item_mod(self, module);
    }

    fn visit_item_fn(&mut self, func: &'ast ItemFn) {
        if is_test_only(&func.attrs) {
            return;
        }
        syn::visit::visit_item_fn(self, func);
    }

    fn visit_expr_method_call(&mut self, call: &'ast ExprMethodCall) {
        let method = call.method.to_string();
        if FORBIDDEN.contains(&method.as_str()) {
            self.violations
                .push((self.current_file.clone(), format!(".{}() call", method)));
        }
        syn::visit::visit_expr_method_call(self, call);
    }
}

fn analyze_source(file: &str, content: &str) -> Vec<(String, String)> {
    let syntax: File = match syn::parse_file(content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Warning: Failed to parse {}: {}", file, e);
            return vec![];
        }
    };

    let mut visitor = UnwrapVisitor::new(file.to_string());
    visitor.visit_file(&syntax);
    visitor.violations
}

fn analyze_file(path: &Path) -> Vec<(String, String)> {
    match fs::read_to_string(path) {
        Ok(content) => analyze_source(&path.display().to_string(), &content),
        Err(_) => vec![],
    }
}

#[test]
fn detects_unwrap_in_library_code() {
    let bad_code = r#"
        fn load() -> String {
            storage().get_item("theme").unwrap()
        }
    "#;

    assert_eq!(analyze_source("test.rs", bad_code).len(), 1);
}

#[test]
fn detects_expect_in_closure() {
    let bad_code = r#"
        fn bind() {
            let f = move |_| { state.borrow().first().expect("links"); };
        }
    "#;

    assert_eq!(analyze_source("test.rs", bad_code).len(), 1);
}

#[test]
fn ignores_test_modules_and_fallbacks() {
    let good_code = r#"
        fn offset(w: &Window) -> f64 {
            w.scroll_y().unwrap_or(0.0)
        }

        #[cfg(test)]
        mod tests {
            #[test]
            fn loads() {
                load().unwrap();
            }
        }
    "#;

    assert!(analyze_source("test.rs", good_code).is_empty());
}

#[test]
fn no_unwrap_in_src() {
    let src_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");

    let mut all_violations = Vec::new();

    for entry in WalkDir::new(&src_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().map_or(false, |ext| ext == "rs"))
    {
        all_violations.extend(analyze_file(entry.path()));
    }

    if !all_violations.is_empty() {
        let mut error_msg = String::from(
            "\n\nFound unwrap()/expect() outside tests!\n\
             Return a SiteError, or fall back with unwrap_or / ok().\n\n\
             Violations:\n",
        );

        for (file, context) in &all_violations {
            error_msg.push_str(&format!("  - {}: {}\n", file, context));
        }

        panic!("{}", error_msg);
    }
}
