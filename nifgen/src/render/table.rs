//! Dispatch-table rendering.
//!
//! Each declaration becomes one record line. The quoted key is padded so
//! the following field starts at `column + 1` on every line, whatever the
//! name length, as long as names fit the budget.

use super::RenderConfig;
use super::layout::Record;
use crate::declaration::Declarations;

/// Width of the right-justified arity field.
const ARITY_WIDTH: usize = 2;

fn quoted_key(config: &RenderConfig, name: &str) -> String {
    format!("{{\"{}\",", config.external_name(name))
}

/// Renders `{"key", arity,  symbol, 0},` records for a NIF function table.
///
/// Declarations without an arity are rendered with arity `0`.
#[must_use]
pub fn render_nif_table(declarations: &Declarations, config: &RenderConfig) -> String {
    let mut output = String::new();
    let key_width = config.column().saturating_add(1);
    for declaration in declarations {
        let arity = format!("{:>ARITY_WIDTH$},  ", declaration.arity_or_zero());
        let symbol = format!("{},", config.internal_name(&declaration.name));
        Record::new()
            .aligned(&quoted_key(config, &declaration.name), key_width)
            .field(&arity)
            .aligned(&symbol, config.column())
            .field("0},")
            .finish(&mut output);
    }
    tracing::info!(records = declarations.len(), "rendered NIF table");
    output
}

/// Renders `{"key", symbol},` records for a command table.
#[must_use]
pub fn render_command_table(declarations: &Declarations, config: &RenderConfig) -> String {
    let mut output = String::new();
    let key_width = config.column().saturating_add(1);
    for declaration in declarations {
        Record::new()
            .aligned(&quoted_key(config, &declaration.name), key_width)
            .aligned(
                &config.internal_name(&declaration.name),
                config.column().saturating_sub(1),
            )
            .field("},")
            .finish(&mut output);
    }
    tracing::info!(records = declarations.len(), "rendered command table");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::Declaration;
    use rstest::rstest;

    fn config(prefix: &str, namespace: &str) -> RenderConfig {
        RenderConfig {
            prefix: prefix.to_owned(),
            namespace: namespace.to_owned(),
            ..RenderConfig::default()
        }
    }

    #[rstest]
    fn nif_record_matches_reference_layout() {
        let decls = Declarations::from(vec![Declaration::with_arity("create", 4)]);
        let out = render_nif_table(&decls, &config("cimg_", ""));
        let expected = format!(
            "{{\"cimg_create\",{}{}{}{}\n",
            " ".repeat(26),
            " 4,  ",
            "create,",
            format!("{}0}},", " ".repeat(33)),
        );
        assert_eq!(out, expected);
    }

    #[rstest]
    fn command_record_matches_reference_layout() {
        let decls = Declarations::from(vec![Declaration::named("blur")]);
        let out = render_command_table(&decls, &config("", "cmd_"));
        let expected = format!("{{\"blur\",{}cmd_blur{}}},\n", " ".repeat(33), " ".repeat(31));
        assert_eq!(out, expected);
    }

    #[rstest]
    fn prefix_and_namespace_compose() {
        let decls = Declarations::from(vec![Declaration::with_arity("foo", 1)]);
        let out = render_nif_table(&decls, &config("p_", "Mod::"));
        assert!(out.starts_with("{\"p_foo\","), "{out}");
        assert!(out.contains("Mod::foo,"), "{out}");
    }

    #[rstest]
    fn second_field_is_column_aligned() {
        let decls = Declarations::from(vec![
            Declaration::named("a"),
            Declaration::named("considerably_longer_name"),
        ]);
        let out = render_command_table(&decls, &config("", "sym_"));
        let starts: Vec<Option<usize>> = out.lines().map(|line| line.find("sym_")).collect();
        assert_eq!(starts, [Some(41), Some(41)]);
    }

    #[rstest]
    fn overlong_names_are_not_truncated() {
        let name = "n".repeat(60);
        let decls = Declarations::from(vec![Declaration::with_arity(name.clone(), 12)]);
        let out = render_nif_table(&decls, &RenderConfig::default());
        assert_eq!(out, format!("{{\"{name}\",12,  {name},0}},\n"));
    }

    #[rstest]
    fn duplicate_names_yield_separate_records() {
        let decls = Declarations::from(vec![Declaration::named("dup"), Declaration::named("dup")]);
        assert_eq!(render_command_table(&decls, &RenderConfig::default()).lines().count(), 2);
    }

    #[rstest]
    fn empty_declarations_render_nothing() {
        assert_eq!(render_nif_table(&Declarations::new(), &RenderConfig::default()), "");
        assert_eq!(render_command_table(&Declarations::new(), &RenderConfig::default()), "");
    }

    #[rstest]
    fn huge_column_is_clamped() {
        let decls = Declarations::from(vec![Declaration::with_arity("f", 1)]);
        let config = RenderConfig {
            column: usize::MAX,
            ..RenderConfig::default()
        };
        let out = render_nif_table(&decls, &config);
        assert_eq!(out.find(" 1,"), Some(crate::render::MAX_COLUMN + 1));
    }
}
