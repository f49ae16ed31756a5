use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn nif_rule() -> NifMarker {
    NifMarker::new("DECL_NIF", "ality").expect("default NIF markers compile")
}

#[fixture]
fn cmd_rule() -> CommandMarker {
    CommandMarker::new("CIMG_CMD").expect("default command marker compiles")
}

fn names(decls: &Declarations) -> Vec<&str> {
    decls.iter().map(|d| d.name.as_str()).collect()
}

#[rstest]
#[case("CIMG_CMD(blur)", Some("blur"))]
#[case("    CIMG_CMD  ( fill )  {", Some(" fill "))]
#[case("static int x = CIMG_CMD(resize);", Some("resize"))]
#[case("_CIMG_CMD(hidden)", None)]
#[case("// nothing to see here", None)]
#[case("CIMG_CMD missing parens", None)]
fn command_marker_matches_anywhere_on_line(
    cmd_rule: CommandMarker,
    #[case] line: &str,
    #[case] expected: Option<&str>,
) {
    let (found, ()) = cmd_rule.scan(line, ());
    assert_eq!(found.map(|d| d.name), expected.map(str::to_owned));
}

#[rstest]
fn command_marker_records_no_arity(cmd_rule: CommandMarker) {
    let decls = extract(&cmd_rule, Declarations::new(), "CIMG_CMD(crop)\n");
    assert_eq!(decls.iter().next().and_then(|d| d.arity), None);
}

#[rstest]
fn nif_marker_pairs_declaration_with_later_arity_line(nif_rule: NifMarker) {
    let text = "\
DECL_NIF(create) {
    CImgT* img;

    if (ality != 4) return enif_make_badarg(env);
";
    let decls = extract(&nif_rule, Declarations::new(), text);
    assert_eq!(
        decls,
        Declarations::from(vec![Declaration::with_arity("create", 4)])
    );
}

#[rstest]
fn nif_marker_last_declaration_wins(nif_rule: NifMarker) {
    let text = "DECL_NIF(first) {\nDECL_NIF(second) {\nif (ality != 2)\n";
    let decls = extract(&nif_rule, Declarations::new(), text);
    assert_eq!(
        decls,
        Declarations::from(vec![Declaration::with_arity("second", 2)])
    );
}

#[rstest]
fn nif_marker_ignores_arity_without_pending_name(nif_rule: NifMarker) {
    let text = "if (ality != 1)\nDECL_NIF(only) {\n";
    let decls = extract(&nif_rule, Declarations::new(), text);
    assert!(decls.is_empty());
}

#[rstest]
fn nif_marker_does_not_read_arity_from_marker_line(nif_rule: NifMarker) {
    let text = "DECL_NIF(inline) { if (ality != 1) return 0; }\n";
    let decls = extract(&nif_rule, Declarations::new(), text);
    assert!(decls.is_empty());
}

#[rstest]
#[case(PendingNif::Idle, "int y = 0;", PendingNif::Idle)]
#[case(PendingNif::Idle, "ality != 3", PendingNif::Idle)]
#[case(
    PendingNif::Pending("a".to_owned()),
    "int y = 0;",
    PendingNif::Pending("a".to_owned())
)]
#[case(PendingNif::Idle, "DECL_NIF(b)", PendingNif::Pending("b".to_owned()))]
#[case(
    PendingNif::Pending("a".to_owned()),
    "DECL_NIF(b)",
    PendingNif::Pending("b".to_owned())
)]
#[case(PendingNif::Pending("a".to_owned()), "ality!=3", PendingNif::Idle)]
fn nif_marker_transitions(
    nif_rule: NifMarker,
    #[case] state: PendingNif,
    #[case] line: &str,
    #[case] expected: PendingNif,
) {
    let (_, next) = nif_rule.scan(line, state);
    assert_eq!(next, expected);
}

#[rstest]
fn nif_marker_skips_arity_overflow(nif_rule: NifMarker) {
    let text = "DECL_NIF(big)\nif (ality != 99999999999)\nif (ality != 1)\n";
    let decls = extract(&nif_rule, Declarations::new(), text);
    assert_eq!(
        decls,
        Declarations::from(vec![Declaration::with_arity("big", 1)])
    );
}

#[rstest]
fn pending_state_does_not_cross_streams(nif_rule: NifMarker) {
    let first = extract(&nif_rule, Declarations::new(), "DECL_NIF(dangling)\n");
    let both = extract(&nif_rule, first, "if (ality != 2)\n");
    assert!(both.is_empty());
}

#[rstest]
fn accumulator_preserves_order_across_streams(cmd_rule: CommandMarker) {
    let first = extract(&cmd_rule, Declarations::new(), "CIMG_CMD(a)\nCIMG_CMD(b)\n");
    let second = extract(&cmd_rule, first, "x\nCIMG_CMD(c)\nCIMG_CMD(a)\n");
    assert_eq!(names(&second), ["a", "b", "c", "a"]);
}

#[rstest]
fn custom_tokens_are_escaped() {
    let rule = NifMarker::new("NIF.DEF", "argc").expect("escaped tokens compile");
    let text = "NIFxDEF(wrong)\nNIF.DEF(right)\nif (argc != 0)\n";
    let decls = extract(&rule, Declarations::new(), text);
    assert_eq!(
        decls,
        Declarations::from(vec![Declaration::with_arity("right", 0)])
    );
}

#[rstest]
#[case(r#"{"cimg_create",           4,  cimg_create,                       0},"#, Some(("cimg_create", 4)))]
#[case(r#"{"run",1,  run,0},"#, Some(("run", 1)))]
#[case(r#"  {"indented", 2,  indented, 0},"#, None)]
#[case(r#"{"noarity",  cmd_noarity},"#, None)]
fn table_row_marker_reads_generated_rows(#[case] line: &str, #[case] expected: Option<(&str, u32)>) {
    let rule = TableRowMarker::new().expect("table pattern compiles");
    let (found, ()) = rule.scan(line, ());
    assert_eq!(
        found,
        expected.map(|(name, arity)| Declaration::with_arity(name, arity))
    );
}

#[rstest]
fn zero_markers_yield_nothing(nif_rule: NifMarker, cmd_rule: CommandMarker) {
    let text = "#include <erl_nif.h>\nint main(void) { return 0; }\n";
    assert!(extract(&nif_rule, Declarations::new(), text).is_empty());
    assert!(extract(&cmd_rule, Declarations::new(), text).is_empty());
}
