//! End-to-end tests: token dump in, HTML/ANSI out.

use indoc::indoc;
use tonewood::{AnsiHighlighter, Highlighter, HtmlFormat};
use tonewood_theme::{CssFormat, builtin, palette_to_css};

#[test]
fn function_declaration_renders_neutral() {
    // func greet(name: String) -> String
    let dump = "kd\tfunc\nw\t \nnf\tgreet\np\t(\nn\tname\np\t:\nw\t \nkt\tString\np\t)\nw\t \no\t->\nw\t \nkt\tString\n";

    let html = Highlighter::new().highlight_dump(dump).unwrap();

    // The declared name inherits the keyword slot instead of lighting up
    // in the function color.
    assert!(html.contains("<tw-k>func</tw-k> <tw-k>greet</tw-k>"), "{html}");
    // Type keywords keep the platform tier when not right after a
    // declaration keyword.
    assert!(html.contains("<tw-tm>String</tw-tm>"), "{html}");
}

#[test]
fn member_access_vs_self_access() {
    // view.frame: member color. self.frame: neutral.
    let plain_member = "n\tview\no\t.\nn\tframe\n";
    let self_member = "nv\tself\no\t.\nn\tframe\n";

    let hl = Highlighter::new();
    assert_eq!(
        hl.highlight_dump(plain_member).unwrap(),
        "view<tw-o>.</tw-o><tw-tm>frame</tw-tm>"
    );
    assert_eq!(
        hl.highlight_dump(self_member).unwrap(),
        "<tw-k>self</tw-k><tw-o>.frame</tw-o>"
    );
}

#[test]
fn multiline_dump_preserves_line_structure() {
    let dump = indoc! {"
        c1\t// cached length
        w\t\\n
        n\tfoo
        o\t.
        n\tcount
    "};

    let html = Highlighter::new().highlight_dump(dump).unwrap();
    assert_eq!(
        html,
        "<tw-c>// cached length</tw-c>\nfoo<tw-o>.</tw-o><tw-tm>count</tw-tm>"
    );
}

#[test]
fn class_name_output_matches_generated_css() {
    let dump = "c1\t// greeting\nw\t \nkd\tlet\nw\t \nn\tmessage\nw\t \no\t=\nw\t \ns\t\"hello\"\n";

    let hl = Highlighter::with_format(HtmlFormat::ClassNames);
    let html = hl.highlight_dump(dump).unwrap();
    let css = palette_to_css(&builtin::dusk(), &CssFormat::ClassNames);

    // Every class the HTML uses has a rule in the stylesheet.
    for class in ["comment", "keyword", "string"] {
        assert!(html.contains(&format!("class=\"{class}\"")), "html: {html}");
        assert!(css.contains(&format!(".{class} ")), "css: {css}");
    }
}

#[test]
fn ansi_and_html_agree_on_styling_decisions() {
    let dump = "kd\tfunc\nw\t \nnf\tgreet\n";

    let html = Highlighter::new().highlight_dump(dump).unwrap();
    let ansi = AnsiHighlighter::new(builtin::dusk())
        .highlight_dump(dump)
        .unwrap();

    // Both render the function name with the keyword treatment.
    assert_eq!(html.matches("<tw-k>").count(), 2);
    let keyword_sgr = builtin::dusk().keyword.ansi();
    assert_eq!(ansi.matches(keyword_sgr.as_str()).count(), 2);
}

#[test]
fn unknown_classes_pass_through_unstyled() {
    let dump = "q1\tmystery\nw\t \nq2\ttokens\n";
    let html = Highlighter::new().highlight_dump(dump).unwrap();
    assert_eq!(html, "mystery tokens");
}
