// crates/editable_sections/tests/integration_templates.rs

use editable_sections::{parse_sections, validate_markers, MarkerErrorKind, MarkerPair};

const START: &str = "#start_edit";
const END: &str = "#end_edit";

fn parse(text: &str) -> Vec<String> {
    parse_sections(text, START, END).expect("text should contain well-formed sections")
}

fn error_kind(text: &str, start: &str, end: &str) -> MarkerErrorKind {
    parse_sections(text, start, end)
        .expect_err("text should be rejected")
        .kind()
}

#[test]
fn test_basic_single_section() {
    assert_eq!(parse("Apple #start_edit Pear #end_edit Grapes"), vec![" Pear "]);
}

#[test]
fn test_basic_multi_section() {
    let text = "First #start_edit Section #end_edit Second #start_edit Section #end_edit";
    assert_eq!(parse(text), vec![" Section ", " Section "]);
}

#[test]
fn test_multiline_section_keeps_newlines() {
    let text = "Start #start_edit\nLine1\nLine2\n#end_edit End";
    assert_eq!(parse(text), vec!["\nLine1\nLine2\n"]);
}

#[test]
fn test_start_at_beginning_and_end_at_end() {
    assert_eq!(
        parse("#start_edit Section at beginning #end_edit followed by text"),
        vec![" Section at beginning "]
    );
    assert_eq!(
        parse("Text followed by #start_edit section at end #end_edit"),
        vec![" section at end "]
    );
}

#[test]
fn test_empty_section() {
    assert_eq!(parse("Before #start_edit#end_edit After"), vec![""]);
}

#[test]
fn test_unique_markers() {
    let text = "Start **begin_section** Unique markers **end_section** End";
    assert_eq!(
        parse_sections(text, "**begin_section**", "**end_section**").unwrap(),
        vec![" Unique markers "]
    );
}

#[test]
fn test_partial_marker_in_text() {
    let text = "This has a # but not a start #start_edit marker #end_edit here";
    assert_eq!(parse(text), vec![" marker "]);
}

#[test]
fn test_code_like_comment() {
    // The end marker runs straight into the following code.
    let text = "#start_edit\n# Please edit this line\n#end_editprint('Hello World')\n";
    assert_eq!(parse(text), vec!["\n# Please edit this line\n"]);
}

#[test]
fn test_marker_with_special_characters() {
    let text = "Start $$!start!$$ section with special $$!end!$$ markers";
    assert_eq!(
        parse_sections(text, "$$!start!$$", "$$!end!$$").unwrap(),
        vec![" section with special "]
    );
}

#[test]
fn test_overlapping_markers() {
    let text = "#start#start_edit Overlapping #end#stop_edit markers";
    assert_eq!(
        parse_sections(text, "#start_edit", "#stop_edit").unwrap(),
        vec![" Overlapping #end"]
    );
}

#[test]
fn test_markers_as_part_of_other_words() {
    let text = "This is a #start_test which is not a marker #start_edit but this is #end_edit";
    assert_eq!(parse(text), vec![" but this is "]);
}

#[test]
fn test_error_cases() {
    assert_eq!(
        error_kind("#start_edit #start_edit Nested #end_edit #end_edit", START, END),
        MarkerErrorKind::NestedStartMarker
    );
    assert_eq!(
        error_kind("Start #start_edit without end", START, END),
        MarkerErrorKind::UnterminatedSection
    );
    assert_eq!(
        error_kind("End without start #end_edit", START, END),
        MarkerErrorKind::UnmatchedEndMarker
    );
    assert_eq!(
        error_kind("This should not parse", "", ""),
        MarkerErrorKind::EmptyMarker
    );
}

#[test]
fn test_no_sections() {
    assert!(parse("").is_empty());
    assert!(parse("No editable sections here").is_empty());
}

#[test]
fn test_fibonacci_inline_section() {
    let source = concat!(
        "def Fibonacci(n):\n",
        "    if n < 0:\n",
        "        print(\"Incorrect input\")\n",
        "    elif n == 0:\n",
        "        return 0\n",
        "    elif n == 1 or n == 2:\n",
        "        return 1\n",
        "    else:\n",
        "        return #start_edit # What should this line return??? #end_edit\n",
    );
    assert_eq!(parse(source), vec![" # What should this line return??? "]);
}

#[test]
fn test_fibonacci_template_with_two_sections() {
    let source = concat!(
        "\n",
        "def Fibonacci(n):\n",
        "    if n < 0:\n",
        "        print(\"Incorrect input\")\n",
        "    #start_edit\n",
        "    # Correct the elif statement below\n",
        "    elif n == None:\n",
        "        return None\n",
        "    #end_edit\n",
        "    elif n == 1 or n == 2:\n",
        "        return 1\n",
        "    else:\n",
        "        return #start_edit # What should this line return??? #end_edit\n",
    );
    let expected = vec![
        "\n    # Correct the elif statement below\n    elif n == None:\n        return None\n    ",
        " # What should this line return??? ",
    ];
    assert_eq!(parse(source), expected);
    assert!(validate_markers(source, START, END).is_ok());
}

#[test]
fn test_default_pair_matches_free_functions() {
    let text = "x #start_edit y #end_edit z";
    assert_eq!(MarkerPair::default().parse_sections(text).unwrap(), parse(text));
}
