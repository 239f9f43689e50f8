//! Exact-output test for the `dump()` linearization, covering a tag with
//! classes and an attribute block, a nested text line and a statement
//! expression's own nested text block.
//!
//! The teacher snapshots this kind of output with `insta::assert_snapshot!`
//! (e.g. `lex-parser/tests/detokenizer/main.rs`), but that macro's file-backed
//! baseline has to be captured by actually running the suite once under
//! `cargo insta review` — not something this port can do here. A hand-traced
//! `assert_eq!` against the exact expected string gives the same "pin the
//! whole rendering down" coverage without an unverifiable stored baseline.

use jade_lex::{dump, LexerOptions};

#[test]
fn dump_of_a_representative_document() {
    let source = "div.box(data-id=\"1\")\n  p Hello\n  - var x = 1\n";

    let rendered =
        dump(source, LexerOptions::default()).expect("representative document should lex cleanly");

    let expected = concat!(
        "[tag(1:0) name=div][class(1:3) name=box][attributeStart(1:7)]",
        "[attribute(1:8) name=data-id, value=\"1\", escaped=true][attributeEnd(1:19)][newLine(1:20)]\n",
        "[indent(2:0)][tag(2:2) name=p][text(2:3) value=Hello][newLine(2:9)]\n",
        "[expression(3:2) escaped=false, return=false][text(3:4) value=var x = 1][newLine(3:13)]\n",
        "[outdent(4:0)]",
    );

    assert_eq!(rendered, expected);
}
