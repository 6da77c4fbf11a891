//! Walk every boundary kind over one piece of text.
//!
//! Run with: `cargo run --example boundaries`

use glint::segment::{rule_status, BreakIterator, BreakKind, DONE};

fn main() -> Result<(), glint::error::GlintError> {
    env_logger::init();

    let text = "Hello there. It breaks 3 ways!";
    println!("text: {text:?}\n");

    for kind in [
        BreakKind::Character,
        BreakKind::Word,
        BreakKind::Line,
        BreakKind::Sentence,
    ] {
        let mut iter = BreakIterator::new(kind, None)?;
        iter.set_text(text)?;

        print!("{kind:?}:");
        let mut previous = iter.first();
        loop {
            let boundary = iter.next();
            if boundary == DONE {
                break;
            }
            let segment = &text[previous as usize..boundary as usize];
            let status = iter.rule_status();
            if kind == BreakKind::Word && status == rule_status::WORD_NONE {
                print!(" ·");
            } else {
                print!(" {segment:?}");
            }
            previous = boundary;
        }
        println!();
    }

    Ok(())
}
