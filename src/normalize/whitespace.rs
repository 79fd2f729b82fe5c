//! Pass 4: Whitespace cleanup.

use crate::error::Result;
use crate::model::{Kind, NodeId, Tree};
use crate::options::Options;

use super::pass::walk_pre_order;
use super::predicates::{at_block_boundary, is_blank};

/// Remove whitespace-only text at block boundaries and collapse line breaks.
///
/// Markup source is full of newlines between block constructs; the parser
/// keeps them as text nodes:
///
/// ```text
/// Section > [Paragraph, Text "\n", Table]
/// ```
///
/// A whitespace-only text node is removed when it is next to a block (see
/// [`at_block_boundary`]). Remaining text has newline/tab runs collapsed to
/// one space. Text inside `PreFormatted` is never touched.
pub fn clean_whitespace(tree: &mut Tree, options: &Options) -> Result<()> {
    walk_pre_order(tree, |tree, id| clean_text(tree, id, options))
}

fn clean_text(tree: &mut Tree, id: NodeId, options: &Options) -> Result<()> {
    let Some(node) = tree.node(id) else {
        return Ok(());
    };
    if node.kind != Kind::Text {
        return Ok(());
    }
    let Some(parent) = node.parent else {
        return Ok(());
    };
    if tree.has_ancestor_of_kind(id, Kind::PreFormatted) {
        return Ok(());
    }

    if is_blank(&node.caption) && at_block_boundary(tree, id, options) {
        return tree.remove_child(parent, id);
    }

    if options.collapse_whitespace
        && let Some(collapsed) = collapse_line_breaks(&node.caption)
        && let Some(node) = tree.node_mut(id)
    {
        node.caption = collapsed;
    }
    Ok(())
}

/// Collapse every whitespace run containing a newline, tab or carriage
/// return into a single space. Runs of plain spaces are left alone.
///
/// Returns `None` when nothing changes.
fn collapse_line_breaks(text: &str) -> Option<String> {
    if !text.contains(['\n', '\t', '\r']) {
        return None;
    }

    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    let mut run_has_break = false;

    for ch in text.chars() {
        if ch.is_whitespace() {
            run_has_break |= matches!(ch, '\n' | '\t' | '\r');
            run.push(ch);
            continue;
        }
        flush_run(&mut out, &mut run, &mut run_has_break);
        out.push(ch);
    }
    flush_run(&mut out, &mut run, &mut run_has_break);
    Some(out)
}

fn flush_run(out: &mut String, run: &mut String, has_break: &mut bool) {
    if *has_break {
        out.push(' ');
    } else {
        out.push_str(run);
    }
    run.clear();
    *has_break = false;
}
