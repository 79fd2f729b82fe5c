//! Tree normalization passes.
//!
//! Each pass is a full walk that mutates the tree in place. Later passes rely
//! on what earlier ones established, so the order is fixed.
//!
//! ## Pipeline Order
//!
//! 1. **Link Parents** - Derive back-references from children lists
//! 2. **Fix Tags** - Map tag names to kinds, headings to sections
//! 3. **Remove Groups** - Splice out meaningless grouping nodes
//! 4. **Clean Whitespace** - Drop blank text at block boundaries
//! 5. **Fix Styles** - Map style tokens, build definition lists
//! 6. **Unwrap Lists** - Lift lists out of otherwise empty paragraphs
//! 7. **Remove Breaks** - Drop forced breaks next to blocks
//!
//! A later pass can leave behind work for an earlier one: a break removed by
//! pass 7 may leave a list alone in its paragraph, and definition markers
//! turning into blocks put blank text at a boundary. After the seven passes
//! the removal passes (4, 6, 7) are repeated until the tree stops changing,
//! so running the pipeline again on its own output leaves it unchanged.

mod breaks;
mod groups;
mod lists;
mod pass;
mod predicates;
mod reclassify;
mod styles;
mod whitespace;

pub use breaks::remove_breaks;
pub use groups::remove_groups;
pub use lists::unwrap_lists;
pub use pass::walk_pre_order;
pub use predicates::at_block_boundary;
pub use reclassify::{fix_tags, link_parents};
pub use styles::fix_styles;
pub use whitespace::clean_whitespace;

use crate::diagnostics::Diagnostics;
use crate::error::Result;
use crate::model::Tree;
use crate::options::Options;

/// Runs the normalization pipeline with a fixed set of options.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    options: Options,
}

impl Normalizer {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Normalize a tree in place and return the warnings it produced.
    ///
    /// An `Err` means a structural operation was asked to do something
    /// inconsistent; the tree should not be used further in that case.
    pub fn run(&self, tree: &mut Tree) -> Result<Diagnostics> {
        let mut diagnostics = Diagnostics::new();

        link_parents(tree)?;
        fix_tags(tree, &mut diagnostics)?;
        remove_groups(tree)?;
        clean_whitespace(tree, &self.options)?;
        fix_styles(tree, &mut diagnostics)?;
        unwrap_lists(tree)?;
        remove_breaks(tree, &self.options)?;

        // Each round that changes anything removes a node, so this ends.
        let mut rounds = 0;
        loop {
            let revision = tree.revision();
            clean_whitespace(tree, &self.options)?;
            unwrap_lists(tree)?;
            remove_breaks(tree, &self.options)?;
            rounds += 1;
            if tree.revision() == revision {
                break;
            }
        }

        log::debug!(
            "normalized {} nodes with {} warnings ({} cleanup rounds)",
            tree.node_count(),
            diagnostics.len(),
            rounds
        );
        Ok(diagnostics)
    }
}

/// Normalize a tree with default options.
pub fn normalize(tree: &mut Tree) -> Result<Diagnostics> {
    Normalizer::default().run(tree)
}
