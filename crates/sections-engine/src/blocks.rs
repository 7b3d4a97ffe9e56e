//! Block assembly
//!
//! Extracts the ordered, repeatable block list from a raw payload and
//! resolves each block's settings against its matching block
//! configuration.

use crate::coerce::coerce_settings;
use sections_model::{Block, BlockConfig, RawBlock};
use sections_store::ContentStore;

/// Name given to blocks whose type has no matching configuration
pub const UNKNOWN_BLOCK_NAME: &str = "Unknown";

/// Assemble typed blocks from the raw payload's block list.
///
/// Blocks keep their payload order with a sequential 0-based index. Each
/// raw block is matched against the first configuration with the same type;
/// an unmatched block still appears, named [`UNKNOWN_BLOCK_NAME`] with no
/// settings — raw settings are never surfaced without a configuration.
pub async fn assemble_blocks(
    store: &dyn ContentStore,
    raw_blocks: &[RawBlock],
    configs: &[BlockConfig],
) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(raw_blocks.len());
    for (index, raw) in raw_blocks.iter().enumerate() {
        let matched = configs.iter().find(|c| c.block_type == raw.block_type);
        let (name, settings) = match matched {
            Some(config) => (
                config.name.clone(),
                coerce_settings(store, &config.settings, &raw.settings).await,
            ),
            None => (UNKNOWN_BLOCK_NAME.to_string(), Vec::new()),
        };
        blocks.push(Block {
            block_type: raw.block_type.clone(),
            name,
            index,
            settings,
        });
    }
    blocks
}
